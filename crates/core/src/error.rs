use std::io;

use thiserror::Error;

/// Errors that can occur while reporting exercises.
#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to write the report for exercise [{number}]")]
    Report {
        number: u8,
        #[source]
        source: io::Error,
    },
}
