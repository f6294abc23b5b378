//! Runs every `WriteFunc` exercise against `"Hello"` and prints the report.
//!
//! Set `RUST_LOG=debug` to see each exercise logged on standard error.

use std::io::{self, Write as _};

use tracing::info;
use tracing_subscriber::EnvFilter;
use writefunc_core::{Exercise, GREETING, echo, write_report};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    let stdout = io::stdout();
    let mut out = stdout.lock();

    for exercise in Exercise::ALL {
        write_report(&mut out, exercise, echo, GREETING)?;
    }
    out.flush()?;

    info!(exercises = Exercise::ALL.len(), "all exercises finished");
    Ok(())
}
