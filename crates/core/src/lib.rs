//! Adapting plain functions to a single-method write capability.
//!
//! This crate shows how a bare function can satisfy a trait contract by way of
//! a thin wrapper type, and how that wrapper behaves when it is held by value,
//! behind a reference, on the heap, or behind a trait object:
//!
//! - [`Write`] — the capability, a single `write` operation over a byte slice
//! - [`WriteFunc`] — the adapter that lets any matching function satisfy [`Write`]
//! - [`echo`], [`describe`], [`discard`] — the functions the exercises wrap
//! - [`Exercise`], [`Outcome`], [`write_report`] — the numbered exercises and
//!   the report they print
//!
//! # Example
//!
//! ```
//! use writefunc_core::{Write, WriteFunc};
//!
//! let shout = WriteFunc::new(|bytes: &[u8]| Ok(bytes.len() * 2));
//! assert_eq!(shout.write(b"Hello").unwrap(), 10);
//! ```

mod echo;
mod error;
mod exercise;
mod write;
mod write_func;

pub use echo::{describe, discard, echo};
pub use error::Error;
pub use exercise::{Exercise, GREETING, Outcome, write_report};
pub use write::Write;
pub use write_func::{WriteFn, WriteFunc};
