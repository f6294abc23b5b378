use std::{cmp::Ordering, io};

use crate::{Write, echo::discard};

/// The plain function shape that [`WriteFunc`] adapts by default.
pub type WriteFn = fn(&[u8]) -> io::Result<usize>;

/// A wrapper that lets a function satisfy [`Write`].
///
/// `WriteFunc` holds one function and nothing else. Calling [`Write::write`]
/// on it calls the function once with the same bytes and returns exactly what
/// the function returned. The adapter never retries, buffers, or produces an
/// error of its own.
///
/// The function may be a plain `fn` item or a closure. Without a type
/// parameter, `WriteFunc` stores a function pointer ([`WriteFn`]), which is
/// also the only form with a [`Default`].
///
/// `WriteFunc` implements [`std::io::Write`] as well, so standard utilities
/// such as [`std::io::copy`] can drain a reader into it. Through that trait a
/// count other than the buffer length is an error: more than the buffer is
/// [`io::ErrorKind::InvalidData`], fewer is [`io::ErrorKind::WriteZero`]. The
/// function is never called again to finish a short write.
///
/// # Example
///
/// ```
/// use writefunc_core::{Write, WriteFunc, echo};
///
/// let a: WriteFunc = WriteFunc::new(echo);
/// assert_eq!(a.write(b"Hello").unwrap(), 5);
///
/// let mut c: Box<WriteFunc> = Box::new(WriteFunc::default());
/// *c = WriteFunc::new(echo);
/// assert_eq!(c.write(b"Hello").unwrap(), 5);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct WriteFunc<F = WriteFn> {
    function: F,
}

impl<F> WriteFunc<F>
where
    F: Fn(&[u8]) -> io::Result<usize>,
{
    /// Wraps a function.
    pub const fn new(function: F) -> Self {
        Self { function }
    }

    /// Unwraps the adapter, returning the function it holds.
    pub fn into_inner(self) -> F {
        self.function
    }
}

impl Default for WriteFunc {
    /// An adapter around [`discard`], which consumes bytes without output.
    fn default() -> Self {
        Self::new(discard)
    }
}

impl<F> From<F> for WriteFunc<F>
where
    F: Fn(&[u8]) -> io::Result<usize>,
{
    fn from(function: F) -> Self {
        Self::new(function)
    }
}

impl<F> Write for WriteFunc<F>
where
    F: Fn(&[u8]) -> io::Result<usize>,
{
    fn write(&self, bytes: &[u8]) -> io::Result<usize> {
        (self.function)(bytes)
    }
}

impl<F> io::Write for WriteFunc<F>
where
    F: Fn(&[u8]) -> io::Result<usize>,
{
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let count = <Self as Write>::write(self, buf)?;
        match count.cmp(&buf.len()) {
            Ordering::Equal => Ok(count),
            Ordering::Greater => Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!("invalid write result: {count} of {} bytes", buf.len()),
            )),
            Ordering::Less => Err(io::Error::new(
                io::ErrorKind::WriteZero,
                format!("short write: {count} of {} bytes", buf.len()),
            )),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
