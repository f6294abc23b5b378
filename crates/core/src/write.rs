use std::io;

use auto_impl::auto_impl;

/// The capability of consuming a slice of bytes.
///
/// `write` returns how many bytes were consumed, or the failure that stopped
/// it. Implementations decide what consuming means: printing, buffering,
/// discarding.
///
/// A reference to a writer is itself a writer. The blanket impls for `&W`,
/// `&mut W`, `Box<W>`, `Rc<W>` and `Arc<W>` forward to `W`, so indirection
/// never changes which method runs or what it returns.
///
/// # Example
///
/// ```
/// use std::io;
/// use writefunc_core::Write;
///
/// struct Count;
///
/// impl Write for Count {
///     fn write(&self, bytes: &[u8]) -> io::Result<usize> {
///         Ok(bytes.len())
///     }
/// }
///
/// let by_value = Count;
/// let by_ref: &dyn Write = &by_value;
/// let boxed: Box<dyn Write + '_> = Box::new(&by_value);
///
/// assert_eq!(by_value.write(b"abc").unwrap(), 3);
/// assert_eq!(by_ref.write(b"abc").unwrap(), 3);
/// assert_eq!(boxed.write(b"abc").unwrap(), 3);
/// ```
#[auto_impl(&, &mut, Box, Rc, Arc)]
pub trait Write {
    /// Consumes `bytes` and returns the number of bytes consumed.
    ///
    /// # Errors
    ///
    /// Each implementation defines what constitutes a failure.
    fn write(&self, bytes: &[u8]) -> io::Result<usize>;
}

#[cfg(test)]
mod tests {
    use std::{cell::Cell, rc::Rc, sync::Arc};

    use super::*;

    /// Counts calls and reports a fixed result.
    struct Tally {
        calls: Cell<usize>,
    }

    impl Write for Tally {
        fn write(&self, bytes: &[u8]) -> io::Result<usize> {
            self.calls.set(self.calls.get() + 1);
            Ok(bytes.len())
        }
    }

    fn write_twice(writer: impl Write) -> usize {
        writer.write(b"ab").unwrap() + writer.write(b"cde").unwrap()
    }

    #[test]
    fn references_forward_to_the_same_writer() {
        let tally = Tally {
            calls: Cell::new(0),
        };

        assert_eq!(write_twice(&tally), 5);
        assert_eq!(write_twice(&&tally), 5);
        assert_eq!(write_twice(Box::new(&tally)), 5);

        assert_eq!(tally.calls.get(), 6);
    }

    #[test]
    fn mutable_reference_is_a_writer() {
        let mut tally = Tally {
            calls: Cell::new(0),
        };

        assert_eq!(write_twice(&mut tally), 5);
        assert_eq!(tally.calls.get(), 2);
    }

    #[test]
    fn shared_owners_forward_to_the_same_writer() {
        let rc = Rc::new(Tally {
            calls: Cell::new(0),
        });
        assert_eq!(write_twice(Rc::clone(&rc)), 5);
        assert_eq!(rc.calls.get(), 2);

        let arc = Arc::new(Tally {
            calls: Cell::new(0),
        });
        assert_eq!(write_twice(Arc::clone(&arc)), 5);
        assert_eq!(arc.calls.get(), 2);
    }

    #[test]
    fn trait_objects_are_writers() {
        let tally = Tally {
            calls: Cell::new(0),
        };

        let boxed: Box<dyn Write + '_> = Box::new(&tally);
        assert_eq!(write_twice(boxed), 5);

        let borrowed: &dyn Write = &tally;
        assert_eq!(write_twice(borrowed), 5);

        assert_eq!(tally.calls.get(), 4);
    }
}
