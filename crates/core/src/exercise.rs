use std::{fmt, io};

use tracing::{debug, trace};

use crate::{Error, Write, WriteFn, WriteFunc};

/// The input every exercise is run against by default.
pub const GREETING: &[u8] = b"Hello";

/// One way of holding a [`WriteFunc`] and invoking it.
///
/// Each variant wraps the same function and calls `write` once per input,
/// differing only in how the adapter is held. For the same non-empty input
/// and a function that consumes every byte it is given, every variant calls
/// the function once and produces the same [`Outcome`].
///
/// Numbering skips `6`. That slot is a heap slot typed as the capability
/// itself, with an adapter assigned into its storage afterwards. A trait
/// object has no storage of its own until it is bound to a concrete type, so
/// the construction does not compile:
///
/// ```compile_fail
/// use writefunc_core::{Write, WriteFunc, echo};
///
/// let mut d: Box<dyn Write> = Box::default();
/// *d = WriteFunc::new(echo);
/// d.write(b"Hello").unwrap();
/// ```
///
/// Holding a reference to a concrete adapter behind the capability is fine,
/// which is what [`Exercise::PointerCapability`] does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Exercise {
    /// Drain a reader into the adapter with [`std::io::copy`].
    ///
    /// A count other than the input length fails the copy instead of being
    /// reported.
    IoCopy,
    /// Call `write` on a variable of type [`WriteFunc`].
    Variable,
    /// Wrap the function and call `write` in the same expression.
    Direct,
    /// Call `write` through a `Box<dyn Write>` holding the adapter.
    Capability,
    /// Allocate a default adapter, assign the function through the box, then
    /// call `write` on the box.
    Pointer,
    /// Allocate and assign as in [`Exercise::Pointer`], then call `write`
    /// through a `Box<dyn Write>` holding a reference to the adapter.
    PointerCapability,
}

impl Exercise {
    /// Every exercise, in the order they are run.
    pub const ALL: [Exercise; 6] = [
        Exercise::IoCopy,
        Exercise::Variable,
        Exercise::Direct,
        Exercise::Capability,
        Exercise::Pointer,
        Exercise::PointerCapability,
    ];

    /// Returns the number printed in this exercise's report.
    #[must_use]
    pub const fn number(self) -> u8 {
        match self {
            Exercise::IoCopy => 1,
            Exercise::Variable => 2,
            Exercise::Direct => 3,
            Exercise::Capability => 4,
            Exercise::Pointer => 5,
            Exercise::PointerCapability => 7,
        }
    }

    /// Returns the description printed in this exercise's report header.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Exercise::IoCopy => "Variable invocation of WriteFunc(echo)",
            Exercise::Variable => {
                "Write method invocation on the var a which is of type WriteFunc, containing echo"
            }
            Exercise::Direct => {
                "Write method invocation on the WriteFunc type, being passed the func echo directly"
            }
            Exercise::Capability => {
                "Write method invocation on the capability typed variable of b"
            }
            Exercise::Pointer => {
                "Pointer based Write method invocation on the WriteFunc type, pointed at the echo func"
            }
            Exercise::PointerCapability => {
                "Capability based method invocation on a pointer to the wrapped echo func via WriteFunc"
            }
        }
    }

    /// Runs this exercise, wrapping `function` and writing `input` through it.
    pub fn run(self, function: WriteFn, input: &[u8]) -> Outcome {
        debug!(exercise = self.number(), bytes = input.len(), "running exercise");

        let result = match self {
            Exercise::IoCopy => {
                let mut reader = input;
                io::copy(&mut reader, &mut WriteFunc::new(function))
            }
            Exercise::Variable => {
                let a: WriteFunc = WriteFunc::new(function);
                a.write(input).map(|count| count as u64)
            }
            Exercise::Direct => WriteFunc::new(function).write(input).map(|count| count as u64),
            Exercise::Capability => {
                let b: Box<dyn Write> = Box::new(WriteFunc::new(function));
                b.write(input).map(|count| count as u64)
            }
            Exercise::Pointer => {
                let mut c: Box<WriteFunc> = Box::new(WriteFunc::default());
                *c = WriteFunc::new(function);
                c.write(input).map(|count| count as u64)
            }
            Exercise::PointerCapability => {
                let mut e: Box<WriteFunc> = Box::new(WriteFunc::default());
                *e = WriteFunc::new(function);
                let ei: Box<dyn Write + '_> = Box::new(&*e);
                ei.write(input).map(|count| count as u64)
            }
        };

        let outcome = Outcome { result };
        trace!(exercise = self.number(), %outcome, "exercise finished");
        outcome
    }
}

/// The count and failure-or-none that an exercise produced.
///
/// Renders as `"<count> <none>"` on success and `"0 <error>"` on failure.
#[derive(Debug)]
pub struct Outcome {
    result: io::Result<u64>,
}

impl Outcome {
    /// Returns the number of bytes consumed, if the exercise succeeded.
    #[must_use]
    pub fn count(&self) -> Option<u64> {
        self.result.as_ref().ok().copied()
    }

    /// Returns the failure, if there was one.
    #[must_use]
    pub fn error(&self) -> Option<&io::Error> {
        self.result.as_ref().err()
    }

    /// Consumes the outcome and returns the underlying result.
    pub fn into_result(self) -> io::Result<u64> {
        self.result
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.result {
            Ok(count) => write!(f, "{count} <none>"),
            Err(error) => write!(f, "0 {error}"),
        }
    }
}

/// Runs `exercise` and writes its report to `out`.
///
/// The report is a header line naming the exercise, the [`Outcome`], and an
/// end marker followed by two blank lines. Anything `function` prints itself
/// goes wherever `function` sends it, between the header and the outcome.
///
/// # Errors
///
/// Returns [`Error::Report`] if writing to `out` fails. A failure of
/// `function` is not an error here; it is part of the returned [`Outcome`].
pub fn write_report<W: io::Write>(
    out: &mut W,
    exercise: Exercise,
    function: WriteFn,
    input: &[u8],
) -> Result<Outcome, Error> {
    let number = exercise.number();
    let report = |source: io::Error| Error::Report { number, source };

    writeln!(out, "Exercise [{number}] ==== {}", exercise.title()).map_err(report)?;
    out.flush().map_err(report)?;

    let outcome = exercise.run(function, input);

    writeln!(out, "{outcome}").map_err(report)?;
    writeln!(out, "Exercise [{number}] ==== END \n\n").map_err(report)?;

    Ok(outcome)
}
