use std::io;

/// Renders bytes in both numeric and text form.
///
/// The numeric form lists each byte in decimal, space separated, inside
/// brackets. The text form decodes the bytes as UTF-8, replacing invalid
/// sequences with `U+FFFD`.
///
/// # Example
///
/// ```
/// use writefunc_core::describe;
///
/// assert_eq!(
///     describe(b"Hello"),
///     "Byte array = [72 101 108 108 111], String = Hello",
/// );
/// ```
#[must_use]
pub fn describe(bytes: &[u8]) -> String {
    let numeric = bytes
        .iter()
        .map(u8::to_string)
        .collect::<Vec<_>>()
        .join(" ");

    format!(
        "Byte array = [{numeric}], String = {}",
        String::from_utf8_lossy(bytes)
    )
}

/// Prints [`describe`] of the bytes to standard output and reports them all
/// as consumed.
///
/// # Errors
///
/// Never fails.
pub fn echo(bytes: &[u8]) -> io::Result<usize> {
    println!("{}", describe(bytes));
    Ok(bytes.len())
}

/// Reports every byte as consumed without doing anything with them.
///
/// # Errors
///
/// Never fails.
pub fn discard(bytes: &[u8]) -> io::Result<usize> {
    Ok(bytes.len())
}
