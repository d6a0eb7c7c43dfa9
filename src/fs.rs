//! Shortcuts which open a file by its path, read its lines backwards and close it again.

use std::{fs::File, path::Path};

use crate::{Error, Result, RevLineReader};

/// Calls `visit` with every line of the file at `path`, the last line first.
///
/// The file is closed on every way out, including an error returned by `visit`.
///
/// # Example
/// ```no_run
/// use rev_lines::for_each_line;
///
/// fn main() -> rev_lines::Result<()> {
///     for_each_line("log.txt", b"\n", |line| {
///         print!("{}", String::from_utf8_lossy(&line));
///         Ok(())
///     })
/// }
/// ```
pub fn for_each_line<P, F, E>(path: P, separator: &[u8], visit: F) -> std::result::Result<(), E>
where
    P: AsRef<Path>,
    F: FnMut(Vec<u8>) -> std::result::Result<(), E>,
    E: From<Error>,
{
    with_reader(path, |reader| reader.for_each_by(separator, visit))
}

/// Returns all lines of the file at `path`, the last line first.
///
/// # Example
/// ```no_run
/// use rev_lines::read_lines;
///
/// fn main() -> rev_lines::Result<()> {
///     let lines = read_lines("log.txt", b"\n")?;
///     println!("the file has {} lines", lines.len());
///     Ok(())
/// }
/// ```
pub fn read_lines<P: AsRef<Path>>(path: P, separator: &[u8]) -> Result<Vec<Vec<u8>>> {
    with_reader(path, |reader| reader.read_lines_by(separator))
}

/// Opens the file at `path`, hands the reader to `body` and closes the file afterwards, whatever
/// `body` returns.
///
/// Use [`RevLineReader::open`] instead to keep the reader around.
///
/// # Example
/// ```no_run
/// use rev_lines::with_reader;
///
/// fn main() -> rev_lines::Result<()> {
///     let last_two = with_reader("log.txt", |reader| {
///         Ok::<_, rev_lines::Error>((reader.read_line()?, reader.read_line()?))
///     })?;
///     Ok(())
/// }
/// ```
pub fn with_reader<P, F, T, E>(path: P, body: F) -> std::result::Result<T, E>
where
    P: AsRef<Path>,
    F: FnOnce(&mut RevLineReader<File>) -> std::result::Result<T, E>,
    E: From<Error>,
{
    let mut reader = RevLineReader::open(path)?;
    let result = body(&mut reader);
    reader.close();
    result
}
