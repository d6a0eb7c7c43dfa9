//! Error types of this crate.

use thiserror::Error;

/// Everything which can go wrong while reading lines backwards.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// Opening, seeking in or reading from the underlying source failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Every line has already been returned.
    ///
    /// Only [`RevLineReader::read_line_or_eof`] reports the end like this, the other methods
    /// return `None` instead.
    ///
    /// [`RevLineReader::read_line_or_eof`]: crate::RevLineReader::read_line_or_eof
    #[error("end of file reached")]
    EndOfFile,

    /// The given separator doesn't contain a single byte.
    #[error("the line separator must not be empty")]
    EmptySeparator,

    /// A reader can't make progress with a chunk size of zero.
    #[error("the chunk size must be greater than zero")]
    ZeroChunkSize,

    /// A line isn't valid UTF-8 and can't be returned as a `String`.
    #[error("line is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),
}

/// A convenience `Result` type which uses [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
