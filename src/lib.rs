//! Read the lines of a file backwards.
//!
//! [`RevLineReader`] walks a [`ReadBack`] source from its end to its start, one chunk at a time,
//! and hands out the lines it finds in reverse order. Only the current chunk and the lines which
//! aren't returned yet are kept in memory.
//!
//! # Example
//! ```no_run
//! use rev_lines::RevLineReader;
//!
//! fn main() -> rev_lines::Result<()> {
//!     let mut reader = RevLineReader::open("/var/log/syslog")?;
//!
//!     // the last line of the file comes first
//!     while let Some(line) = reader.read_line()? {
//!         if line.starts_with(b"kernel") {
//!             println!("{}", String::from_utf8_lossy(&line));
//!             break;
//!         }
//!     }
//!     Ok(())
//! }
//! ```
mod error;
mod fs;
mod read_back;
mod rev_line_reader;

pub use error::{Error, Result};
pub use fs::{for_each_line, read_lines, with_reader};
pub use read_back::ReadBack;
pub use rev_line_reader::{Lines, RevLineReader, Split};

/// The version of this crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// The amount of bytes which are pulled from the source with each backward read.
pub const DEFAULT_CHUNK_SIZE: usize = 1 << 10;

/// The separator which is used if none is configured: a single `\n`.
pub const DEFAULT_SEPARATOR: &[u8] = b"\n";
