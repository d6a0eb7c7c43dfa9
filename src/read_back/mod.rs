mod impls;

use std::io::{ErrorKind, Result};

/// A byte source which can be read from its end towards its start.
///
/// Every implementor has a cursor. [`read_back`] hands out the bytes which lie right *in front of*
/// the cursor and moves the cursor back by the amount of bytes it returned, so repeated calls walk
/// the source backwards until the cursor sits at the start.
///
/// # Example
/// ```
/// use rev_lines::ReadBack;
///
/// fn main() {
///     let data = [1u8, 2u8];
///     let mut buffer: [u8; 3] = [0; 3];
///     let mut small_buffer: [u8; 1] = [0];
///
///     assert_eq!(data.as_slice().read_back(&mut buffer).ok(), Some(2));
///     assert_eq!(data.as_slice().read_back(&mut small_buffer).ok(), Some(1));
///
///     // notice here, that the values are added at the end of the array!
///     assert_eq!(&buffer, &[0, 1, 2]);
///
///     // notice here that the last value of data gets inserted "first"
///     assert_eq!(&small_buffer, &[2]);
/// }
/// ```
///
/// [`read_back`]: ReadBack::read_back
pub trait ReadBack {
    /// Moves the cursor to the end of the source and returns the amount of bytes in front of it.
    ///
    /// # Example
    /// ```
    /// use std::io::Cursor;
    /// use rev_lines::ReadBack;
    ///
    /// fn main() -> std::io::Result<()> {
    ///     let mut cursor = Cursor::new(b"hello".to_vec());
    ///
    ///     assert_eq!(cursor.seek_end()?, 5);
    ///     assert_eq!(cursor.position(), 5);
    ///     Ok(())
    /// }
    /// ```
    fn seek_end(&mut self) -> Result<u64>;

    /// Moves the cursor to the absolute offset `pos`, so that the next [`read_back`] ends right
    /// in front of it.
    ///
    /// # Example
    /// ```
    /// use std::io::Cursor;
    /// use rev_lines::ReadBack;
    ///
    /// fn main() -> std::io::Result<()> {
    ///     let mut cursor = Cursor::new(b"hello".to_vec());
    ///     let mut buffer = [0u8; 2];
    ///
    ///     cursor.seek_back_to(3)?;
    ///     cursor.read_back_exact(&mut buffer)?;
    ///     assert_eq!(&buffer, b"el");
    ///     Ok(())
    /// }
    /// ```
    ///
    /// [`read_back`]: ReadBack::read_back
    fn seek_back_to(&mut self, pos: u64) -> Result<()>;

    /// Pull some bytes from in front of the cursor into the *end* of `buf`, returning how many
    /// bytes were read.
    ///
    /// If `n` bytes are returned, they are stored in `buf[buf.len() - n..]` in the same order as
    /// they appear in the source. `Ok(0)` means that the cursor reached the start of the source
    /// (or that `buf` is empty).
    fn read_back(&mut self, buf: &mut [u8]) -> Result<usize>;

    /// Read back the exact number of bytes required to fill `buf`.
    ///
    /// Fails with [`ErrorKind::UnexpectedEof`] if there are fewer bytes in front of the cursor
    /// than `buf` can hold. The conditions of [`Read::read_exact`] apply here as well.
    ///
    /// # Example
    /// ```
    /// use rev_lines::ReadBack;
    ///
    /// fn main() {
    ///     let values = [1, 2, 3];
    ///     let mut buffer = [0, 0];
    ///
    ///     assert!(values.as_slice().read_back_exact(&mut buffer).is_ok());
    ///     assert_eq!(buffer, [2, 3]);
    /// }
    /// ```
    ///
    /// [`Read::read_exact`]: std::io::Read::read_exact
    fn read_back_exact(&mut self, buf: &mut [u8]) -> Result<()> {
        default_read_back_exact(self, buf)
    }
}

fn default_read_back_exact<R: ReadBack + ?Sized>(r: &mut R, mut buf: &mut [u8]) -> Result<()> {
    while !buf.is_empty() {
        match r.read_back(buf) {
            Ok(0) => break,
            Ok(n) => {
                let buf_len = buf.len();
                buf = &mut buf[..buf_len - n];
            }
            Err(ref e) if e.kind() == ErrorKind::Interrupted => {}
            Err(e) => return Err(e),
        }
    }

    if !buf.is_empty() {
        Err(std::io::Error::new(
            ErrorKind::UnexpectedEof,
            "failed to fill whole buffer",
        ))
    } else {
        Ok(())
    }
}
