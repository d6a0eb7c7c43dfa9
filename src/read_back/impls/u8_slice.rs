use std::cmp;

use crate::ReadBack;

/// As for the [`Read`] implementation of `&[u8]`, bytes get copied from the slice and the slice
/// shrinks. The "cursor" is always the end of the remaining slice.
///
/// [`Read`]: https://doc.rust-lang.org/std/io/trait.Read.html#impl-Read-for-%26%5Bu8%5D
impl ReadBack for &[u8] {
    fn seek_end(&mut self) -> std::io::Result<u64> {
        Ok(self.len() as u64)
    }

    /// The slice can only shrink: `pos` beyond its current length is an error.
    fn seek_back_to(&mut self, pos: u64) -> std::io::Result<()> {
        if pos > self.len() as u64 {
            return Err(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "can't move past the end of the remaining slice",
            ));
        }

        *self = &self[..pos as usize];
        Ok(())
    }

    fn read_back(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        let buf_len = buf.len();
        let amount = cmp::min(buf_len, self.len());
        let (tail, head) = self.split_at(self.len() - amount);

        buf[buf_len - amount..].copy_from_slice(head);
        *self = tail;

        Ok(amount)
    }

    fn read_back_exact(&mut self, buf: &mut [u8]) -> std::io::Result<()> {
        if buf.len() > self.len() {
            return Err(std::io::Error::new(
                std::io::ErrorKind::UnexpectedEof,
                "failed to fill whole buffer",
            ));
        }

        let (tail, head) = self.split_at(self.len() - buf.len());
        buf.copy_from_slice(head);
        *self = tail;

        Ok(())
    }
}
