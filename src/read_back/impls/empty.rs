use std::io::Empty;

use crate::ReadBack;

impl ReadBack for Empty {
    fn seek_end(&mut self) -> std::io::Result<u64> {
        Ok(0)
    }

    fn seek_back_to(&mut self, _pos: u64) -> std::io::Result<()> {
        Ok(())
    }

    fn read_back(&mut self, _buf: &mut [u8]) -> std::io::Result<usize> {
        Ok(0)
    }
}
