use std::io::Result;

use crate::ReadBack;

mod cursor;
mod empty;
mod file;
mod u8_slice;

impl<R: ReadBack + ?Sized> ReadBack for &mut R {
    fn seek_end(&mut self) -> Result<u64> {
        (**self).seek_end()
    }

    fn seek_back_to(&mut self, pos: u64) -> Result<()> {
        (**self).seek_back_to(pos)
    }

    fn read_back(&mut self, buf: &mut [u8]) -> Result<usize> {
        (**self).read_back(buf)
    }

    fn read_back_exact(&mut self, buf: &mut [u8]) -> Result<()> {
        (**self).read_back_exact(buf)
    }
}

impl<R: ReadBack + ?Sized> ReadBack for Box<R> {
    fn seek_end(&mut self) -> Result<u64> {
        (**self).seek_end()
    }

    fn seek_back_to(&mut self, pos: u64) -> Result<()> {
        (**self).seek_back_to(pos)
    }

    fn read_back(&mut self, buf: &mut [u8]) -> Result<usize> {
        (**self).read_back(buf)
    }

    fn read_back_exact(&mut self, buf: &mut [u8]) -> Result<()> {
        (**self).read_back_exact(buf)
    }
}
