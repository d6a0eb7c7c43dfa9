use std::{cmp, io::Cursor};

use crate::ReadBack;

impl<T: AsRef<[u8]>> ReadBack for Cursor<T> {
    fn seek_end(&mut self) -> std::io::Result<u64> {
        let len = self.get_ref().as_ref().len() as u64;
        self.set_position(len);
        Ok(len)
    }

    fn seek_back_to(&mut self, pos: u64) -> std::io::Result<()> {
        self.set_position(pos);
        Ok(())
    }

    fn read_back(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        let data = self.get_ref().as_ref();
        let pos = cmp::min(self.position(), data.len() as u64) as usize;

        let mut head = &data[..pos];
        let amount = head.read_back(buf)?;

        self.set_position((pos - amount) as u64);
        Ok(amount)
    }
}
