use std::{
    cmp,
    fs::File,
    io::{Read, Seek, SeekFrom},
};

use crate::ReadBack;

impl ReadBack for File {
    fn seek_end(&mut self) -> std::io::Result<u64> {
        self.seek(SeekFrom::End(0))
    }

    fn seek_back_to(&mut self, pos: u64) -> std::io::Result<()> {
        self.seek(SeekFrom::Start(pos)).map(|_| ())
    }

    fn read_back(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        let curr_pos = self.stream_position()?;

        let buf_len = buf.len();
        let amount = cmp::min(curr_pos, buf_len as u64) as usize;
        if amount == 0 {
            return Ok(0);
        }

        let start = curr_pos - amount as u64;
        self.seek(SeekFrom::Start(start))?;
        self.read_exact(&mut buf[buf_len - amount..])?;
        self.seek(SeekFrom::Start(start))?;

        Ok(amount)
    }
}
