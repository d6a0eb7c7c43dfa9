mod fragments;

use std::{fs::File, iter::FusedIterator, path::Path};

use log::{debug, trace};

use crate::{Error, ReadBack, Result, DEFAULT_CHUNK_SIZE, DEFAULT_SEPARATOR};

use self::fragments::Fragments;

/// Reads the lines of a [`ReadBack`] source from the last one to the first one.
///
/// The source is read backwards in chunks of [`chunk_size`] bytes. A line is only handed out once
/// the reader knows that no earlier chunk can change it anymore, so lines which are longer than a
/// chunk come out in one piece as well.
///
/// Lines keep their separator. Only the last line of the source can come without one, if the
/// source doesn't end with a separator.
///
/// # Example
/// ```
/// use rev_lines::RevLineReader;
///
/// fn main() -> rev_lines::Result<()> {
///     let data: &[u8] = b"first\nsecond\nthird";
///     let mut reader = RevLineReader::new(data)?;
///
///     assert_eq!(reader.read_line()?, Some(b"third".to_vec()));
///     assert_eq!(reader.read_line()?, Some(b"second\n".to_vec()));
///     assert_eq!(reader.read_line()?, Some(b"first\n".to_vec()));
///     assert_eq!(reader.read_line()?, None);
///     Ok(())
/// }
/// ```
///
/// [`chunk_size`]: RevLineReader::chunk_size
#[derive(Debug)]
pub struct RevLineReader<R> {
    inner: R,
    chunk: Vec<u8>,
    chunk_size: usize,
    current_pos: u64,
    read_size: usize,
    fragments: Fragments,
    separator: Vec<u8>,
}

impl RevLineReader<File> {
    /// Opens the file at `path` and prepares to read its lines backwards.
    ///
    /// Fails with [`Error::Io`] exactly when [`File::open`] fails.
    ///
    /// # Example
    /// ```no_run
    /// use rev_lines::RevLineReader;
    ///
    /// fn main() -> rev_lines::Result<()> {
    ///     let mut reader = RevLineReader::open("log.txt")?;
    ///     let last_line = reader.read_line()?;
    ///     reader.close();
    ///     Ok(())
    /// }
    /// ```
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        Self::new(file)
    }
}

impl<R> RevLineReader<R> {
    /// Gets a reference to the underlying source.
    ///
    /// There's no `get_mut`: moving the cursor of the source behind the reader's back would
    /// corrupt the lines it returns.
    pub fn get_ref(&self) -> &R {
        &self.inner
    }

    /// Unwraps this reader, returning the underlying source.
    ///
    /// Lines which have been read back but not returned yet are lost.
    pub fn into_inner(self) -> R {
        self.inner
    }

    /// Releases the underlying source.
    ///
    /// This is the same as dropping the reader, the method exists to make the end of a reader's
    /// life explicit.
    pub fn close(self) {
        trace!("closing reader at position {}", self.current_pos);
    }

    /// Returns the amount of bytes which are pulled from the source with each read.
    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// Returns the offset in the source up to which everything has been read already.
    ///
    /// Starts at the size of the source and only ever goes down until it reaches `0`.
    pub fn position(&self) -> u64 {
        self.current_pos
    }

    /// Returns the amount of lines (or line fragments) which are read but not returned yet.
    pub fn buffered(&self) -> usize {
        self.fragments.len()
    }

    /// Returns the separator which is used by the methods which don't take one.
    pub fn separator(&self) -> &[u8] {
        &self.separator
    }

    /// Changes the separator which is used by the methods which don't take one.
    ///
    /// # Error
    /// Returns [`Error::EmptySeparator`] (and keeps the old one) if `separator` is empty.
    pub fn set_separator(&mut self, separator: impl Into<Vec<u8>>) -> Result<()> {
        let separator = separator.into();
        if separator.is_empty() {
            return Err(Error::EmptySeparator);
        }

        self.separator = separator;
        Ok(())
    }
}

impl<R: ReadBack> RevLineReader<R> {
    /// Creates a new reader with a chunk size of [`DEFAULT_CHUNK_SIZE`] which splits on
    /// [`DEFAULT_SEPARATOR`].
    ///
    /// The cursor of `inner` is moved to its end first.
    pub fn new(inner: R) -> Result<Self> {
        Self::with_chunk_size(DEFAULT_CHUNK_SIZE, inner)
    }

    /// Creates a new reader which pulls `chunk_size` bytes from `inner` with each read.
    ///
    /// The first read only pulls `size % chunk_size` bytes (if that's not zero) so that every
    /// following read is a whole chunk which ends exactly at the start of the previous one.
    ///
    /// # Example
    /// ```
    /// use rev_lines::RevLineReader;
    ///
    /// fn main() -> rev_lines::Result<()> {
    ///     let data: &[u8] = b"a long line which spans a few chunks\nshort";
    ///     let mut reader = RevLineReader::with_chunk_size(4, data)?;
    ///
    ///     assert_eq!(reader.chunk_size(), 4);
    ///     assert_eq!(reader.read_line()?, Some(b"short".to_vec()));
    ///     assert_eq!(
    ///         reader.read_line()?,
    ///         Some(b"a long line which spans a few chunks\n".to_vec())
    ///     );
    ///     Ok(())
    /// }
    /// ```
    ///
    /// # Error
    /// Returns [`Error::ZeroChunkSize`] if `chunk_size` is `0` and [`Error::Io`] if the end of
    /// `inner` can't be reached.
    pub fn with_chunk_size(chunk_size: usize, mut inner: R) -> Result<Self> {
        if chunk_size == 0 {
            return Err(Error::ZeroChunkSize);
        }

        let size = inner.seek_end()?;
        let read_size = match (size % chunk_size as u64) as usize {
            0 => chunk_size,
            remainder => remainder,
        };
        debug!(
            "reading {} bytes backwards with a chunk size of {}, first read is {} bytes",
            size, chunk_size, read_size
        );

        Ok(Self {
            inner,
            chunk: Vec::with_capacity(chunk_size),
            chunk_size,
            current_pos: size,
            read_size,
            fragments: Fragments::new(),
            separator: DEFAULT_SEPARATOR.to_vec(),
        })
    }

    /// Returns the next line (counted from the end), split on the configured [`separator`].
    ///
    /// `Ok(None)` means that every line has been returned, and every further call returns
    /// `Ok(None)` again.
    ///
    /// [`separator`]: RevLineReader::separator
    pub fn read_line(&mut self) -> Result<Option<Vec<u8>>> {
        self.fetch(None)
    }

    /// Like [`read_line`] but splits on `separator`.
    ///
    /// The separator may change from call to call, but lines which were already split off with
    /// an earlier separator stay as they are.
    ///
    /// # Example
    /// ```
    /// use rev_lines::RevLineReader;
    ///
    /// fn main() -> rev_lines::Result<()> {
    ///     let data: &[u8] = b"a||b||c";
    ///     let mut reader = RevLineReader::new(data)?;
    ///
    ///     assert_eq!(reader.read_line_by(b"||")?, Some(b"c".to_vec()));
    ///     assert_eq!(reader.read_line_by(b"||")?, Some(b"b||".to_vec()));
    ///     assert_eq!(reader.read_line_by(b"||")?, Some(b"a||".to_vec()));
    ///     assert_eq!(reader.read_line_by(b"||")?, None);
    ///     Ok(())
    /// }
    /// ```
    ///
    /// # Error
    /// Returns [`Error::EmptySeparator`] without touching the source if `separator` is empty.
    ///
    /// [`read_line`]: RevLineReader::read_line
    pub fn read_line_by(&mut self, separator: &[u8]) -> Result<Option<Vec<u8>>> {
        if separator.is_empty() {
            return Err(Error::EmptySeparator);
        }
        self.fetch(Some(separator))
    }

    /// Like [`read_line`] but fails with [`Error::EndOfFile`] once every line has been returned.
    ///
    /// [`read_line`]: RevLineReader::read_line
    pub fn read_line_or_eof(&mut self) -> Result<Vec<u8>> {
        self.read_line()?.ok_or(Error::EndOfFile)
    }

    /// Like [`read_line_by`] but fails with [`Error::EndOfFile`] once every line has been
    /// returned.
    ///
    /// [`read_line_by`]: RevLineReader::read_line_by
    pub fn read_line_or_eof_by(&mut self, separator: &[u8]) -> Result<Vec<u8>> {
        self.read_line_by(separator)?.ok_or(Error::EndOfFile)
    }

    /// Calls `visit` with every remaining line, split on the configured separator.
    ///
    /// Stops at the first error, be it from reading or from `visit`.
    pub fn for_each<F, E>(&mut self, mut visit: F) -> std::result::Result<(), E>
    where
        F: FnMut(Vec<u8>) -> std::result::Result<(), E>,
        E: From<Error>,
    {
        while let Some(line) = self.read_line()? {
            visit(line)?;
        }
        Ok(())
    }

    /// Same as [`for_each`].
    ///
    /// [`for_each`]: RevLineReader::for_each
    pub fn each_line<F, E>(&mut self, visit: F) -> std::result::Result<(), E>
    where
        F: FnMut(Vec<u8>) -> std::result::Result<(), E>,
        E: From<Error>,
    {
        self.for_each(visit)
    }

    /// Like [`for_each`] but splits on `separator`.
    ///
    /// [`for_each`]: RevLineReader::for_each
    pub fn for_each_by<F, E>(&mut self, separator: &[u8], mut visit: F) -> std::result::Result<(), E>
    where
        F: FnMut(Vec<u8>) -> std::result::Result<(), E>,
        E: From<Error>,
    {
        while let Some(line) = self.read_line_by(separator)? {
            visit(line)?;
        }
        Ok(())
    }

    /// Collects every remaining line, the last line of the source comes first.
    pub fn read_lines(&mut self) -> Result<Vec<Vec<u8>>> {
        let mut lines = Vec::new();
        while let Some(line) = self.read_line()? {
            lines.push(line);
        }
        Ok(lines)
    }

    /// Like [`read_lines`] but splits on `separator`.
    ///
    /// [`read_lines`]: RevLineReader::read_lines
    pub fn read_lines_by(&mut self, separator: &[u8]) -> Result<Vec<Vec<u8>>> {
        let mut lines = Vec::new();
        while let Some(line) = self.read_line_by(separator)? {
            lines.push(line);
        }
        Ok(lines)
    }

    /// Returns an iterator over the remaining lines, split on `separator`.
    ///
    /// # Example
    /// ```
    /// use rev_lines::RevLineReader;
    ///
    /// fn main() -> rev_lines::Result<()> {
    ///     let data: &[u8] = b"1;2;3";
    ///     let mut reader = RevLineReader::new(data)?;
    ///
    ///     let lines = reader.split(b";")?.collect::<rev_lines::Result<Vec<_>>>()?;
    ///     assert_eq!(lines, vec![b"3".to_vec(), b"2;".to_vec(), b"1;".to_vec()]);
    ///     Ok(())
    /// }
    /// ```
    ///
    /// # Error
    /// Returns [`Error::EmptySeparator`] if `separator` is empty.
    pub fn split(&mut self, separator: &[u8]) -> Result<Split<'_, R>> {
        if separator.is_empty() {
            return Err(Error::EmptySeparator);
        }

        Ok(Split {
            reader: self,
            separator: separator.to_vec(),
        })
    }

    /// Returns an iterator over the remaining lines as `String`s, split on the configured
    /// separator.
    ///
    /// The separator stays attached to the lines, just like with [`read_line`].
    ///
    /// [`read_line`]: RevLineReader::read_line
    pub fn lines(&mut self) -> Lines<'_, R> {
        Lines { reader: self }
    }

    fn fetch(&mut self, separator: Option<&[u8]>) -> Result<Option<Vec<u8>>> {
        let separator = separator.unwrap_or(self.separator.as_slice());

        loop {
            // The front fragment can still grow, so the last one is only final once there's a
            // complete line between them or nothing is left in front of the front fragment.
            if self.fragments.len() > 2 || self.current_pos == 0 {
                let line = self.fragments.pop_last();
                if let Some(line) = &line {
                    trace!("returning line of {} bytes", line.len());
                }
                return Ok(line);
            }

            let read_size = self.read_size;
            debug_assert!(read_size as u64 <= self.current_pos);

            // A failed read may have left the source anywhere, so always start at the cursor.
            self.inner.seek_back_to(self.current_pos)?;
            self.chunk.resize(read_size, 0);
            self.inner.read_back_exact(&mut self.chunk[..read_size])?;
            self.current_pos -= read_size as u64;
            self.read_size = self.chunk_size;
            trace!(
                "read {} bytes backwards, cursor at {}",
                read_size,
                self.current_pos
            );

            self.fragments.prepend(&self.chunk, separator);
        }
    }
}

impl<'a, R: ReadBack> IntoIterator for &'a mut RevLineReader<R> {
    type Item = Result<Vec<u8>>;
    type IntoIter = Split<'a, R>;

    fn into_iter(self) -> Self::IntoIter {
        let separator = self.separator.clone();
        Split {
            reader: self,
            separator,
        }
    }
}

/// An iterator over the remaining lines of a [`RevLineReader`], split on a particular separator.
///
/// This struct is generally created by calling [`split`] on a [`RevLineReader`] or by iterating
/// over `&mut RevLineReader`.
///
/// [`split`]: RevLineReader::split
#[derive(Debug)]
pub struct Split<'a, R> {
    reader: &'a mut RevLineReader<R>,
    separator: Vec<u8>,
}

impl<R: ReadBack> Iterator for Split<'_, R> {
    type Item = Result<Vec<u8>>;

    fn next(&mut self) -> Option<Result<Vec<u8>>> {
        self.reader.read_line_by(&self.separator).transpose()
    }
}

impl<R: ReadBack> FusedIterator for Split<'_, R> {}

/// An iterator over the remaining lines of a [`RevLineReader`] as `String`s.
///
/// This struct is generally created by calling [`lines`] on a [`RevLineReader`].
///
/// [`lines`]: RevLineReader::lines
#[derive(Debug)]
pub struct Lines<'a, R> {
    reader: &'a mut RevLineReader<R>,
}

impl<R: ReadBack> Iterator for Lines<'_, R> {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Result<String>> {
        match self.reader.read_line() {
            Ok(Some(line)) => Some(String::from_utf8(line).map_err(Error::from)),
            Ok(None) => None,
            Err(e) => Some(Err(e)),
        }
    }
}

impl<R: ReadBack> FusedIterator for Lines<'_, R> {}
