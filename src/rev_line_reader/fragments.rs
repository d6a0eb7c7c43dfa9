use std::{cmp, collections::VecDeque};

use memchr::memmem;

/// The lines which have been read back but not returned yet, ordered by their position in the
/// source (index 0 is the leftmost one).
///
/// Only the front fragment may be incomplete: the bytes in front of it haven't been read yet, so
/// an earlier chunk can still extend it.
#[derive(Debug, Default)]
pub struct Fragments {
    lines: VecDeque<Vec<u8>>,
    split_on: Vec<u8>,
}

impl Fragments {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the amount of buffered fragments.
    #[inline]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Removes the rightmost fragment.
    #[inline]
    pub fn pop_last(&mut self) -> Option<Vec<u8>> {
        self.lines.pop_back()
    }

    /// Puts `chunk` in front of the first fragment and splits the result on `separator` again.
    ///
    /// Every piece except the last one ends with exactly one `separator`. The pieces, put back
    /// together, are exactly `chunk` followed by the old first fragment.
    pub fn prepend(&mut self, chunk: &[u8], separator: &[u8]) {
        debug_assert!(!separator.is_empty());

        let front = self.lines.pop_front().unwrap_or_default();
        let mut head = Vec::with_capacity(chunk.len() + front.len());
        head.extend_from_slice(chunk);
        head.extend_from_slice(&front);

        let ends = if self.split_on == separator {
            Self::new_ends(&head, chunk.len(), separator)
        } else {
            self.split_on = separator.to_vec();
            Self::ends(&head, 0, separator)
        };

        let mut pieces = Vec::with_capacity(ends.len() + 1);
        let mut start = 0;
        for end in ends {
            pieces.push(head[start..end].to_vec());
            start = end;
        }
        if start < head.len() {
            pieces.push(head[start..].to_vec());
        }

        for piece in pieces.into_iter().rev() {
            self.lines.push_front(piece);
        }
    }
}

impl Fragments {
    /// Ends of the separator matches in `head` when everything after `chunk_len` is a front
    /// fragment which was split on `separator` already.
    ///
    /// Such a fragment holds at most one match, at its very end. New matches start inside the
    /// chunk, so only the chunk and the first `separator.len() - 1` bytes behind it are searched,
    /// unless a match reaches into the old fragment and shifts the rest of it.
    fn new_ends(head: &[u8], chunk_len: usize, separator: &[u8]) -> Vec<usize> {
        let window = cmp::min(head.len(), chunk_len + separator.len() - 1);
        let mut ends = Self::ends(&head[..window], 0, separator);

        let last = ends.last().copied().unwrap_or(0);
        if last > chunk_len {
            ends.extend(Self::ends(head, last, separator));
        }
        ends
    }

    /// Ends of the leftmost non-overlapping matches of `separator` in `head[from..]`.
    fn ends(head: &[u8], from: usize, separator: &[u8]) -> Vec<usize> {
        memmem::find_iter(&head[from..], separator)
            .map(|found| from + found + separator.len())
            .collect()
    }
}
