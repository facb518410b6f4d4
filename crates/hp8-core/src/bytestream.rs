/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! A simple cursor over an in-memory byte slice
//!
//! Reads past the end never panic, they return `None` and
//! leave the cursor where it was.

/// An encapsulation of a byte stream reader
pub struct ZByteReader<'a> {
    stream:   &'a [u8],
    position: usize
}

impl<'a> ZByteReader<'a> {
    pub const fn new(stream: &'a [u8]) -> ZByteReader<'a> {
        ZByteReader {
            stream,
            position: 0
        }
    }

    /// Return the number of bytes not yet read
    #[inline]
    pub const fn remaining(&self) -> usize {
        self.stream.len().saturating_sub(self.position)
    }

    #[inline]
    pub const fn eof(&self) -> bool {
        self.position >= self.stream.len()
    }

    #[inline]
    pub const fn get_position(&self) -> usize {
        self.position
    }

    /// Look at the next byte without consuming it
    #[inline]
    pub fn peek_u8(&self) -> Option<u8> {
        self.stream.get(self.position).copied()
    }

    /// Move the cursor forward by `num` bytes, stopping at the end
    #[inline]
    pub fn skip(&mut self, num: usize) {
        self.position = self.position.saturating_add(num).min(self.stream.len());
    }

    /// Return a reference to the next `num` bytes and advance past them
    ///
    /// Returns `None` and leaves the cursor untouched if fewer than `num` bytes remain
    pub fn get_as_ref(&mut self, num: usize) -> Option<&'a [u8]> {
        let end = self.position.checked_add(num)?;
        let slice = self.stream.get(self.position..end)?;
        self.position = end;
        Some(slice)
    }
}

#[cfg(test)]
mod tests {
    use super::ZByteReader;

    #[test]
    fn test_reads_stop_at_end() {
        let mut reader = ZByteReader::new(b"abc");

        assert_eq!(reader.get_as_ref(1), Some(&b"a"[..]));
        assert_eq!(reader.peek_u8(), Some(b'b'));
        assert!(reader.get_as_ref(3).is_none());
        assert_eq!(reader.get_position(), 1);

        reader.skip(10);
        assert!(reader.eof());
        assert_eq!(reader.remaining(), 0);
        assert_eq!(reader.peek_u8(), None);
    }
}
