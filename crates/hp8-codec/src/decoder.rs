/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use hp8_core::bytestream::ZByteReader;
use hp8_core::options::DecoderOptions;
use hp8_core::pixel::{Pixel, PIXEL_SIZE};
use log::{debug, warn};

use crate::errors::HP8DecodeErrors;
use crate::HP8_MAGIC;

/// An instance of an HP8 decoder
///
/// The decoder works on an in-memory buffer, reading the file
/// is left to the caller.
pub struct HP8Decoder<'a> {
    width:           usize,
    height:          usize,
    decoded_headers: bool,
    reader:          ZByteReader<'a>,
    options:         DecoderOptions
}

impl<'a> HP8Decoder<'a> {
    /// Create a new HP8 decoder with default options
    ///
    /// # Example
    /// ```
    /// use hp8_codec::HP8Decoder;
    /// let mut decoder = HP8Decoder::new(b"NOT VALID HP8");
    ///
    /// assert!(decoder.decode().is_err());
    /// ```
    pub fn new(data: &'a [u8]) -> HP8Decoder<'a> {
        HP8Decoder::new_with_options(DecoderOptions::default(), data)
    }

    /// Create a new HP8 decoder with the specified options
    pub fn new_with_options(options: DecoderOptions, data: &'a [u8]) -> HP8Decoder<'a> {
        HP8Decoder {
            width: 0,
            height: 0,
            decoded_headers: false,
            reader: ZByteReader::new(data),
            options
        }
    }

    /// Read HP8 headers and store them in internal state
    ///
    /// Calling this more than once is a no-op.
    pub fn read_headers(&mut self) -> Result<(), HP8DecodeErrors> {
        if self.decoded_headers {
            return Ok(());
        }
        let magic = match self.reader.get_as_ref(HP8_MAGIC.len()) {
            Some(bytes) => bytes,
            None => {
                let len = self.reader.remaining();
                let msg = format!("Expected at least 3 bytes in header but stream has {len}");

                return Err(HP8DecodeErrors::InvalidHeader(msg));
            }
        };
        if magic != HP8_MAGIC {
            let mut found = [0; 3];
            found.copy_from_slice(magic);

            return Err(HP8DecodeErrors::WrongMagicBytes(found));
        }

        if skip_spaces(&mut self.reader) == 0 {
            return Err(HP8DecodeErrors::InvalidHeader(
                "Expected whitespace after the HP8 tag".to_string()
            ));
        }
        // height is stored first
        self.height = self.get_integer("height")?;

        if self.height > self.options.max_height() {
            return Err(HP8DecodeErrors::LargeDimensions(
                self.options.max_height(),
                self.height
            ));
        }

        if skip_spaces(&mut self.reader) == 0 {
            return Err(HP8DecodeErrors::InvalidHeader(
                "Expected whitespace between height and width".to_string()
            ));
        }
        self.width = self.get_integer("width")?;

        if self.width > self.options.max_width() {
            return Err(HP8DecodeErrors::LargeDimensions(
                self.options.max_width(),
                self.width
            ));
        }

        // exactly one whitespace byte ends the header, anything after
        // it belongs to the pixel data even if it looks like a space
        match self.reader.peek_u8() {
            Some(byte) if byte.is_ascii_whitespace() => self.reader.skip(1),
            Some(byte) => {
                let msg = format!(
                    "Expected a newline after the width but found {:?}",
                    char::from(byte)
                );
                return Err(HP8DecodeErrors::InvalidHeader(msg));
            }
            None => {
                return Err(HP8DecodeErrors::InvalidHeader(
                    "Header is not terminated by a newline".to_string()
                ));
            }
        }

        debug!("Width: {}, height: {}", self.width, self.height);
        self.decoded_headers = true;

        Ok(())
    }

    /// Parse an unsigned decimal integer at the current position
    fn get_integer(&mut self, field: &'static str) -> Result<usize, HP8DecodeErrors> {
        if self.reader.peek_u8() == Some(b'-') {
            let msg = format!("The {field} cannot be negative");
            return Err(HP8DecodeErrors::InvalidHeader(msg));
        }
        if self.reader.peek_u8() == Some(b'+') {
            self.reader.skip(1);
        }
        let mut value = 0_usize;
        let mut digits = 0;

        while let Some(byte) = self.reader.peek_u8() {
            if !byte.is_ascii_digit() {
                break;
            }
            value = value
                .checked_mul(10)
                .and_then(|v| v.checked_add(usize::from(byte - b'0')))
                .ok_or_else(|| {
                    HP8DecodeErrors::InvalidHeader(format!("The {field} is too large"))
                })?;
            digits += 1;
            self.reader.skip(1);
        }
        if digits == 0 {
            let msg = match self.reader.peek_u8() {
                Some(byte) => format!(
                    "Expected a decimal {field} but found {:?}",
                    char::from(byte)
                ),
                None => format!("Expected a decimal {field} but reached end of stream")
            };
            return Err(HP8DecodeErrors::InvalidHeader(msg));
        }
        Ok(value)
    }

    /// Return image dimensions as `(width, height)` or none if headers
    /// aren't decoded
    pub const fn dimensions(&self) -> Option<(usize, usize)> {
        if self.decoded_headers {
            Some((self.width, self.height))
        } else {
            None
        }
    }

    /// Decode an HP8 encoded buffer and return its pixels in raster order
    ///
    /// The pixel count is always `width * height` as reported by
    /// [`dimensions`](Self::dimensions).
    pub fn decode(&mut self) -> Result<Vec<Pixel>, HP8DecodeErrors> {
        self.read_headers()?;

        let num_pixels = self
            .width
            .checked_mul(self.height)
            .ok_or(HP8DecodeErrors::GenericStatic(
                "Image dimensions overflow the address space"
            ))?;
        let size = num_pixels
            .checked_mul(PIXEL_SIZE)
            .ok_or(HP8DecodeErrors::GenericStatic(
                "Image dimensions overflow the address space"
            ))?;

        let remaining = self.reader.remaining();

        if remaining < size {
            return Err(HP8DecodeErrors::InsufficientData(size, remaining));
        }
        if remaining > size {
            let extra = remaining - size;

            if self.options.strict_mode() {
                return Err(HP8DecodeErrors::TrailingBytes(extra));
            }
            warn!("Ignoring {extra} bytes after pixel data");
        }

        let mut pixels = Vec::new();
        pixels
            .try_reserve_exact(num_pixels)
            .map_err(|_| HP8DecodeErrors::AllocationFailed(num_pixels))?;

        let data = self
            .reader
            .get_as_ref(size)
            .ok_or(HP8DecodeErrors::InsufficientData(size, remaining))?;

        pixels.extend(
            data.chunks_exact(PIXEL_SIZE)
                .map(|chunk| Pixel::new(chunk[0], chunk[1], chunk[2]))
        );

        Ok(pixels)
    }
}

/// Skip all whitespace characters until one hits a character
/// that isn't a space or we reach eof
///
/// Returns the number of bytes skipped
fn skip_spaces(byte_stream: &mut ZByteReader) -> usize {
    let mut skipped = 0;

    while let Some(byte) = byte_stream.peek_u8() {
        if !byte.is_ascii_whitespace() {
            break;
        }
        byte_stream.skip(1);
        skipped += 1;
    }
    skipped
}

#[cfg(test)]
mod tests {
    use hp8_core::options::DecoderOptions;
    use hp8_core::pixel::Pixel;

    use super::HP8Decoder;
    use crate::HP8DecodeErrors;

    #[test]
    fn test_height_comes_first() {
        let mut data = b"HP8 1 2\n".to_vec();
        data.extend_from_slice(&[1, 2, 3, 4, 5, 6]);

        let mut decoder = HP8Decoder::new(&data);
        let pixels = decoder.decode().unwrap();

        assert_eq!(decoder.dimensions(), Some((2, 1)));
        assert_eq!(pixels, vec![Pixel::new(1, 2, 3), Pixel::new(4, 5, 6)]);
    }

    #[test]
    fn test_whitespace_pixel_after_header_is_data() {
        // first pixel value is a newline, it must not be eaten by the header
        let data = b"HP8 1 1\n\n\t ".to_vec();

        let pixels = HP8Decoder::new(&data).decode().unwrap();
        assert_eq!(pixels, vec![Pixel::new(b'\n', b'\t', b' ')]);
    }

    #[test]
    fn test_wrong_magic() {
        let result = HP8Decoder::new(b"HP7 1 1\n\0\0\0").decode();
        assert!(matches!(result, Err(HP8DecodeErrors::WrongMagicBytes(m)) if &m == b"HP7"));
    }

    #[test]
    fn test_bad_dimensions() {
        for header in [
            &b"HP8 a 1\n"[..],
            b"HP8 1\n",
            b"HP8 -1 1\n",
            b"HP8 1 1",
            b"HP81 1\n",
            b"HP8 99999999999999999999999 1\n"
        ] {
            let result = HP8Decoder::new(header).decode();
            assert!(
                matches!(result, Err(HP8DecodeErrors::InvalidHeader(_))),
                "{:?}",
                String::from_utf8_lossy(header)
            );
        }
    }

    #[test]
    fn test_truncated_pixels() {
        let result = HP8Decoder::new(b"HP8 2 2\n\0\0\0\0\0\0\0\0\0\0\0").decode();
        assert!(matches!(
            result,
            Err(HP8DecodeErrors::InsufficientData(12, 11))
        ));
    }

    #[test]
    fn test_trailing_bytes() {
        let data = b"HP8 1 1\n\x01\x02\x03extra";

        assert_eq!(HP8Decoder::new(data).decode().unwrap().len(), 1);

        let options = DecoderOptions::default().set_strict_mode(true);
        let result = HP8Decoder::new_with_options(options, data).decode();
        assert!(matches!(result, Err(HP8DecodeErrors::TrailingBytes(5))));
    }

    #[test]
    fn test_max_dimensions() {
        let options = DecoderOptions::default().set_max_width(10);
        let result = HP8Decoder::new_with_options(options, b"HP8 1 11\n").decode();

        assert!(matches!(
            result,
            Err(HP8DecodeErrors::LargeDimensions(10, 11))
        ));
        let err = result.unwrap_err().to_string();
        assert!(err.contains("at most 10 but found 11"), "{err}");

        // the limit itself is allowed
        let options = DecoderOptions::default().set_max_width(1);
        assert!(HP8Decoder::new_with_options(options, b"HP8 1 1\n\0\0\0").decode().is_ok());
    }

    #[test]
    fn test_dimensions_unlimited_by_default() {
        let mut decoder = HP8Decoder::new(b"HP8 1 16385\n");
        decoder.read_headers().unwrap();

        assert_eq!(decoder.dimensions(), Some((16385, 1)));
    }

    #[test]
    fn test_empty_image() {
        let mut decoder = HP8Decoder::new(b"HP8 0 0\n");

        assert!(decoder.decode().unwrap().is_empty());
        assert_eq!(decoder.dimensions(), Some((0, 0)));
    }
}
