/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::io::Write;

use hp8_core::pixel::{Pixel, PIXEL_SIZE};

use crate::errors::HP8EncodeErrors;

/// An HP8 encoder
///
/// The encoder writes the header followed by the raw pixels,
/// no buffering is done so wrap files in a `BufWriter`.
pub struct HP8Encoder<'a, W: Write> {
    writer: &'a mut W
}

impl<'a, W: Write> HP8Encoder<'a, W> {
    /// Create a new HP8 encoder that writes to `writer`
    pub fn new(writer: &'a mut W) -> HP8Encoder<'a, W> {
        Self { writer }
    }

    fn write_headers(&mut self, width: usize, height: usize) -> Result<(), HP8EncodeErrors> {
        // height before width, that is the wire order
        let header = format!("HP8 {height} {width}\n");

        self.writer.write_all(header.as_bytes())?;

        Ok(())
    }

    /// Encode `pixels` as an HP8 image
    ///
    /// `pixels` must contain exactly `width * height` items in raster order.
    pub fn encode(
        &mut self, width: usize, height: usize, pixels: &[Pixel]
    ) -> Result<(), HP8EncodeErrors> {
        let expected = width
            .checked_mul(height)
            .ok_or(HP8EncodeErrors::Static("Image dimensions overflow"))?;

        if expected != pixels.len() {
            return Err(HP8EncodeErrors::DimensionMismatch(expected, pixels.len()));
        }
        self.write_headers(width, height)?;

        let mut data = Vec::with_capacity(pixels.len() * PIXEL_SIZE);
        data.extend(pixels.iter().flat_map(|pixel| pixel.to_bytes()));

        self.writer.write_all(&data)?;
        self.writer.flush()?;

        Ok(())
    }
}
