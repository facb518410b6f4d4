/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! This module represents a single image
//!
//! An image is a width, a height and a flat buffer of
//! exactly `width * height` [`Pixel`]s stored in row major order.
//! The buffer length is checked on construction and can never
//! change afterwards, cloning an image copies the whole buffer.
use hp8_core::pixel::{Channel, Pixel, PIXEL_SIZE};

use crate::errors::ImageErrors;

/// Represents a single image
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Image {
    width:  usize,
    height: usize,
    pixels: Vec<Pixel>
}

impl Image {
    /// Create a new image from a pixel buffer
    ///
    /// # Errors
    /// If `pixels.len()` is not `width * height`
    pub fn new(width: usize, height: usize, pixels: Vec<Pixel>) -> Result<Image, ImageErrors> {
        let expected = checked_len(width, height)?;

        if expected != pixels.len() {
            return Err(ImageErrors::DimensionsMisMatch(expected, pixels.len()));
        }
        Ok(Image {
            width,
            height,
            pixels
        })
    }

    /// Create an image whose pixels are all `pixel`
    ///
    /// # Panics
    /// If the buffer cannot be allocated, use [`Image::try_fill`]
    /// to handle that case.
    pub fn fill(pixel: Pixel, width: usize, height: usize) -> Image {
        Image {
            width,
            height,
            pixels: vec![pixel; width * height]
        }
    }

    /// Create an image whose pixels are all `pixel`, reporting
    /// allocation failures instead of aborting
    pub fn try_fill(pixel: Pixel, width: usize, height: usize) -> Result<Image, ImageErrors> {
        let mut pixels = alloc_pixels(width, height)?;
        pixels.resize(width * height, pixel);

        Image::new(width, height, pixels)
    }

    /// Create an image by calling `func(x, y)` for every pixel position
    ///
    /// # Example
    /// ```
    /// use hp8_core::pixel::Pixel;
    /// use hp8_image::image::Image;
    ///
    /// let image = Image::from_fn(3, 2, |x, y| Pixel::splat((x + y * 3) as u8));
    /// assert_eq!(image.get_pixel(2, 1), Some(Pixel::splat(5)));
    /// ```
    pub fn from_fn<F>(width: usize, height: usize, mut func: F) -> Image
    where
        F: FnMut(usize, usize) -> Pixel
    {
        let mut pixels = Vec::with_capacity(width * height);

        for y in 0..height {
            for x in 0..width {
                pixels.push(func(x, y));
            }
        }
        Image {
            width,
            height,
            pixels
        }
    }

    /// Create an image from interleaved RGB bytes
    ///
    /// # Errors
    /// If `bytes.len()` is not `width * height * 3`
    pub fn from_u8(bytes: &[u8], width: usize, height: usize) -> Result<Image, ImageErrors> {
        let expected = checked_len(width, height)?;

        if bytes.len() != expected.saturating_mul(PIXEL_SIZE) {
            return Err(ImageErrors::DimensionsMisMatch(
                expected,
                bytes.len() / PIXEL_SIZE
            ));
        }
        let pixels = bytes
            .chunks_exact(PIXEL_SIZE)
            .map(|chunk| Pixel::new(chunk[0], chunk[1], chunk[2]))
            .collect();

        Image::new(width, height, pixels)
    }

    /// Get image dimensions as a tuple of (width, height)
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub const fn width(&self) -> usize {
        self.width
    }

    pub const fn height(&self) -> usize {
        self.height
    }

    /// Return the pixels in row major order
    pub fn pixels(&self) -> &[Pixel] {
        &self.pixels
    }

    /// Return a mutable view of the pixels
    ///
    /// The view can modify pixel values but never the buffer length
    pub fn pixels_mut(&mut self) -> &mut [Pixel] {
        &mut self.pixels
    }

    /// Return the pixel at `(x, y)` or `None` if it lies outside the image
    pub fn get_pixel(&self, x: usize, y: usize) -> Option<Pixel> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels.get(y * self.width + x).copied()
    }

    /// Return an iterator over a single channel of every pixel
    pub fn channel(&self, channel: Channel) -> impl Iterator<Item = u8> + '_ {
        self.pixels.iter().map(move |pixel| pixel.get(channel))
    }

    /// Return the pixels as interleaved RGB bytes
    pub fn to_u8(&self) -> Vec<u8> {
        self.pixels.iter().flat_map(|pixel| pixel.to_bytes()).collect()
    }

    /// Number of pixels in the image
    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Return true if the pixel buffer matches the image dimensions
    pub fn is_valid(&self) -> bool {
        self.width
            .checked_mul(self.height)
            .is_some_and(|len| len == self.pixels.len())
    }
}

fn checked_len(width: usize, height: usize) -> Result<usize, ImageErrors> {
    width
        .checked_mul(height)
        .ok_or(ImageErrors::GenericStr("Image dimensions overflow"))
}

/// Allocate an empty pixel buffer able to hold a `width * height` image
///
/// # Errors
/// [`ImageErrors::AllocationFailed`] if the memory could not be reserved
pub fn alloc_pixels(width: usize, height: usize) -> Result<Vec<Pixel>, ImageErrors> {
    let len = checked_len(width, height)?;
    let mut pixels = Vec::new();

    pixels
        .try_reserve_exact(len)
        .map_err(|_| ImageErrors::AllocationFailed(len))?;

    Ok(pixels)
}

#[cfg(test)]
mod tests {
    use hp8_core::pixel::{Channel, Pixel};

    use crate::errors::ImageErrors;
    use crate::image::Image;

    #[test]
    fn test_rejects_mismatched_buffer() {
        let result = Image::new(2, 2, vec![Pixel::default(); 3]);
        assert!(matches!(result, Err(ImageErrors::DimensionsMisMatch(4, 3))));

        assert!(Image::from_u8(&[0; 11], 2, 2).is_err());
    }

    #[test]
    fn test_row_major_indexing() {
        let bytes: Vec<u8> = (0..18).collect();
        let image = Image::from_u8(&bytes, 3, 2).unwrap();

        assert_eq!(image.get_pixel(0, 1), Some(Pixel::new(9, 10, 11)));
        assert_eq!(image.get_pixel(3, 0), None);
        assert_eq!(image.to_u8(), bytes);
        assert_eq!(
            image.channel(Channel::Green).collect::<Vec<_>>(),
            vec![1, 4, 7, 10, 13, 16]
        );
    }

    #[test]
    fn test_clone_is_deep() {
        let source = Image::fill(Pixel::splat(7), 4, 4);
        let mut copy = source.clone();

        copy.pixels_mut()[0] = Pixel::splat(0);

        assert_eq!(source.get_pixel(0, 0), Some(Pixel::splat(7)));
        assert_ne!(source, copy);
        assert!(copy.is_valid());
    }

    #[test]
    fn test_try_fill() {
        let image = Image::try_fill(Pixel::new(1, 2, 3), 5, 7).unwrap();

        assert_eq!(image, Image::fill(Pixel::new(1, 2, 3), 5, 7));
    }
}
