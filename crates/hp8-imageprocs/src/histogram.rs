/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Calculate a combined channel histogram
//!
//! An image histogram shows the number of samples in an image at each intensity value.
//! Here all three channels share one table, so an `w x h` image contributes
//! `3 * w * h` counts.
use std::fmt::{Display, Formatter};

use hp8_image::errors::ImageErrors;
use hp8_image::image::Image;
use hp8_image::traits::AnalysisTrait;

/// Counts of every 8 bit value found in an image
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Histogram {
    counts: [u64; 256]
}

impl Histogram {
    /// Number of samples with value `value`
    pub const fn count(&self, value: u8) -> u64 {
        self.counts[value as usize]
    }

    /// Sum of all buckets
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// Iterate over `(value, count)` for every value from 0 to 255,
    /// including values that never occur
    pub fn iter(&self) -> impl Iterator<Item = (u8, u64)> + '_ {
        (0..=255_u8).zip(self.counts.iter().copied())
    }
}

impl Display for Histogram {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for (value, count) in self.iter() {
            writeln!(f, "Value {value}: {count} pixels")?;
        }
        Ok(())
    }
}

/// A combined RGB histogram
///
/// # Example
/// ```rust
/// use hp8_core::pixel::Pixel;
/// use hp8_image::image::Image;
/// use hp8_image::traits::AnalysisTrait;
/// use hp8_imageprocs::histogram::CombinedHistogram;
///
/// let image = Image::fill(Pixel::new(100, 100, 7), 10, 10);
/// let histogram = CombinedHistogram::new().analyze(&image).unwrap();
///
/// assert_eq!(histogram.count(100), 200);
/// assert_eq!(histogram.count(7), 100);
/// ```
#[derive(Default, Copy, Clone, Debug)]
pub struct CombinedHistogram;

impl CombinedHistogram {
    #[must_use]
    pub fn new() -> CombinedHistogram {
        CombinedHistogram
    }
}

impl AnalysisTrait for CombinedHistogram {
    type Report = Histogram;

    fn name(&self) -> &'static str {
        "Histogram"
    }

    fn analyze_impl(&self, image: &Image) -> Result<Histogram, ImageErrors> {
        // one table per channel so consecutive increments rarely hit
        // the same counter, summed at the end
        let mut red = [0_u64; 256];
        let mut green = [0_u64; 256];
        let mut blue = [0_u64; 256];

        for pixel in image.pixels() {
            red[usize::from(pixel.r)] += 1;
            green[usize::from(pixel.g)] += 1;
            blue[usize::from(pixel.b)] += 1;
        }

        for ((r, g), b) in red.iter_mut().zip(green.iter()).zip(blue.iter()) {
            *r += g + b;
        }
        Ok(Histogram { counts: red })
    }
}

#[cfg(test)]
mod tests {
    use hp8_core::pixel::Pixel;
    use hp8_image::errors::ImageErrors;
    use hp8_image::image::Image;
    use hp8_image::traits::AnalysisTrait;
    use nanorand::Rng;

    use super::CombinedHistogram;

    #[test]
    fn test_histogram_sums_all_channels() {
        let (w, h) = (123, 45);

        let mut bytes = vec![0_u8; w * h * 3];
        nanorand::WyRand::new_seed(0x48_50_38).fill(&mut bytes);

        let image = Image::from_u8(&bytes, w, h).unwrap();
        let histogram = CombinedHistogram::new().analyze(&image).unwrap();

        assert_eq!(histogram.total(), 3 * (w * h) as u64);

        for value in [0_u8, 17, 128, 255] {
            let expected = bytes.iter().filter(|&&b| b == value).count() as u64;
            assert_eq!(histogram.count(value), expected);
        }
    }

    #[test]
    fn test_report_lists_every_value() {
        let image = Image::new(2, 1, vec![Pixel::new(0, 0, 255), Pixel::new(1, 2, 255)]).unwrap();
        let report = CombinedHistogram::new().analyze(&image).unwrap().to_string();

        let lines: Vec<&str> = report.lines().collect();
        assert_eq!(lines.len(), 256);
        assert_eq!(lines[0], "Value 0: 2 pixels");
        assert_eq!(lines[1], "Value 1: 1 pixels");
        assert_eq!(lines[3], "Value 3: 0 pixels");
        assert_eq!(lines[255], "Value 255: 2 pixels");
    }

    #[test]
    fn test_rejects_empty_image() {
        let image = Image::new(0, 0, vec![]).unwrap();

        assert!(matches!(
            CombinedHistogram::new().analyze(&image),
            Err(ImageErrors::EmptyImage)
        ));
    }
}
