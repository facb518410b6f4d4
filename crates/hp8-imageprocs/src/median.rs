/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Cross shaped median filter
//!
//! Every output sample is the median of the sample itself and
//! its four direct neighbours (up, right, down, left). Neighbours
//! outside the image are dropped, so edges use four samples and
//! corners use three.
//!
//! The median of `n` samples is the element at `n / 2` after sorting,
//! for an even count that is the upper of the two middle values.
use hp8_core::pixel::{Channel, Pixel};
use hp8_image::errors::ImageErrors;
use hp8_image::image::{alloc_pixels, Image};
use hp8_image::traits::OperationsTrait;
use log::trace;

/// `(dx, dy)` offsets making up the cross, the centre comes first
pub const NEIGHBOURS: [(isize, isize); 5] = [(0, 0), (0, -1), (1, 0), (0, 1), (-1, 0)];

/// Cross median filter
///
/// # Example
/// ```
/// use hp8_core::pixel::Pixel;
/// use hp8_image::image::Image;
/// use hp8_image::traits::OperationsTrait;
/// use hp8_imageprocs::median::CrossMedian;
///
/// let image = Image::fill(Pixel::new(1, 2, 3), 10, 10);
/// let filtered = CrossMedian::new().execute(&image).unwrap();
/// assert_eq!(filtered, image);
/// ```
#[derive(Default, Copy, Clone, Debug)]
pub struct CrossMedian;

impl CrossMedian {
    #[must_use]
    pub fn new() -> CrossMedian {
        CrossMedian
    }
}

impl OperationsTrait for CrossMedian {
    fn name(&self) -> &'static str {
        "Median filter"
    }

    fn execute_impl(&self, source: &Image) -> Result<Image, ImageErrors> {
        let (width, height) = source.dimensions();

        let mut pixels = alloc_pixels(width, height)?;
        pixels.resize(source.len(), Pixel::default());

        let mut in_channel = alloc_plane(source.len())?;
        let mut out_channel = alloc_plane(source.len())?;

        for channel in Channel::ALL {
            trace!("Filtering {channel:?} channel");

            for (sample, value) in in_channel.iter_mut().zip(source.channel(channel)) {
                *sample = value;
            }
            cross_median(&in_channel, &mut out_channel, width, height);

            for (pixel, value) in pixels.iter_mut().zip(out_channel.iter()) {
                pixel.set(channel, *value);
            }
        }
        Image::new(width, height, pixels)
    }
}

/// A zeroed channel plane of `len` samples
fn alloc_plane(len: usize) -> Result<Vec<u8>, ImageErrors> {
    let mut plane = Vec::new();

    plane
        .try_reserve_exact(len)
        .map_err(|_| ImageErrors::AllocationFailed(len))?;
    plane.resize(len, 0);

    Ok(plane)
}

/// Run the cross median over a single channel plane
///
/// Both planes hold `width * height` samples in row major order.
pub fn cross_median<T: Copy + Ord + Default>(
    in_channel: &[T], out_channel: &mut [T], width: usize, height: usize
) {
    let mut local_storage = [T::default(); NEIGHBOURS.len()];

    for (y, out_row) in out_channel.chunks_exact_mut(width.max(1)).take(height).enumerate() {
        for (x, out) in out_row.iter_mut().enumerate() {
            let mut count = 0;

            for idx in neighbourhood(x, y, width, height) {
                local_storage[count] = in_channel[idx];
                count += 1;
            }
            *out = median_of(&mut local_storage[..count]);
        }
    }
}

/// Indices of the cross around `(x, y)` that fall inside a `width * height` image
fn neighbourhood(
    x: usize, y: usize, width: usize, height: usize
) -> impl Iterator<Item = usize> {
    NEIGHBOURS.iter().filter_map(move |&(dx, dy)| {
        let nx = x.checked_add_signed(dx).filter(|&nx| nx < width)?;
        let ny = y.checked_add_signed(dy).filter(|&ny| ny < height)?;

        Some(ny * width + nx)
    })
}

/// Sort `values` and return the element at `len / 2`
fn median_of<T: Copy + Ord>(values: &mut [T]) -> T {
    values.sort_unstable();
    values[values.len() / 2]
}

#[cfg(test)]
mod tests {
    use hp8_core::pixel::{Channel, Pixel};
    use hp8_image::errors::ImageErrors;
    use hp8_image::image::Image;
    use hp8_image::traits::OperationsTrait;
    use nanorand::Rng;

    use super::{alloc_plane, median_of, neighbourhood, CrossMedian};

    fn red_image(width: usize, height: usize, red: &[u8]) -> Image {
        let pixels = red.iter().map(|&r| Pixel::new(r, 0, 0)).collect();
        Image::new(width, height, pixels).unwrap()
    }

    #[test]
    fn test_median_takes_upper_middle() {
        assert_eq!(median_of(&mut [40, 10, 30, 20]), 30);
        assert_eq!(median_of(&mut [3, 1, 2]), 2);
        assert_eq!(median_of(&mut [9]), 9);
    }

    #[test]
    fn test_sample_counts() {
        assert_eq!(neighbourhood(0, 0, 1, 1).count(), 1);

        let (w, h) = (4, 3);
        assert_eq!(neighbourhood(0, 0, w, h).count(), 3);
        assert_eq!(neighbourhood(3, 2, w, h).count(), 3);
        assert_eq!(neighbourhood(1, 0, w, h).count(), 4);
        assert_eq!(neighbourhood(0, 1, w, h).count(), 4);
        assert_eq!(neighbourhood(1, 1, w, h).count(), 5);

        // single row, no up or down neighbours
        assert_eq!(neighbourhood(1, 0, 3, 1).count(), 3);
    }

    #[test]
    fn test_uniform_image_is_unchanged() {
        for (w, h) in [(1, 1), (1, 7), (5, 1), (16, 9)] {
            let image = Image::fill(Pixel::new(200, 13, 77), w, h);
            assert_eq!(CrossMedian::new().execute(&image).unwrap(), image);
        }
    }

    #[test]
    fn test_two_by_two_corners() {
        let image = red_image(2, 2, &[10, 20, 30, 40]);
        let filtered = CrossMedian::new().execute(&image).unwrap();

        // top left sees itself, right and down: {10, 20, 30}
        let red: Vec<u8> = filtered.channel(Channel::Red).collect();
        assert_eq!(red, vec![20, 20, 30, 30]);
        assert!(filtered.channel(Channel::Green).all(|g| g == 0));
    }

    #[test]
    fn test_edge_pixel_uses_upper_middle() {
        // (1, 0) sees itself, right, down and left: {40, 20, 30, 10}
        let image = red_image(3, 2, &[10, 40, 20, 0, 30, 0]);
        let filtered = CrossMedian::new().execute(&image).unwrap();

        assert_eq!(filtered.get_pixel(1, 0), Some(Pixel::new(30, 0, 0)));
    }

    #[test]
    fn test_channels_are_independent() {
        let image = Image::from_fn(3, 3, |x, y| {
            let v = (x + y * 3) as u8;
            Pixel::new(v, 255 - v, v.wrapping_mul(7))
        });
        let filtered = CrossMedian::new().execute(&image).unwrap();

        let reference = naive_median(&image);
        assert_eq!(filtered, reference);
    }

    #[test]
    fn test_matches_naive_implementation() {
        let (w, h) = (31, 17);
        let mut bytes = vec![0_u8; w * h * 3];
        nanorand::WyRand::new_seed(0x48_50_38).fill(&mut bytes);

        let image = Image::from_u8(&bytes, w, h).unwrap();
        let copy = image.clone();
        let filtered = CrossMedian::new().execute(&image).unwrap();

        assert_eq!(filtered, naive_median(&image));
        // source is left alone
        assert_eq!(image, copy);
    }

    #[test]
    fn test_plane_allocation_failure_is_reported() {
        assert!(matches!(
            alloc_plane(usize::MAX),
            Err(ImageErrors::AllocationFailed(usize::MAX))
        ));
        assert_eq!(alloc_plane(6).unwrap(), vec![0; 6]);
    }

    #[test]
    fn test_rejects_empty_image() {
        let image = Image::new(0, 5, vec![]).unwrap();

        assert!(matches!(
            CrossMedian::new().execute(&image),
            Err(ImageErrors::EmptyImage)
        ));
    }

    fn naive_median(image: &Image) -> Image {
        let (w, h) = image.dimensions();

        Image::from_fn(w, h, |x, y| {
            let mut out = Pixel::default();

            for channel in Channel::ALL {
                let mut values = vec![];
                let candidates = [
                    Some((x, y)),
                    y.checked_sub(1).map(|y| (x, y)),
                    Some((x + 1, y)),
                    Some((x, y + 1)),
                    x.checked_sub(1).map(|x| (x, y))
                ];
                for (cx, cy) in candidates.into_iter().flatten() {
                    if let Some(pixel) = image.get_pixel(cx, cy) {
                        values.push(pixel.get(channel));
                    }
                }
                values.sort_unstable();
                out.set(channel, values[values.len() / 2]);
            }
            out
        })
    }
}
