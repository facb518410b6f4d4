/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Image processing routines for `hp8-image`
//!
//! Filters implement the `OperationsTrait` and analyses the
//! `AnalysisTrait` defined by hp8-image.
//!
//! # Example
//! - Filter an image then count its values
//! ```
//! use hp8_core::pixel::Pixel;
//! use hp8_image::image::Image;
//! use hp8_image::traits::{AnalysisTrait, OperationsTrait};
//! use hp8_imageprocs::histogram::CombinedHistogram;
//! use hp8_imageprocs::median::CrossMedian;
//!
//! let image = Image::fill(Pixel::new(1, 2, 3), 100, 100);
//! let filtered = CrossMedian::new().execute(&image).unwrap();
//! let histogram = CombinedHistogram::new().analyze(&filtered).unwrap();
//! assert_eq!(histogram.total(), 3 * 100 * 100);
//! ```
#![warn(
    clippy::correctness,
    clippy::perf,
    clippy::pedantic,
    clippy::inline_always,
    clippy::missing_errors_doc,
    clippy::panic
)]
#![allow(
    clippy::needless_return,
    clippy::similar_names,
    clippy::doc_markdown,
    clippy::module_name_repetitions,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

pub mod histogram;
pub mod median;
