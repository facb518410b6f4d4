/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! An image library for HP8 images
//!
//! This crate ties the [`hp8_codec`] decoder and encoder to an owned
//! [`Image`](image::Image) and defines the traits image operations implement.
//!
//! # Example
//! ```
//! use hp8_core::pixel::Pixel;
//! use hp8_image::image::Image;
//!
//! let image = Image::fill(Pixel::new(10, 20, 30), 4, 3);
//! let mut encoded = Vec::new();
//! image.write(&mut encoded).unwrap();
//!
//! let decoded = Image::read(&encoded, Default::default()).unwrap();
//! assert_eq!(image, decoded);
//! ```
#![warn(clippy::correctness, clippy::perf, clippy::pedantic)]
#![allow(
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::missing_errors_doc
)]

pub mod errors;
pub mod image;
mod io;
pub mod traits;
