/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Core routines shared by all libraries
//!
//! This crate provides a set of core routines shared
//! by the decoder, encoder and filters under the `hp8` umbrella
//!
//! It currently contains
//!
//! - A bytestream reader over in-memory slices
//! - The three channel [`Pixel`](pixel::Pixel) type every image is made of
//! - Image decoder options
#![warn(clippy::correctness, clippy::perf, clippy::pedantic)]
#![allow(clippy::module_name_repetitions, clippy::must_use_candidate)]

pub mod bytestream;
pub mod options;
pub mod pixel;
