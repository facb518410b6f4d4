/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! HP8 is a raw, uncompressed RGB image format. It has the following format:
//! ```text
//! ╔════════════╤═══════════════════════════════════════════════════════════╗
//! ║ Bytes      │ Description                                               ║
//! ╠════════════╪═══════════════════════════════════════════════════════════╣
//! ║ 3          │ "HP8" magic value                                         ║
//! ╟────────────┼───────────────────────────────────────────────────────────╢
//! ║ variable   │ ASCII whitespace, decimal height, whitespace, decimal     ║
//! ║            │ width, then a single whitespace byte (usually `\n`)       ║
//! ╟────────────┼───────────────────────────────────────────────────────────╢
//! ║ [111]      │ 3x8-Bit unsigned integers [RGB] / pixel, row-major        ║
//! ╚════════════╧═══════════════════════════════════════════════════════════╝
//! ```
//! Height comes *before* width in the header, the opposite of most formats.
//! The encoder writes `HP8 <height> <width>\n`.
//!
//! # Example
//! ```
//! use hp8_codec::{HP8Decoder, HP8Encoder};
//! use hp8_core::pixel::Pixel;
//!
//! let pixels = vec![Pixel::new(1, 2, 3); 6];
//! let mut out = Vec::new();
//! HP8Encoder::new(&mut out).encode(3, 2, &pixels).unwrap();
//! assert!(out.starts_with(b"HP8 2 3\n"));
//!
//! let mut decoder = HP8Decoder::new(&out);
//! let decoded = decoder.decode().unwrap();
//! assert_eq!(decoder.dimensions(), Some((3, 2)));
//! assert_eq!(decoded, pixels);
//! ```
#![warn(clippy::correctness, clippy::perf, clippy::pedantic)]
#![allow(clippy::module_name_repetitions, clippy::must_use_candidate)]

pub use decoder::*;
pub use encoder::*;
pub use errors::*;

mod decoder;
mod encoder;
mod errors;

/// Magic bytes every HP8 file starts with
pub const HP8_MAGIC: [u8; 3] = *b"HP8";
