/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Decoder options
//!
//! Options influence how strict the decoder is and
//! which images it refuses to allocate for.

/// Default maximum width and height the decoder accepts
///
/// Unlimited, any header that fits in a `usize` is accepted.
/// Callers can lower it with [`DecoderOptions::set_max_width`]
/// and [`DecoderOptions::set_max_height`].
pub const DEFAULT_MAX_DIMENSIONS: usize = usize::MAX;

/// Decoder options
///
/// Not all options are respected by every caller, but the HP8
/// decoder honours all of them.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct DecoderOptions {
    max_width:   usize,
    max_height:  usize,
    strict_mode: bool
}

impl Default for DecoderOptions {
    fn default() -> Self {
        DecoderOptions {
            max_width:   DEFAULT_MAX_DIMENSIONS,
            max_height:  DEFAULT_MAX_DIMENSIONS,
            strict_mode: false
        }
    }
}

impl DecoderOptions {
    /// Get maximum width configured for which the decoder
    /// should not try to decode images greater than this width
    pub const fn max_width(&self) -> usize {
        self.max_width
    }

    /// Get maximum height configured for which the decoder should
    /// not try to decode images greater than this height
    pub const fn max_height(&self) -> usize {
        self.max_height
    }

    /// Whether the decoder treats recoverable oddities as errors
    ///
    /// Currently this covers trailing bytes after the pixel data
    pub const fn strict_mode(&self) -> bool {
        self.strict_mode
    }

    /// Set maximum width for which the decoder should not try
    /// decoding images greater than that width
    #[must_use]
    pub fn set_max_width(mut self, width: usize) -> Self {
        self.max_width = width;
        self
    }

    /// Set maximum height for which the decoder should not try
    /// decoding images greater than that height
    #[must_use]
    pub fn set_max_height(mut self, height: usize) -> Self {
        self.max_height = height;
        self
    }

    #[must_use]
    pub fn set_strict_mode(mut self, yes: bool) -> Self {
        self.strict_mode = yes;
        self
    }
}
