/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fmt::{Debug, Display, Formatter};
use std::io;

/// Possible errors that may occur during decoding
pub enum HP8DecodeErrors {
    /// The image does not start with the `HP8` magic bytes
    ///
    /// The argument contains the bytes that were found instead
    WrongMagicBytes([u8; 3]),
    /// The header could not be parsed
    InvalidHeader(String),
    /// The input buffer doesn't have enough bytes to fully
    /// reconstruct the image
    ///
    /// # Arguments
    /// - 1st argument is the number of bytes we expected
    /// - 2nd argument is number of bytes actually left
    InsufficientData(usize, usize),
    /// Bytes found after the pixel data in strict mode
    TrailingBytes(usize),
    /// A dimension exceeds the configured limit
    ///
    /// # Arguments
    /// - 1st argument is the limit
    /// - 2nd argument is the value found in the header
    LargeDimensions(usize, usize),
    /// The pixel buffer could not be allocated, the argument is the
    /// number of pixels requested
    AllocationFailed(usize),
    /// Generic message does not need heap allocation
    GenericStatic(&'static str)
}

impl HP8DecodeErrors {
    /// Return true if this error came from a failed allocation rather
    /// than malformed input
    pub const fn is_allocation_failure(&self) -> bool {
        matches!(self, HP8DecodeErrors::AllocationFailed(_))
    }
}

impl Debug for HP8DecodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            HP8DecodeErrors::WrongMagicBytes(found) => {
                write!(
                    f,
                    "Wrong magic bytes, expected `HP8` as image start but found {:?}",
                    String::from_utf8_lossy(found)
                )
            }
            HP8DecodeErrors::InvalidHeader(reason) => {
                write!(f, "Invalid header, reason: {reason}")
            }
            HP8DecodeErrors::InsufficientData(expected, found) => {
                write!(
                    f,
                    "Insufficient pixel data, required {expected} bytes but remaining stream has {found}"
                )
            }
            HP8DecodeErrors::TrailingBytes(extra) => {
                write!(f, "Found {extra} unexpected bytes after pixel data")
            }
            HP8DecodeErrors::LargeDimensions(expected, found) => {
                write!(
                    f,
                    "Too large dimensions, expected a value of at most {expected} but found {found}"
                )
            }
            HP8DecodeErrors::AllocationFailed(pixels) => {
                write!(f, "Could not allocate memory for {pixels} pixels")
            }
            HP8DecodeErrors::GenericStatic(val) => write!(f, "{val}")
        }
    }
}

impl Display for HP8DecodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self:?}")
    }
}

impl std::error::Error for HP8DecodeErrors {}

impl From<&'static str> for HP8DecodeErrors {
    fn from(r: &'static str) -> Self {
        Self::GenericStatic(r)
    }
}

/// Errors occurring during encoding
pub enum HP8EncodeErrors {
    /// Pixel buffer length does not match the dimensions
    ///
    /// # Arguments
    /// - 1st argument is `width * height`
    /// - 2nd argument is the number of pixels passed
    DimensionMismatch(usize, usize),
    Static(&'static str),
    IoErrors(io::Error)
}

impl From<io::Error> for HP8EncodeErrors {
    fn from(err: io::Error) -> Self {
        HP8EncodeErrors::IoErrors(err)
    }
}

impl Debug for HP8EncodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            HP8EncodeErrors::DimensionMismatch(expected, found) => {
                write!(
                    f,
                    "Data length does not match image dimensions, expected {expected} pixels but found {found}"
                )
            }
            HP8EncodeErrors::Static(errors) => write!(f, "{errors}"),
            HP8EncodeErrors::IoErrors(err) => write!(f, "I/O error {err}")
        }
    }
}

impl Display for HP8EncodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self:?}")
    }
}

impl std::error::Error for HP8EncodeErrors {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            HP8EncodeErrors::IoErrors(err) => Some(err),
            _ => None
        }
    }
}
