/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Errors possible during image processing
use std::fmt::{Debug, Display, Formatter};
use std::io;
use std::path::PathBuf;

use hp8_codec::{HP8DecodeErrors, HP8EncodeErrors};

/// Broad class of an [`ImageErrors`]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    /// A file could not be opened, read or written
    Io,
    /// Malformed header or truncated pixel data
    Format,
    /// A buffer could not be allocated
    Allocation,
    /// An image unfit for processing was passed to an operation
    InvalidInput,
    Other
}

/// All possible image errors that can occur.
///
/// This is the grandfather of image errors and contains
/// all decoding, processing and encoding errors possible
pub enum ImageErrors {
    DecodeErrors(HP8DecodeErrors),
    EncodeErrors(HP8EncodeErrors),
    IoErrors(io::Error),
    /// An error that happened while handling a specific file
    FileErrors(PathBuf, Box<ImageErrors>),
    /// The pixel buffer does not match the declared dimensions
    ///
    /// # Arguments
    /// - 1st argument is `width * height`
    /// - 2nd argument is the buffer length
    DimensionsMisMatch(usize, usize),
    /// The image has no pixels to work on
    EmptyImage,
    /// A buffer of the given number of pixels could not be allocated
    AllocationFailed(usize),
    GenericString(String),
    GenericStr(&'static str)
}

impl ImageErrors {
    /// Return the broad class this error belongs to
    pub fn kind(&self) -> ErrorKind {
        match self {
            ImageErrors::DecodeErrors(err) => {
                if err.is_allocation_failure() {
                    ErrorKind::Allocation
                } else {
                    ErrorKind::Format
                }
            }
            ImageErrors::EncodeErrors(HP8EncodeErrors::IoErrors(_)) | ImageErrors::IoErrors(_) => {
                ErrorKind::Io
            }
            ImageErrors::EncodeErrors(_)
            | ImageErrors::DimensionsMisMatch(_, _)
            | ImageErrors::EmptyImage => ErrorKind::InvalidInput,
            ImageErrors::FileErrors(_, err) => err.kind(),
            ImageErrors::AllocationFailed(_) => ErrorKind::Allocation,
            ImageErrors::GenericString(_) | ImageErrors::GenericStr(_) => ErrorKind::Other
        }
    }

    /// Attach the path of the file being processed to this error
    #[must_use]
    pub fn with_path<P: Into<PathBuf>>(self, path: P) -> ImageErrors {
        ImageErrors::FileErrors(path.into(), Box::new(self))
    }
}

impl Debug for ImageErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DecodeErrors(err) => write!(f, "Decoding failed: {err:?}"),
            Self::EncodeErrors(err) => write!(f, "Encoding failed: {err:?}"),
            Self::IoErrors(err) => write!(f, "I/O error: {err}"),
            Self::FileErrors(path, err) => write!(f, "{}: {err:?}", path.display()),
            Self::DimensionsMisMatch(expected, found) => {
                write!(
                    f,
                    "Invalid source image, expected {expected} pixels but buffer has {found}"
                )
            }
            Self::EmptyImage => write!(f, "Invalid source image, image has no pixels"),
            Self::AllocationFailed(pixels) => {
                write!(f, "Memory allocation failed for {pixels} pixels")
            }
            Self::GenericString(err) => write!(f, "{err}"),
            Self::GenericStr(err) => write!(f, "{err}")
        }
    }
}

impl Display for ImageErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self:?}")
    }
}

impl std::error::Error for ImageErrors {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ImageErrors::DecodeErrors(err) => Some(err),
            ImageErrors::EncodeErrors(err) => Some(err),
            ImageErrors::IoErrors(err) => Some(err),
            ImageErrors::FileErrors(_, err) => Some(err.as_ref()),
            _ => None
        }
    }
}

impl From<HP8DecodeErrors> for ImageErrors {
    fn from(from: HP8DecodeErrors) -> Self {
        ImageErrors::DecodeErrors(from)
    }
}

impl From<HP8EncodeErrors> for ImageErrors {
    fn from(from: HP8EncodeErrors) -> Self {
        ImageErrors::EncodeErrors(from)
    }
}

impl From<io::Error> for ImageErrors {
    fn from(from: io::Error) -> Self {
        ImageErrors::IoErrors(from)
    }
}

impl From<&'static str> for ImageErrors {
    fn from(from: &'static str) -> Self {
        ImageErrors::GenericStr(from)
    }
}

impl From<String> for ImageErrors {
    fn from(from: String) -> Self {
        ImageErrors::GenericString(from)
    }
}

#[test]
fn test_error_kinds() {
    let format: ImageErrors = HP8DecodeErrors::InsufficientData(3, 0).into();
    assert_eq!(format.kind(), ErrorKind::Format);

    let alloc: ImageErrors = HP8DecodeErrors::AllocationFailed(10).into();
    assert_eq!(alloc.kind(), ErrorKind::Allocation);

    let io = ImageErrors::from(io::Error::new(io::ErrorKind::NotFound, "gone")).with_path("a.hp8");
    assert_eq!(io.kind(), ErrorKind::Io);
    assert!(io.to_string().starts_with("a.hp8"));

    assert_eq!(ImageErrors::EmptyImage.kind(), ErrorKind::InvalidInput);
}
