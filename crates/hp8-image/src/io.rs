/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Reading and writing images from buffers and files
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use hp8_codec::{HP8Decoder, HP8Encoder};
use hp8_core::options::DecoderOptions;
use log::{debug, warn};

use crate::errors::ImageErrors;
use crate::image::Image;

impl Image {
    /// Decode an HP8 image already in memory
    pub fn read(data: &[u8], options: DecoderOptions) -> Result<Image, ImageErrors> {
        let mut decoder = HP8Decoder::new_with_options(options, data);
        let pixels = decoder.decode()?;

        let (width, height) = decoder
            .dimensions()
            .ok_or(ImageErrors::GenericStr("Decoder did not report dimensions"))?;

        Image::new(width, height, pixels)
    }

    /// Open and decode the HP8 file at `path`
    ///
    /// The file is closed before this returns. Errors carry the path.
    pub fn open<P: AsRef<Path>>(path: P, options: DecoderOptions) -> Result<Image, ImageErrors> {
        let path = path.as_ref();

        debug!("Reading {}", path.display());

        let data = std::fs::read(path).map_err(|e| ImageErrors::from(e).with_path(path))?;

        Image::read(&data, options).map_err(|e| e.with_path(path))
    }

    /// Encode this image as HP8 into `writer`
    pub fn write<W: Write>(&self, writer: &mut W) -> Result<(), ImageErrors> {
        let (width, height) = self.dimensions();

        HP8Encoder::new(writer).encode(width, height, self.pixels())?;

        Ok(())
    }

    /// Encode this image as HP8 into the file at `path`
    ///
    /// An existing file is truncated. If encoding fails after the
    /// file was created, the partially written file is removed.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ImageErrors> {
        let path = path.as_ref();

        debug!("Writing {}", path.display());

        let file = File::create(path).map_err(|e| ImageErrors::from(e).with_path(path))?;

        self.save_to(path, BufWriter::new(file), |writer| {
            let file = writer.into_inner().map_err(|e| e.into_error())?;
            file.sync_all()?;
            Ok(())
        })
    }

    /// Encode into `writer`, already opened on the freshly created `path`,
    /// then run `finish` on it. `path` is removed if either step fails.
    fn save_to<W, F>(&self, path: &Path, mut writer: W, finish: F) -> Result<(), ImageErrors>
    where
        W: Write,
        F: FnOnce(W) -> Result<(), ImageErrors>
    {
        let result = self.write(&mut writer).and_then(|()| finish(writer));

        if let Err(err) = result {
            if let Err(remove_err) = std::fs::remove_file(path) {
                warn!(
                    "Could not remove partial output {}: {remove_err}",
                    path.display()
                );
            }
            return Err(err.with_path(path));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::fs::File;
    use std::io::Write;

    use hp8_core::options::DecoderOptions;
    use hp8_core::pixel::Pixel;
    use nanorand::Rng;

    use crate::errors::{ErrorKind, ImageErrors};
    use crate::image::Image;

    #[test]
    fn test_encode_decode_random_image() {
        let (w, h) = (37, 19);
        let mut bytes = vec![0_u8; w * h * 3];
        nanorand::WyRand::new_seed(0x48_50_38).fill(&mut bytes);

        let image = Image::from_u8(&bytes, w, h).unwrap();

        let mut encoded = Vec::new();
        image.write(&mut encoded).unwrap();

        assert!(encoded.starts_with(b"HP8 19 37\n"));
        assert_eq!(Image::read(&encoded, DecoderOptions::default()).unwrap(), image);
    }

    #[test]
    fn test_rejects_truncated_buffer() {
        let image = Image::fill(Pixel::splat(1), 2, 2);
        let mut encoded = Vec::new();
        image.write(&mut encoded).unwrap();
        encoded.pop();

        let err = Image::read(&encoded, DecoderOptions::default()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Format);
    }

    #[test]
    fn test_large_dimensions_round_trip() {
        let image = Image::fill(Pixel::new(1, 2, 3), 16385, 1);

        let mut encoded = Vec::new();
        image.write(&mut encoded).unwrap();

        assert_eq!(Image::read(&encoded, DecoderOptions::default()).unwrap(), image);
    }

    /// Accepts `budget` bytes then fails every write
    struct ShortWriter<W> {
        inner:  W,
        budget: usize
    }

    impl<W: Write> Write for ShortWriter<W> {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            if self.budget == 0 {
                return Err(std::io::Error::new(std::io::ErrorKind::Other, "device full"));
            }
            let len = buf.len().min(self.budget);
            self.budget -= len;
            self.inner.write(&buf[..len])
        }

        fn flush(&mut self) -> std::io::Result<()> {
            self.inner.flush()
        }
    }

    #[test]
    fn test_failed_save_removes_partial_output() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.hp8");
        let image = Image::fill(Pixel::splat(9), 4, 4);

        let writer = ShortWriter {
            inner:  File::create(&path).unwrap(),
            budget: 20
        };
        let err = image.save_to(&path, writer, |_| Ok(())).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Io);
        assert!(matches!(err, ImageErrors::FileErrors(_, _)));
        assert!(!path.exists());
    }

    #[test]
    fn test_failed_finish_removes_output() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.hp8");

        let file = File::create(&path).unwrap();
        let result = Image::fill(Pixel::splat(9), 2, 2).save_to(&path, file, |_| {
            Err(std::io::Error::new(std::io::ErrorKind::Other, "sync failed").into())
        });

        assert!(result.is_err());
        assert!(!path.exists());
    }

    #[test]
    fn test_save_writes_whole_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.hp8");
        let image = Image::fill(Pixel::new(4, 5, 6), 3, 3);

        image.save(&path).unwrap();

        assert_eq!(std::fs::read(&path).unwrap().len(), b"HP8 3 3\n".len() + 27);
        assert_eq!(Image::open(&path, DecoderOptions::default()).unwrap(), image);
    }

    #[test]
    fn test_open_missing_file() {
        let err = Image::open("/this/path/does/not/exist.hp8", DecoderOptions::default())
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Io);
        assert!(matches!(err, ImageErrors::FileErrors(_, _)));
    }
}
