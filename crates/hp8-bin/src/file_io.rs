/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::path::PathBuf;

use hp8_core::options::DecoderOptions;
use hp8_image::errors::ImageErrors;
use hp8_image::image::Image;
use hp8_image::traits::IntoImage;

pub struct HP8File {
    file_path: PathBuf,
    options:   DecoderOptions
}

impl HP8File {
    pub fn new(file_path: PathBuf, options: DecoderOptions) -> HP8File {
        HP8File { file_path, options }
    }
}

impl IntoImage for HP8File {
    fn into_image(self) -> Result<Image, ImageErrors> {
        Image::open(self.file_path, self.options)
    }
}
