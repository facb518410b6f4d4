/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::time::Instant;

use log::{debug, info};

use crate::errors::ImageErrors;
use crate::image::Image;

/// This encapsulates an image operation.
///
/// Operations never modify their source, they return a new image
/// with the same dimensions.
pub trait OperationsTrait {
    /// Get the name of this operation
    fn name(&self) -> &'static str;

    /// Execute the operation without checking the source
    ///
    /// Implementors should implement this, callers should call
    /// [`execute`](Self::execute) which validates the image first.
    fn execute_impl(&self, source: &Image) -> Result<Image, ImageErrors>;

    /// Run the operation on `source` returning a freshly allocated image
    ///
    /// # Errors
    /// - [`ImageErrors::EmptyImage`] or [`ImageErrors::DimensionsMisMatch`]
    ///   if `source` is not fit for processing
    /// - Any error the operation itself raises
    fn execute(&self, source: &Image) -> Result<Image, ImageErrors> {
        check_source(source)?;

        let (width, height) = source.dimensions();
        info!("Processing image: {width}x{height} pixels");

        let start = Instant::now();
        let result = self.execute_impl(source)?;

        debug!(
            "Finished running `{}` in {} ms",
            self.name(),
            start.elapsed().as_millis()
        );
        info!("{} processing complete", self.name());

        Ok(result)
    }
}

/// A read-only pass over an image producing a report
pub trait AnalysisTrait {
    type Report;

    /// Get the name of this analysis
    fn name(&self) -> &'static str;

    fn analyze_impl(&self, image: &Image) -> Result<Self::Report, ImageErrors>;

    /// Run the analysis, validating `image` first
    fn analyze(&self, image: &Image) -> Result<Self::Report, ImageErrors> {
        check_source(image)?;

        let start = Instant::now();
        let report = self.analyze_impl(image)?;

        debug!(
            "Finished running `{}` in {} ms",
            self.name(),
            start.elapsed().as_millis()
        );
        Ok(report)
    }
}

/// Anything that can be turned into an image
pub trait IntoImage {
    fn into_image(self) -> Result<Image, ImageErrors>;
}

impl IntoImage for Image {
    fn into_image(self) -> Result<Image, ImageErrors> {
        Ok(self)
    }
}

/// Confirm an image can be handed to an operation
pub fn check_source(image: &Image) -> Result<(), ImageErrors> {
    if !image.is_valid() {
        let (width, height) = image.dimensions();

        return Err(ImageErrors::DimensionsMisMatch(
            width.saturating_mul(height),
            image.len()
        ));
    }
    if image.is_empty() {
        return Err(ImageErrors::EmptyImage);
    }
    Ok(())
}
