/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Batch processing of input/output pairs
//!
//! Each pair runs through decode, median filter, histogram and encode
//! in that order. The first failure stops the batch, outputs written
//! for earlier pairs stay on disk.
use std::io::Write;
use std::path::PathBuf;

use hp8_core::options::{DecoderOptions, DEFAULT_MAX_DIMENSIONS};
use hp8_image::errors::ImageErrors;
use hp8_image::image::Image;
use hp8_image::traits::{AnalysisTrait, IntoImage, OperationsTrait};
use hp8_imageprocs::histogram::CombinedHistogram;
use hp8_imageprocs::median::CrossMedian;
use log::{debug, error};

use crate::file_io::HP8File;

#[derive(Debug, Copy, Clone)]
pub struct CmdOptions {
    pub max_width:   usize,
    pub max_height:  usize,
    pub strict_mode: bool
}

impl CmdOptions {
    pub fn new() -> CmdOptions {
        CmdOptions {
            max_width:   DEFAULT_MAX_DIMENSIONS,
            max_height:  DEFAULT_MAX_DIMENSIONS,
            strict_mode: false
        }
    }

    pub fn decoder_options(&self) -> DecoderOptions {
        DecoderOptions::default()
            .set_max_width(self.max_width)
            .set_max_height(self.max_height)
            .set_strict_mode(self.strict_mode)
    }
}

impl Default for CmdOptions {
    fn default() -> Self {
        CmdOptions::new()
    }
}

/// One input file and the file its filtered version goes to
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct WorkItem {
    pub input:  PathBuf,
    pub output: PathBuf
}

/// Pair up `paths` as `INPUT OUTPUT INPUT OUTPUT ...`
///
/// # Errors
/// If `paths` is empty or has an odd length
pub fn work_items_from_paths(paths: &[PathBuf]) -> Result<Vec<WorkItem>, ImageErrors> {
    if paths.is_empty() || paths.len() % 2 != 0 {
        return Err(ImageErrors::GenericString(format!(
            "Expected pairs of input and output files but got {} file arguments",
            paths.len()
        )));
    }
    Ok(paths
        .chunks_exact(2)
        .map(|pair| WorkItem {
            input:  pair[0].clone(),
            output: pair[1].clone()
        })
        .collect())
}

#[derive(Copy, Clone, Debug)]
enum WorkFlowState {
    Initialized,
    Decode,
    Operations,
    Analysis,
    Encode
}

impl WorkFlowState {
    fn next(self) -> Option<Self> {
        match self {
            WorkFlowState::Initialized => Some(WorkFlowState::Decode),
            WorkFlowState::Decode => Some(WorkFlowState::Operations),
            WorkFlowState::Operations => Some(WorkFlowState::Analysis),
            WorkFlowState::Analysis => Some(WorkFlowState::Encode),
            WorkFlowState::Encode => None
        }
    }
}

/// Processing of a single work item
///
/// The workflow owns the image while it runs, every operation
/// replaces it with the image it produced.
pub struct WorkFlow<'a, W: Write> {
    item:       &'a WorkItem,
    options:    DecoderOptions,
    state:      Option<WorkFlowState>,
    image:      Option<Image>,
    operations: Vec<Box<dyn OperationsTrait>>,
    report:     &'a mut W
}

impl<'a, W: Write> WorkFlow<'a, W> {
    /// Create a workflow for `item`, histograms are written to `report`
    pub fn new(item: &'a WorkItem, options: DecoderOptions, report: &'a mut W) -> WorkFlow<'a, W> {
        WorkFlow {
            item,
            options,
            state: Some(WorkFlowState::Initialized),
            image: None,
            operations: vec![],
            report
        }
    }

    pub fn add_operation(&mut self, operation: Box<dyn OperationsTrait>) {
        self.operations.push(operation);
    }

    pub fn advance(&mut self) -> Result<(), ImageErrors> {
        let Some(state) = self.state else {
            return Ok(());
        };
        debug!("Current state: {:?}", state);

        match state {
            WorkFlowState::Initialized => {}
            WorkFlowState::Decode => {
                let file = HP8File::new(self.item.input.clone(), self.options);

                let image = file.into_image().inspect_err(|err| {
                    error!("Failed to load image {}: {err}", self.item.input.display());
                })?;
                self.image = Some(image);
            }
            WorkFlowState::Operations => {
                for operation in &self.operations {
                    let source = self.image.take().ok_or(ImageErrors::GenericStr(
                        "No image found for which we can execute operations"
                    ))?;
                    debug!("Running {}", operation.name());

                    // the decoded image is dropped once the filtered one exists
                    let result = operation.execute(&source).inspect_err(|err| {
                        error!(
                            "{} failed for {}: {err}",
                            operation.name(),
                            self.item.input.display()
                        );
                    })?;
                    self.image = Some(result);
                }
            }
            WorkFlowState::Analysis => {
                let image = self.image()?;

                let histogram = CombinedHistogram::new()
                    .analyze(image)
                    .inspect_err(|err| {
                        error!(
                            "Histogram process failed for {}: {err}",
                            self.item.input.display()
                        );
                    })?;

                write!(self.report, "{histogram}")?;
            }
            WorkFlowState::Encode => {
                let image = self.image()?;

                image.save(&self.item.output).inspect_err(|err| {
                    error!(
                        "Failed to save image to {}: {err}",
                        self.item.output.display()
                    );
                })?;
            }
        }
        self.state = state.next();

        Ok(())
    }

    pub fn advance_to_end(&mut self) -> Result<(), ImageErrors> {
        while self.state.is_some() {
            self.advance()?;
        }
        Ok(())
    }

    fn image(&self) -> Result<&Image, ImageErrors> {
        self.image
            .as_ref()
            .ok_or(ImageErrors::GenericStr("No image present in workflow"))
    }
}

/// Run every work item in order, stopping at the first failure
///
/// Histograms of the filtered images are written to `report`.
pub fn run_batch<W: Write>(
    items: &[WorkItem], options: &CmdOptions, report: &mut W
) -> Result<(), ImageErrors> {
    debug!("Processing {} image(s)", items.len());

    for item in items {
        let mut workflow = WorkFlow::new(item, options.decoder_options(), report);

        workflow.add_operation(Box::new(CrossMedian::new()));
        workflow.advance_to_end()?;

        debug!("Wrote {}", item.output.display());
    }
    report.flush()?;

    Ok(())
}
