/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::io::stdout;
use std::process::exit;

use clap::error::ErrorKind;
use log::error;

use crate::workflow::{run_batch, work_items_from_paths};

mod cmd_args;
mod cmd_parsers;
mod file_io;
pub mod workflow;

pub fn main() {
    let cmd = cmd_args::create_cmd_args();

    let options = match cmd.try_get_matches() {
        Ok(options) => options,
        Err(err) => {
            if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
                err.exit();
            }
            // stderr is all we have, nothing to report a failed print to
            err.print().ok();
            exit(1);
        }
    };

    cmd_parsers::global_options::setup_logger(&options);

    let parsed_opts = cmd_parsers::global_options::parse_options(&options);

    let items = match work_items_from_paths(&cmd_parsers::global_options::file_args(&options)) {
        Ok(items) => items,
        Err(err) => {
            error!("{err}");
            eprintln!("{}", cmd_args::USAGE);
            exit(1);
        }
    };

    let result = run_batch(&items, &parsed_opts, &mut stdout().lock());

    if let Err(err) = result {
        eprintln!("Could not complete workflow, reason: {err}");
        exit(1);
    }
}
