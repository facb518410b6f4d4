/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::path::PathBuf;

use clap::parser::ValueSource;
use clap::ArgMatches;
use hp8_core::options::DEFAULT_MAX_DIMENSIONS;
use log::{debug, info, Level};

use crate::workflow::CmdOptions;

pub fn parse_options(options: &ArgMatches) -> CmdOptions {
    let mut cmd_options = CmdOptions::new();

    cmd_options.max_width = options
        .get_one::<usize>("max-width")
        .copied()
        .unwrap_or(DEFAULT_MAX_DIMENSIONS);
    cmd_options.max_height = options
        .get_one::<usize>("max-height")
        .copied()
        .unwrap_or(DEFAULT_MAX_DIMENSIONS);

    if options.value_source("strict") == Some(ValueSource::CommandLine) {
        info!("Enabling strict mode");
        cmd_options.strict_mode = true;
    }
    cmd_options
}

/// Return the positional file arguments in the order given
pub fn file_args(options: &ArgMatches) -> Vec<PathBuf> {
    options
        .get_many::<PathBuf>("files")
        .map(|files| files.cloned().collect())
        .unwrap_or_default()
}

/// Set up logging options
pub fn setup_logger(options: &ArgMatches) {
    let log_level = log_level(options);

    if let Err(err) = simple_logger::init_with_level(log_level) {
        eprintln!("Could not initialize logger: {err}");
        return;
    }

    debug!("Initialized logger");
    debug!("Log level :{}", log_level);
}

fn log_level(options: &ArgMatches) -> Level {
    let flag = |name: &str| options.get_flag(name);

    if flag("debug") {
        Level::Debug
    } else if flag("trace") {
        Level::Trace
    } else if flag("warn") {
        Level::Warn
    } else {
        // progress notices are info records, shown unless --warn is given
        Level::Info
    }
}

#[cfg(test)]
mod tests {
    use log::Level;

    use super::{log_level, parse_options};
    use crate::cmd_args::create_cmd_args;

    #[test]
    fn test_progress_is_shown_by_default() {
        let matches = create_cmd_args().get_matches_from(["hp8", "in.hp8", "out.hp8"]);
        assert_eq!(log_level(&matches), Level::Info);

        let matches = create_cmd_args().get_matches_from(["hp8", "--warn", "in.hp8", "out.hp8"]);
        assert_eq!(log_level(&matches), Level::Warn);
    }

    #[test]
    fn test_dimensions_are_unlimited_by_default() {
        let matches = create_cmd_args().get_matches_from(["hp8", "in.hp8", "out.hp8"]);
        let options = parse_options(&matches);

        assert_eq!(options.max_width, usize::MAX);
        assert_eq!(options.max_height, usize::MAX);

        let matches =
            create_cmd_args().get_matches_from(["hp8", "--max-width", "64", "in.hp8", "out.hp8"]);
        assert_eq!(parse_options(&matches).max_width, 64);
    }
}
