/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::path::PathBuf;

use clap::{value_parser, Arg, ArgAction, Command};

pub const USAGE: &str = "Usage: hp8 [OPTIONS] [--] INPUT1 OUTPUT1 [INPUT2 OUTPUT2 ...]";

#[rustfmt::skip]
pub fn create_cmd_args() -> Command {
    Command::new("hp8")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Median filter HP8 images and print their histograms")
        .override_usage("hp8 [OPTIONS] [--] INPUT1 OUTPUT1 [INPUT2 OUTPUT2 ...]")
        .arg(Arg::new("files")
            .help("Pairs of input and output files, processed in order")
            .value_name("FILES")
            .allow_hyphen_values(true)
            .action(ArgAction::Append)
            .num_args(1..)
            .value_parser(value_parser!(PathBuf)))
        .arg(Arg::new("debug")
            .long("debug")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display debug information and higher"))
        .arg(Arg::new("trace")
            .long("trace")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display very verbose information"))
        .arg(Arg::new("warn")
            .long("warn")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display warnings and errors only, hides progress"))
        .arg(Arg::new("info")
            .long("info")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display progress of each image (default)"))
        .arg(Arg::new("strict")
            .long("strict")
            .action(ArgAction::SetTrue)
            .help_heading("ADVANCED")
            .help("Reject files with bytes after the pixel data"))
        .arg(Arg::new("max-width")
            .long("max-width")
            .help_heading("ADVANCED")
            .help("Refuse to decode images wider than this")
            .value_parser(value_parser!(usize)))
        .arg(Arg::new("max-height")
            .long("max-height")
            .help_heading("ADVANCED")
            .help("Refuse to decode images taller than this")
            .value_parser(value_parser!(usize)))
}

#[test]
fn verify_cmd() {
    create_cmd_args().debug_assert();
}
