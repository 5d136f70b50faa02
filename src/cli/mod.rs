pub mod diff;

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser};

use gendiff::format::Format;

#[derive(Debug, Parser)]
#[command(
    name = "gendiff",
    version,
    about = "Compares two configuration files and shows a difference."
)]
pub struct Cli {
    /// Increase log verbosity (-v, -vv)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(flatten)]
    pub args: DiffArgs,
}

#[derive(Debug, Args)]
pub struct DiffArgs {
    /// Path to the first configuration file (.json, .yml or .yaml)
    pub file1: PathBuf,

    /// Path to the second configuration file (.json, .yml or .yaml)
    pub file2: PathBuf,

    /// Output format
    #[arg(
        short,
        long,
        value_enum,
        default_value_t = Format::Stylish,
        env = "GENDIFF_FORMAT"
    )]
    pub format: Format,

    /// Compare only the subtree at this path, e.g. /common/setting6
    ///
    /// The path must point at an object; a side where it does not resolve is
    /// compared as an empty object.
    #[arg(long, value_name = "PATH")]
    pub filter: Option<String>,
}
