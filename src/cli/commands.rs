use std::path::PathBuf;

use clap::{Args, Parser, ValueEnum};

#[derive(Parser)]
#[command(name = "todo", about = "A to-do list kept in a JSON file", version)]
pub struct TodoCli {
    /// Front end to start (asks when omitted)
    #[arg(value_enum, ignore_case = true)]
    pub mode: Option<Mode>,

    #[command(flatten)]
    pub store: StoreArgs,
}

#[derive(Parser)]
#[command(name = "contacts", about = "A contact book kept in a JSON file", version)]
pub struct ContactsCli {
    #[command(flatten)]
    pub store: StoreArgs,
}

/// Which to-do front end to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// Numbered text menu
    Cli,
    /// Full-screen list with an entry line
    #[value(alias = "tui")]
    Gui,
}

#[derive(Args, Debug, Default)]
pub struct StoreArgs {
    /// Data file to use instead of the configured one
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Run against a different directory
    #[arg(short = 'C', long = "dir", value_name = "DIR")]
    pub dir: Option<PathBuf>,
}
