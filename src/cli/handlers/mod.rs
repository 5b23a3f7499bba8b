mod contacts;
mod todo;

pub use contacts::{contacts_menu, run_contacts};
pub use todo::{run_todo, todo_menu};

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use crate::cli::commands::StoreArgs;
use crate::cli::prompt::Prompter;
use crate::io::config_io;
use crate::io::store::RecordStore;
use crate::model::{Config, Record, Session, StorageConfig};
use crate::ops::OpError;
use crate::ops::index::parse_index;

pub type CliResult = Result<(), Box<dyn std::error::Error>>;

/// Resolve the data file for one app: `--file` wins over the config file,
/// which wins over the built-in default. Relative paths are taken from
/// `--dir` (or the working directory).
pub fn resolve_store_path(
    args: &StoreArgs,
    pick: fn(&StorageConfig) -> &str,
) -> Result<(PathBuf, Config), config_io::ConfigError> {
    let base = args.dir.clone().unwrap_or_else(|| PathBuf::from("."));
    let config = config_io::read_config(&base)?;
    let file = match &args.file {
        Some(file) => file.clone(),
        None => PathBuf::from(pick(&config.storage)),
    };
    Ok((base.join(file), config))
}

/// Open a session on the resolved data file.
fn open_session<R: Record>(
    args: &StoreArgs,
    pick: fn(&StorageConfig) -> &str,
) -> Result<(Session<R>, Config), Box<dyn std::error::Error>> {
    let (path, config) = resolve_store_path(args, pick)?;
    log::debug!("using {}", path.display());
    let session = Session::open(RecordStore::new(path))?;
    Ok((session, config))
}

/// Prompt for a record number and validate it against `len`.
///
/// The outer `Result` is the terminal I/O; the inner one is the user's
/// answer.
fn ask_index<R: Record, In: BufRead, Out: Write>(
    prompter: &mut Prompter<In, Out>,
    prompt: &str,
    len: usize,
) -> io::Result<Result<usize, OpError>> {
    let raw = prompter.ask_or_empty(prompt)?;
    Ok(parse_index::<R>(&raw, len))
}

/// Print a rejected operation, or pass a storage failure up to end the
/// session.
fn report<W: Write>(out: &mut W, err: OpError, message: &str) -> CliResult {
    if err.is_fatal() {
        return Err(err.into());
    }
    log::info!("{}", err);
    writeln!(out, "{}", message)?;
    Ok(())
}
