#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::perf,
    clippy::style,
    clippy::missing_safety_doc,
    clippy::missing_const_for_fn
)]
#![allow(clippy::as_conversions, clippy::mod_module_files)]

use std::{path::PathBuf, process};

mod app;
mod commands;
mod interact;

use commands::Commands;

use shelf::{file::JsonDirStorage, BookListStore, Session};

use clap::{Args, Parser};
use log::trace;

fn main() {
    if let Err(err) = try_main() {
        eprintln!("{err}");
        process::exit(2);
    }
}

fn try_main() -> eyre::Result<()> {
    let Cli {
        command,
        global_opts:
            GlobalOpts {
                dir,
                verbosity,
                quiet,
            },
    } = Cli::parse();

    setup_errlog(verbosity as usize, quiet)?;

    trace!("Using '{}' as the data directory", dir.display());
    let store = BookListStore::load(JsonDirStorage::new(dir));
    let mut session = Session::new(store);

    let message = command.execute(&mut session)?;
    if !quiet {
        println!("{message}");
    }
    Ok(())
}

fn setup_errlog(verbosity: usize, quiet: bool) -> eyre::Result<()> {
    stderrlog::new()
        .verbosity(log_verbosity(verbosity, quiet))
        .init()?;
    Ok(())
}

/// Warnings and errors are always shown, each `-v` adds a level from info upwards.
const fn log_verbosity(verbosity: usize, quiet: bool) -> usize {
    // if quiet then ignore verbosity but still show warnings and errors
    if quiet {
        1
    } else {
        verbosity + 1
    }
}

#[derive(Parser)]
#[clap(name = "shelf")]
#[clap(about = "Search the Google Books catalog and keep a list of the books found")]
#[clap(version, author)]
struct Cli {
    #[clap(subcommand)]
    command: Commands,

    #[clap(flatten)]
    global_opts: GlobalOpts,
}

#[derive(Debug, Args)]
struct GlobalOpts {
    /// The directory the book list is saved in
    #[clap(short, long, parse(from_os_str), global = true, default_value = ".")]
    dir: PathBuf,

    /// How chatty the program is when performing commands
    ///
    /// The number of times this flag is used will increase how chatty
    /// the program is.
    #[clap(short, long, parse(from_occurrences), global = true)]
    verbosity: u8,

    /// Prevents the program from writing to stdout, errors will still be printed to stderr.
    #[clap(short, long, global = true)]
    quiet: bool,
}

#[test]
fn default_log_level_is_warn() {
    // stderrlog levels: 0 error, 1 warn, 2 info, 3 debug
    assert_eq!(1, log_verbosity(0, false));
    assert_eq!(2, log_verbosity(1, false));
    assert_eq!(1, log_verbosity(3, true));
}
