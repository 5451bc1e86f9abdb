//! Command-line definition and the mapping from clap errors to [`Command`] cases.

use std::ffi::OsString;
use std::path::PathBuf;

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use vcleaner_core::{Command, Subcommand};

const BIN_NAME: &str = "vcleaner";

const EXAMPLES: &str = "Examples:
  vcleaner clean dirty.txt clean.txt
  vcleaner show dirty.txt";

#[derive(Debug, Parser)]
#[command(name = BIN_NAME, version, after_help = EXAMPLES)]
#[command(about = "Find and strip characters outside printable ASCII")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, clap::Subcommand)]
enum Commands {
    /// Write a copy keeping only printable ASCII, tab, LF and CR
    Clean {
        /// File to clean
        input: PathBuf,
        /// Destination, defaults to cleaned_<input name> next to the input
        output: Option<PathBuf>,
        #[arg(hide = true)]
        _extra: Vec<OsString>,
    },
    /// List hidden characters in a file, most frequent first
    Show {
        /// File to inspect
        input: PathBuf,
        #[arg(hide = true)]
        _extra: Vec<OsString>,
    },
}

impl Commands {
    fn into_command(self) -> Command {
        match self {
            Commands::Clean { input, output, .. } => Command::clean(input, output),
            Commands::Show { input, .. } => Command::Show { input },
        }
    }
}

/// Outcome of reading the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Invocation {
    Run(Command),
    /// `--help` or `--version` output.
    Info(String),
    /// Any other malformed command line, rendered by clap.
    Invalid(String),
}

/// Parse arguments following the program name.
pub(crate) fn parse<I, T>(args: I) -> Invocation
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
    let first = args.first().map(|arg| arg.to_string_lossy().into_owned());
    let argv = std::iter::once(OsString::from(BIN_NAME)).chain(args);

    match Cli::try_parse_from(argv) {
        Ok(cli) => Invocation::Run(cli.command.into_command()),
        Err(err) => from_error(&err, first),
    }
}

fn from_error(err: &clap::Error, first: Option<String>) -> Invocation {
    let known = first.as_deref().and_then(Subcommand::from_name);
    match (err.kind(), first, known) {
        (
            ErrorKind::MissingSubcommand | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand,
            None,
            _,
        ) => Invocation::Run(Command::Usage),
        (ErrorKind::DisplayHelp | ErrorKind::DisplayVersion, _, _) => {
            Invocation::Info(err.render().to_string())
        }
        (ErrorKind::MissingRequiredArgument, _, Some(subcommand)) => {
            Invocation::Run(Command::MissingInput(subcommand))
        }
        (ErrorKind::InvalidSubcommand | ErrorKind::UnknownArgument, Some(name), None) => {
            Invocation::Run(Command::Unknown(name))
        }
        _ => Invocation::Invalid(err.render().to_string()),
    }
}

/// Top-level help, printed when no subcommand is given.
pub(crate) fn usage() -> String {
    Cli::command().render_help().to_string()
}
