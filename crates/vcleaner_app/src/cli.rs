use std::io::{self, Write};
use std::process::ExitCode;

use log::Level;
use vcleaner_core::Command;
use vcleaner_engine::{clean_file, inspect_file, OperationError};
use vcleaner_logging::{vcleaner_debug, vcleaner_log};

use crate::args::{self, Invocation};

/// Process outcome of a single invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Status {
    Success,
    Failure,
}

impl From<Status> for ExitCode {
    fn from(status: Status) -> Self {
        match status {
            Status::Success => ExitCode::SUCCESS,
            Status::Failure => ExitCode::FAILURE,
        }
    }
}

/// Execute a parsed command line, writing reports and messages to `out`.
///
/// Operation failures are reported and still count as success; only command-line
/// misuse fails. The `Err` case is a failure to write to `out` itself.
pub(crate) fn run<W: Write>(invocation: Invocation, out: &mut W) -> io::Result<Status> {
    match invocation {
        Invocation::Run(command) => run_command(command, out),
        Invocation::Info(text) => {
            write!(out, "{text}")?;
            Ok(Status::Success)
        }
        Invocation::Invalid(text) => {
            write!(out, "{text}")?;
            Ok(Status::Failure)
        }
    }
}

fn run_command<W: Write>(command: Command, out: &mut W) -> io::Result<Status> {
    match command {
        Command::Usage => {
            writeln!(out, "{}", args::usage())?;
            Ok(Status::Failure)
        }
        Command::Unknown(name) => {
            vcleaner_debug!("unknown command {:?}", name);
            writeln!(out, "Unknown command '{name}'. Use 'clean' or 'show'")?;
            Ok(Status::Failure)
        }
        Command::MissingInput(subcommand) => {
            writeln!(
                out,
                "Error: Specify input file (vcleaner {} <input_file>)",
                subcommand.name()
            )?;
            Ok(Status::Failure)
        }
        Command::Clean { input, output } => {
            match clean_file(&input, &output) {
                Ok(report) => writeln!(out, "{report}")?,
                Err(err) => report_error(out, &err)?,
            }
            Ok(Status::Success)
        }
        Command::Show { input } => {
            match inspect_file(&input) {
                Ok(report) => writeln!(out, "{report}")?,
                Err(err) => report_error(out, &err)?,
            }
            Ok(Status::Success)
        }
    }
}

fn report_error<W: Write>(out: &mut W, err: &OperationError) -> io::Result<()> {
    vcleaner_log!(report_log_level(err), "{}", err);
    writeln!(out, "Error: {err}")
}

// The message is already in the report; keep it below the default stderr level.
fn report_log_level(err: &OperationError) -> Level {
    if err.is_not_found() {
        Level::Debug
    } else {
        Level::Info
    }
}
