use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Prefix applied to the input file name when `clean` gets no output path.
pub const DEFAULT_OUTPUT_PREFIX: &str = "cleaned_";

/// Subcommands that take an input file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Subcommand {
    Clean,
    Show,
}

impl Subcommand {
    pub fn name(self) -> &'static str {
        match self {
            Subcommand::Clean => "clean",
            Subcommand::Show => "show",
        }
    }

    /// Exact, case-sensitive match on the subcommand name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "clean" => Some(Subcommand::Clean),
            "show" => Some(Subcommand::Show),
            _ => None,
        }
    }
}

/// What a command line asks for (program name excluded).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Write a filtered copy of `input` to `output`.
    Clean { input: PathBuf, output: PathBuf },
    /// Report hidden characters in `input`.
    Show { input: PathBuf },
    /// A known subcommand was given without its input file.
    MissingInput(Subcommand),
    /// The first argument is not a known subcommand.
    Unknown(String),
    /// No arguments at all.
    Usage,
}

impl Command {
    /// `clean` with the output path defaulted from the input.
    pub fn clean(input: PathBuf, output: Option<PathBuf>) -> Self {
        let output = output.unwrap_or_else(|| default_output_path(&input));
        Command::Clean { input, output }
    }
}

/// `cleaned_<name>` next to the input file.
pub fn default_output_path(input: &Path) -> PathBuf {
    let mut name = OsString::from(DEFAULT_OUTPUT_PREFIX);
    match input.file_name() {
        Some(file_name) => {
            name.push(file_name);
            input.with_file_name(name)
        }
        // `..` or a root: no file name to prefix, fall back to the whole path.
        None => {
            name.push(input.as_os_str());
            PathBuf::from(name)
        }
    }
}
