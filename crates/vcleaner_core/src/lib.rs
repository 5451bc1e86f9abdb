//! vcleaner core: pure character classification, counting and command parsing.
mod classify;
mod command;
mod scan;
mod tally;
mod words;

pub use classify::{classify, is_allowed, CharClass};
pub use command::{default_output_path, Command, Subcommand, DEFAULT_OUTPUT_PREFIX};
pub use scan::{clean_text, inspect_text, CleanedText, Inspection, TextStats};
pub use tally::{HiddenEntry, HiddenTally};
pub use words::count_words;
