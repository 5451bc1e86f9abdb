use std::fmt;
use std::path::PathBuf;

use vcleaner_core::{CleanedText, HiddenEntry, Inspection};

/// Summary printed after `clean`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanReport {
    pub original_length: usize,
    pub original_words: usize,
    pub cleaned_length: usize,
    pub hidden_removed: usize,
    pub cleaned_words: usize,
    pub output_path: PathBuf,
}

impl CleanReport {
    pub fn new(cleaned: &CleanedText, output_path: PathBuf) -> Self {
        Self {
            original_length: cleaned.original.length,
            original_words: cleaned.original.words,
            cleaned_length: cleaned.cleaned.length,
            hidden_removed: cleaned.hidden_removed,
            cleaned_words: cleaned.cleaned.words,
            output_path,
        }
    }
}

impl fmt::Display for CleanReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        writeln!(f, "Original length: {} characters", self.original_length)?;
        writeln!(f, "Number of Words: {}", self.original_words)?;
        writeln!(f, "Cleaned Length: {} characters", self.cleaned_length)?;
        writeln!(f, "Invisible characters removed: {}", self.hidden_removed)?;
        writeln!(f, "Words count: {}", self.cleaned_words)?;
        writeln!(
            f,
            "Clean version of file saved to: {}",
            self.output_path.display()
        )
    }
}

/// Summary printed after `show`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InspectReport {
    pub original_length: usize,
    pub original_words: usize,
    /// Distinct hidden characters, most frequent first.
    pub hidden: Vec<HiddenEntry>,
    pub total_hidden: usize,
}

impl InspectReport {
    pub fn new(inspection: &Inspection) -> Self {
        Self {
            original_length: inspection.original.length,
            original_words: inspection.original.words,
            hidden: inspection.tally.by_count_desc(),
            total_hidden: inspection.total_hidden(),
        }
    }

    pub fn is_clean(&self) -> bool {
        self.hidden.is_empty()
    }
}

impl fmt::Display for InspectReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        if self.is_clean() {
            writeln!(f, "No hidden characters found! Your file is clean")?;
        } else {
            writeln!(f, "Invisible characters found:")?;
            for entry in &self.hidden {
                writeln!(
                    f,
                    "  Find (code point {}, U+{:04X}): {} characters",
                    entry.code_point(),
                    entry.code_point(),
                    entry.count
                )?;
            }
            writeln!(
                f,
                " Total Invisible Characters: {} characters",
                self.total_hidden
            )?;
        }
        writeln!(f, "  Original Length: {}", self.original_length)?;
        writeln!(f, "  Number of Words: {}", self.original_words)
    }
}
