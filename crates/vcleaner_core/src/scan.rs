use crate::{classify, count_words, CharClass, HiddenTally};

/// Length in code points and word count of a piece of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextStats {
    pub length: usize,
    pub words: usize,
}

impl TextStats {
    pub fn of(text: &str) -> Self {
        Self {
            length: text.chars().count(),
            words: count_words(text),
        }
    }
}

/// Result of removing hidden characters from a text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanedText {
    /// Allowed characters only, in original order.
    pub text: String,
    pub original: TextStats,
    pub cleaned: TextStats,
    pub hidden_removed: usize,
}

/// Hidden-character census of a text. Read-only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inspection {
    pub original: TextStats,
    pub tally: HiddenTally,
}

impl Inspection {
    pub fn total_hidden(&self) -> usize {
        self.tally.total()
    }
}

pub fn clean_text(content: &str) -> CleanedText {
    let mut text = String::with_capacity(content.len());
    let mut hidden_removed = 0;
    for c in content.chars() {
        match classify(c) {
            CharClass::Allowed => text.push(c),
            CharClass::Hidden => hidden_removed += 1,
        }
    }

    let cleaned = TextStats::of(&text);
    CleanedText {
        original: TextStats::of(content),
        cleaned,
        hidden_removed,
        text,
    }
}

pub fn inspect_text(content: &str) -> Inspection {
    let mut tally = HiddenTally::new();
    content
        .chars()
        .filter(|&c| classify(c) == CharClass::Hidden)
        .for_each(|c| tally.record(c));

    Inspection {
        original: TextStats::of(content),
        tally,
    }
}
