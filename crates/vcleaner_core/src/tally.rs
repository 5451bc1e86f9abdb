use std::collections::HashMap;

/// One distinct hidden character and how often it occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HiddenEntry {
    pub character: char,
    pub count: usize,
}

impl HiddenEntry {
    pub fn code_point(&self) -> u32 {
        self.character as u32
    }
}

/// Per-character occurrence counts, remembering first-encounter order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HiddenTally {
    entries: Vec<HiddenEntry>,
    index: HashMap<char, usize>,
}

impl HiddenTally {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, character: char) {
        match self.index.get(&character) {
            Some(&slot) => self.entries[slot].count += 1,
            None => {
                self.index.insert(character, self.entries.len());
                self.entries.push(HiddenEntry {
                    character,
                    count: 1,
                });
            }
        }
    }

    pub fn count_of(&self, character: char) -> usize {
        self.index
            .get(&character)
            .map(|&slot| self.entries[slot].count)
            .unwrap_or(0)
    }

    /// Sum of all counts.
    pub fn total(&self) -> usize {
        self.entries.iter().map(|entry| entry.count).sum()
    }

    pub fn distinct(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries sorted by count, highest first. Equal counts keep first-encounter order.
    pub fn by_count_desc(&self) -> Vec<HiddenEntry> {
        let mut sorted = self.entries.clone();
        sorted.sort_by(|a, b| b.count.cmp(&a.count));
        sorted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_tally_has_no_entries() {
        let tally = HiddenTally::new();
        assert!(tally.is_empty());
        assert_eq!(tally.total(), 0);
        assert!(tally.by_count_desc().is_empty());
    }

    #[test]
    fn counts_per_character() {
        let mut tally = HiddenTally::new();
        for c in ['\u{200b}', '\u{200c}', '\u{200b}'] {
            tally.record(c);
        }
        assert_eq!(tally.count_of('\u{200b}'), 2);
        assert_eq!(tally.count_of('\u{200c}'), 1);
        assert_eq!(tally.count_of('x'), 0);
        assert_eq!(tally.distinct(), 2);
        assert_eq!(tally.total(), 3);
    }

    #[test]
    fn sorted_descending_with_stable_ties() {
        let mut tally = HiddenTally::new();
        for c in ['\u{a0}', '\u{2028}', '\u{200b}', '\u{200b}', '\u{2028}', '\u{200b}'] {
            tally.record(c);
        }
        let order: Vec<(char, usize)> = tally
            .by_count_desc()
            .into_iter()
            .map(|entry| (entry.character, entry.count))
            .collect();
        assert_eq!(
            order,
            vec![('\u{200b}', 3), ('\u{2028}', 2), ('\u{a0}', 1)]
        );

        let mut ties = HiddenTally::new();
        for c in ['\u{2029}', '\u{7f}', '\u{feff}'] {
            ties.record(c);
        }
        let order: Vec<char> = ties.by_count_desc().iter().map(|e| e.character).collect();
        assert_eq!(order, vec!['\u{2029}', '\u{7f}', '\u{feff}']);
    }

    #[test]
    fn entry_exposes_code_point() {
        let entry = HiddenEntry {
            character: '\u{200b}',
            count: 1,
        };
        assert_eq!(entry.code_point(), 8203);
    }
}
