/// Count maximal runs of non-whitespace characters.
///
/// Separators are Unicode whitespace plus the ASCII information separators
/// (U+001C..=U+001F), which common text tokenizers also split on.
pub fn count_words(text: &str) -> usize {
    text.split(is_separator)
        .filter(|word| !word.is_empty())
        .count()
}

fn is_separator(c: char) -> bool {
    c.is_whitespace() || matches!(c, '\u{1c}'..='\u{1f}')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_and_blank_have_no_words() {
        assert_eq!(count_words(""), 0);
        assert_eq!(count_words("   \t\r\n  "), 0);
    }

    #[test]
    fn runs_of_separators_collapse() {
        assert_eq!(count_words("a"), 1);
        assert_eq!(count_words("a   b"), 2);
        assert_eq!(count_words("a\nb\tc"), 3);
        assert_eq!(count_words("  hello   world  test \n"), 3);
    }

    #[test]
    fn unicode_whitespace_separates() {
        assert_eq!(count_words("a\u{a0}b\u{2028}c\u{3000}d"), 4);
        assert_eq!(count_words("a\u{1f}b"), 2);
    }

    #[test]
    fn zero_width_space_does_not_separate() {
        assert_eq!(count_words("hello\u{200b}world"), 1);
    }
}
