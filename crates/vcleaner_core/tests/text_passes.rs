use std::sync::Once;

use vcleaner_core::{clean_text, inspect_text, TextStats};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(vcleaner_logging::initialize_for_tests);
}

#[test]
fn clean_removes_zero_width_characters() {
    init_logging();
    let cleaned = clean_text("hello\u{200b}world\u{200c}test");

    assert_eq!(cleaned.text, "helloworldtest");
    assert_eq!(cleaned.hidden_removed, 2);
    assert_eq!(cleaned.original, TextStats { length: 16, words: 1 });
    assert_eq!(cleaned.cleaned, TextStats { length: 14, words: 1 });
}

#[test]
fn clean_is_identity_on_clean_text() {
    init_logging();
    for input in ["hello world test", "hello\tworld\ntest", "a\r\nb", ""] {
        let cleaned = clean_text(input);
        assert_eq!(cleaned.text, input);
        assert_eq!(cleaned.hidden_removed, 0);
        assert_eq!(cleaned.original, cleaned.cleaned);
    }
}

#[test]
fn clean_removes_unicode_separators_and_nbsp() {
    init_logging();
    let cleaned = clean_text("hello\u{2028}world\u{2029}test\u{a0}end");

    assert_eq!(cleaned.text, "helloworldtestend");
    assert_eq!(cleaned.hidden_removed, 3);
    // The removed characters were word separators.
    assert_eq!(cleaned.original.words, 4);
    assert_eq!(cleaned.cleaned.words, 1);
}

#[test]
fn clean_length_invariant_holds() {
    init_logging();
    let inputs = [
        "",
        "plain",
        "\u{feff}bom first",
        "ctrl\u{0}\u{7}\u{1b}[0m\u{7f}",
        "日本語 and émoji 🎉",
    ];
    for input in inputs {
        let cleaned = clean_text(input);
        assert_eq!(
            cleaned.cleaned.length + cleaned.hidden_removed,
            cleaned.original.length,
            "{input:?}"
        );
        assert!(cleaned.text.is_ascii());
    }
}

#[test]
fn inspect_tallies_repeated_hidden_character() {
    init_logging();
    let inspection = inspect_text("hello\u{200b}world\u{200b}test");

    assert_eq!(inspection.total_hidden(), 2);
    assert_eq!(inspection.tally.distinct(), 1);
    assert_eq!(inspection.tally.count_of('\u{200b}'), 2);
    assert_eq!(inspection.original, TextStats { length: 16, words: 1 });
}

#[test]
fn inspect_clean_text_finds_nothing() {
    init_logging();
    let inspection = inspect_text("hello world test");

    assert!(inspection.tally.is_empty());
    assert_eq!(inspection.total_hidden(), 0);
    assert_eq!(inspection.original.words, 3);
}

#[test]
fn inspect_and_clean_agree_on_hidden_count() {
    init_logging();
    let input = "a\u{200b}b\u{200b}c\u{2060}d\u{feff}\u{200b}";
    let removed = clean_text(input).hidden_removed;
    let inspection = inspect_text(input);

    assert_eq!(inspection.total_hidden(), removed);
    let top = inspection.tally.by_count_desc()[0];
    assert_eq!(top.character, '\u{200b}');
    assert_eq!(top.count, 3);
}
