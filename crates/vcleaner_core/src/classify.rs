/// Classification tag for a single code point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    /// Printable ASCII, tab, line feed or carriage return.
    Allowed,
    /// Everything else, including DEL and all non-ASCII code points.
    Hidden,
}

/// Classify a code point: printable ASCII (space through `~`) plus tab, LF and CR
/// are allowed, all other code points are hidden.
pub fn classify(c: char) -> CharClass {
    match c {
        '\t' | '\n' | '\r' | ' '..='~' => CharClass::Allowed,
        _ => CharClass::Hidden,
    }
}

pub fn is_allowed(c: char) -> bool {
    classify(c) == CharClass::Allowed
}
