//! Canonical search patterns and keyword-class regex synthesis.
//!
//! The external jump engine resolves [`Pattern`] names natively; the regex
//! strings here are the reference form of each name and the raw material
//! for the composed fallbacks (end-of-line in modes where the caret may not
//! rest past the last character, keyword-boundary motions).
//!
//! All look-behinds are fixed width so the patterns stay compatible with
//! engines that reject variable-width look-behind.

use fancy_regex::Regex;

/// A predefined pattern known to the external jump engine by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pattern {
    /// Start of every word (`[a-zA-Z0-9_]` runs).
    AllWords,
    /// First character of every line, or the empty-line position.
    LineStarts,
    /// Every line terminator position, end of buffer included.
    LineEnds,
    /// First non-blank character of every line.
    LineIndents,
    /// Union of starts, ends and indents.
    LineAllMarks,
}

impl Pattern {
    /// Reference regex for this pattern name.
    pub fn regex(&self) -> &'static str {
        match self {
            Pattern::AllWords => ALL_WORDS,
            Pattern::LineStarts => LINE_STARTS,
            Pattern::LineEnds => LINE_ENDS,
            Pattern::LineIndents => LINE_INDENTS,
            Pattern::LineAllMarks => LINE_ALL_MARKS,
        }
    }
}

/// A word character not preceded by a word character.
pub const ALL_WORDS: &str = "(?<![a-zA-Z0-9_])[a-zA-Z0-9_]";

/// Last character of a keyword run (`e`-family motions).
pub const KEYWORD_END: &str = "[a-zA-Z0-9_](?![a-zA-Z0-9_])";

/// Start of a whitespace-delimited WORD.
pub const BIG_WORD_START: &str = r"(?<!\S)\S";

/// End of a whitespace-delimited WORD.
pub const BIG_WORD_END: &str = r"\S(?!\S)";

pub const LINE_STARTS: &str = r"(?m)^.|^$";

pub const LINE_ENDS: &str = r"\n|\z";

pub const LINE_INDENTS: &str = r"(?m)^\s*\S";

pub const LINE_ALL_MARKS: &str = r"(?m)^.|^$|\n|\z|^\s*\S";

/// Last non-newline character of each line, or an empty line. Used instead
/// of [`LINE_ENDS`] when the caret may not rest past the last character,
/// where the canonical end-of-line offset would produce an empty-selection
/// target.
pub const LINE_END_NO_NEWLINE: &str = r"(?m)(.$)|(^$)";

/// Default "jump anywhere" pattern: word starts and ends, camel-case
/// transitions, characters following `_` or `#`, and empty lines.
pub const DEFAULT_ANYWHERE: &str = r"(?m)\b\w|\w\b|(?<=[a-z])[A-Z]|(?<=_).|(?<=#).|^$";

/// Render an expanded keyword character list as a regex character class
/// body, escaping class metacharacters. Empty input means no usable
/// keyword configuration.
pub fn keyword_class(chars: &[char]) -> Option<String> {
    if chars.is_empty() {
        return None;
    }
    let mut cls = String::with_capacity(chars.len() * 2);
    for &c in chars {
        if matches!(c, '\\' | ']' | '[' | '^' | '-') {
            cls.push('\\');
        }
        cls.push(c);
    }
    Some(cls)
}

/// Pattern matching "entering a keyword" positions: a keyword-class char
/// preceded by a non-keyword char (or start of text), or a non-keyword,
/// non-whitespace char preceded by a keyword char. Falls back to the plain
/// WORD pattern without keyword configuration.
pub fn keyword_start_regex(keyword_chars: Option<&[char]>) -> String {
    match keyword_chars.and_then(keyword_class) {
        Some(cls) => format!("((?<![{cls}])[{cls}])|((?<=[{cls}])[^{cls}\\s])|{BIG_WORD_START}"),
        None => BIG_WORD_START.to_string(),
    }
}

/// Pattern matching "leaving a keyword" positions, the mirror of
/// [`keyword_start_regex`].
pub fn keyword_end_regex(keyword_chars: Option<&[char]>) -> String {
    match keyword_chars.and_then(keyword_class) {
        Some(cls) => format!("([{cls}](?![{cls}]))|([^{cls}\\s](?=[{cls}]))|{BIG_WORD_END}"),
        None => BIG_WORD_END.to_string(),
    }
}

/// Start offsets of every match of `re` in `text`, as character offsets.
///
/// `fancy_regex` reports byte offsets; the single pass over `char_indices`
/// converts them without re-scanning per match.
pub fn match_starts(re: &Regex, text: &str) -> Vec<usize> {
    let mut starts = Vec::new();
    let mut char_idx = 0usize;
    let mut iter = text.char_indices();
    let mut next_char = iter.next();

    // Match starts arrive in ascending byte order, so one forward walk
    // over char_indices covers them all.
    for m in re.find_iter(text).filter_map(|m| m.ok()) {
        let target = m.start();
        while let Some((b, _)) = next_char {
            if b >= target {
                break;
            }
            char_idx += 1;
            next_char = iter.next();
        }
        match next_char {
            Some((b, _)) if b == target => starts.push(char_idx),
            None if target == text.len() => starts.push(char_idx),
            _ => {}
        }
    }
    starts
}
