//! A tiny stand-in for the external jump engine: turns an
//! [`ExecutionResult`] into the candidate offsets the engine would label,
//! so tests can assert on them directly.

use std::collections::BTreeSet;

use easyjump::patterns::{self, Pattern, match_starts};
use easyjump::traits::EditorOps;
use easyjump::{Boundary, ExecutionResult, SearchPattern};
use fancy_regex::Regex;

use super::mock_editor::MockEditor;

pub fn candidates(ed: &MockEditor, result: &ExecutionResult) -> BTreeSet<usize> {
    match result {
        ExecutionResult::Search { pattern, boundary } => {
            let offsets = match pattern {
                SearchPattern::Predefined(p) => predefined_offsets(ed, *p),
                SearchPattern::Regex(s) => regex_offsets(ed, s),
            };
            offsets
                .into_iter()
                .filter(|&o| boundary.contains(ed, o))
                .collect()
        }
        ExecutionResult::Offsets(set) => set.clone(),
        ExecutionResult::Interactive { .. } | ExecutionResult::NoOp => BTreeSet::new(),
    }
}

/// Candidates for an interactive query: every occurrence of `query` inside
/// the boundary, the way the engine labels them once the user typed it.
pub fn query_candidates(ed: &MockEditor, query: &str, boundary: Boundary) -> BTreeSet<usize> {
    let escaped = fancy_regex::escape(query);
    regex_offsets(ed, &escaped)
        .into_iter()
        .filter(|&o| boundary.contains(ed, o))
        .collect()
}

fn regex_offsets(ed: &MockEditor, pattern: &str) -> Vec<usize> {
    let re = Regex::new(pattern).expect("pattern must compile");
    match_starts(&re, &ed.text())
}

fn predefined_offsets(ed: &MockEditor, pattern: Pattern) -> Vec<usize> {
    match pattern {
        Pattern::AllWords => regex_offsets(ed, patterns::ALL_WORDS),
        Pattern::LineStarts => regex_offsets(ed, patterns::LINE_STARTS),
        Pattern::LineEnds => regex_offsets(ed, patterns::LINE_ENDS),
        Pattern::LineIndents => line_indents(ed),
        Pattern::LineAllMarks => {
            let mut all = regex_offsets(ed, patterns::LINE_STARTS);
            all.extend(regex_offsets(ed, patterns::LINE_ENDS));
            all.extend(line_indents(ed));
            all
        }
    }
}

/// First non-blank character of each line; blank lines yield their start.
fn line_indents(ed: &MockEditor) -> Vec<usize> {
    (0..ed.line_count())
        .map(|line| {
            let start = ed.line_start_offset(line);
            let end = ed.line_end_offset(line);
            let text = ed.slice(start..end);
            match text.chars().position(|c| !c.is_whitespace()) {
                Some(i) => start + i,
                None => start,
            }
        })
        .collect()
}
