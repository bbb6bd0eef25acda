use std::collections::BTreeSet;

use fancy_regex::Regex;
use log::{debug, warn};

use crate::boundary::Boundary;
use crate::catalog::{LineDirection, MotionDescriptor, MotionError, SearchSpec};
use crate::config::MotionConfig;
use crate::patterns::{
    LINE_END_NO_NEWLINE, Pattern, keyword_end_regex, keyword_start_regex, match_starts,
};
use crate::traits::EditorOps;
use crate::types::{Direction, VisualPosition};

/// What the external engine is asked to search for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchPattern {
    /// A pattern the engine resolves by name.
    Predefined(Pattern),
    /// A concrete regex built at call time.
    Regex(String),
}

/// The resolver's output for one motion invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecutionResult {
    /// Submit a pattern-restricted interactive search to the engine.
    Search {
        pattern: SearchPattern,
        boundary: Boundary,
    },
    /// Let the engine collect the query characters first; no pattern
    /// exists yet.
    Interactive { boundary: Boundary },
    /// A finite candidate set computed here, to be presented via
    /// `markResults`. May be empty; empty means "no matches", not failure.
    Offsets(BTreeSet<usize>),
    /// The motion resolves to nothing (no previous search, missing or
    /// malformed user pattern). Not an error.
    NoOp,
}

/// Resolve a motion descriptor against live editor state.
///
/// Configuration absence degrades to documented fallbacks or
/// [`ExecutionResult::NoOp`]; only catalog-integrity violations (a vertical
/// motion registered with a boundary the walk cannot serve) surface as
/// errors.
pub fn execute<E: EditorOps>(
    desc: &MotionDescriptor,
    ed: &E,
    config: &MotionConfig,
) -> Result<ExecutionResult, MotionError> {
    debug!("resolving motion `{}`", desc.id);
    let result = match desc.spec {
        SearchSpec::Predefined(pattern) => ExecutionResult::Search {
            pattern: SearchPattern::Predefined(pattern),
            boundary: desc.boundary,
        },
        SearchSpec::Custom(pattern) => ExecutionResult::Search {
            pattern: SearchPattern::Regex(pattern.to_string()),
            boundary: desc.boundary,
        },
        SearchSpec::MultiInput => ExecutionResult::Interactive {
            boundary: desc.boundary,
        },
        SearchSpec::KeywordStart => ExecutionResult::Search {
            pattern: SearchPattern::Regex(keyword_start_regex(config.keyword_chars())),
            boundary: desc.boundary,
        },
        SearchSpec::KeywordEnd => ExecutionResult::Search {
            pattern: SearchPattern::Regex(keyword_end_regex(config.keyword_chars())),
            boundary: desc.boundary,
        },
        SearchSpec::EndOfLine => {
            // The canonical end-of-line position coincides with the newline;
            // in modes where the caret may not rest there, target the last
            // real character instead.
            let pattern = if ed.caret_may_rest_at_line_end() {
                SearchPattern::Predefined(Pattern::LineEnds)
            } else {
                SearchPattern::Regex(LINE_END_NO_NEWLINE.to_string())
            };
            ExecutionResult::Search {
                pattern,
                boundary: desc.boundary,
            }
        }
        SearchSpec::LineMarks => {
            let pattern = if ed.caret_may_rest_at_line_end() {
                SearchPattern::Predefined(Pattern::LineAllMarks)
            } else {
                SearchPattern::Regex(format!(
                    "{LINE_END_NO_NEWLINE}|{}",
                    Pattern::LineStarts.regex()
                ))
            };
            ExecutionResult::Search {
                pattern,
                boundary: desc.boundary,
            }
        }
        SearchSpec::Vertical => vertical(desc, ed, config)?,
        SearchSpec::JumpAnywhere => jump_anywhere(ed, config),
        SearchSpec::LineAnywhere(direction) => line_anywhere(direction, ed, config),
        SearchSpec::RepeatSearch {
            forward,
            respect_direction,
            bidirectional,
        } => repeat_search(forward, respect_direction, bidirectional, ed),
    };
    Ok(result)
}

fn vertical<E: EditorOps>(
    desc: &MotionDescriptor,
    ed: &E,
    config: &MotionConfig,
) -> Result<ExecutionResult, MotionError> {
    if config.start_of_line {
        return Ok(ExecutionResult::Search {
            pattern: SearchPattern::Predefined(Pattern::LineIndents),
            boundary: desc.boundary,
        });
    }
    let down = match desc.boundary {
        Boundary::AfterCaret => true,
        Boundary::BeforeCaret => false,
        boundary => {
            return Err(MotionError::UnsupportedBoundary {
                id: desc.id.to_string(),
                boundary,
            });
        }
    };
    Ok(ExecutionResult::Offsets(walk_lines(ed, down, desc.boundary)))
}

/// Column-preserving vertical walk.
///
/// Emits one offset per visual line, adjacent lines first, projecting the
/// caret's visual column onto each. Projections past a line's end clamp to
/// the line end, minus one when the line is non-empty and the caret may not
/// rest there. The walk stops at the first offset outside the boundary, so
/// candidates form a contiguous prefix rather than a whole-file scan.
fn walk_lines<E: EditorOps>(ed: &E, down: bool, boundary: Boundary) -> BTreeSet<usize> {
    let vp = ed.offset_to_visual(ed.caret_offset());
    let line_count = ed.visual_line_count();
    let dir: isize = if down { 1 } else { -1 };
    let mut res = BTreeSet::new();

    let mut counter: isize = 1;
    loop {
        let next = vp.line as isize + dir * counter;
        if next < 0 || next as usize >= line_count {
            break;
        }
        let mut offset = ed.visual_to_offset(VisualPosition {
            line: next as usize,
            col: vp.col,
        });
        let landed = ed.offset_to_visual(offset);
        if landed.col < vp.col
            && !ed.is_visual_line_empty(landed.line)
            && !ed.caret_may_rest_at_line_end()
        {
            offset = offset.saturating_sub(1);
        }
        if !boundary.contains(ed, offset) {
            break;
        }
        res.insert(offset);
        counter += 1;
    }

    let len = ed.buffer_len();
    res.retain(|&o| o < len);
    res
}

fn jump_anywhere<E: EditorOps>(ed: &E, config: &MotionConfig) -> ExecutionResult {
    let Some(re) = compile_user_pattern(&config.jump_anywhere_re) else {
        return ExecutionResult::NoOp;
    };
    let len = ed.buffer_len();
    let offsets = match_starts(&re, &ed.text())
        .into_iter()
        .filter(|&o| o < len)
        .collect();
    ExecutionResult::Offsets(offsets)
}

fn line_anywhere<E: EditorOps>(
    direction: LineDirection,
    ed: &E,
    config: &MotionConfig,
) -> ExecutionResult {
    let Some(re) = compile_user_pattern(&config.line_jump_anywhere_re) else {
        return ExecutionResult::NoOp;
    };
    let caret = ed.caret_offset();
    let line = ed.line_of_offset(caret);
    let start = ed.line_start_offset(line);
    let text = ed.slice(start..ed.line_end_offset(line));
    let len = ed.buffer_len();
    let offsets = match_starts(&re, &text)
        .into_iter()
        .map(|o| o + start)
        .filter(|&o| match direction {
            LineDirection::Forward => o > caret,
            LineDirection::Backward => o < caret,
            LineDirection::Anywhere => true,
        })
        .filter(|&o| o < len)
        .collect();
    ExecutionResult::Offsets(offsets)
}

fn repeat_search<E: EditorOps>(
    forward: bool,
    respect_direction: bool,
    bidirectional: bool,
    ed: &E,
) -> ExecutionResult {
    let Some(last) = ed.last_search() else {
        debug!("repeat-search motion with no previous search");
        return ExecutionResult::NoOp;
    };
    let Some(re) = compile_user_pattern(&last.pattern) else {
        return ExecutionResult::NoOp;
    };

    let caret = ed.caret_offset();
    let caret_line = ed.line_of_offset(caret);

    // Line range to scan; `None` as the upper line means through the end of
    // the buffer. When the recorded search ran backward, "forward" repeats
    // it away from the caret in its own direction.
    let (first_line, last_line) = if bidirectional {
        (0, None)
    } else {
        let effective_forward = if respect_direction && last.direction == Direction::Backward {
            !forward
        } else {
            forward
        };
        if effective_forward {
            (caret_line, None)
        } else {
            (0, Some(caret_line))
        }
    };

    let start = ed.line_start_offset(first_line);
    let end = match last_line {
        None => ed.buffer_len(),
        Some(line) => ed.line_end_offset(line),
    };
    let text = ed.slice(start..end);
    let offsets = match_starts(&re, &text)
        .into_iter()
        .map(|o| o + start)
        .filter(|&o| {
            if bidirectional {
                true
            } else if last_line.is_none() {
                o > caret
            } else {
                o < caret
            }
        })
        .collect();
    ExecutionResult::Offsets(offsets)
}

fn compile_user_pattern(pattern: &str) -> Option<Regex> {
    match Regex::new(pattern) {
        Ok(re) => Some(re),
        Err(err) => {
            warn!("ignoring unusable search pattern `{pattern}`: {err}");
            None
        }
    }
}
