use std::ops::Range;

use crate::traits::EditorOps;

/// A named region restriction applied to a search.
///
/// Boundaries are pure: both methods re-derive their extent from the editor
/// state passed at call time, never from construction time, so the same
/// value is safe to share across invocations while the caret and viewport
/// move.
///
/// `contains` is defined as membership in [`Boundary::range`], which makes
/// the two consistent by construction: no offset tests inside a boundary
/// while falling outside its range hint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Boundary {
    /// Everything strictly after the caret, through end of buffer.
    AfterCaret,
    /// Everything strictly before the caret.
    BeforeCaret,
    /// Caret line, from the caret (inclusive) to the line terminator.
    CurrentLineAfterCaret,
    /// Caret line, from line start to the caret (inclusive).
    CurrentLineBeforeCaret,
    /// The caret's whole line, terminator position included.
    CurrentLineFull,
    /// The live viewport extent.
    VisibleOnScreen,
    /// The whole buffer, end-of-buffer position included.
    WholeFile,
}

impl Boundary {
    /// Half-open offset extent of this boundary for the current editor
    /// state. May be empty (e.g. the before-caret side of a caret at line
    /// start); empty extents mean "no candidates", not an error.
    pub fn range(&self, ed: &dyn EditorOps) -> Range<usize> {
        let caret = ed.caret_offset();
        match self {
            Boundary::AfterCaret => caret + 1..ed.buffer_len() + 1,
            Boundary::BeforeCaret => 0..caret,
            Boundary::CurrentLineAfterCaret => {
                let line = ed.line_of_offset(caret);
                caret..ed.line_end_offset(line) + 1
            }
            Boundary::CurrentLineBeforeCaret => {
                let line = ed.line_of_offset(caret);
                ed.line_start_offset(line)..caret + 1
            }
            Boundary::CurrentLineFull => {
                let line = ed.line_of_offset(caret);
                ed.line_start_offset(line)..ed.line_end_offset(line) + 1
            }
            Boundary::VisibleOnScreen => ed.viewport_range(),
            Boundary::WholeFile => 0..ed.buffer_len() + 1,
        }
    }

    /// Whether `offset` lies inside this boundary. Total for any offset in
    /// `[0, buffer_len]`.
    pub fn contains(&self, ed: &dyn EditorOps, offset: usize) -> bool {
        self.range(ed).contains(&offset)
    }
}
