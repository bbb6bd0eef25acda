use std::ops::Range;

use crate::types::{LastSearch, VisualPosition};

/// The abstract host editor this core runs against.
///
/// All offsets are character offsets into the buffer, in
/// `[0, buffer_len()]`. The offset equal to `buffer_len()` is the
/// end-of-buffer position and is a valid jump target for end-of-line
/// patterns.
///
/// Implementations must answer from live editor state on every call: the
/// caret and viewport move between motions, and boundaries re-derive their
/// extent per invocation.
pub trait EditorOps {
    /// Total buffer length in characters.
    fn buffer_len(&self) -> usize;

    /// Extract the text of a character range. `range` is clamped by the
    /// implementation; out-of-bounds requests return the available prefix.
    fn slice(&self, range: Range<usize>) -> String;

    /// The whole buffer text.
    fn text(&self) -> String {
        self.slice(0..self.buffer_len())
    }

    /// Current caret offset.
    fn caret_offset(&self) -> usize;

    /// Number of logical lines.
    fn line_count(&self) -> usize;

    /// Logical line containing the given offset.
    fn line_of_offset(&self, offset: usize) -> usize;

    /// Offset of the first character of a logical line.
    fn line_start_offset(&self, line: usize) -> usize;

    /// Offset of the line terminator (or `buffer_len()` for the last line).
    fn line_end_offset(&self, line: usize) -> usize;

    /// Number of visual lines (differs from `line_count` under folding or
    /// soft wrap).
    fn visual_line_count(&self) -> usize;

    /// Visual position of an offset.
    fn offset_to_visual(&self, offset: usize) -> VisualPosition;

    /// Offset of a visual position. Columns past the end of the line clamp
    /// to the line's end offset.
    fn visual_to_offset(&self, pos: VisualPosition) -> usize;

    /// Whether a visual line holds no non-whitespace text.
    fn is_visual_line_empty(&self, line: usize) -> bool;

    /// Offset extent of the live viewport, half-open.
    fn viewport_range(&self) -> Range<usize>;

    /// Whether the current editing mode lets the caret rest on the position
    /// past the last character of a line (insert/select style modes do,
    /// normal mode does not).
    fn caret_may_rest_at_line_end(&self) -> bool;

    /// Whether an edit operator is pending and awaits this motion.
    fn is_operator_pending(&self) -> bool;

    /// Anchor of the active visual selection, if one was entered before the
    /// motion started.
    fn selection_anchor(&self) -> Option<usize>;

    /// The most recent search the host ran, if any.
    fn last_search(&self) -> Option<LastSearch>;
}
