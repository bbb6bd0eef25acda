use std::ops::Range;

use easyjump::traits::EditorOps;
use easyjump::types::{Direction, LastSearch, VisualPosition};
use ropey::Rope;
use unicode_segmentation::UnicodeSegmentation;

/// Rope-backed test host. Visual positions equal logical positions (no
/// folding or soft wrap) with grapheme-cluster columns; the viewport spans
/// the whole buffer unless narrowed.
#[derive(Debug)]
pub struct MockEditor {
    rope: Rope,
    caret: usize,
    viewport: Option<Range<usize>>,
    end_allowed: bool,
    op_pending: bool,
    selection_anchor: Option<usize>,
    last_search: Option<LastSearch>,
}

impl MockEditor {
    pub fn new(text: &str) -> Self {
        Self {
            rope: Rope::from_str(text),
            caret: 0,
            viewport: None,
            end_allowed: false,
            op_pending: false,
            selection_anchor: None,
            last_search: None,
        }
    }

    pub fn caret(mut self, offset: usize) -> Self {
        self.caret = offset;
        self
    }

    /// Place the caret on the first character of `word`. Panics when the
    /// word is absent: that is a broken test, not a runtime condition.
    pub fn caret_at(mut self, word: &str) -> Self {
        let text = self.rope.to_string();
        let byte = text.find(word).expect("word not found in test buffer");
        self.caret = text[..byte].chars().count();
        self
    }

    pub fn viewport(mut self, range: Range<usize>) -> Self {
        self.viewport = Some(range);
        self
    }

    pub fn end_allowed(mut self, allowed: bool) -> Self {
        self.end_allowed = allowed;
        self
    }

    pub fn op_pending(mut self) -> Self {
        self.op_pending = true;
        self
    }

    pub fn selection(mut self, anchor: usize) -> Self {
        self.selection_anchor = Some(anchor);
        self
    }

    pub fn last_search(mut self, pattern: &str, direction: Direction) -> Self {
        self.last_search = Some(LastSearch {
            pattern: pattern.to_string(),
            direction,
        });
        self
    }

    fn line_str(&self, line: usize) -> String {
        if line >= self.rope.len_lines() {
            return String::new();
        }
        let mut s = self.rope.line(line).to_string();
        if s.ends_with('\n') {
            s.pop();
        }
        s
    }
}

impl EditorOps for MockEditor {
    fn buffer_len(&self) -> usize {
        self.rope.len_chars()
    }

    fn slice(&self, range: Range<usize>) -> String {
        let len = self.rope.len_chars();
        let start = range.start.min(len);
        let end = range.end.clamp(start, len);
        self.rope.slice(start..end).to_string()
    }

    fn caret_offset(&self) -> usize {
        self.caret
    }

    fn line_count(&self) -> usize {
        self.rope.len_lines()
    }

    fn line_of_offset(&self, offset: usize) -> usize {
        self.rope.char_to_line(offset.min(self.rope.len_chars()))
    }

    fn line_start_offset(&self, line: usize) -> usize {
        self.rope.line_to_char(line.min(self.rope.len_lines()))
    }

    fn line_end_offset(&self, line: usize) -> usize {
        if line + 1 < self.rope.len_lines() {
            self.rope.line_to_char(line + 1) - 1
        } else {
            self.rope.len_chars()
        }
    }

    fn visual_line_count(&self) -> usize {
        self.rope.len_lines()
    }

    fn offset_to_visual(&self, offset: usize) -> VisualPosition {
        let line = self.line_of_offset(offset);
        let start = self.line_start_offset(line);
        let col = self.slice(start..offset).graphemes(true).count();
        VisualPosition { line, col }
    }

    fn visual_to_offset(&self, pos: VisualPosition) -> usize {
        let line = pos.line.min(self.rope.len_lines().saturating_sub(1));
        let start = self.line_start_offset(line);
        let text = self.line_str(line);
        let mut chars = 0;
        for (taken, g) in text.graphemes(true).enumerate() {
            if taken == pos.col {
                return start + chars;
            }
            chars += g.chars().count();
        }
        self.line_end_offset(line)
    }

    fn is_visual_line_empty(&self, line: usize) -> bool {
        self.line_str(line).trim().is_empty()
    }

    fn viewport_range(&self) -> Range<usize> {
        self.viewport
            .clone()
            .unwrap_or(0..self.rope.len_chars() + 1)
    }

    fn caret_may_rest_at_line_end(&self) -> bool {
        self.end_allowed
    }

    fn is_operator_pending(&self) -> bool {
        self.op_pending
    }

    fn selection_anchor(&self) -> Option<usize> {
        self.selection_anchor
    }

    fn last_search(&self) -> Option<LastSearch> {
        self.last_search.clone()
    }
}
