/// A position within the editor's visual grid.
///
/// Visual positions are zero-indexed and column values are counted in the
/// host's visual cells (grapheme clusters for most hosts). They differ from
/// buffer offsets whenever the host folds or soft-wraps lines, which is why
/// vertical motions work in visual coordinates and convert at the edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct VisualPosition {
    /// Zero-based visual line number.
    pub line: usize,
    /// Zero-based visual column.
    pub col: usize,
}

impl VisualPosition {
    pub const ZERO: VisualPosition = VisualPosition { line: 0, col: 0 };
}

/// How a motion composes with a pending operator.
///
/// The tag is attached to a motion descriptor at registration time and never
/// changes afterwards. It decides the selection mode entered in
/// operator-pending mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotionType {
    /// The landing character is included in the operated range.
    Inclusive,
    /// The landing character is excluded from the operated range.
    Exclusive,
    /// The operated range covers whole lines.
    Linewise,
    /// Searches both directions; inclusive only when the jump went forward.
    BidirectionalInclusive,
}

/// Caret adjustment applied after a completed jump (the "till" family).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostStop {
    /// Land exactly on the match.
    None,
    /// Forward "till": step back one character after landing, floor at 0.
    StepBack,
    /// Backward "till": step forward past the matched text, ceiling at
    /// buffer length.
    StepForwardPastMatch,
    /// Bidirectional "till": the direction is only known once the jump
    /// lands, so pick [`PostStop::StepBack`] or
    /// [`PostStop::StepForwardPastMatch`] by comparing the landing offset
    /// against the starting offset. A jump that didn't move skips
    /// adjustment.
    DirectionalSnap,
}

/// The type of visual selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisualKind {
    /// Character-wise selection (v).
    CharWise,
    /// Line-wise selection (V).
    LineWise,
}

/// Direction of a recorded search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

/// The host's most recent literal/regex search, consumed by the
/// repeat-search motions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LastSearch {
    /// The pattern, as the host would re-run it.
    pub pattern: String,
    /// The direction the original search ran in.
    pub direction: Direction,
}

/// Result of one interactive jump, reported by the external engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The user picked a target. `tag` is the typed query text that matched;
    /// its length sizes backward "till" adjustments.
    Jumped { offset: usize, tag: String },
    /// The user cancelled, or nothing matched. Handled identically.
    Cancelled,
}

/// Commands emitted for the host to execute.
///
/// The core never mutates editor state directly; it describes concrete
/// actions and the host applies them to its caret, selection and jump list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorCommand {
    /// Move the caret to the given offset.
    MoveCaret(usize),
    /// Extend the already-active visual selection from `anchor` to `head`.
    ExtendSelection { anchor: usize, head: usize },
    /// Enter visual mode with the given selection, to be consumed by the
    /// pending operator.
    EnterVisual {
        kind: VisualKind,
        anchor: usize,
        head: usize,
    },
    /// Push the current caret position onto the jump list.
    RecordJump,
    /// Pop the most recent jump-list entry.
    DropLastJump,
}
