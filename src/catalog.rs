use std::collections::HashMap;

use thiserror::Error;

use crate::boundary::Boundary;
use crate::patterns::{BIG_WORD_END, BIG_WORD_START, KEYWORD_END, Pattern};
use crate::types::{MotionType, PostStop};

/// Which side of the caret a line-restricted "anywhere" motion keeps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineDirection {
    /// Matches strictly after the caret.
    Forward,
    /// Matches strictly before the caret.
    Backward,
    /// The whole line.
    Anywhere,
}

/// What a motion searches for.
///
/// One variant per behavior family; the catalog is a flat table of these
/// plus a small interpreter in the executor, so every entry can be
/// exercised by iterating the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchSpec {
    /// A pattern the external engine resolves by name.
    Predefined(Pattern),
    /// A fixed regex submitted as-is.
    Custom(&'static str),
    /// The engine collects the query characters interactively before any
    /// concrete pattern exists (`f`/`t`/`s` families).
    MultiInput,
    /// Vertical line walk (`j`/`k`), column-preserving unless configured
    /// to target line starts.
    Vertical,
    /// End-of-line targets, split on whether the caret may rest past the
    /// last character.
    EndOfLine,
    /// Keyword-entry positions synthesized from the host's keyword class.
    KeywordStart,
    /// Keyword-exit positions synthesized from the host's keyword class.
    KeywordEnd,
    /// The user-configured whole-buffer "anywhere" pattern.
    JumpAnywhere,
    /// The user-configured "anywhere" pattern restricted to the caret line.
    LineAnywhere(LineDirection),
    /// Re-run the host's last search over a direction-dependent line range.
    RepeatSearch {
        forward: bool,
        respect_direction: bool,
        bidirectional: bool,
    },
    /// One target per visible line (start, indent or end).
    LineMarks,
}

/// A registered motion: what to search, where, and how the result composes
/// with operators. Built once at catalog construction and never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MotionDescriptor {
    /// Stable key used in key-mapping tables.
    pub id: &'static str,
    pub spec: SearchSpec,
    pub boundary: Boundary,
    pub motion_type: MotionType,
    pub post_stop: PostStop,
}

/// Catalog-integrity violations. These signal a mis-registration or a bad
/// caller, not a runtime data condition; nothing here is user-facing.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MotionError {
    #[error("unknown motion id `{0}`")]
    UnknownMotion(String),
    #[error("motion `{id}` does not support boundary {boundary:?}")]
    UnsupportedBoundary { id: String, boundary: Boundary },
}

/// The immutable, string-keyed table of every motion this crate knows.
#[derive(Debug)]
pub struct Catalog {
    motions: HashMap<&'static str, MotionDescriptor>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

impl Catalog {
    pub fn new() -> Self {
        let motions = Self::table()
            .into_iter()
            .map(|d| (d.id, d))
            .collect();
        Catalog { motions }
    }

    /// Look up a motion by id. An unknown id is a programming error on the
    /// caller's side: the catalog is statically populated.
    pub fn resolve(&self, id: &str) -> Result<&MotionDescriptor, MotionError> {
        self.motions
            .get(id)
            .ok_or_else(|| MotionError::UnknownMotion(id.to_string()))
    }

    pub fn iter(&self) -> impl Iterator<Item = &MotionDescriptor> {
        self.motions.values()
    }

    pub fn len(&self) -> usize {
        self.motions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.motions.is_empty()
    }

    /// Ids that receive prefixed default key bindings (`<leader><leader>f`
    /// and friends) when mapping emission is enabled.
    pub fn default_mapped_ids() -> &'static [&'static str] {
        &[
            "f", "F", "t", "T", "w", "W", "b", "B", "e", "E", "ge", "gE", "j", "k", "s", "n", "N",
        ]
    }

    fn table() -> Vec<MotionDescriptor> {
        use Boundary::*;
        use MotionType::*;
        use SearchSpec::*;

        let m = |id, spec, boundary, motion_type| MotionDescriptor {
            id,
            spec,
            boundary,
            motion_type,
            post_stop: PostStop::None,
        };
        let till = |id, motion_type, boundary, post_stop| MotionDescriptor {
            id,
            spec: MultiInput,
            boundary,
            motion_type,
            post_stop,
        };
        let repeat = |id, forward, respect_direction, bidirectional| MotionDescriptor {
            id,
            spec: RepeatSearch {
                forward,
                respect_direction,
                bidirectional,
            },
            boundary: WholeFile,
            motion_type: Exclusive,
            post_stop: PostStop::None,
        };

        vec![
            // Default table, bound under the plugin prefix.
            m("f", MultiInput, AfterCaret, Inclusive),
            m("F", MultiInput, BeforeCaret, Exclusive),
            till("t", Inclusive, AfterCaret, PostStop::StepBack),
            till("T", Exclusive, BeforeCaret, PostStop::StepForwardPastMatch),
            m("w", Predefined(Pattern::AllWords), AfterCaret, Exclusive),
            m("W", Custom(BIG_WORD_START), AfterCaret, Exclusive),
            m("b", Predefined(Pattern::AllWords), BeforeCaret, Exclusive),
            m("B", Custom(BIG_WORD_START), BeforeCaret, Exclusive),
            m("e", Custom(KEYWORD_END), AfterCaret, Inclusive),
            m("E", Custom(BIG_WORD_END), AfterCaret, Exclusive),
            m("ge", Custom(KEYWORD_END), BeforeCaret, Inclusive),
            m("gE", Custom(BIG_WORD_END), BeforeCaret, Exclusive),
            m("j", Vertical, AfterCaret, Linewise),
            m("k", Vertical, BeforeCaret, Linewise),
            m("s", MultiInput, VisibleOnScreen, BidirectionalInclusive),
            repeat("n", true, false, false),
            repeat("N", false, false, false),
            // Extended table.
            m("bd-f", MultiInput, VisibleOnScreen, BidirectionalInclusive),
            till(
                "bd-t",
                BidirectionalInclusive,
                VisibleOnScreen,
                PostStop::DirectionalSnap,
            ),
            m("bd-w", Predefined(Pattern::AllWords), VisibleOnScreen, Exclusive),
            m("bd-W", Custom(BIG_WORD_START), VisibleOnScreen, Exclusive),
            m("bd-e", Custom(KEYWORD_END), VisibleOnScreen, BidirectionalInclusive),
            m("bd-E", Custom(BIG_WORD_END), VisibleOnScreen, Exclusive),
            m("bd-jk", Predefined(Pattern::LineIndents), WholeFile, Linewise),
            repeat("bd-n", false, false, true),
            m("jumptoanywhere", JumpAnywhere, WholeFile, Exclusive),
            m("sol-j", Predefined(Pattern::LineStarts), AfterCaret, Linewise),
            m("sol-k", Predefined(Pattern::LineStarts), BeforeCaret, Linewise),
            m("eol-j", EndOfLine, AfterCaret, Linewise),
            m("eol-k", EndOfLine, BeforeCaret, Linewise),
            m("iskeyword-w", KeywordStart, AfterCaret, Exclusive),
            m("iskeyword-b", KeywordStart, BeforeCaret, Exclusive),
            m("iskeyword-bd-w", KeywordStart, VisibleOnScreen, Exclusive),
            m("iskeyword-e", KeywordEnd, AfterCaret, Inclusive),
            m("iskeyword-ge", KeywordEnd, BeforeCaret, Inclusive),
            m("iskeyword-bd-e", KeywordEnd, VisibleOnScreen, BidirectionalInclusive),
            repeat("vim-n", true, true, false),
            repeat("vim-N", false, true, false),
            // Within-line table.
            m("sl", MultiInput, CurrentLineFull, BidirectionalInclusive),
            m("fl", MultiInput, CurrentLineAfterCaret, Inclusive),
            m("Fl", MultiInput, CurrentLineBeforeCaret, Exclusive),
            m("bd-fl", MultiInput, CurrentLineFull, BidirectionalInclusive),
            till("tl", Inclusive, CurrentLineAfterCaret, PostStop::StepBack),
            till(
                "Tl",
                Exclusive,
                CurrentLineBeforeCaret,
                PostStop::StepForwardPastMatch,
            ),
            till(
                "bd-tl",
                BidirectionalInclusive,
                CurrentLineFull,
                PostStop::DirectionalSnap,
            ),
            m("wl", Predefined(Pattern::AllWords), CurrentLineAfterCaret, Exclusive),
            m("bl", Predefined(Pattern::AllWords), CurrentLineBeforeCaret, Exclusive),
            m("bd-wl", Predefined(Pattern::AllWords), CurrentLineFull, Exclusive),
            m("el", Custom(KEYWORD_END), CurrentLineAfterCaret, Inclusive),
            m("gel", Custom(KEYWORD_END), CurrentLineBeforeCaret, Inclusive),
            m("bd-el", Custom(KEYWORD_END), CurrentLineFull, BidirectionalInclusive),
            m(
                "lineforward",
                LineAnywhere(LineDirection::Forward),
                CurrentLineAfterCaret,
                Exclusive,
            ),
            m(
                "linebackward",
                LineAnywhere(LineDirection::Backward),
                CurrentLineBeforeCaret,
                Exclusive,
            ),
            m(
                "lineanywhere",
                LineAnywhere(LineDirection::Anywhere),
                CurrentLineFull,
                Exclusive,
            ),
            // Two-character input variants. The engine decides how many
            // query characters each id collects; resolution is identical.
            m("s2", MultiInput, VisibleOnScreen, BidirectionalInclusive),
            m("f2", MultiInput, AfterCaret, Inclusive),
            m("F2", MultiInput, BeforeCaret, Exclusive),
            m("bd-f2", MultiInput, VisibleOnScreen, BidirectionalInclusive),
            till("t2", Inclusive, AfterCaret, PostStop::StepBack),
            till("T2", Exclusive, BeforeCaret, PostStop::StepForwardPastMatch),
            till(
                "bd-t2",
                BidirectionalInclusive,
                VisibleOnScreen,
                PostStop::DirectionalSnap,
            ),
            m("sl2", MultiInput, CurrentLineFull, BidirectionalInclusive),
            m("fl2", MultiInput, CurrentLineAfterCaret, Inclusive),
            m("Fl2", MultiInput, CurrentLineBeforeCaret, Exclusive),
            till("tl2", Inclusive, CurrentLineAfterCaret, PostStop::StepBack),
            till(
                "Tl2",
                Exclusive,
                CurrentLineBeforeCaret,
                PostStop::StepForwardPastMatch,
            ),
            // Arbitrary-length input variants.
            m("sn", MultiInput, VisibleOnScreen, BidirectionalInclusive),
            m("fn", MultiInput, AfterCaret, Inclusive),
            m("Fn", MultiInput, BeforeCaret, Exclusive),
            m("bd-fn", MultiInput, VisibleOnScreen, BidirectionalInclusive),
            till("tn", Inclusive, AfterCaret, PostStop::StepBack),
            till("Tn", Exclusive, BeforeCaret, PostStop::StepForwardPastMatch),
            till(
                "bd-tn",
                BidirectionalInclusive,
                VisibleOnScreen,
                PostStop::DirectionalSnap,
            ),
            m("sln", MultiInput, CurrentLineFull, BidirectionalInclusive),
            m("fln", MultiInput, CurrentLineAfterCaret, Inclusive),
            m("Fln", MultiInput, CurrentLineBeforeCaret, Exclusive),
            m("bd-fln", MultiInput, CurrentLineFull, BidirectionalInclusive),
            till("tln", Inclusive, CurrentLineAfterCaret, PostStop::StepBack),
            till(
                "Tln",
                Exclusive,
                CurrentLineBeforeCaret,
                PostStop::StepForwardPastMatch,
            ),
            till(
                "bd-tln",
                BidirectionalInclusive,
                CurrentLineFull,
                PostStop::DirectionalSnap,
            ),
            // One mark per visible line.
            m("linemarks", LineMarks, VisibleOnScreen, Exclusive),
        ]
    }
}
