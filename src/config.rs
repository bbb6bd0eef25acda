use crate::patterns::DEFAULT_ANYWHERE;

/// Per-invocation configuration, supplied by the caller.
///
/// The fields mirror the user-facing variables of the original plugin
/// (`g:EasyMotion_re_anywhere`, `g:EasyMotion_re_line_anywhere`,
/// `g:EasyMotion_do_mapping`, `g:EasyMotion_startofline` and the
/// `iskeyword` option), resolved into a plain struct so the resolver never
/// reaches into ambient global state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MotionConfig {
    /// Pattern for the whole-buffer "jump anywhere" motion.
    pub jump_anywhere_re: String,
    /// Pattern for the line-restricted "jump anywhere" motions.
    pub line_jump_anywhere_re: String,
    /// Whether the default `<leader><leader>` bindings are emitted.
    pub do_mapping: bool,
    /// Vertical motions target line indents when set; otherwise they keep
    /// the caret's visual column.
    pub start_of_line: bool,
    /// The host's keyword character class, already expanded to a literal
    /// character list. `None` (or empty) selects the plain word-pattern
    /// fallback for `iskeyword` motions.
    pub keyword_chars: Option<Vec<char>>,
}

impl Default for MotionConfig {
    fn default() -> Self {
        MotionConfig {
            jump_anywhere_re: DEFAULT_ANYWHERE.to_string(),
            line_jump_anywhere_re: DEFAULT_ANYWHERE.to_string(),
            do_mapping: true,
            start_of_line: true,
            keyword_chars: None,
        }
    }
}

impl MotionConfig {
    /// Keyword characters as a slice, treating an empty list as absent.
    pub(crate) fn keyword_chars(&self) -> Option<&[char]> {
        match self.keyword_chars.as_deref() {
            Some([]) | None => None,
            Some(chars) => Some(chars),
        }
    }
}
