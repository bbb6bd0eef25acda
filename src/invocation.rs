use crate::catalog::MotionDescriptor;
use crate::traits::EditorOps;
use crate::types::{EditorCommand, MotionType, Outcome, PostStop, VisualKind};

/// One in-flight motion, from the moment the search is handed to the engine
/// until the jump completes or is cancelled.
///
/// The lifecycle is begin → awaiting jump → finalize, with exactly one
/// finalization: [`Invocation::finalize`] consumes the value, so a second
/// completion for the same invocation is unrepresentable. Only one
/// invocation is expected to be in flight per editor; the host blocks new
/// motions while a jump is pending.
#[derive(Debug)]
pub struct Invocation {
    motion_type: MotionType,
    post_stop: PostStop,
    initial_offset: usize,
    selection_anchor: Option<usize>,
    op_pending: bool,
}

impl Invocation {
    /// Capture the editor state a motion starts from.
    ///
    /// Returns the commands to run before the search begins: the jump-list
    /// entry is pushed speculatively and dropped again in
    /// [`Invocation::finalize`] if the caret ends up not moving.
    pub fn begin<E: EditorOps>(
        descriptor: &MotionDescriptor,
        ed: &E,
    ) -> (Invocation, Vec<EditorCommand>) {
        let invocation = Invocation {
            motion_type: descriptor.motion_type,
            post_stop: descriptor.post_stop,
            initial_offset: ed.caret_offset(),
            selection_anchor: ed.selection_anchor(),
            op_pending: ed.is_operator_pending(),
        };
        (invocation, vec![EditorCommand::RecordJump])
    }

    /// Offset the motion started from.
    pub fn initial_offset(&self) -> usize {
        self.initial_offset
    }

    /// Turn the jump outcome into host commands.
    ///
    /// Applied in order: post-stop caret adjustment, restoration of a
    /// pre-existing visual selection, the operator-pending selection derived
    /// from the motion type, and jump-list cleanup when the caret did not
    /// move. Cancellation skips caret mutation and goes straight to the
    /// jump-list cleanup.
    pub fn finalize<E: EditorOps>(self, ed: &E, outcome: Outcome) -> Vec<EditorCommand> {
        let Outcome::Jumped { offset, tag } = outcome else {
            return vec![EditorCommand::DropLastJump];
        };

        let mut commands = Vec::new();
        let adjusted = self.adjust(offset, tag.chars().count(), ed.buffer_len());
        if adjusted != offset {
            commands.push(EditorCommand::MoveCaret(adjusted));
        }

        if let Some(anchor) = self.selection_anchor {
            commands.push(EditorCommand::ExtendSelection {
                anchor,
                head: adjusted,
            });
        }

        if self.op_pending {
            let kind = match self.motion_type {
                MotionType::Linewise => Some(VisualKind::LineWise),
                MotionType::Inclusive => Some(VisualKind::CharWise),
                // Preserved asymmetry of the original motion semantics: a
                // bidirectional-inclusive jump that went backward enters no
                // selection and the operator falls back to the host's
                // exclusive default.
                MotionType::BidirectionalInclusive => {
                    (self.initial_offset < adjusted).then_some(VisualKind::CharWise)
                }
                MotionType::Exclusive => None,
            };
            if let Some(kind) = kind {
                commands.push(EditorCommand::EnterVisual {
                    kind,
                    anchor: self.initial_offset,
                    head: adjusted,
                });
            }
        }

        if adjusted == self.initial_offset {
            commands.push(EditorCommand::DropLastJump);
        }
        commands
    }

    fn adjust(&self, offset: usize, tag_len: usize, buffer_len: usize) -> usize {
        let step_back = |o: usize| o.saturating_sub(1);
        let step_past = |o: usize| (o + tag_len).min(buffer_len);
        match self.post_stop {
            PostStop::None => offset,
            PostStop::StepBack => step_back(offset),
            PostStop::StepForwardPastMatch => step_past(offset),
            PostStop::DirectionalSnap => {
                if offset > self.initial_offset {
                    step_back(offset)
                } else if offset < self.initial_offset {
                    step_past(offset)
                } else {
                    offset
                }
            }
        }
    }
}
