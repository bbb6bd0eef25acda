use proptest::prelude::*;

use easyjump::traits::EditorOps;
use easyjump::{
    Boundary, Catalog, EditorCommand, ExecutionResult, Invocation, MotionConfig, Outcome, execute,
};

mod support;
use support::mock_editor::MockEditor;

const BOUNDARIES: [Boundary; 7] = [
    Boundary::AfterCaret,
    Boundary::BeforeCaret,
    Boundary::CurrentLineAfterCaret,
    Boundary::CurrentLineBeforeCaret,
    Boundary::CurrentLineFull,
    Boundary::VisibleOnScreen,
    Boundary::WholeFile,
];

fn text_strategy() -> impl Strategy<Value = String> {
    // ASCII plus some multibyte content so char and byte offsets diverge.
    proptest::string::string_regex("[a-zA-Z0-9_ .#éλ\\n-]{0,120}").unwrap()
}

fn editor_strategy() -> impl Strategy<Value = MockEditor> {
    (text_strategy(), any::<prop::sample::Index>(), any::<bool>()).prop_map(
        |(text, caret, end_allowed)| {
            let len = text.chars().count();
            let caret = caret.index(len + 1);
            MockEditor::new(&text).caret(caret).end_allowed(end_allowed)
        },
    )
}

proptest! {
    #[test]
    fn contains_is_exactly_range_membership(ed in editor_strategy()) {
        for boundary in BOUNDARIES {
            let range = boundary.range(&ed);
            for offset in 0..=ed.buffer_len() {
                prop_assert_eq!(boundary.contains(&ed, offset), range.contains(&offset));
            }
        }
    }

    #[test]
    fn boundary_ranges_never_exceed_the_buffer(ed in editor_strategy()) {
        for boundary in BOUNDARIES {
            let range = boundary.range(&ed);
            prop_assert!(range.start <= range.end);
            prop_assert!(range.end <= ed.buffer_len() + 1);
        }
    }

    #[test]
    fn every_motion_resolves_on_arbitrary_buffers(
        ed in editor_strategy(),
        start_of_line in any::<bool>(),
    ) {
        let catalog = Catalog::new();
        let config = MotionConfig {
            start_of_line,
            ..MotionConfig::default()
        };
        for motion in catalog.iter() {
            let result = execute(motion, &ed, &config);
            prop_assert!(result.is_ok(), "`{}` failed: {:?}", motion.id, result);
        }
    }

    #[test]
    fn synthesized_offsets_stay_inside_the_buffer(
        ed in editor_strategy(),
        start_of_line in any::<bool>(),
    ) {
        let catalog = Catalog::new();
        let config = MotionConfig {
            start_of_line,
            ..MotionConfig::default()
        };
        let len = ed.buffer_len();
        for motion in catalog.iter() {
            if let Ok(ExecutionResult::Offsets(offsets)) = execute(motion, &ed, &config) {
                for &offset in &offsets {
                    prop_assert!(
                        offset < len,
                        "`{}` produced out-of-buffer offset {offset} (len {len})",
                        motion.id
                    );
                }
            }
        }
    }

    #[test]
    fn vertical_offsets_respect_their_boundary(ed in editor_strategy()) {
        let catalog = Catalog::new();
        let config = MotionConfig {
            start_of_line: false,
            ..MotionConfig::default()
        };
        for (id, boundary) in [("j", Boundary::AfterCaret), ("k", Boundary::BeforeCaret)] {
            let result = execute(catalog.resolve(id).unwrap(), &ed, &config).unwrap();
            let ExecutionResult::Offsets(offsets) = result else {
                return Err(TestCaseError::fail(format!("`{id}` should synthesize offsets")));
            };
            for &offset in &offsets {
                prop_assert!(boundary.contains(&ed, offset));
            }
        }
    }

    #[test]
    fn finalize_never_moves_the_caret_out_of_the_buffer(
        ed in editor_strategy(),
        target in any::<prop::sample::Index>(),
        tag in "[a-z]{1,3}",
        cancelled in any::<bool>(),
    ) {
        let catalog = Catalog::new();
        let len = ed.buffer_len();
        let offset = target.index(len + 1);
        for motion in catalog.iter() {
            let (invocation, setup) = Invocation::begin(motion, &ed);
            prop_assert_eq!(&setup, &vec![EditorCommand::RecordJump]);
            let outcome = if cancelled {
                Outcome::Cancelled
            } else {
                Outcome::Jumped { offset, tag: tag.clone() }
            };
            for command in invocation.finalize(&ed, outcome) {
                match command {
                    EditorCommand::MoveCaret(o) => prop_assert!(o <= len),
                    EditorCommand::ExtendSelection { head, .. } => prop_assert!(head <= len),
                    EditorCommand::EnterVisual { head, .. } => prop_assert!(head <= len),
                    EditorCommand::RecordJump | EditorCommand::DropLastJump => {}
                }
            }
        }
    }
}
