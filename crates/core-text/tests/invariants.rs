//! Cursor and line-count invariants over random edit/motion sequences.

use core_text::TextBuffer;
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    Insert(u8),
    DeleteForward,
    Split,
    Move(isize, isize),
    Set(usize, usize),
    LineStart,
    LineEnd,
    NextWordStart,
    PreviousWordStart,
    WordEnd,
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        prop_oneof![Just(b' '), Just(b'\t'), Just(b'a'), Just(b'z'), any::<u8>()]
            .prop_map(Op::Insert),
        Just(Op::DeleteForward),
        Just(Op::Split),
        (-3isize..=3, -5isize..=5).prop_map(|(r, c)| Op::Move(r, c)),
        (0usize..20, 0usize..40).prop_map(|(r, c)| Op::Set(r, c)),
        Just(Op::LineStart),
        Just(Op::LineEnd),
        Just(Op::NextWordStart),
        Just(Op::PreviousWordStart),
        Just(Op::WordEnd),
    ]
}

fn apply(buf: &mut TextBuffer, op: &Op) {
    match *op {
        Op::Insert(b) => buf.insert_char(b),
        Op::DeleteForward => buf.delete_char_forward(),
        Op::Split => buf.split_line_at_cursor(),
        Op::Move(r, c) => buf.move_cursor(r, c),
        Op::Set(r, c) => buf.set_cursor(r, c),
        Op::LineStart => buf.move_to_line_start(),
        Op::LineEnd => buf.move_to_line_end(),
        Op::NextWordStart => buf.move_to_next_word_start(),
        Op::PreviousWordStart => buf.move_to_previous_word_start(),
        Op::WordEnd => buf.move_to_word_end(),
    }
}

fn assert_invariants(buf: &TextBuffer) -> Result<(), TestCaseError> {
    let cursor = buf.cursor();
    prop_assert!(buf.line_count() >= 1);
    prop_assert!(cursor.row < buf.line_count());
    prop_assert!(cursor.col <= buf.line_len(cursor.row));
    Ok(())
}

proptest! {
    #[test]
    fn cursor_stays_in_bounds(
        initial in proptest::collection::vec(any::<u8>(), 0..64),
        ops in proptest::collection::vec(op(), 0..200),
    ) {
        let mut buf = TextBuffer::from_bytes(&initial);
        assert_invariants(&buf)?;
        for op in &ops {
            apply(&mut buf, op);
            assert_invariants(&buf)?;
        }
    }

    #[test]
    fn insert_then_delete_is_identity(
        initial in "[a-z \n]{0,32}",
        row in 0usize..8,
        col in 0usize..16,
        byte in any::<u8>(),
    ) {
        let mut buf = TextBuffer::from_bytes(initial.as_bytes());
        buf.set_cursor(row, col);
        let before = buf.lines().to_vec();
        let cursor = buf.cursor();
        buf.insert_char(byte);
        buf.move_cursor(0, -1);
        buf.delete_char_forward();
        prop_assert_eq!(buf.lines(), before.as_slice());
        prop_assert_eq!(buf.cursor(), cursor);
    }

    #[test]
    fn split_then_join_is_identity(
        initial in "[a-z ]{0,32}",
        col in 0usize..40,
    ) {
        let mut buf = TextBuffer::from_bytes(initial.as_bytes());
        buf.set_cursor(0, col);
        let cursor = buf.cursor();
        buf.split_line_at_cursor();
        buf.set_cursor(0, usize::MAX);
        buf.delete_char_forward();
        prop_assert_eq!(buf.lines(), &[initial.as_bytes().to_vec()][..]);
        prop_assert_eq!(buf.cursor(), cursor);
    }
}
