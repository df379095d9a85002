//! Vertical viewport into the buffer.
//!
//! `first_line` is the topmost buffer line shown; `height` is the number of
//! text rows available. [`Viewport::scroll_to_cursor`] keeps the cursor row
//! visible with `margin` context rows above and below where the buffer allows.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub first_line: usize,
    pub height: usize,
}

impl Viewport {
    pub fn new(first_line: usize, height: usize) -> Self {
        Self { first_line, height }
    }

    /// Shift `first_line` so `cursor_row` is visible. Returns true if it moved.
    pub fn scroll_to_cursor(
        &mut self,
        cursor_row: usize,
        margin: usize,
        line_count: usize,
    ) -> bool {
        if self.height == 0 {
            return false;
        }
        let before = self.first_line;
        let margin = margin.min(self.height.saturating_sub(1) / 2);
        if cursor_row < self.first_line + margin {
            self.first_line = cursor_row.saturating_sub(margin);
        } else if cursor_row + margin >= self.first_line + self.height {
            self.first_line = cursor_row + margin + 1 - self.height;
        }
        let max_first = line_count.saturating_sub(self.height);
        if self.first_line > max_first {
            self.first_line = max_first.max(cursor_row.saturating_sub(self.height - 1));
        }
        self.first_line != before
    }

    pub fn contains(&self, row: usize) -> bool {
        row >= self.first_line && row < self.first_line + self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn constructs_viewport() {
        let vp = Viewport::new(0, 10);
        assert_eq!(vp.first_line, 0);
        assert_eq!(vp.height, 10);
    }

    #[test]
    fn scrolls_down_when_cursor_leaves_bottom() {
        let mut vp = Viewport::new(0, 5);
        assert!(vp.scroll_to_cursor(7, 0, 20));
        assert_eq!(vp.first_line, 3);
        assert!(!vp.scroll_to_cursor(5, 0, 20));
    }

    #[test]
    fn scrolls_up_with_margin() {
        let mut vp = Viewport::new(10, 5);
        vp.scroll_to_cursor(10, 1, 20);
        assert_eq!(vp.first_line, 9);
    }

    #[test]
    fn margin_stops_at_buffer_end() {
        let mut vp = Viewport::new(0, 5);
        vp.scroll_to_cursor(9, 2, 10);
        assert_eq!(vp.first_line, 5);
        assert!(vp.contains(9));
    }

    proptest! {
        #[test]
        fn cursor_always_visible(
            height in 1usize..40,
            line_count in 1usize..200,
            margin in 0usize..10,
            rows in proptest::collection::vec(0usize..200, 1..30),
        ) {
            let mut vp = Viewport::new(0, height);
            for row in rows {
                let row = row % line_count;
                vp.scroll_to_cursor(row, margin, line_count);
                prop_assert!(vp.contains(row));
            }
        }
    }
}
