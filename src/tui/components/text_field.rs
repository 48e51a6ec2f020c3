//! # TextField
//!
//! Editable text confined to a fixed wrapped viewport. The content is a flat
//! character sequence with no stored line breaks; wrapping is purely a
//! presentation artifact. The edit position is a 1-D character offset; the
//! rendered cursor (row, col) is derived from it by a row-major transform:
//!
//! ```text
//! row = offset / max_row_width, col = offset % max_row_width
//! ```
//!
//! The offset ranges over `0..=len`, so filling the viewport exactly leaves
//! it one past the last cell; only the rendered cursor is clamped onto the
//! final cell in that state.
//!
//! Every bounds or capacity violation degrades silently to a no-op so typing
//! is never interrupted by an error.

use crate::tui::component::Component;
use crate::tui::event::{Direction, TuiEvent};
use crate::tui::screen::{Screen, draw_text};
use crate::tui::style::Style;

use super::rectangle::Rectangle;

/// Border plus one blank cell on every side.
const MARGIN: u16 = 2;

/// A wrapped multi-line text entry field.
pub struct TextField {
    rect: Rectangle,
    title: String,
    /// Flat logical content; never contains newlines.
    content: String,
    /// Edit position in characters, `0..=char_len()`.
    offset: usize,
    focus: bool,
}

impl TextField {
    pub fn new(title: impl Into<String>, x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            rect: Rectangle::new(x, y, width, height),
            title: title.into(),
            content: String::new(),
            offset: 0,
            focus: false,
        }
    }

    /// Writable columns per row.
    fn max_row_width(&self) -> usize {
        self.rect.width().saturating_sub(2 * MARGIN) as usize
    }

    /// Writable rows.
    fn max_rows(&self) -> usize {
        self.rect.height().saturating_sub(2 * MARGIN) as usize
    }

    /// Total characters the viewport can hold.
    fn capacity(&self) -> usize {
        self.max_rows() * self.max_row_width()
    }

    fn char_len(&self) -> usize {
        self.content.chars().count()
    }

    /// The viewport cell the cursor renders on. An offset at full capacity
    /// sits one past the last cell; the rendered cursor is clamped onto it.
    fn cursor_cell(&self) -> (u16, u16) {
        let w = self.max_row_width();
        if self.offset >= self.capacity() {
            ((self.max_rows() - 1) as u16, (w - 1) as u16)
        } else {
            ((self.offset / w) as u16, (self.offset % w) as u16)
        }
    }

    fn byte_index(&self, char_offset: usize) -> usize {
        self.content
            .char_indices()
            .nth(char_offset)
            .map(|(i, _)| i)
            .unwrap_or(self.content.len())
    }

    /// Screen cell a content offset wraps to.
    fn cell_at(&self, offset: usize) -> (u16, u16) {
        let w = self.max_row_width();
        (
            self.rect.start_x() + MARGIN + (offset % w) as u16,
            self.rect.start_y() + MARGIN + (offset / w) as u16,
        )
    }

    /// Insert a character at the cursor. No-op once the viewport is full.
    pub fn insert(&mut self, screen: &mut dyn Screen, ch: char) {
        let len = self.char_len();
        if len + 1 > self.capacity() {
            log::debug!("TextField '{}' full, dropping {ch:?}", self.title);
            return;
        }

        let byte = self.byte_index(self.offset);
        self.content.insert(byte, ch);
        let appended = self.offset == len;

        // The offset may land exactly on capacity; only the rendered cursor
        // clamps onto the last cell, so the next backspace still removes the
        // final character.
        self.offset += 1;

        if appended {
            // Appended at the end: one cell changes.
            let (x, y) = self.cell_at(self.offset - 1);
            screen.set_cell(x, y, ch, Style::Plain);
        } else {
            // Spliced into the middle: everything after the cursor shifted.
            self.redraw_content(screen);
        }

        let (cx, cy) = self.cursor_position();
        screen.show_cursor(cx, cy);
    }

    /// Remove the character before the cursor. No-op at offset zero.
    pub fn delete_before_cursor(&mut self, screen: &mut dyn Screen) {
        if self.offset == 0 {
            return;
        }

        let byte = self.byte_index(self.offset - 1);
        self.content.remove(byte);
        self.offset -= 1;

        // The tail shifted left and the vacated cell must be blanked.
        self.redraw_content(screen);

        let (cx, cy) = self.cursor_position();
        screen.show_cursor(cx, cy);
    }

    /// Move the cursor one cell, wrapping column under/overflow into the
    /// adjacent row. A move that leaves the viewport is rejected; a move
    /// onto unwritten cells snaps to just past the last character.
    pub fn move_cursor(&mut self, screen: &mut dyn Screen, direction: Direction) {
        let (dx, dy) = direction.delta();
        let w = self.max_row_width() as i32;
        let (cur_row, cur_col) = self.cursor_cell();
        let mut col = cur_col as i32 + dx;
        let mut row = cur_row as i32 + dy;

        if col < 0 {
            col = w - 1;
            row -= 1;
        } else if col >= w {
            col = 0;
            row += 1;
        }
        if row < 0 || row >= self.max_rows() as i32 {
            return;
        }

        self.offset = ((row * w + col) as usize).min(self.char_len());

        let (cx, cy) = self.cursor_position();
        screen.show_cursor(cx, cy);
    }

    /// Repaint every interior cell: content where written, blank elsewhere.
    fn redraw_content(&self, screen: &mut dyn Screen) {
        let chars: Vec<char> = self.content.chars().collect();
        for offset in 0..self.capacity() {
            let ch = chars.get(offset).copied().unwrap_or(' ');
            let (x, y) = self.cell_at(offset);
            screen.set_cell(x, y, ch, Style::Plain);
        }
    }

    #[cfg(test)]
    fn cursor(&self) -> (u16, u16) {
        self.cursor_cell()
    }
}

impl Component for TextField {
    fn display(&self, screen: &mut dyn Screen) {
        self.rect.draw(screen);
        draw_text(
            screen,
            self.rect.start_x() + 3,
            self.rect.start_y(),
            &self.title,
            Style::BoxTitle,
        );
        self.redraw_content(screen);
    }

    fn hit_test(&self, x: u16, y: u16) -> bool {
        self.rect.contains_interior(x, y)
    }

    fn set_focus(&mut self, focus: bool) {
        self.focus = focus;
    }

    fn has_focus(&self) -> bool {
        self.focus
    }

    fn cursor_position(&self) -> (u16, u16) {
        let (row, col) = self.cursor_cell();
        (
            self.rect.start_x() + MARGIN + col,
            self.rect.start_y() + MARGIN + row,
        )
    }

    fn handle_key(&mut self, screen: &mut dyn Screen, event: TuiEvent) {
        match event {
            TuiEvent::Input(ch) => self.insert(screen, ch),
            TuiEvent::Backspace => self.delete_before_cursor(screen),
            TuiEvent::Arrow(direction) => self.move_cursor(screen, direction),
            _ => {}
        }
    }

    fn value(&self) -> &str {
        &self.content
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::screen::TestScreen;

    // max_row_width = 10, max_rows = 2, capacity = 20
    fn field() -> (TextField, TestScreen) {
        (TextField::new("test", 0, 0, 14, 6), TestScreen::new(40, 12))
    }

    fn type_str(field: &mut TextField, screen: &mut TestScreen, text: &str) {
        for ch in text.chars() {
            field.insert(screen, ch);
        }
    }

    #[test]
    fn wrapping_never_changes_logical_content() {
        let (mut field, mut screen) = field();
        // Same edit sequence against an unbounded buffer.
        let mut model = String::new();

        for ch in "hello world fits".chars() {
            field.insert(&mut screen, ch);
            model.push(ch);
        }
        for _ in 0..4 {
            field.delete_before_cursor(&mut screen);
            model.pop();
        }
        type_str(&mut field, &mut screen, "okay");
        model.push_str("okay");

        assert_eq!(field.value(), model);
    }

    #[test]
    fn delete_on_empty_content_is_a_no_op() {
        let (mut field, mut screen) = field();
        field.delete_before_cursor(&mut screen);
        assert_eq!(field.value(), "");
        assert_eq!(field.cursor(), (0, 0));
    }

    #[test]
    fn filling_to_capacity_succeeds_and_the_next_insert_drops() {
        let (mut field, mut screen) = field();
        for i in 0..20 {
            field.insert(&mut screen, char::from(b'a' + (i % 26)));
        }
        assert_eq!(field.value().chars().count(), 20);

        // 21st keystroke: content and cursor unchanged.
        let cursor_before = field.cursor();
        field.insert(&mut screen, 'z');
        assert_eq!(field.value().chars().count(), 20);
        assert_eq!(field.cursor(), cursor_before);
    }

    #[test]
    fn backspace_after_filling_to_capacity_removes_the_last_character() {
        let (mut field, mut screen) = field();
        let mut model = String::new();
        for i in 0..20u8 {
            let ch = char::from(b'a' + i);
            field.insert(&mut screen, ch);
            model.push(ch);
        }

        field.delete_before_cursor(&mut screen);
        model.pop();
        assert_eq!(field.value(), model);
        assert_eq!(field.value(), "abcdefghijklmnopqrs");
        // The vacated last cell is blanked and the cursor sits on it.
        assert_eq!(screen.char_at(11, 3), ' ');
        assert_eq!(field.cursor(), (1, 9));
    }

    #[test]
    fn typing_past_one_row_wraps_the_cursor() {
        let (mut field, mut screen) = field();
        type_str(&mut field, &mut screen, "0123456789");
        assert_eq!(field.cursor(), (1, 0));
        // The full row renders in the viewport; no newline is ever stored.
        assert_eq!(screen.char_at(2, 2), '0');
        assert_eq!(screen.char_at(11, 2), '9');
        assert!(!field.value().contains('\n'));
    }

    #[test]
    fn backspace_wraps_to_the_end_of_the_previous_row() {
        let (mut field, mut screen) = field();
        type_str(&mut field, &mut screen, "0123456789");
        assert_eq!(field.cursor(), (1, 0));

        field.delete_before_cursor(&mut screen);
        assert_eq!(field.cursor(), (0, 9));
        assert_eq!(field.value(), "012345678");
        // The vacated cell is blanked.
        assert_eq!(screen.char_at(2 + 9, 2), ' ');
    }

    #[test]
    fn mid_content_insert_splices_and_repaints() {
        let (mut field, mut screen) = field();
        type_str(&mut field, &mut screen, "abcd");
        field.move_cursor(&mut screen, Direction::Left);
        field.move_cursor(&mut screen, Direction::Left);
        field.insert(&mut screen, 'X');

        assert_eq!(field.value(), "abXcd");
        // Interior starts one margin (2 cells) inside the rectangle.
        assert_eq!(screen.row_text(2), "  abXcd");
    }

    #[test]
    fn cursor_cannot_leave_the_viewport() {
        let (mut field, mut screen) = field();
        field.move_cursor(&mut screen, Direction::Left);
        assert_eq!(field.cursor(), (0, 0));
        field.move_cursor(&mut screen, Direction::Up);
        assert_eq!(field.cursor(), (0, 0));

        type_str(&mut field, &mut screen, "0123456789012345678"); // 19 chars
        field.move_cursor(&mut screen, Direction::Down);
        // Row 2 is outside [0, max_rows): rejected.
        assert_eq!(field.cursor(), (1, 9));
    }

    #[test]
    fn moving_onto_unwritten_cells_snaps_to_after_the_content() {
        let (mut field, mut screen) = field();
        type_str(&mut field, &mut screen, "0123456789abc"); // 13 chars, cursor (1, 3)
        field.move_cursor(&mut screen, Direction::Up);
        assert_eq!(field.cursor(), (0, 3));

        // Down from (0, 7) targets offset 17 > 13: snap to offset 13.
        field.move_cursor(&mut screen, Direction::Right);
        field.move_cursor(&mut screen, Direction::Right);
        field.move_cursor(&mut screen, Direction::Right);
        field.move_cursor(&mut screen, Direction::Right);
        assert_eq!(field.cursor(), (0, 7));
        field.move_cursor(&mut screen, Direction::Down);
        assert_eq!(field.cursor(), (1, 3));
    }

    #[test]
    fn hit_test_covers_the_interior_not_the_border() {
        let (field, _) = field();
        assert!(field.hit_test(1, 1)); // Margin row inside the border
        assert!(field.hit_test(5, 3));
        assert!(!field.hit_test(0, 0)); // Border corner
        assert!(!field.hit_test(13, 3)); // Right border
    }

    #[test]
    fn cursor_position_is_absolute() {
        let mut screen = TestScreen::new(60, 20);
        let mut field = TextField::new("test", 20, 5, 14, 6);
        assert_eq!(field.cursor_position(), (22, 7));
        field.insert(&mut screen, 'a');
        assert_eq!(field.cursor_position(), (23, 7));
    }
}
