//! # OptionList
//!
//! A paged single-select list over an immutable ordered set of (key, label)
//! pairs. Only one page of entries is visible at a time; moving the
//! selection across a page boundary repaints the whole page, while moving
//! within a page repaints just the two affected rows so the highlight jumps
//! without flicker.

use unicode_width::UnicodeWidthChar;

use crate::tui::component::Component;
use crate::tui::event::{Direction, TuiEvent};
use crate::tui::screen::{Screen, center_text, draw_text};
use crate::tui::style::Style;

use super::rectangle::Rectangle;

/// Rows reserved around the entries: top border with title, one blank row,
/// the "more below" indicator row, the bottom border, and one spare.
const FIXED_CHROME: u16 = 5;

/// Marker drawn under a page when more entries follow.
const MORE_BELOW: &str = "🔻";

/// A paged single-select list widget.
pub struct OptionList {
    rect: Rectangle,
    title: String,
    /// Ordered (key, label) pairs, fixed at construction.
    options: Vec<(String, String)>,
    selected: usize,
    /// The page currently on screen; always `selected / page_size`.
    view_offset: usize,
    focus: bool,
}

impl OptionList {
    pub fn new(
        title: impl Into<String>,
        x: u16,
        y: u16,
        width: u16,
        height: u16,
        options: Vec<(String, String)>,
    ) -> Self {
        debug_assert!(height > FIXED_CHROME, "no room for entries");
        debug_assert!(!options.is_empty(), "an option list needs options");
        Self {
            rect: Rectangle::new(x, y, width, height),
            title: title.into(),
            options,
            selected: 0,
            view_offset: 0,
            focus: false,
        }
    }

    /// Entries per page.
    fn page_size(&self) -> usize {
        (self.rect.height() - FIXED_CHROME) as usize
    }

    /// Which page an entry index lives on.
    fn page(&self, index: usize) -> usize {
        index / self.page_size()
    }

    /// Writable cells per entry row.
    fn max_row_width(&self) -> usize {
        self.rect.width().saturating_sub(4) as usize
    }

    /// Screen row an entry renders on within the current page.
    fn entry_row(&self, index: usize) -> u16 {
        let page_row = index - self.view_offset * self.page_size();
        self.rect.start_y() + 2 + page_row as u16
    }

    fn entry_text(&self, index: usize) -> String {
        let (key, label) = &self.options[index];
        fit_to_width(&format!("{key} - {label}"), self.max_row_width())
    }

    /// Move the selection by one. Past either boundary is a no-op; a page
    /// change triggers a full page repaint, otherwise only the two affected
    /// rows are redrawn.
    pub fn move_selection(&mut self, screen: &mut dyn Screen, delta: i32) {
        let candidate = self.selected as i32 + delta;
        if candidate < 0 || candidate as usize >= self.options.len() {
            return;
        }
        let candidate = candidate as usize;
        let previous = self.selected;
        self.selected = candidate;

        let new_page = self.page(candidate);
        if new_page != self.view_offset {
            self.clear_entries(screen);
            self.view_offset = new_page;
            self.draw_page(screen);
        } else {
            self.draw_entry(screen, previous, Style::Plain);
            self.draw_entry(screen, candidate, Style::Selected);
        }

        let (x, y) = self.cursor_position();
        screen.show_cursor(x, y);
    }

    /// The key of the currently selected entry.
    pub fn selected_key(&self) -> &str {
        &self.options[self.selected].0
    }

    fn draw_entry(&self, screen: &mut dyn Screen, index: usize, style: Style) {
        let mut text = self.entry_text(index);
        let width: usize = text.chars().filter_map(UnicodeWidthChar::width).sum();
        text.push_str(&" ".repeat(self.max_row_width().saturating_sub(width)));
        draw_text(
            screen,
            self.rect.start_x() + 2,
            self.entry_row(index),
            &text,
            style,
        );
    }

    /// Draw the current page's slice plus the "more below" indicator when
    /// further pages exist.
    fn draw_page(&self, screen: &mut dyn Screen) {
        let start = self.view_offset * self.page_size();
        let end = (start + self.page_size()).min(self.options.len());
        for index in start..end {
            let style = if index == self.selected {
                Style::Selected
            } else {
                Style::Plain
            };
            self.draw_entry(screen, index, style);
        }

        if end < self.options.len() {
            let marker = center_text(self.max_row_width(), MORE_BELOW);
            draw_text(
                screen,
                self.rect.start_x() + 2,
                self.rect.start_y() + self.rect.height() - 2,
                &marker,
                Style::Indicator,
            );
        }
    }

    /// Blank every entry row and the indicator row.
    fn clear_entries(&self, screen: &mut dyn Screen) {
        let first = self.rect.start_y() + 2;
        let last = self.rect.start_y() + self.rect.height() - 2;
        for y in first..=last {
            for dx in 0..self.max_row_width() as u16 {
                screen.set_cell(self.rect.start_x() + 2 + dx, y, ' ', Style::Plain);
            }
        }
    }

    #[cfg(test)]
    fn state(&self) -> (usize, usize) {
        (self.selected, self.view_offset)
    }
}

impl Component for OptionList {
    fn display(&self, screen: &mut dyn Screen) {
        self.rect.draw(screen);
        draw_text(
            screen,
            self.rect.start_x() + 3,
            self.rect.start_y(),
            &self.title,
            Style::BoxTitle,
        );
        self.clear_entries(screen);
        self.draw_page(screen);
    }

    fn hit_test(&self, x: u16, y: u16) -> bool {
        self.rect.contains(x, y)
    }

    fn set_focus(&mut self, focus: bool) {
        self.focus = focus;
    }

    fn has_focus(&self) -> bool {
        self.focus
    }

    /// The screen row of the highlighted entry; this widget has no text
    /// cursor, the position only marks where focus sits.
    fn cursor_position(&self) -> (u16, u16) {
        (self.rect.start_x() + 2, self.entry_row(self.selected))
    }

    fn handle_key(&mut self, screen: &mut dyn Screen, event: TuiEvent) {
        match event {
            TuiEvent::Arrow(Direction::Up) => self.move_selection(screen, -1),
            TuiEvent::Arrow(Direction::Down) => self.move_selection(screen, 1),
            _ => {}
        }
    }

    fn value(&self) -> &str {
        self.selected_key()
    }
}

/// Truncate a string so its display width fits `max` cells.
fn fit_to_width(text: &str, max: usize) -> String {
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let width = UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + width > max {
            break;
        }
        out.push(ch);
        used += width;
    }
    out
}
