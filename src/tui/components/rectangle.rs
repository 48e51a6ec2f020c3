//! Rectangle geometry and border drawing.

use crate::tui::screen::Screen;
use crate::tui::style::Style;

/// An immutable screen rectangle. Every widget owns one and derives its
/// writable interior from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rectangle {
    start_x: u16,
    start_y: u16,
    width: u16,
    height: u16,
}

impl Rectangle {
    /// Width and height must be at least 3: two border cells plus one
    /// interior cell.
    pub fn new(start_x: u16, start_y: u16, width: u16, height: u16) -> Self {
        debug_assert!(width >= 3 && height >= 3, "degenerate rectangle");
        Self {
            start_x,
            start_y,
            width,
            height,
        }
    }

    pub fn start_x(&self) -> u16 {
        self.start_x
    }

    pub fn start_y(&self) -> u16 {
        self.start_y
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Whether a point lies within the rectangle, border cells included.
    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.start_x
            && x < self.start_x + self.width
            && y >= self.start_y
            && y < self.start_y + self.height
    }

    /// Whether a point lies strictly inside the border.
    pub fn contains_interior(&self, x: u16, y: u16) -> bool {
        x > self.start_x
            && x + 1 < self.start_x + self.width
            && y > self.start_y
            && y + 1 < self.start_y + self.height
    }

    /// Draw the box-drawing border.
    pub fn draw(&self, screen: &mut dyn Screen) {
        let right = self.start_x + self.width - 1;
        let bottom = self.start_y + self.height - 1;

        screen.set_cell(self.start_x, self.start_y, '┌', Style::Border);
        screen.set_cell(right, self.start_y, '┐', Style::Border);
        screen.set_cell(self.start_x, bottom, '└', Style::Border);
        screen.set_cell(right, bottom, '┘', Style::Border);

        for x in self.start_x + 1..right {
            screen.set_cell(x, self.start_y, '─', Style::Border);
            screen.set_cell(x, bottom, '─', Style::Border);
        }
        for y in self.start_y + 1..bottom {
            screen.set_cell(self.start_x, y, '│', Style::Border);
            screen.set_cell(right, y, '│', Style::Border);
        }
    }
}
