//! The drawing surface the widget engine runs against.
//!
//! Widgets never touch the terminal directly: they issue cell writes and
//! cursor updates through the `Screen` trait. `CrosstermScreen` is the real
//! terminal implementation; `TestScreen` is an in-memory grid with a scripted
//! event queue so widget and session behavior can be exercised headlessly.

use std::io::{self, Stdout, Write, stdout};

use crossterm::cursor::{Hide, MoveTo, SetCursorStyle, Show};
use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture};
use crossterm::style::{PrintStyledContent, StyledContent};
use crossterm::terminal::{
    Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode,
    enable_raw_mode,
};
use crossterm::{execute, queue};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::event::{TuiEvent, translate};
use super::style::Style;

/// A cell-addressed drawing surface with a blocking event source.
///
/// Cell writes are buffered; nothing is guaranteed visible until `show()`.
/// Out-of-bounds writes are ignored.
pub trait Screen {
    /// Terminal size in cells, fixed at session start.
    fn size(&self) -> (u16, u16);

    /// Write one character at the given position.
    fn set_cell(&mut self, x: u16, y: u16, ch: char, style: Style);

    /// Flush buffered writes and the current cursor state to the surface.
    fn show(&mut self);

    /// Place the visible terminal cursor (applied on the next `show()`).
    fn show_cursor(&mut self, x: u16, y: u16);

    /// Hide the terminal cursor (applied on the next `show()`).
    fn hide_cursor(&mut self);

    /// Block until the next input event.
    fn poll_event(&mut self) -> io::Result<TuiEvent>;
}

/// Draw a string left-to-right, advancing by display width so double-width
/// characters (emoji) occupy two cells.
pub fn draw_text(screen: &mut dyn Screen, x: u16, y: u16, text: &str, style: Style) {
    let mut offset = 0u16;
    for ch in text.chars() {
        let width = UnicodeWidthChar::width(ch).unwrap_or(0) as u16;
        if width == 0 {
            continue;
        }
        screen.set_cell(x + offset, y, ch, style);
        offset += width;
    }
}

/// Pad a string with spaces on both sides to center it in `width` cells.
pub fn center_text(width: usize, text: &str) -> String {
    let text_width = UnicodeWidthStr::width(text);
    if text_width >= width {
        return text.to_string();
    }
    let left = (width - text_width) / 2;
    let right = width - text_width - left;
    format!("{}{}{}", " ".repeat(left), text, " ".repeat(right))
}

/// The real terminal: raw mode, alternate screen, mouse capture.
///
/// Terminal modes are restored on drop, so the session can unwind without
/// leaving the user's shell in raw mode.
pub struct CrosstermScreen {
    out: Stdout,
    width: u16,
    height: u16,
    cursor: Option<(u16, u16)>,
}

impl CrosstermScreen {
    /// Take over the terminal. Failure here is fatal: no widget is
    /// constructed until a surface exists.
    pub fn new() -> io::Result<Self> {
        let mut out = stdout();
        enable_raw_mode()?;
        execute!(
            out,
            EnterAlternateScreen,
            EnableMouseCapture,
            Clear(ClearType::All),
            SetCursorStyle::BlinkingUnderScore,
            Hide,
        )?;

        let (width, height) = crossterm::terminal::size()?;
        log::info!("Terminal surface initialized ({width}x{height})");

        Ok(Self {
            out,
            width,
            height,
            cursor: None,
        })
    }
}

impl Screen for CrosstermScreen {
    fn size(&self) -> (u16, u16) {
        (self.width, self.height)
    }

    fn set_cell(&mut self, x: u16, y: u16, ch: char, style: Style) {
        if x >= self.width || y >= self.height {
            return;
        }
        let styled = StyledContent::new(style.content_style(), ch);
        let _ = queue!(self.out, MoveTo(x, y), PrintStyledContent(styled));
    }

    fn show(&mut self) {
        // The cursor is positioned last so intermediate cell writes
        // do not displace it.
        let result = match self.cursor {
            Some((x, y)) => queue!(self.out, MoveTo(x, y), Show),
            None => queue!(self.out, Hide),
        };
        let _ = result;
        let _ = self.out.flush();
    }

    fn show_cursor(&mut self, x: u16, y: u16) {
        self.cursor = Some((x, y));
    }

    fn hide_cursor(&mut self) {
        self.cursor = None;
    }

    fn poll_event(&mut self) -> io::Result<TuiEvent> {
        loop {
            if let Some(event) = translate(event::read()?) {
                return Ok(event);
            }
        }
    }
}

impl Drop for CrosstermScreen {
    fn drop(&mut self) {
        let _ = execute!(
            self.out,
            SetCursorStyle::DefaultUserShape,
            Show,
            DisableMouseCapture,
            LeaveAlternateScreen,
        );
        let _ = disable_raw_mode();
    }
}

/// In-memory surface for tests: a character grid, a recorded cursor, and a
/// scripted queue of input events. When the queue runs dry, `poll_event`
/// yields `Interrupt` so a session under test always terminates.
pub struct TestScreen {
    width: u16,
    height: u16,
    cells: Vec<(char, Style)>,
    cursor: Option<(u16, u16)>,
    events: std::collections::VecDeque<TuiEvent>,
}

impl TestScreen {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![(' ', Style::Plain); width as usize * height as usize],
            cursor: None,
            events: std::collections::VecDeque::new(),
        }
    }

    /// Queue events for the session to consume.
    pub fn script(&mut self, events: impl IntoIterator<Item = TuiEvent>) {
        self.events.extend(events);
    }

    /// The character at a cell.
    pub fn char_at(&self, x: u16, y: u16) -> char {
        self.cells[y as usize * self.width as usize + x as usize].0
    }

    /// The style at a cell.
    pub fn style_at(&self, x: u16, y: u16) -> Style {
        self.cells[y as usize * self.width as usize + x as usize].1
    }

    /// A whole row as text, with trailing blanks trimmed.
    pub fn row_text(&self, y: u16) -> String {
        let start = y as usize * self.width as usize;
        let row: String = self.cells[start..start + self.width as usize]
            .iter()
            .map(|(ch, _)| *ch)
            .collect();
        row.trim_end().to_string()
    }

    /// Where the visible cursor was last placed, if shown.
    pub fn cursor(&self) -> Option<(u16, u16)> {
        self.cursor
    }
}

impl Screen for TestScreen {
    fn size(&self) -> (u16, u16) {
        (self.width, self.height)
    }

    fn set_cell(&mut self, x: u16, y: u16, ch: char, style: Style) {
        if x >= self.width || y >= self.height {
            return;
        }
        self.cells[y as usize * self.width as usize + x as usize] = (ch, style);
    }

    fn show(&mut self) {}

    fn show_cursor(&mut self, x: u16, y: u16) {
        self.cursor = Some((x, y));
    }

    fn hide_cursor(&mut self) {
        self.cursor = None;
    }

    fn poll_event(&mut self) -> io::Result<TuiEvent> {
        Ok(self.events.pop_front().unwrap_or(TuiEvent::Interrupt))
    }
}
