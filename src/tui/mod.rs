//! # Interactive session
//!
//! The terminal layer of the commit composer. `screen` is the only module
//! that knows crossterm's drawing API and `event` the only one that knows
//! its input types; everything above them works against the `Screen` trait
//! and `TuiEvent`, which is what makes the whole session testable with an
//! in-memory surface.
//!
//! ## Event loop
//!
//! Single-threaded and synchronous: `Screen::poll_event` is the only
//! blocking call, and each event is processed to completion (widget
//! mutation, repaint, flush) before the next one is fetched. There is
//! exactly one mutator, so no locking anywhere.

pub mod component;
pub mod components;
pub mod composer;
pub mod event;
pub mod focus;
pub mod screen;
pub mod style;

use unicode_width::UnicodeWidthStr;

use crate::catalog;

use composer::{Composer, MIN_HEIGHT, MIN_WIDTH};
use event::TuiEvent;
use focus::{FocusRouter, RouterOutcome};
use screen::{Screen, draw_text};
use style::Style;

/// Repository facts shown in the session header.
pub struct SessionInfo {
    pub repo_name: String,
    pub branch: String,
    pub remote: String,
}

const HINT: &str = "Click or ←/→ to focus | Esc unfocus | Enter finish | Ctrl+C abort";

/// Run one composition session to completion.
///
/// Returns the assembled commit message, or `None` when the session was
/// interrupted or finished with an invalid (too short) composition.
pub fn run(screen: &mut dyn Screen, info: &SessionInfo) -> Option<String> {
    let (width, height) = screen.size();
    if width < MIN_WIDTH || height < MIN_HEIGHT {
        log::error!(
            "Terminal is {width}x{height}, the session needs at least {MIN_WIDTH}x{MIN_HEIGHT}"
        );
        return None;
    }

    let mut composer = Composer::new(width, height);
    let mut router = FocusRouter::new();

    draw_header(screen, info, width);
    composer.display(screen);
    screen.show();

    loop {
        let event = match screen.poll_event() {
            Ok(event) => event,
            Err(error) => {
                log::error!("Input error, abandoning session: {error}");
                return None;
            }
        };
        log::debug!("Session event: {event:?}");

        match event {
            TuiEvent::Interrupt => {
                log::info!("Session interrupted");
                return None;
            }
            TuiEvent::Resize => {
                // Widget geometry is fixed at session start; a resize only
                // forces a full repaint of the original layout.
                draw_header(screen, info, width);
                composer.display(screen);
            }
            TuiEvent::Click(x, y) => {
                router.handle_click(composer.widgets_mut(), screen, x, y);
            }
            key => {
                if router.handle_key(composer.widgets_mut(), screen, key) == RouterOutcome::Finish {
                    return composer.finalize();
                }
            }
        }

        screen.show();
    }
}

fn draw_header(screen: &mut dyn Screen, info: &SessionInfo, width: u16) {
    let title_x = (width as usize).saturating_sub(UnicodeWidthStr::width(catalog::TITLE)) / 2;
    draw_text(screen, title_x as u16, 2, catalog::TITLE, Style::Title);

    let facts = format!(
        "{} {}   {} {}   {} {}",
        catalog::REPO_MARK,
        info.repo_name,
        catalog::BRANCH_MARK,
        info.branch,
        catalog::REMOTE_MARK,
        info.remote,
    );
    draw_text(screen, 2, 4, &facts, Style::Plain);
    draw_text(screen, 2, 6, HINT, Style::Border);
}
