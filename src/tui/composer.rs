//! # Composer
//!
//! Owns the four session widgets, lays them out against the terminal size,
//! and assembles the final commit message. The widget list order doubles as
//! the router's priority order: change-type list, gitmoji list, short
//! description, long description.

use crate::catalog;

use super::component::Component;
use super::components::{OptionList, TextField};
use super::screen::Screen;

/// Smallest terminal the four-widget layout fits into.
pub const MIN_WIDTH: u16 = 60;
pub const MIN_HEIGHT: u16 = 24;

/// First screen row the widgets occupy; the header chrome sits above.
const WIDGETS_TOP: u16 = 9;

pub const CHANGE_TYPE: usize = 0;
pub const GITMOJI: usize = 1;
pub const SHORT_DESC: usize = 2;
pub const LONG_DESC: usize = 3;

/// The widget set of one commit-composition session.
pub struct Composer {
    widgets: Vec<Box<dyn Component>>,
}

impl Composer {
    /// Build the four widgets against a terminal of `width` x `height`
    /// cells. Lists stack in the left half, text fields in the right.
    pub fn new(width: u16, height: u16) -> Self {
        let mid = width / 2;
        let usable = height - WIDGETS_TOP - 2;

        let list_w = mid - 4;
        let type_h = usable / 2;
        let moji_h = usable - type_h - 1;

        let field_x = mid + 2;
        let field_w = width - 3 - field_x;
        let long_y = WIDGETS_TOP + 7;
        let long_h = height - 2 - long_y;

        let widgets: Vec<Box<dyn Component>> = vec![
            Box::new(OptionList::new(
                catalog::TYPE_TITLE,
                2,
                WIDGETS_TOP,
                list_w,
                type_h,
                catalog::to_owned_pairs(catalog::CHANGE_TYPES),
            )),
            Box::new(OptionList::new(
                catalog::GITMOJI_TITLE,
                2,
                WIDGETS_TOP + type_h + 1,
                list_w,
                moji_h,
                catalog::to_owned_pairs(catalog::GITMOJI),
            )),
            Box::new(TextField::new(
                catalog::SHORT_DESC_TITLE,
                field_x,
                WIDGETS_TOP,
                field_w,
                6,
            )),
            Box::new(TextField::new(
                catalog::LONG_DESC_TITLE,
                field_x,
                long_y,
                field_w,
                long_h,
            )),
        ];

        Self { widgets }
    }

    /// The widget list in router priority order.
    pub fn widgets_mut(&mut self) -> &mut [Box<dyn Component>] {
        &mut self.widgets
    }

    /// Draw every widget.
    pub fn display(&self, screen: &mut dyn Screen) {
        for widget in &self.widgets {
            widget.display(screen);
        }
    }

    /// Assemble the final message.
    ///
    /// A description of length one or less still counts as empty; in that
    /// case the composition is invalid and `None` is returned, which the
    /// caller treats as "abort, nothing to commit".
    pub fn finalize(&self) -> Option<String> {
        let short = self.widgets[SHORT_DESC].value();
        let long = self.widgets[LONG_DESC].value();
        if short.chars().count() <= 1 || long.chars().count() <= 1 {
            log::info!("Description too short, refusing to compose a message");
            return None;
        }

        let change_type = self.widgets[CHANGE_TYPE].value().to_lowercase();
        let emoji = self.widgets[GITMOJI].value();
        Some(format!("{change_type}: {emoji} {short}\n\n{long}"))
    }
}
