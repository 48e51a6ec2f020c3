//! Named styles for everything the session draws.
//!
//! Widgets tag each cell with a `Style` variant instead of a concrete
//! terminal style, so the drawing surface stays swappable (the test screen
//! records the variant, the crossterm screen maps it to colors). The mapping
//! lives here because it is the only styling decision in the crate.

use crossterm::style::{Attribute, Color, ContentStyle};

/// Semantic cell style, resolved to terminal attributes at draw time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Style {
    /// Regular text (field content, unselected list entries).
    #[default]
    Plain,
    /// The screen-wide session title.
    Title,
    /// Widget titles drawn over the top border.
    BoxTitle,
    /// Box-drawing borders.
    Border,
    /// The highlighted list entry.
    Selected,
    /// The "more below" page indicator.
    Indicator,
}

impl Style {
    /// Resolve to a crossterm `ContentStyle`.
    pub fn content_style(self) -> ContentStyle {
        let mut style = ContentStyle::new();
        match self {
            Style::Plain => {
                style.foreground_color = Some(Color::White);
            }
            Style::Title => {
                style.foreground_color = Some(Color::White);
                style.attributes = style
                    .attributes
                    .with(Attribute::Bold)
                    .with(Attribute::Underlined);
            }
            Style::BoxTitle => {
                style.foreground_color = Some(Color::Cyan);
                style.attributes = style
                    .attributes
                    .with(Attribute::Italic)
                    .with(Attribute::Underlined);
            }
            Style::Border => {
                style.foreground_color = Some(Color::Grey);
            }
            Style::Selected => {
                style.foreground_color = Some(Color::White);
                style.attributes = style.attributes.with(Attribute::Reverse);
            }
            Style::Indicator => {
                style.foreground_color = Some(Color::Red);
            }
        }
        style
    }
}
