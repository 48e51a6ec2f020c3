//! # Session widgets
//!
//! The widget set the composer assembles the session from. Each file is
//! self-contained: state, drawing, event handling, and tests live together.
//!
//! - `Rectangle`: immutable geometry plus border drawing
//! - `TextField`: wrapped text entry with row-major cursor arithmetic
//! - `OptionList`: paged single-select list with differential repainting
//!
//! All widgets implement [`crate::tui::component::Component`] and draw only
//! through the [`crate::tui::screen::Screen`] trait.

mod option_list;
mod rectangle;
mod text_field;

pub use option_list::OptionList;
pub use rectangle::Rectangle;
pub use text_field::TextField;
