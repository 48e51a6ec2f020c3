//! The shared capability set of interactive widgets.
//!
//! `TextField` and `OptionList` differ in what they edit, but the router and
//! the composer only need one uniform surface: draw yourself, answer a hit
//! test, take or give up focus, report where your cursor is, react to a key.
//! Holding widgets as `Box<dyn Component>` gives uniform dispatch without any
//! inheritance games.

use super::event::TuiEvent;
use super::screen::Screen;

/// An interactive widget the session can focus and route events to.
pub trait Component {
    /// Draw the whole widget: border, title, and current content.
    fn display(&self, screen: &mut dyn Screen);

    /// Whether a screen position belongs to this widget's clickable area.
    fn hit_test(&self, x: u16, y: u16) -> bool;

    /// Grant or revoke keyboard focus.
    fn set_focus(&mut self, focus: bool);

    /// Whether this widget currently holds focus.
    fn has_focus(&self) -> bool;

    /// Absolute screen position of this widget's cursor.
    fn cursor_position(&self) -> (u16, u16);

    /// Handle a key event. Bounds and capacity violations degrade to
    /// no-ops; a keystroke never produces an error.
    fn handle_key(&mut self, screen: &mut dyn Screen, event: TuiEvent);

    /// The widget's contribution to the final message: the text of a
    /// field, the selected key of a list.
    fn value(&self) -> &str;
}
