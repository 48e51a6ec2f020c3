//! # FocusRouter
//!
//! Decides which widget an input event belongs to. The router never owns
//! widgets: it holds the index of the focus holder and borrows the
//! composer's widget list per call, in the list's fixed priority order
//! (option lists before text fields, matching left-to-right screen layout).

use super::component::Component;
use super::event::{Direction, TuiEvent};
use super::screen::Screen;

/// What the session loop should do after a routed key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouterOutcome {
    /// Keep polling.
    Continue,
    /// The finish key was pressed: assemble the message and end the session.
    Finish,
}

/// Hit-testing and keyboard-cycling dispatcher over a fixed widget set.
#[derive(Default)]
pub struct FocusRouter {
    /// Index of the widget holding focus.
    focused: Option<usize>,
    /// Where keyboard cycling resumes once focus has been dropped.
    resume: Option<usize>,
}

impl FocusRouter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn focused(&self) -> Option<usize> {
        self.focused
    }

    /// Focus a widget by index, blurring the previous holder first.
    fn focus_widget(
        &mut self,
        widgets: &mut [Box<dyn Component>],
        screen: &mut dyn Screen,
        index: usize,
    ) {
        if let Some(previous) = self.focused
            && previous != index
        {
            widgets[previous].set_focus(false);
        }
        widgets[index].set_focus(true);
        self.focused = Some(index);
        self.resume = Some(index);

        let (x, y) = widgets[index].cursor_position();
        screen.show_cursor(x, y);
        log::debug!("Focus moved to widget {index}");
    }

    /// Drop focus entirely and hide the terminal cursor.
    fn blur(&mut self, widgets: &mut [Box<dyn Component>], screen: &mut dyn Screen) {
        if let Some(index) = self.focused.take() {
            widgets[index].set_focus(false);
            screen.hide_cursor();
        }
    }

    /// Pointer dispatch: the first widget (in priority order) containing the
    /// point takes focus. A click that hits nothing is ignored.
    pub fn handle_click(
        &mut self,
        widgets: &mut [Box<dyn Component>],
        screen: &mut dyn Screen,
        x: u16,
        y: u16,
    ) {
        if let Some(hit) = widgets.iter().position(|w| w.hit_test(x, y)) {
            self.focus_widget(widgets, screen, hit);
        }
    }

    /// Keyboard dispatch. Escape and the finish key are handled here; every
    /// other key goes to the focused widget. Without a focus holder, the
    /// horizontal arrows cycle through the widget list: retreating before
    /// the first widget is rejected, advancing is clamped at the last.
    pub fn handle_key(
        &mut self,
        widgets: &mut [Box<dyn Component>],
        screen: &mut dyn Screen,
        event: TuiEvent,
    ) -> RouterOutcome {
        match event {
            TuiEvent::Finish => return RouterOutcome::Finish,
            TuiEvent::Escape => self.blur(widgets, screen),
            _ => {
                if let Some(index) = self.focused {
                    widgets[index].handle_key(screen, event);
                } else if let TuiEvent::Arrow(direction) = event {
                    self.cycle(widgets, screen, direction);
                }
            }
        }
        RouterOutcome::Continue
    }

    fn cycle(
        &mut self,
        widgets: &mut [Box<dyn Component>],
        screen: &mut dyn Screen,
        direction: Direction,
    ) {
        let target = match direction {
            Direction::Right => match self.resume {
                Some(index) => (index + 1).min(widgets.len() - 1),
                None => 0,
            },
            Direction::Left => match self.resume {
                Some(index) if index > 0 => index - 1,
                _ => return,
            },
            _ => return,
        };
        self.focus_widget(widgets, screen, target);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::components::{OptionList, TextField};
    use crate::tui::screen::TestScreen;

    fn widgets() -> (Vec<Box<dyn Component>>, TestScreen) {
        let options = vec![("A".to_string(), "first".to_string())];
        let set: Vec<Box<dyn Component>> = vec![
            Box::new(OptionList::new("types", 0, 0, 20, 9, options.clone())),
            Box::new(OptionList::new("emoji", 0, 10, 20, 9, options)),
            Box::new(TextField::new("short", 22, 0, 20, 6)),
            Box::new(TextField::new("long", 22, 7, 20, 10)),
        ];
        (set, TestScreen::new(60, 24))
    }

    #[test]
    fn click_focuses_the_hit_widget_and_blurs_the_previous() {
        let (mut set, mut screen) = widgets();
        let mut router = FocusRouter::new();

        router.handle_click(&mut set, &mut screen, 5, 12);
        assert_eq!(router.focused(), Some(1));
        assert!(set[1].has_focus());

        router.handle_click(&mut set, &mut screen, 25, 3);
        assert_eq!(router.focused(), Some(2));
        assert!(!set[1].has_focus());
        assert!(set[2].has_focus());
    }

    #[test]
    fn click_outside_every_widget_is_ignored() {
        let (mut set, mut screen) = widgets();
        let mut router = FocusRouter::new();
        router.handle_click(&mut set, &mut screen, 59, 23);
        assert_eq!(router.focused(), None);
    }

    #[test]
    fn escape_drops_focus_and_hides_the_cursor() {
        let (mut set, mut screen) = widgets();
        let mut router = FocusRouter::new();
        router.handle_click(&mut set, &mut screen, 25, 3);
        assert!(screen.cursor().is_some());

        let outcome = router.handle_key(&mut set, &mut screen, TuiEvent::Escape);
        assert_eq!(outcome, RouterOutcome::Continue);
        assert_eq!(router.focused(), None);
        assert!(!set[2].has_focus());
        assert_eq!(screen.cursor(), None);
    }

    #[test]
    fn arrow_cycling_starts_at_the_first_widget() {
        let (mut set, mut screen) = widgets();
        let mut router = FocusRouter::new();

        // Left before anything was focused: rejected, no wraparound.
        router.handle_key(&mut set, &mut screen, TuiEvent::Arrow(Direction::Left));
        assert_eq!(router.focused(), None);

        router.handle_key(&mut set, &mut screen, TuiEvent::Arrow(Direction::Right));
        assert_eq!(router.focused(), Some(0));
        assert!(set[0].has_focus());
    }

    #[test]
    fn cycling_resumes_from_the_last_holder_and_clamps_at_the_end() {
        let (mut set, mut screen) = widgets();
        let mut router = FocusRouter::new();
        router.handle_click(&mut set, &mut screen, 25, 8); // Widget 3

        router.handle_key(&mut set, &mut screen, TuiEvent::Escape);
        router.handle_key(&mut set, &mut screen, TuiEvent::Arrow(Direction::Right));
        // Already at the last widget: clamped there.
        assert_eq!(router.focused(), Some(3));

        router.handle_key(&mut set, &mut screen, TuiEvent::Escape);
        router.handle_key(&mut set, &mut screen, TuiEvent::Arrow(Direction::Left));
        assert_eq!(router.focused(), Some(2));
    }

    #[test]
    fn keys_are_forwarded_to_the_focused_widget() {
        let (mut set, mut screen) = widgets();
        let mut router = FocusRouter::new();
        router.handle_click(&mut set, &mut screen, 25, 3);

        for ch in "hi".chars() {
            router.handle_key(&mut set, &mut screen, TuiEvent::Input(ch));
        }
        assert_eq!(set[2].value(), "hi");
        // Unfocused widgets saw nothing.
        assert_eq!(set[3].value(), "");
    }

    #[test]
    fn finish_key_is_surfaced_to_the_caller() {
        let (mut set, mut screen) = widgets();
        let mut router = FocusRouter::new();
        let outcome = router.handle_key(&mut set, &mut screen, TuiEvent::Finish);
        assert_eq!(outcome, RouterOutcome::Finish);
    }
}
