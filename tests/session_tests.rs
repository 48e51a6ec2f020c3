use ccommits::tui::event::{Direction, TuiEvent};
use ccommits::tui::screen::TestScreen;
use ccommits::tui::{self, SessionInfo};

// ============================================================================
// Helper Functions
// ============================================================================

fn session_info() -> SessionInfo {
    SessionInfo {
        repo_name: "someone/ccommits".to_string(),
        branch: "main".to_string(),
        remote: "origin".to_string(),
    }
}

fn typed(text: &str) -> Vec<TuiEvent> {
    text.chars().map(TuiEvent::Input).collect()
}

/// A full composition: pick the second change type and the fifth gitmoji by
/// keyboard, click into both text fields, type, then finish.
fn happy_path_script(screen: &mut TestScreen) {
    // Focus the change-type list and step once: FEAT -> FIX.
    screen.script([
        TuiEvent::Arrow(Direction::Right),
        TuiEvent::Arrow(Direction::Down),
        TuiEvent::Escape,
    ]);
    // One step right to the gitmoji list, four steps down to the bug emoji.
    screen.script([TuiEvent::Arrow(Direction::Right)]);
    screen.script(std::iter::repeat_n(TuiEvent::Arrow(Direction::Down), 4));
    screen.script([TuiEvent::Escape]);

    // Click into the short field (right half, top), then the long field.
    screen.script([TuiEvent::Click(45, 10)]);
    screen.script(typed("fix the wrap"));
    screen.script([TuiEvent::Click(45, 18)]);
    screen.script(typed("details"));

    screen.script([TuiEvent::Finish]);
}

// ============================================================================
// Session Tests
// ============================================================================

#[test]
fn full_session_composes_a_message() {
    let mut screen = TestScreen::new(80, 24);
    happy_path_script(&mut screen);

    let message = tui::run(&mut screen, &session_info());
    assert_eq!(message.as_deref(), Some("fix: 🐛 fix the wrap\n\ndetails"));
}

#[test]
fn interrupt_abandons_the_session() {
    let mut screen = TestScreen::new(80, 24);
    screen.script([TuiEvent::Click(45, 10)]);
    screen.script(typed("half finished"));
    screen.script([TuiEvent::Interrupt]);

    assert_eq!(tui::run(&mut screen, &session_info()), None);
}

#[test]
fn an_exhausted_event_source_terminates_the_session() {
    // TestScreen yields Interrupt once its script runs out, so an unscripted
    // session must still return instead of spinning.
    let mut screen = TestScreen::new(80, 24);
    assert_eq!(tui::run(&mut screen, &session_info()), None);
}

#[test]
fn finishing_with_short_descriptions_yields_nothing() {
    let mut screen = TestScreen::new(80, 24);
    screen.script([TuiEvent::Click(45, 10)]);
    screen.script(typed("a"));
    screen.script([TuiEvent::Finish]);

    assert_eq!(tui::run(&mut screen, &session_info()), None);
}

#[test]
fn undersized_terminal_refuses_to_start() {
    let mut screen = TestScreen::new(40, 12);
    happy_path_script(&mut screen);
    assert_eq!(tui::run(&mut screen, &session_info()), None);
}

#[test]
fn header_shows_the_repository_facts() {
    let mut screen = TestScreen::new(80, 24);
    tui::run(&mut screen, &session_info());

    assert!(screen.row_text(2).contains("CONVENTIONAL COMMITS CLI"));
    let facts = screen.row_text(4);
    assert!(facts.contains("someone/ccommits"));
    assert!(facts.contains("main"));
    assert!(facts.contains("origin"));
}

#[test]
fn resize_repaints_the_layout() {
    let mut screen = TestScreen::new(80, 24);
    screen.script([TuiEvent::Resize]);
    tui::run(&mut screen, &session_info());

    // Widgets are still on screen after the repaint.
    assert!(screen.row_text(9).contains("1. Select the type of change"));
}
