use c8yop::{PickerMetadata, Session};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Terminal;
use ratatui::backend::TestBackend;

use super::*;

fn session(name: &str, host: &str) -> Session {
	Session {
		name: name.into(),
		item_name: name.into(),
		host: host.into(),
		username: "admin".into(),
		session_uri: format!("op://Employee/{}", name.to_lowercase()),
		..Default::default()
	}
}

fn batch() -> Vec<Session> {
	vec![
		session("Production", "https://prod.example.com"),
		session("Staging", "https://staging.example.com"),
		session("Dev", "https://dev.internal.net"),
	]
}

fn key(code: KeyCode) -> KeyEvent {
	KeyEvent::new(code, KeyModifiers::NONE)
}

fn ctrl(ch: char) -> KeyEvent {
	KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL)
}

fn type_text(state: &mut PickerState<'_>, text: &str) {
	for ch in text.chars() {
		assert_eq!(state.handle_key(key(KeyCode::Char(ch))), Outcome::Continue);
	}
}

fn screen_text(state: &mut PickerState<'_>, meta: &PickerMetadata) -> String {
	let mut terminal = Terminal::new(TestBackend::new(80, 12)).unwrap();
	terminal.draw(|frame| render(frame, state, meta)).unwrap();
	terminal.backend().buffer().content().iter().map(|cell| cell.symbol()).collect()
}

#[test]
fn enter_chooses_the_first_row_by_default() {
	let sessions = batch();
	let mut state = PickerState::new(&sessions);
	assert_eq!(state.visible_len(), 3);
	assert_eq!(state.handle_key(key(KeyCode::Enter)), Outcome::Chosen(0));
}

#[test]
fn typing_narrows_and_enter_returns_the_full_index() {
	let sessions = batch();
	let mut state = PickerState::new(&sessions);
	type_text(&mut state, "DEV");

	assert_eq!(state.query(), "DEV");
	assert_eq!(state.visible_len(), 1);
	assert_eq!(state.handle_key(key(KeyCode::Enter)), Outcome::Chosen(2));
}

#[test]
fn backspace_widens_the_view_again() {
	let sessions = batch();
	let mut state = PickerState::new(&sessions);
	type_text(&mut state, "stag");
	assert_eq!(state.visible_len(), 1);

	for _ in 0..4 {
		state.handle_key(key(KeyCode::Backspace));
	}
	assert_eq!(state.query(), "");
	assert_eq!(state.visible_len(), 3);
	assert_eq!(state.handle_key(key(KeyCode::Backspace)), Outcome::Continue);
}

#[test]
fn cursor_moves_and_clamps_at_both_ends() {
	let sessions = batch();
	let mut state = PickerState::new(&sessions);

	state.handle_key(key(KeyCode::Up));
	assert_eq!(state.selected(), Some(0));

	state.handle_key(key(KeyCode::Down));
	state.handle_key(ctrl('n'));
	state.handle_key(key(KeyCode::Down));
	assert_eq!(state.selected(), Some(2));

	state.handle_key(ctrl('p'));
	assert_eq!(state.selected(), Some(1));

	state.handle_key(key(KeyCode::PageDown));
	assert_eq!(state.selected(), Some(2));
	state.handle_key(key(KeyCode::Home));
	assert_eq!(state.selected(), Some(0));
	state.handle_key(key(KeyCode::End));
	assert_eq!(state.handle_key(key(KeyCode::Enter)), Outcome::Chosen(2));
}

#[test]
fn esc_and_ctrl_c_cancel() {
	let sessions = batch();
	assert_eq!(PickerState::new(&sessions).handle_key(key(KeyCode::Esc)), Outcome::Cancelled);
	assert_eq!(PickerState::new(&sessions).handle_key(ctrl('c')), Outcome::Cancelled);
}

#[test]
fn control_chords_do_not_edit_the_query() {
	let sessions = batch();
	let mut state = PickerState::new(&sessions);
	state.handle_key(ctrl('j'));
	state.handle_key(ctrl('x'));
	assert_eq!(state.query(), "");
	assert_eq!(state.selected(), Some(1));
}

#[test]
fn enter_on_an_empty_view_keeps_the_picker_open() {
	let sessions = batch();
	let mut state = PickerState::new(&sessions);
	type_text(&mut state, "qa");

	assert_eq!(state.visible_len(), 0);
	assert_eq!(state.selected(), None);
	assert_eq!(state.handle_key(key(KeyCode::Down)), Outcome::Continue);
	assert_eq!(state.handle_key(key(KeyCode::End)), Outcome::Continue);
	assert_eq!(state.handle_key(key(KeyCode::Enter)), Outcome::Continue);
}

#[test]
fn screen_shows_heading_rows_and_query() {
	let sessions = batch();
	let meta = PickerMetadata {
		tags: vec!["c8y".into()],
		no_color: true,
		..Default::default()
	};
	let mut state = PickerState::new(&sessions);

	let text = screen_text(&mut state, &meta);
	assert!(text.contains("Sessions (3)"), "{text}");
	assert!(text.contains("Tag: c8y"));
	assert!(text.contains("> prod.example.com"));
	assert!(text.contains("staging.example.com"));
	assert!(text.contains("Username=admin | uri=op://Employee/dev"));

	type_text(&mut state, "staging");
	let text = screen_text(&mut state, &meta);
	assert!(text.contains("Sessions (1)"));
	assert!(text.contains("> staging"));
	assert!(!text.contains("prod.example.com"));
}

#[test]
fn screen_explains_an_empty_view() {
	let sessions = batch();
	let mut state = PickerState::new(&sessions);
	type_text(&mut state, "qa");

	let text = screen_text(&mut state, &PickerMetadata::default());
	assert!(text.contains("Sessions (0)"));
	assert!(text.contains("no sessions match"));
}
