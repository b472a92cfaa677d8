use c8yop::Session;
use c8yop::select::session_matches;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::widgets::ListState;

const PAGE: usize = 10;

/// What a key press did to the picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
	Continue,
	/// Index into the full candidate slice, not the filtered view.
	Chosen(usize),
	Cancelled,
}

/// Filter text, the visible subset and the cursor.
pub struct PickerState<'s> {
	sessions: &'s [Session],
	query: String,
	visible: Vec<usize>,
	pub(super) list: ListState,
}

impl<'s> PickerState<'s> {
	pub fn new(sessions: &'s [Session]) -> Self {
		let mut state = Self {
			sessions,
			query: String::new(),
			visible: Vec::new(),
			list: ListState::default(),
		};
		state.refilter();
		state
	}

	pub fn query(&self) -> &str {
		&self.query
	}

	pub fn visible(&self) -> impl Iterator<Item = &'s Session> + '_ {
		self.visible.iter().map(|&index| &self.sessions[index])
	}

	pub fn visible_len(&self) -> usize {
		self.visible.len()
	}

	/// Index into the full candidate slice of the highlighted row.
	pub fn selected(&self) -> Option<usize> {
		self.list.selected().and_then(|position| self.visible.get(position).copied())
	}

	pub fn handle_key(&mut self, key: KeyEvent) -> Outcome {
		let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
		match key.code {
			KeyCode::Esc => Outcome::Cancelled,
			KeyCode::Char('c') if ctrl => Outcome::Cancelled,
			KeyCode::Enter => self.selected().map_or(Outcome::Continue, Outcome::Chosen),
			KeyCode::Up => self.step(-1),
			KeyCode::Char('p' | 'k') if ctrl => self.step(-1),
			KeyCode::Down => self.step(1),
			KeyCode::Char('n' | 'j') if ctrl => self.step(1),
			KeyCode::PageUp => self.step(-(PAGE as isize)),
			KeyCode::PageDown => self.step(PAGE as isize),
			KeyCode::Home => self.jump(0),
			KeyCode::End => self.jump(self.visible.len().saturating_sub(1)),
			KeyCode::Backspace => {
				if self.query.pop().is_some() {
					self.refilter();
				}
				Outcome::Continue
			}
			KeyCode::Char(ch) if !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {
				self.query.push(ch);
				self.refilter();
				Outcome::Continue
			}
			_ => Outcome::Continue,
		}
	}

	fn step(&mut self, delta: isize) -> Outcome {
		if let Some(position) = self.list.selected() {
			let last = self.visible.len().saturating_sub(1);
			let target = position.saturating_add_signed(delta).min(last);
			self.list.select(Some(target));
		}
		Outcome::Continue
	}

	fn jump(&mut self, position: usize) -> Outcome {
		if !self.visible.is_empty() {
			self.list.select(Some(position));
		}
		Outcome::Continue
	}

	fn refilter(&mut self) {
		self.visible = (0..self.sessions.len())
			.filter(|&index| self.query.is_empty() || session_matches(&self.sessions[index], &self.query))
			.collect();
		self.list = ListState::default();
		if !self.visible.is_empty() {
			self.list.select(Some(0));
		}
	}
}
