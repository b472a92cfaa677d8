//! Full-screen session picker drawn on stderr.
//!
//! Typing narrows the list (same matching as the free-text filter), arrows
//! move, Enter chooses and Esc or Ctrl-C cancels. Stdout is left untouched
//! for the selected session.

mod state;

use std::io::{self, Stderr};

use c8yop::present::{display_description, display_title, picker_heading};
use c8yop::{Error, Picker, PickerMetadata, Session};
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode};
use ratatui::Frame;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph};

pub use state::{Outcome, PickerState};

const HELP: &str = "↑/↓ move • enter select • esc cancel • type to filter";

/// Interactive picker on the controlling terminal.
#[derive(Debug, Default)]
pub struct TuiPicker;

impl Picker for TuiPicker {
	fn pick(&mut self, sessions: &[Session], meta: &PickerMetadata) -> c8yop::Result<Option<usize>> {
		run(sessions, meta).map_err(|err| Error::Picker(err.to_string()))
	}
}

fn run(sessions: &[Session], meta: &PickerMetadata) -> io::Result<Option<usize>> {
	let mut screen = Screen::enter()?;
	let mut state = PickerState::new(sessions);

	loop {
		screen.terminal.draw(|frame| render(frame, &mut state, meta))?;

		let Event::Key(key) = event::read()? else {
			continue;
		};
		if key.kind != KeyEventKind::Press {
			continue;
		}
		match state.handle_key(key) {
			Outcome::Continue => {}
			Outcome::Chosen(index) => return Ok(Some(index)),
			Outcome::Cancelled => return Ok(None),
		}
	}
}

/// Raw mode plus alternate screen on stderr, restored on drop.
struct Screen {
	terminal: Terminal<CrosstermBackend<Stderr>>,
}

impl Screen {
	fn enter() -> io::Result<Self> {
		enable_raw_mode()?;
		let mut stderr = io::stderr();
		if let Err(err) = execute!(stderr, EnterAlternateScreen) {
			let _ = disable_raw_mode();
			return Err(err);
		}
		let terminal = Terminal::new(CrosstermBackend::new(stderr))?;
		Ok(Self { terminal })
	}
}

impl Drop for Screen {
	fn drop(&mut self) {
		let _ = disable_raw_mode();
		let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
		let _ = self.terminal.show_cursor();
	}
}

struct Palette {
	heading: Style,
	title: Style,
	description: Style,
	highlight: Style,
	muted: Style,
}

impl Palette {
	fn new(no_color: bool) -> Self {
		if no_color {
			return Self {
				heading: Style::default().add_modifier(Modifier::BOLD),
				title: Style::default().add_modifier(Modifier::BOLD),
				description: Style::default(),
				highlight: Style::default().add_modifier(Modifier::REVERSED),
				muted: Style::default(),
			};
		}
		Self {
			heading: Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
			title: Style::default().add_modifier(Modifier::BOLD),
			description: Style::default().add_modifier(Modifier::DIM),
			highlight: Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD | Modifier::REVERSED),
			muted: Style::default().fg(Color::DarkGray),
		}
	}
}

/// Draws the heading with the filter box, the session list and a help line.
pub fn render(frame: &mut Frame, state: &mut PickerState<'_>, meta: &PickerMetadata) {
	let palette = Palette::new(meta.no_color);
	let areas = Layout::default()
		.direction(Direction::Vertical)
		.constraints([Constraint::Length(3), Constraint::Min(3), Constraint::Length(1)])
		.split(frame.area());

	let filter = Paragraph::new(Line::from(vec![Span::styled("> ", palette.muted), Span::raw(state.query())])).block(
		Block::default()
			.borders(Borders::ALL)
			.title(Span::styled(picker_heading(state.visible_len(), meta), palette.heading)),
	);
	frame.render_widget(filter, areas[0]);

	let items: Vec<ListItem> = state
		.visible()
		.map(|session| {
			ListItem::new(vec![
				Line::from(Span::styled(display_title(session), palette.title)),
				Line::from(Span::styled(format!("  {}", display_description(session)), palette.description)),
			])
		})
		.collect();
	let empty = items.is_empty();
	let list = List::new(items)
		.block(Block::default().borders(Borders::ALL))
		.highlight_style(palette.highlight)
		.highlight_symbol("> ");
	frame.render_stateful_widget(list, areas[1], &mut state.list);

	let help = if empty { "no sessions match • backspace to widen • esc cancel" } else { HELP };
	frame.render_widget(Paragraph::new(Span::styled(help, palette.muted)), areas[2]);
}

#[cfg(test)]
mod tests;
