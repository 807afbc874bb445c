//! Main TUI application state and logic

use crate::host::{HostShell, ProgramId};
use crate::ui::panes;
use crate::ui::theme::DEFAULT_THEME;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    Frame, Terminal,
    backend::Backend,
    layout::{Constraint, Direction, Layout, Margin},
    style::{Modifier, Style},
    widgets::{Block, Borders},
};
use std::io;
use std::time::Duration;
use tracing::info;

/// The main application state
pub struct App {
    /// Owns the active program and its widget
    host: HostShell,

    /// Whether the app should quit
    should_quit: bool,
}

impl App {
    pub fn new(host: HostShell) -> Self {
        App {
            host,
            should_quit: false,
        }
    }

    pub fn host(&self) -> &HostShell {
        &self.host
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        info!(program = %self.host.active_program(), "event loop started");

        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            if event::poll(Duration::from_millis(250))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        info!("event loop finished");
        Ok(())
    }

    /// Render the UI: header, the fixed program frame, status bar
    pub fn render(&self, frame: &mut Frame) {
        let size = frame.area();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(size);

        let view = self.host.render();

        panes::render_header(frame, chunks[0], self.host.registry().entries(), view.id);

        let block = Block::default()
            .title(format!(" {} ", view.label))
            .borders(Borders::ALL)
            .border_style(
                Style::default()
                    .fg(DEFAULT_THEME.border_focused)
                    .add_modifier(Modifier::BOLD),
            )
            .style(Style::default().bg(DEFAULT_THEME.bg));
        let inner = block.inner(chunks[1]).inner(Margin::new(1, 0));
        frame.render_widget(block, chunks[1]);
        view.program.render(frame, inner);

        panes::render_status_bar(frame, chunks[2], view.label, &view.program.status());
    }

    /// Handle keyboard events. Host keys first, everything else goes to the
    /// mounted program.
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::F(n @ 1..=3) => {
                self.host.switch_program(ProgramId::ALL[n as usize - 1]);
            }
            KeyCode::Tab => {
                self.host.next_program();
            }
            KeyCode::BackTab => {
                self.host.prev_program();
            }
            _ => {
                self.host.active_mut().handle_key(key);
            }
        }
    }
}
