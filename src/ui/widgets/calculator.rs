//! Calculator widget: an input line, an `=` action and a result line

use crate::calc::Calculator;
use crate::host::{Program, ProgramId};
use crate::ui::theme::DEFAULT_THEME;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

const PLACEHOLDER: &str = "e.g. (2+3)*4/5";

pub struct CalculatorWidget {
    calculator: Calculator,
}

impl CalculatorWidget {
    pub fn new() -> Self {
        CalculatorWidget {
            calculator: Calculator::new(),
        }
    }

    pub fn calculator(&self) -> &Calculator {
        &self.calculator
    }
}

impl Default for CalculatorWidget {
    fn default() -> Self {
        Self::new()
    }
}

impl Program for CalculatorWidget {
    fn id(&self) -> ProgramId {
        ProgramId::Calculator
    }

    fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return false;
        }

        match key.code {
            KeyCode::Enter | KeyCode::Char('=') => {
                self.calculator.evaluate();
            }
            KeyCode::Char(c) => self.calculator.push_char(c),
            KeyCode::Backspace => self.calculator.backspace(),
            KeyCode::Delete => self.calculator.clear(),
            _ => return false,
        }
        true
    }

    fn render(&self, frame: &mut Frame, area: Rect) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // input box
                Constraint::Length(1), // spacer
                Constraint::Length(1), // result
                Constraint::Min(0),
            ])
            .split(area);

        let input_block = Block::default()
            .title(" Expression ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(DEFAULT_THEME.border_normal));

        let input = self.calculator.input();
        let input_line = if input.is_empty() {
            Line::from(Span::styled(PLACEHOLDER, Style::default().fg(DEFAULT_THEME.comment)))
        } else {
            Line::from(Span::styled(input, Style::default().fg(DEFAULT_THEME.fg)))
        };
        frame.render_widget(Paragraph::new(input_line).block(input_block), rows[0]);

        // Cursor sits after the typed text, clamped to the box
        let inner_width = rows[0].width.saturating_sub(2);
        let typed = input.chars().count().min(u16::MAX as usize) as u16;
        frame.set_cursor_position(Position::new(
            rows[0].x + 1 + typed.min(inner_width.saturating_sub(1)),
            rows[0].y + 1,
        ));

        let result_style = match self.calculator.last_result() {
            Some(Err(_)) => Style::default().fg(DEFAULT_THEME.error).add_modifier(Modifier::BOLD),
            _ => Style::default().fg(DEFAULT_THEME.result).add_modifier(Modifier::BOLD),
        };
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(self.calculator.display(), result_style))),
            rows[2],
        );
    }

    fn status(&self) -> String {
        match self.calculator.last_result() {
            None => "Type an expression, Enter to evaluate".to_string(),
            Some(Ok(_)) => format!("= {}", self.calculator.display()),
            Some(Err(err)) => format!("Invalid expression: {}", err),
        }
    }
}
