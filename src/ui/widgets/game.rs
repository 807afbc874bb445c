//! Tic-tac-toe widget

use crate::game::{Board, GameStatus, Mark};
use crate::host::{Program, ProgramId};
use crate::ui::theme::DEFAULT_THEME;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

const SIDE: usize = 3;

pub struct GameWidget {
    board: Board,
    /// Cell the keyboard cursor is on
    cursor: usize,
}

impl GameWidget {
    pub fn new() -> Self {
        GameWidget {
            board: Board::new(),
            cursor: 4,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    fn move_cursor(&mut self, d_row: isize, d_col: isize) {
        let row = (self.cursor / SIDE) as isize + d_row;
        let col = (self.cursor % SIDE) as isize + d_col;
        let max = SIDE as isize - 1;
        self.cursor = (row.clamp(0, max) as usize) * SIDE + col.clamp(0, max) as usize;
    }

    fn cell_span(&self, index: usize) -> Span<'static> {
        let winning = self
            .board
            .winning_line()
            .is_some_and(|line| line.contains(&index));

        let (text, fg) = match self.board.cell(index) {
            Some(mark @ Mark::First) => (format!(" {} ", mark), DEFAULT_THEME.mark_first),
            Some(mark @ Mark::Second) => (format!(" {} ", mark), DEFAULT_THEME.mark_second),
            // Empty cells show their number key
            None => (format!(" {} ", index + 1), DEFAULT_THEME.comment),
        };

        let mut style = Style::default().fg(fg);
        if self.board.cell(index).is_some() {
            style = style.add_modifier(Modifier::BOLD);
        }
        if winning {
            style = style.bg(DEFAULT_THEME.success).fg(Color::Black);
        } else if index == self.cursor && !self.board.is_finished() {
            style = style.bg(DEFAULT_THEME.highlight_bg);
        }
        Span::styled(text, style)
    }

    fn status_line(&self) -> Line<'static> {
        match self.board.status() {
            GameStatus::Won(mark) => Line::from(vec![
                Span::styled("Winner: ", Style::default().fg(DEFAULT_THEME.fg)),
                Span::styled(
                    mark.to_string(),
                    Style::default().fg(DEFAULT_THEME.success).add_modifier(Modifier::BOLD),
                ),
            ]),
            GameStatus::Draw => Line::from(Span::styled(
                "Draw",
                Style::default().fg(DEFAULT_THEME.secondary).add_modifier(Modifier::BOLD),
            )),
            GameStatus::InProgress => Line::from(vec![
                Span::styled("Turn: ", Style::default().fg(DEFAULT_THEME.fg)),
                Span::styled(
                    self.board.turn().to_string(),
                    Style::default().fg(DEFAULT_THEME.primary).add_modifier(Modifier::BOLD),
                ),
            ]),
        }
    }
}

impl Default for GameWidget {
    fn default() -> Self {
        Self::new()
    }
}

impl Program for GameWidget {
    fn id(&self) -> ProgramId {
        ProgramId::Game
    }

    fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return false;
        }

        match key.code {
            KeyCode::Up => self.move_cursor(-1, 0),
            KeyCode::Down => self.move_cursor(1, 0),
            KeyCode::Left => self.move_cursor(0, -1),
            KeyCode::Right => self.move_cursor(0, 1),
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.board.place_mark(self.cursor);
            }
            KeyCode::Char(c @ '1'..='9') => {
                let index = c as usize - '1' as usize;
                self.cursor = index;
                self.board.place_mark(index);
            }
            KeyCode::Char('r') | KeyCode::Char('R') => {
                self.board.reset();
                self.cursor = 4;
            }
            _ => return false,
        }
        true
    }

    fn render(&self, frame: &mut Frame, area: Rect) {
        let sep_style = Style::default().fg(DEFAULT_THEME.border_normal);
        let mut lines: Vec<Line> = Vec::with_capacity(SIDE * 2 + 3);

        for row in 0..SIDE {
            if row > 0 {
                lines.push(Line::from(Span::styled("───┼───┼───", sep_style)));
            }
            let mut spans = Vec::with_capacity(SIDE * 2);
            for col in 0..SIDE {
                if col > 0 {
                    spans.push(Span::styled("│", sep_style));
                }
                spans.push(self.cell_span(row * SIDE + col));
            }
            lines.push(Line::from(spans));
        }

        lines.push(Line::default());
        lines.push(self.status_line());
        lines.push(Line::from(Span::styled(
            "r: restart",
            Style::default().fg(DEFAULT_THEME.comment),
        )));

        frame.render_widget(Paragraph::new(lines), area);
    }

    fn status(&self) -> String {
        match self.board.status() {
            GameStatus::InProgress => format!("Turn: {}", self.board.turn()),
            GameStatus::Won(mark) => format!("Winner: {}", mark),
            GameStatus::Draw => "Draw".to_string(),
        }
    }
}
