//! Text editor widget: a multi-line text area with a live word count

use crate::host::{Program, ProgramId};
use crate::text::{TextBuffer, DEFAULT_TEXT};
use crate::ui::theme::DEFAULT_THEME;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Position, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

pub struct TextEditorWidget {
    buffer: TextBuffer,
    /// Cursor as a char index into the content, `0..=char_count`
    cursor: usize,
}

impl TextEditorWidget {
    pub fn new() -> Self {
        let buffer = TextBuffer::with_content(DEFAULT_TEXT);
        let cursor = buffer.char_count();
        TextEditorWidget { buffer, cursor }
    }

    pub fn buffer(&self) -> &TextBuffer {
        &self.buffer
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    fn byte_offset(&self, char_index: usize) -> usize {
        let content = self.buffer.content();
        content
            .char_indices()
            .nth(char_index)
            .map_or(content.len(), |(offset, _)| offset)
    }

    fn insert(&mut self, ch: char) {
        let mut content = self.buffer.content().to_string();
        content.insert(self.byte_offset(self.cursor), ch);
        self.buffer.set_content(content);
        self.cursor += 1;
    }

    fn delete_before_cursor(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        self.delete_at_cursor();
    }

    fn delete_at_cursor(&mut self) {
        if self.cursor >= self.buffer.char_count() {
            return;
        }
        let mut content = self.buffer.content().to_string();
        content.remove(self.byte_offset(self.cursor));
        self.buffer.set_content(content);
    }

    /// (row, column) of the cursor, both in chars
    fn cursor_row_col(&self) -> (usize, usize) {
        let mut row = 0;
        let mut col = 0;
        for ch in self.buffer.content().chars().take(self.cursor) {
            if ch == '\n' {
                row += 1;
                col = 0;
            } else {
                col += 1;
            }
        }
        (row, col)
    }

    /// Move to `row`, keeping the column where the target line is long enough
    fn move_to_row(&mut self, row: usize, col: usize) {
        let mut index = 0;
        for (current, line) in self.buffer.content().split('\n').enumerate() {
            let len = line.chars().count();
            if current == row {
                self.cursor = index + col.min(len);
                return;
            }
            index += len + 1;
        }
    }

    fn line_start(&self) -> usize {
        let (_, col) = self.cursor_row_col();
        self.cursor - col
    }

    fn line_end(&self) -> usize {
        let rest = self.buffer.content().chars().skip(self.cursor);
        self.cursor + rest.take_while(|&ch| ch != '\n').count()
    }
}

impl Default for TextEditorWidget {
    fn default() -> Self {
        Self::new()
    }
}

impl Program for TextEditorWidget {
    fn id(&self) -> ProgramId {
        ProgramId::TextEditor
    }

    fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return false;
        }

        match key.code {
            KeyCode::Char(c) => self.insert(c),
            KeyCode::Enter => self.insert('\n'),
            KeyCode::Backspace => self.delete_before_cursor(),
            KeyCode::Delete => self.delete_at_cursor(),
            KeyCode::Left => self.cursor = self.cursor.saturating_sub(1),
            KeyCode::Right => self.cursor = (self.cursor + 1).min(self.buffer.char_count()),
            KeyCode::Home => self.cursor = self.line_start(),
            KeyCode::End => self.cursor = self.line_end(),
            KeyCode::Up => {
                let (row, col) = self.cursor_row_col();
                if row > 0 {
                    self.move_to_row(row - 1, col);
                }
            }
            KeyCode::Down => {
                let (row, col) = self.cursor_row_col();
                self.move_to_row(row + 1, col);
            }
            _ => return false,
        }
        true
    }

    fn render(&self, frame: &mut Frame, area: Rect) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(3), Constraint::Length(1)])
            .split(area);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(DEFAULT_THEME.border_normal));

        // Keep the cursor row inside the box
        let (row, col) = self.cursor_row_col();
        let visible_height = rows[0].height.saturating_sub(2).max(1) as usize;
        let scroll = row.saturating_sub(visible_height - 1);

        let lines: Vec<Line> = self
            .buffer
            .content()
            .split('\n')
            .map(|line| Line::from(Span::styled(line, Style::default().fg(DEFAULT_THEME.fg))))
            .collect();

        let scroll_rows = scroll.min(u16::MAX as usize) as u16;
        frame.render_widget(Paragraph::new(lines).block(block).scroll((scroll_rows, 0)), rows[0]);

        let inner_width = rows[0].width.saturating_sub(2) as usize;
        let x = rows[0].x + 1 + col.min(inner_width.saturating_sub(1)) as u16;
        let y = rows[0].y + 1 + (row - scroll) as u16;
        frame.set_cursor_position(Position::new(x, y));

        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                counted(self.buffer.word_count(), "word"),
                Style::default().fg(DEFAULT_THEME.comment),
            ))),
            rows[1],
        );
    }

    fn status(&self) -> String {
        let (row, col) = self.cursor_row_col();
        format!(
            "{}, {} | Ln {}, Col {}",
            counted(self.buffer.word_count(), "word"),
            counted(self.buffer.char_count(), "char"),
            row + 1,
            col + 1
        )
    }
}

/// "1 word", "2 words"
fn counted(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("1 {}", noun)
    } else {
        format!("{} {}s", count, noun)
    }
}
