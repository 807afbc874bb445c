//! Header line: running program indicator and the program tab strip

use crate::host::{ProgramEntry, ProgramId};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

/// Render the header.
///
/// The left half reads "Running program: <label>"; the right half lists every
/// registry entry with its function key, the active one highlighted.
pub fn render_header(frame: &mut Frame, area: Rect, entries: &[ProgramEntry], active: ProgramId) {
    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let bar_style = Style::default().bg(DEFAULT_THEME.highlight_bg);
    let active_label = entries
        .iter()
        .find(|entry| entry.id == active)
        .map_or("", |entry| entry.label);

    let left = Line::from(vec![
        Span::styled(" ● ", bar_style.fg(DEFAULT_THEME.success)),
        Span::styled("Running program: ", bar_style.fg(DEFAULT_THEME.comment)),
        Span::styled(
            active_label,
            bar_style.fg(DEFAULT_THEME.fg).add_modifier(Modifier::BOLD),
        ),
    ]);
    frame.render_widget(
        Paragraph::new(left).style(bar_style).alignment(Alignment::Left),
        layout[0],
    );

    let mut tabs = Vec::with_capacity(entries.len() * 2);
    for (i, entry) in entries.iter().enumerate() {
        let style = if entry.id == active {
            Style::default()
                .bg(DEFAULT_THEME.primary)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD)
        } else {
            bar_style.fg(DEFAULT_THEME.fg)
        };
        tabs.push(Span::styled(format!(" F{} {} ", i + 1, entry.label), style));
        tabs.push(Span::styled(" ", bar_style));
    }
    frame.render_widget(
        Paragraph::new(Line::from(tabs)).style(bar_style).alignment(Alignment::Right),
        layout[1],
    );
}
