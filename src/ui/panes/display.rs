//! Calculator display (LCD) rendering

use crate::engine::Calculator;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
    Frame,
};

/// Render the display: the pending operation on top, the display text below
pub fn render_display_pane(frame: &mut Frame, area: Rect, calculator: &Calculator) {
    let block = Block::default()
        .title(" calctty ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal))
        .padding(Padding::new(1, 1, 0, 0))
        .style(Style::default().bg(DEFAULT_THEME.display_bg));

    let pending = match (calculator.pending_operand(), calculator.pending_operator()) {
        (Some(operand), Some(op)) => format!("{} {}", operand, op),
        _ => String::new(),
    };

    let value_style = if calculator.has_error() {
        Style::default()
            .fg(DEFAULT_THEME.error)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
            .fg(DEFAULT_THEME.fg)
            .add_modifier(Modifier::BOLD)
    };

    let lines = vec![
        Line::from(Span::styled(
            pending,
            Style::default().fg(DEFAULT_THEME.comment),
        )),
        Line::from(Span::styled(calculator.display().to_string(), value_style)),
    ];

    let paragraph = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Right);
    frame.render_widget(paragraph, area);
}
