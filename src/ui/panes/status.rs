//! Status bar rendering with mode indicators and keybindings

use crate::engine::Calculator;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// One indicator lamp: lit with `color` when `on`, dimmed otherwise
fn indicator(label: &str, on: bool, color: Color) -> Span<'static> {
    let style = if on {
        Style::default()
            .bg(color)
            .fg(Color::Black)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
            .bg(DEFAULT_THEME.status_bg)
            .fg(DEFAULT_THEME.comment)
    };
    Span::styled(format!(" {} ", label), style)
}

/// Render the status bar at the bottom.
pub fn render_status_bar(frame: &mut Frame, area: Rect, message: &str, calculator: &Calculator) {
    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    // Left side: mode lamps and last message
    let sep_style = Style::default()
        .bg(DEFAULT_THEME.status_bg)
        .fg(DEFAULT_THEME.comment);

    let left_spans = vec![
        indicator("S", calculator.shift_active(), DEFAULT_THEME.secondary),
        indicator("A", calculator.alpha_active(), DEFAULT_THEME.success),
        indicator(calculator.angle_mode().label(), true, DEFAULT_THEME.primary),
        indicator("M", calculator.memory_indicator_active(), DEFAULT_THEME.primary),
        indicator("E", calculator.has_error(), DEFAULT_THEME.error),
        Span::styled(" | ", sep_style),
        Span::styled(
            format!(" {} ", message),
            Style::default()
                .bg(DEFAULT_THEME.status_bg)
                .fg(if calculator.has_error() {
                    DEFAULT_THEME.error
                } else {
                    DEFAULT_THEME.fg
                }),
        ),
    ];

    let left_paragraph = Paragraph::new(Line::from(left_spans))
        .style(Style::default().bg(DEFAULT_THEME.status_bg))
        .alignment(Alignment::Left);

    frame.render_widget(left_paragraph, layout[0]);

    // Right side: keybinds
    let key_style = Style::default().bg(DEFAULT_THEME.comment).fg(Color::Black);
    let desc_style = Style::default()
        .bg(DEFAULT_THEME.status_bg)
        .fg(DEFAULT_THEME.fg);

    let right_spans = vec![
        Span::styled(" ←↑↓→ ", key_style),
        Span::styled(" move ", desc_style),
        Span::styled("│", sep_style),
        Span::styled(" ⎵ ", key_style),
        Span::styled(" press ", desc_style),
        Span::styled("│", sep_style),
        Span::styled(" ⌦ / esc ", key_style),
        Span::styled(" CE/AC ", desc_style),
        Span::styled("│", sep_style),
        Span::styled("q", key_style),
        Span::styled(" quit ", desc_style),
    ];

    let right_paragraph = Paragraph::new(Line::from(right_spans))
        .style(Style::default().bg(DEFAULT_THEME.status_bg))
        .alignment(Alignment::Right);

    frame.render_widget(right_paragraph, layout[1]);
}
