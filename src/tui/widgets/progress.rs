use ratatui::{
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::models::MAX_DAILY_SCORE;
use crate::tui::theme;
use crate::utils::format::{days_label, progress_bar};

/// Daily score, streak, and lifetime total in one panel.
pub fn render(frame: &mut Frame, area: Rect, score: u8, streak: u32, total_deeds: u32) {
    let block = Block::default()
        .title(Span::styled(" Progress ", theme::gold()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme::border())
        .style(theme::surface());

    let percent = (score as f64 / MAX_DAILY_SCORE as f64 * 100.0).round() as u32;
    let score_line = Line::from(vec![
        Span::styled("  ", theme::dim()),
        Span::styled(
            progress_bar(score as u32, MAX_DAILY_SCORE as u32, 14),
            theme::green(),
        ),
        Span::styled(
            format!("  {}/{}", score, MAX_DAILY_SCORE),
            theme::bold().add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!("  ({}%)", percent), theme::dim()),
    ]);

    let streak_line = Line::from(vec![
        Span::styled("  Streak       ", theme::dim()),
        Span::styled(days_label(streak), theme::green().add_modifier(Modifier::BOLD)),
    ]);

    let total_line = Line::from(vec![
        Span::styled("  Total deeds  ", theme::dim()),
        Span::styled(format!("{} logged", total_deeds), theme::bold()),
    ]);

    let text = vec![
        Line::from(""),
        score_line,
        Line::from(""),
        streak_line,
        total_line,
    ];
    let paragraph = Paragraph::new(text).block(block);
    frame.render_widget(paragraph, area);
}
