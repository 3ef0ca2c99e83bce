use ratatui::{
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

use crate::models::Goal;
use crate::tui::theme;

/// Centered goals popup, toggled with `g` on the dashboard.
pub fn render_overlay(frame: &mut Frame, goals: &[Goal]) {
    let area = frame.area();
    let popup_area = Rect {
        x: area.width / 4,
        y: area.height / 4,
        width: area.width / 2,
        height: (area.height / 2).min(20),
    };

    frame.render_widget(Clear, popup_area);

    let mut lines = vec![Line::from("")];

    if goals.is_empty() {
        lines.push(Line::from(Span::styled("  No goals yet", theme::dim())));
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "  Add one with `barakah goals add`",
            theme::dim(),
        )));
    } else {
        let done = goals.iter().filter(|g| g.completed).count();
        lines.push(Line::from(vec![
            Span::styled("  ", theme::dim()),
            Span::styled(
                format!("{}/{} completed", done, goals.len()),
                theme::green().add_modifier(Modifier::BOLD),
            ),
        ]));
        lines.push(Line::from(""));
        for goal in goals {
            let (icon, style) = if goal.completed {
                ("✓", theme::green())
            } else {
                ("○", theme::dim())
            };
            lines.push(Line::from(vec![
                Span::styled(format!("  {} ", icon), style),
                Span::styled(goal.text.clone(), theme::bold()),
            ]));
        }
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "  `barakah goals` to add / toggle / delete",
            theme::dim(),
        )));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("  [any key] close", theme::dim())));

    let block = Block::default()
        .title(Span::styled(" Goals ", theme::gold()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme::amber())
        .style(theme::surface());

    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, popup_area);
}
