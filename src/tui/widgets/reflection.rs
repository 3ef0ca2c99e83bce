use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

use crate::tui::theme;

pub fn render(frame: &mut Frame, area: Rect, text: &str, note: &str) {
    let block = Block::default()
        .title(Span::styled(" Reflection ", theme::gold()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme::border())
        .style(theme::surface());

    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(format!("  “{}”", text), theme::amber())),
    ];

    if !note.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled("  Your note: ", theme::dim()),
            Span::styled(note.to_string(), theme::bold()),
        ]));
    } else {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "  Add a note with `barakah note`",
            theme::dim(),
        )));
    }

    let paragraph = Paragraph::new(lines).block(block).wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}
