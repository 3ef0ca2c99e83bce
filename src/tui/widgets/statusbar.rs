use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::theme;

pub fn render(frame: &mut Frame, area: Rect) {
    let line = Line::from(vec![
        Span::styled(" [m] pray ", theme::dim()),
        Span::styled("· [r] quran ", theme::dim()),
        Span::styled("· [+/-] tarawih ", theme::dim()),
        Span::styled("· [ [ ] ] day ", theme::dim()),
        Span::styled("· [g] goals ", theme::dim()),
        Span::styled("· [s] stats ", theme::dim()),
        Span::styled("· [?] help ", theme::dim()),
        Span::styled("· [Esc] quit", theme::dim()),
    ]);

    let paragraph = Paragraph::new(line).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}
