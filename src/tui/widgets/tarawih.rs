use ratatui::{
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::models::TARAWIH_MAX;
use crate::tui::theme;
use crate::utils::format::progress_bar;

pub fn render(frame: &mut Frame, area: Rect, rakahs: u8) {
    let block = Block::default()
        .title(Span::styled(" Tarawih ", theme::gold()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme::border())
        .style(theme::surface());

    let bar = progress_bar(rakahs as u32, TARAWIH_MAX as u32, 16);
    let bar_style = if rakahs == TARAWIH_MAX {
        theme::green().add_modifier(Modifier::BOLD)
    } else {
        theme::amber()
    };

    let count_line = Line::from(vec![
        Span::styled("  ", theme::dim()),
        Span::styled(bar, bar_style),
        Span::styled(
            format!("  {}/{} rak'ahs", rakahs, TARAWIH_MAX),
            theme::bold(),
        ),
    ]);

    let hint = if rakahs == TARAWIH_MAX {
        Line::from(Span::styled("  Full set — bonus point earned", theme::green()))
    } else {
        Line::from(Span::styled("  [+]/[-] adjust", theme::dim()))
    };

    let paragraph = Paragraph::new(vec![Line::from(""), count_line, hint]).block(block);
    frame.render_widget(paragraph, area);
}
