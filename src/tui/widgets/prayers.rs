use ratatui::{
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem},
    Frame,
};

use crate::models::{DayRecord, PrayerName};
use crate::tui::theme;

/// One row per prayer: prayed column and Quran column.
pub fn render(frame: &mut Frame, area: Rect, record: &DayRecord, focused_idx: usize) {
    let block = Block::default()
        .title(Span::styled(" Prayers ", theme::gold()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme::gold())
        .style(theme::surface());

    let items: Vec<ListItem> = PrayerName::all()
        .into_iter()
        .enumerate()
        .map(|(i, prayer)| {
            let is_focused = i == focused_idx;

            let (prayed_icon, prayed_style) = if record.prayed(prayer) {
                ("●", theme::green())
            } else {
                ("○", theme::dim())
            };
            let (quran_icon, quran_style) = if record.recited(prayer) {
                ("●", theme::amber())
            } else {
                ("○", theme::dim())
            };

            let name_style = if is_focused {
                theme::gold().add_modifier(Modifier::BOLD)
            } else {
                theme::bold()
            };
            let marker = if is_focused { "▸" } else { " " };

            let line = Line::from(vec![
                Span::styled(format!(" {} ", marker), theme::gold()),
                Span::styled(format!("{:<9}", prayer.display_name()), name_style),
                Span::styled(prayed_icon, prayed_style),
                Span::styled(" prayed   ", theme::dim()),
                Span::styled(quran_icon, quran_style),
                Span::styled(" quran", theme::dim()),
            ]);

            ListItem::new(line)
        })
        .collect();

    let list = List::new(items).block(block);
    frame.render_widget(list, area);
}
