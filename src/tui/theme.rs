use ratatui::style::{Color, Modifier, Style};

pub const BG: Color = Color::Rgb(14, 18, 16);
pub const SURFACE: Color = Color::Rgb(22, 28, 24);
pub const BORDER: Color = Color::Rgb(44, 56, 46);
pub const TEXT: Color = Color::Rgb(214, 224, 210);
pub const TEXT_DIM: Color = Color::Rgb(110, 126, 110);
pub const GOLD: Color = Color::Rgb(204, 168, 82);
pub const GREEN: Color = Color::Rgb(96, 160, 112);
pub const AMBER: Color = Color::Rgb(214, 146, 70);

pub fn base() -> Style {
    Style::default().fg(TEXT).bg(BG)
}

pub fn surface() -> Style {
    Style::default().fg(TEXT).bg(SURFACE)
}

pub fn dim() -> Style {
    Style::default().fg(TEXT_DIM)
}

pub fn gold() -> Style {
    Style::default().fg(GOLD)
}

pub fn green() -> Style {
    Style::default().fg(GREEN)
}

pub fn amber() -> Style {
    Style::default().fg(AMBER)
}

pub fn bold() -> Style {
    Style::default().fg(TEXT).add_modifier(Modifier::BOLD)
}

pub fn border() -> Style {
    Style::default().fg(BORDER)
}
