use anyhow::Result;
use chrono::NaiveDate;
use crossterm::event::{KeyCode, KeyEventKind};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};
use std::time::Duration;

use crate::config::AppConfig;
use crate::insight;
use crate::models::{DayRecord, PrayerName, MAX_DAILY_SCORE};
use crate::store::{GoalStore, HistoryStore};
use crate::tui::events::{Event, EventHandler};
use crate::tui::theme;
use crate::tui::widgets::{goals, header, prayers, progress, reflection, statusbar, tarawih};
use crate::utils::date::{format_date_key, ramadan_day_number, today};
use crate::utils::format::{progress_bar, ramadan_label};
use crate::utils::hijri::hijri_display;
use crate::utils::score::{current_streak, daily_score, history_stats, total_deeds};

#[derive(Debug, Clone, PartialEq)]
pub enum View {
    Dashboard,
    Stats,
    Help,
}

pub struct App {
    pub view: View,
    pub config: AppConfig,
    pub history: HistoryStore,
    pub goals: GoalStore,
    pub selected: NaiveDate,
    pub focus_idx: usize,
    pub should_quit: bool,
    pub show_goals_overlay: bool,

    // Cached state (refreshed after every action)
    pub record: DayRecord,
    pub score: u8,
    pub streak: u32,
    pub total: u32,
    pub reflection: String,
    pub hijri_str: String,
}

impl App {
    pub fn new(config: AppConfig, history: HistoryStore, goals: GoalStore) -> Self {
        let mut app = App {
            view: View::Dashboard,
            config,
            history,
            goals,
            selected: today(),
            focus_idx: 0,
            should_quit: false,
            show_goals_overlay: false,
            record: DayRecord::default(),
            score: 0,
            streak: 0,
            total: 0,
            reflection: String::new(),
            hijri_str: String::new(),
        };
        app.refresh();
        app
    }

    fn selected_key(&self) -> String {
        format_date_key(self.selected)
    }

    fn refresh(&mut self) {
        let key = self.selected_key();
        self.record = self.history.day(&key);
        self.score = daily_score(&self.record);
        self.streak = current_streak(self.history.days(), today());
        self.total = total_deeds(self.history.days());
        self.reflection = insight::reflection(self.history.days(), &key);
        self.hijri_str = hijri_display(self.selected, self.config.ramadan.hijri_offset);
    }

    pub fn handle_key(&mut self, key: crossterm::event::KeyEvent) {
        // Only handle actual key presses; some terminals also emit release/repeat events
        if key.kind != KeyEventKind::Press {
            return;
        }
        match self.view {
            View::Dashboard => self.handle_dashboard_key(key),
            View::Stats => self.handle_stats_key(key),
            View::Help => self.handle_help_key(key),
        }
    }

    fn handle_dashboard_key(&mut self, key: crossterm::event::KeyEvent) {
        // The goals overlay swallows the next key (g toggles, others dismiss)
        if self.show_goals_overlay {
            self.show_goals_overlay = false;
            return;
        }

        match key.code {
            KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Char('g') => {
                self.show_goals_overlay = true;
            }
            KeyCode::Char('?') => {
                self.view = View::Help;
            }
            KeyCode::Char('s') => {
                self.view = View::Stats;
            }
            KeyCode::Up => {
                if self.focus_idx > 0 {
                    self.focus_idx -= 1;
                }
            }
            KeyCode::Down => {
                if self.focus_idx + 1 < PrayerName::all().len() {
                    self.focus_idx += 1;
                }
            }
            // m / Enter toggles the focused prayer; r the Quran flag
            KeyCode::Char('m') | KeyCode::Enter => self.toggle_focused_prayer(),
            KeyCode::Char('r') => self.toggle_focused_quran(),
            KeyCode::Char('+') | KeyCode::Char('=') => self.adjust_tarawih(1),
            KeyCode::Char('-') | KeyCode::Char('_') => self.adjust_tarawih(-1),
            KeyCode::Char('[') | KeyCode::Left => self.step_day(-1),
            KeyCode::Char(']') | KeyCode::Right => self.step_day(1),
            KeyCode::Char('t') => {
                self.selected = today();
                self.refresh();
            }
            _ => {}
        }
    }

    fn handle_stats_key(&mut self, key: crossterm::event::KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Char('s') => {
                self.view = View::Dashboard;
            }
            _ => {}
        }
    }

    fn handle_help_key(&mut self, key: crossterm::event::KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Char('?') => {
                self.view = View::Dashboard;
            }
            _ => {}
        }
    }

    fn focused_prayer(&self) -> Option<PrayerName> {
        PrayerName::all().get(self.focus_idx).copied()
    }

    fn toggle_focused_prayer(&mut self) {
        if let Some(prayer) = self.focused_prayer() {
            let key = self.selected_key();
            self.history.toggle_prayer(&key, prayer);
            self.refresh();
        }
    }

    fn toggle_focused_quran(&mut self) {
        if let Some(prayer) = self.focused_prayer() {
            let key = self.selected_key();
            self.history.toggle_quran(&key, prayer);
            self.refresh();
        }
    }

    fn adjust_tarawih(&mut self, delta: i16) {
        let key = self.selected_key();
        let next = (self.record.tarawih as i16 + delta).max(0) as u8;
        self.history.set_tarawih(&key, next);
        self.refresh();
    }

    fn step_day(&mut self, delta: i64) {
        let next = if delta < 0 {
            self.selected.pred_opt()
        } else {
            self.selected.succ_opt()
        };
        if let Some(date) = next {
            self.selected = date;
            self.focus_idx = 0;
            self.refresh();
        }
    }

    pub fn tick(&mut self) {
        // Streak and "today" roll over at midnight while the dashboard idles
        self.streak = current_streak(self.history.days(), today());
    }

    pub fn draw(&self, frame: &mut Frame) {
        match self.view {
            View::Dashboard => self.draw_dashboard(frame),
            View::Stats => self.draw_stats(frame),
            View::Help => {
                self.draw_dashboard(frame);
                self.draw_help_overlay(frame);
            }
        }

        if self.show_goals_overlay {
            goals::render_overlay(frame, self.goals.goals());
        }
    }

    fn draw_dashboard(&self, frame: &mut Frame) {
        let area = frame.area();

        frame.render_widget(Block::default().style(theme::base()), area);

        let outer_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(5), // header
                Constraint::Min(0),    // body
                Constraint::Length(1), // status bar
            ])
            .split(area);

        let day_number = ramadan_day_number(self.selected, self.config.ramadan.start_date);
        let date_str = self.selected.format("%A, %b %d, %Y").to_string();
        header::render(
            frame,
            outer_chunks[0],
            &self.hijri_str,
            &date_str,
            &ramadan_label(day_number),
        );

        statusbar::render(frame, outer_chunks[2]);

        let body = outer_chunks[1];
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(body);

        // Left column: Prayers + Tarawih
        let left_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(7), // prayers
                Constraint::Length(5), // tarawih
                Constraint::Min(0),
            ])
            .split(columns[0]);

        prayers::render(frame, left_chunks[0], &self.record, self.focus_idx);
        tarawih::render(frame, left_chunks[1], self.record.tarawih);

        // Right column: Progress + Reflection
        let right_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(7), // progress
                Constraint::Min(0),    // reflection
            ])
            .split(columns[1]);

        progress::render(frame, right_chunks[0], self.score, self.streak, self.total);
        reflection::render(frame, right_chunks[1], &self.reflection, &self.record.note);
    }

    fn draw_stats(&self, frame: &mut Frame) {
        let area = frame.area();
        frame.render_widget(Block::default().style(theme::base()), area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(area);

        let title = Paragraph::new(Line::from(vec![
            Span::styled("  Journey  ", theme::gold().add_modifier(Modifier::BOLD)),
            Span::styled("  [Esc] back", theme::dim()),
        ]));
        frame.render_widget(title, chunks[0]);

        let active: Vec<_> = history_stats(self.history.days(), self.config.ramadan.start_date)
            .into_iter()
            .filter(|s| s.is_ramadan_day && s.total_score > 0)
            .collect();

        let mut lines = vec![Line::from("")];

        if active.is_empty() {
            lines.push(Line::from(Span::styled("  No activity yet.", theme::dim())));
        } else {
            let avg: f64 =
                active.iter().map(|s| s.total_score as f64).sum::<f64>() / active.len() as f64;
            lines.push(Line::from(vec![
                Span::styled("  Days active:  ", theme::dim()),
                Span::styled(
                    format!("{}", active.len()),
                    theme::green().add_modifier(Modifier::BOLD),
                ),
            ]));
            lines.push(Line::from(vec![
                Span::styled("  Avg score:    ", theme::dim()),
                Span::styled(format!("{:.1}/{}", avg, MAX_DAILY_SCORE), theme::amber()),
            ]));
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                "  Day    Date          Score         P / Q / T",
                theme::gold(),
            )));
            lines.push(Line::from(""));

            for stat in &active {
                let bar = progress_bar(stat.total_score as u32, MAX_DAILY_SCORE as u32, 11);
                lines.push(Line::from(vec![
                    Span::styled(
                        format!("  {:>3}    ", stat.ramadan_day_number),
                        theme::bold(),
                    ),
                    Span::styled(format!("{}  ", stat.date_key), theme::dim()),
                    Span::styled(bar, theme::green()),
                    Span::styled(
                        format!("  {:>2}/{}", stat.total_score, MAX_DAILY_SCORE),
                        theme::bold(),
                    ),
                    Span::styled(
                        format!(
                            "   {} / {} / {}",
                            stat.prayer_score, stat.quran_score, stat.tarawih_score
                        ),
                        theme::dim(),
                    ),
                ]));
            }
        }

        let paragraph = Paragraph::new(lines);
        frame.render_widget(paragraph, chunks[1]);
    }

    fn draw_help_overlay(&self, frame: &mut Frame) {
        let area = frame.area();

        let popup_area = Rect {
            x: area.width / 4,
            y: area.height / 4,
            width: area.width / 2,
            height: area.height / 2,
        };

        frame.render_widget(Clear, popup_area);

        let help_text = vec![
            Line::from(Span::styled(
                "  Keybindings",
                theme::gold().add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(vec![
                Span::styled("  [m] / Enter  ", theme::gold()),
                Span::styled("Toggle prayer prayed", theme::dim()),
            ]),
            Line::from(vec![
                Span::styled("  [r]          ", theme::gold()),
                Span::styled("Toggle Quran after prayer", theme::dim()),
            ]),
            Line::from(vec![
                Span::styled("  [+] / [-]    ", theme::gold()),
                Span::styled("Adjust Tarawih rak'ahs", theme::dim()),
            ]),
            Line::from(vec![
                Span::styled("  [[] / []]    ", theme::gold()),
                Span::styled("Previous / next day", theme::dim()),
            ]),
            Line::from(vec![
                Span::styled("  [t]          ", theme::gold()),
                Span::styled("Jump back to today", theme::dim()),
            ]),
            Line::from(vec![
                Span::styled("  [g]          ", theme::gold()),
                Span::styled("Goals overlay", theme::dim()),
            ]),
            Line::from(vec![
                Span::styled("  [s]          ", theme::gold()),
                Span::styled("Journey stats", theme::dim()),
            ]),
            Line::from(vec![
                Span::styled("  [↑ ↓]        ", theme::gold()),
                Span::styled("Navigate prayers", theme::dim()),
            ]),
            Line::from(vec![
                Span::styled("  [?]          ", theme::gold()),
                Span::styled("Toggle help", theme::dim()),
            ]),
            Line::from(vec![
                Span::styled("  [Esc]        ", theme::gold()),
                Span::styled("Quit", theme::dim()),
            ]),
        ];

        let block = Block::default()
            .title(Span::styled(" Help ", theme::gold()))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme::gold())
            .style(theme::surface());

        let paragraph = Paragraph::new(help_text).block(block);
        frame.render_widget(paragraph, popup_area);
    }
}

/// Run the TUI event loop.
pub fn run(config: AppConfig, history: HistoryStore, goals: GoalStore) -> Result<()> {
    let mut app = App::new(config, history, goals);

    let mut terminal = ratatui::init();
    let events = EventHandler::new(Duration::from_millis(500));

    loop {
        terminal.draw(|frame| app.draw(frame))?;

        match events.next()? {
            Event::Key(key) => {
                app.handle_key(key);
                if app.should_quit {
                    break;
                }
            }
            Event::Tick => {
                app.tick();
            }
        }
    }

    ratatui::restore();
    Ok(())
}
