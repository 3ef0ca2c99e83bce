use anyhow::{anyhow, Result};
use std::io::{self, BufRead, Write};
use std::str::FromStr;

use crate::cli::args::GoalCommands;
use crate::config::AppConfig;
use crate::insight;
use crate::models::{PrayerName, MAX_DAILY_SCORE, TARAWIH_MAX};
use crate::store::{GoalStore, HistoryStore};
use crate::utils::date::{format_date_key, parse_date_key, ramadan_day_number, today, today_key};
use crate::utils::format::{days_label, progress_bar, ramadan_label, score_glyph};
use crate::utils::score::{current_streak, daily_score, day_stats, history_stats, total_deeds};

// ─── ANSI helpers ────────────────────────────────────────────────────────────

macro_rules! println_colored {
    ($color:expr, $($arg:tt)*) => {{
        print!("{}", $color);
        print!($($arg)*);
        println!("\x1b[0m");
    }};
}

const GREEN: &str = "\x1b[32m";
const AMBER: &str = "\x1b[33m";
const RED: &str = "\x1b[31m";
const DIM: &str = "\x1b[2m";
const BOLD: &str = "\x1b[1m";
const GOLD: &str = "\x1b[38;2;196;160;68m";

/// Resolve an optional `--date` argument to a canonical key; today if absent.
fn resolve_key(date: Option<&str>) -> Result<String> {
    match date {
        None => Ok(today_key()),
        Some(raw) => parse_date_key(raw)
            .map(format_date_key)
            .ok_or_else(|| anyhow!("Invalid date '{}'. Use YYYY-MM-DD", raw)),
    }
}

fn parse_prayer(raw: &str) -> Result<PrayerName> {
    PrayerName::from_str(raw)
        .map_err(|_| anyhow!("Unknown prayer '{}'. Use: fajr, dhuhr, asr, maghrib, isha", raw))
}

// ─── Mark prayer / Quran ─────────────────────────────────────────────────────

pub fn handle_mark(history: &mut HistoryStore, prayer_str: &str, date: Option<&str>) -> Result<()> {
    let prayer = parse_prayer(prayer_str)?;
    let key = resolve_key(date)?;

    history.toggle_prayer(&key, prayer);

    if history.day(&key).prayed(prayer) {
        println_colored!(GREEN, "  ✓ {} marked prayed — {}", prayer.display_name(), key);
    } else {
        println_colored!(DIM, "  ○ {} unmarked — {}", prayer.display_name(), key);
    }
    Ok(())
}

pub fn handle_quran(history: &mut HistoryStore, prayer_str: &str, date: Option<&str>) -> Result<()> {
    let prayer = parse_prayer(prayer_str)?;
    let key = resolve_key(date)?;

    history.toggle_quran(&key, prayer);

    if history.day(&key).recited(prayer) {
        println_colored!(GREEN, "  ✓ Quran after {} logged — {}", prayer.display_name(), key);
    } else {
        println_colored!(DIM, "  ○ Quran after {} unlogged — {}", prayer.display_name(), key);
    }
    Ok(())
}

// ─── Tarawih ─────────────────────────────────────────────────────────────────

pub fn handle_tarawih(history: &mut HistoryStore, rakahs: u8, date: Option<&str>) -> Result<()> {
    let key = resolve_key(date)?;

    history.set_tarawih(&key, rakahs);
    let logged = history.day(&key).tarawih;

    if logged == TARAWIH_MAX {
        println_colored!(GREEN, "  ✓ Tarawih complete — {}/{} rak'ahs ({})", logged, TARAWIH_MAX, key);
    } else {
        println_colored!(AMBER, "  ◑ Tarawih {}/{} rak'ahs ({})", logged, TARAWIH_MAX, key);
    }
    Ok(())
}

// ─── Note ────────────────────────────────────────────────────────────────────

pub fn handle_note(history: &mut HistoryStore, text: &str, date: Option<&str>) -> Result<()> {
    let key = resolve_key(date)?;
    history.set_note(&key, text);
    println_colored!(GREEN, "  ✓ Reflection saved for {}", key);
    Ok(())
}

// ─── Day view ────────────────────────────────────────────────────────────────

pub fn handle_day(history: &HistoryStore, config: &AppConfig, date: Option<&str>) -> Result<()> {
    let key = resolve_key(date)?;
    let record = history.day(&key);
    let stats = day_stats(&key, &record, config.ramadan.start_date);

    println!();
    println_colored!(GOLD, "  {} — {}", key, ramadan_label(stats.ramadan_day_number));
    println!();

    if record.is_empty() {
        println_colored!(DIM, "  Nothing logged yet.");
        println!();
    }

    for prayer in PrayerName::all() {
        let prayed = if record.prayed(prayer) { format!("{}●\x1b[0m prayed", GREEN) } else { format!("{}○\x1b[0m       ", DIM) };
        let quran = if record.recited(prayer) { format!("{}●\x1b[0m quran", AMBER) } else { format!("{}○\x1b[0m      ", DIM) };
        println!("  {:<8}  {}   {}", prayer.display_name(), prayed, quran);
    }

    println!();
    println!(
        "  Tarawih   {} {}/{}",
        progress_bar(record.tarawih as u32, TARAWIH_MAX as u32, 8),
        record.tarawih,
        TARAWIH_MAX
    );

    if !record.note.is_empty() {
        println!();
        println_colored!(DIM, "  “{}”", record.note);
    }

    println!();
    println_colored!(
        BOLD,
        "  Score  {}  {}/{} ({}%)",
        progress_bar(stats.total_score as u32, MAX_DAILY_SCORE as u32, 11),
        stats.total_score,
        MAX_DAILY_SCORE,
        stats.completion_percent()
    );
    println!();
    Ok(())
}

// ─── Goals ───────────────────────────────────────────────────────────────────

pub fn handle_goals(goals: &mut GoalStore, action: &GoalCommands) -> Result<()> {
    match action {
        GoalCommands::Add { text } => {
            let goal = goals.add(text);
            println_colored!(GREEN, "  ✓ Goal added ({}): {}", goal.id, goal.text);
        }
        GoalCommands::List => {
            println!();
            println_colored!(GOLD, "  Goals");
            println!();
            if goals.goals().is_empty() {
                println_colored!(DIM, "  No goals yet. Add one with `barakah goals add`.");
            }
            for goal in goals.goals() {
                let mark = if goal.completed {
                    format!("{}✓\x1b[0m", GREEN)
                } else {
                    format!("{}○\x1b[0m", DIM)
                };
                println!("  {}  {:<30}  {}{}\x1b[0m", mark, goal.text, DIM, goal.id);
            }
            println!();
        }
        GoalCommands::Toggle { id } => {
            if goals.toggle(id) {
                let done = goals
                    .goals()
                    .iter()
                    .find(|g| &g.id == id)
                    .map(|g| g.completed)
                    .unwrap_or(false);
                if done {
                    println_colored!(GREEN, "  ✓ Goal completed");
                } else {
                    println_colored!(DIM, "  ○ Goal reopened");
                }
            } else {
                println_colored!(AMBER, "  No goal with id {}", id);
            }
        }
        GoalCommands::Delete { id } => {
            if goals.delete(id) {
                println_colored!(GREEN, "  ✓ Goal deleted");
            } else {
                println_colored!(AMBER, "  No goal with id {}", id);
            }
        }
    }
    Ok(())
}

// ─── Stats ───────────────────────────────────────────────────────────────────

pub fn handle_stats(history: &HistoryStore, config: &AppConfig, week: bool) -> Result<()> {
    let today_date = today();
    let key = format_date_key(today_date);
    let score = daily_score(&history.day(&key));
    let streak = current_streak(history.days(), today_date);
    let total = total_deeds(history.days());
    let day_number = ramadan_day_number(today_date, config.ramadan.start_date);

    println!();
    println_colored!(GOLD, "  {}", ramadan_label(day_number));
    println!();
    println_colored!(
        BOLD,
        "  Today:        {}  {}/{}",
        progress_bar(score as u32, MAX_DAILY_SCORE as u32, 11),
        score,
        MAX_DAILY_SCORE
    );
    println_colored!(GREEN, "  Streak:       {}", days_label(streak));
    println!("  Total deeds:  {} logged", total);

    if week {
        println!();
        println_colored!(DIM, "  Last 7 days  (● = 9+, ◕ = 5-8, ◑ = 1-4, ○ = 0)");
        println!();
        print!("  ");
        for offset in (0..7).rev() {
            let day = today_date - chrono::Duration::days(offset);
            let day_score = daily_score(&history.day(&format_date_key(day)));
            let color = match day_score {
                0 => DIM,
                1..=4 => AMBER,
                _ => GREEN,
            };
            print!("{}{}\x1b[0m ", color, score_glyph(day_score));
        }
        println!();
    }

    println!();
    Ok(())
}

// ─── Reflect ─────────────────────────────────────────────────────────────────

pub fn handle_reflect(history: &HistoryStore) -> Result<()> {
    let line = insight::reflection(history.days(), &today_key());
    println!();
    println_colored!(AMBER, "  “{}”", line);
    println!();
    Ok(())
}

// ─── Export ──────────────────────────────────────────────────────────────────

pub fn handle_export(history: &HistoryStore, goals: &GoalStore, config: &AppConfig) -> Result<()> {
    let today_date = today();
    let streak = current_streak(history.days(), today_date);
    let total = total_deeds(history.days());

    println!("# barakah — Weekly Summary");
    println!("# {}", format_date_key(today_date));
    println!();
    println!("## Daily Score (last 7 days)");
    for offset in (0..7).rev() {
        let day = today_date - chrono::Duration::days(offset);
        let key = format_date_key(day);
        let score = daily_score(&history.day(&key));
        println!(
            "  {}  {:>2}/{}  {}",
            key,
            score,
            MAX_DAILY_SCORE,
            progress_bar(score as u32, MAX_DAILY_SCORE as u32, 11)
        );
    }

    let ramadan_days: Vec<_> = history_stats(history.days(), config.ramadan.start_date)
        .into_iter()
        .filter(|s| s.is_ramadan_day && s.total_score > 0)
        .collect();
    if !ramadan_days.is_empty() {
        let avg: f64 = ramadan_days.iter().map(|s| s.total_score as f64).sum::<f64>()
            / ramadan_days.len() as f64;
        println!();
        println!("## Ramadan so far");
        println!("  Days active:  {}", ramadan_days.len());
        println!("  Avg score:    {:.1}/{}", avg, MAX_DAILY_SCORE);
    }

    println!();
    println!("## Summary");
    println!("  Streak:       {}", days_label(streak));
    println!("  Total deeds:  {}", total);

    println!();
    println!("## Goals");
    if goals.goals().is_empty() {
        println!("  (none)");
    }
    for goal in goals.goals() {
        let mark = if goal.completed { "x" } else { " " };
        println!("  [{}] {}", mark, goal.text);
    }
    Ok(())
}

// ─── Reset ───────────────────────────────────────────────────────────────────

pub fn handle_reset(
    history: &mut HistoryStore,
    goals: &mut GoalStore,
    day: Option<&str>,
    all: bool,
    yes: bool,
) -> Result<()> {
    if all {
        if !yes && !confirm("This will erase all your progress. Continue?")? {
            println_colored!(DIM, "  Nothing erased.");
            return Ok(());
        }
        history.reset_all();
        goals.reset_all();
        println_colored!(RED, "  ✗ All history and goals erased");
        return Ok(());
    }

    let key = resolve_key(Some(day.ok_or_else(|| {
        anyhow!("Nothing to reset. Pass --day YYYY-MM-DD or --all")
    })?))?;
    if !yes && !confirm(&format!("Reset {}?", key))? {
        println_colored!(DIM, "  Nothing reset.");
        return Ok(());
    }
    history.reset_day(&key);
    println_colored!(AMBER, "  ✗ {} reset to a blank day", key);
    Ok(())
}

// ─── Config ──────────────────────────────────────────────────────────────────

pub fn handle_config(
    config: &mut AppConfig,
    start_date: Option<&str>,
    hijri_offset: Option<i32>,
) -> Result<()> {
    let mut changed = false;

    if let Some(raw) = start_date {
        config.ramadan.start_date =
            parse_date_key(raw).ok_or_else(|| anyhow!("Invalid date '{}'. Use YYYY-MM-DD", raw))?;
        changed = true;
    }
    if let Some(offset) = hijri_offset {
        config.ramadan.hijri_offset = offset;
        changed = true;
    }

    if changed {
        config.save()?;
        println_colored!(GREEN, "  ✓ Configuration saved");
    }

    println!();
    println_colored!(GOLD, "  Configuration");
    println!();
    println!("  Ramadan start:  {}", format_date_key(config.ramadan.start_date));
    println!("  Hijri offset:   {:+}", config.ramadan.hijri_offset);
    println!();
    Ok(())
}

// ─── Helpers ─────────────────────────────────────────────────────────────────

fn confirm(message: &str) -> Result<bool> {
    print!("{} [y/N] ", message);
    io::stdout().flush()?;
    let mut buf = String::new();
    io::stdin().lock().read_line(&mut buf)?;
    Ok(matches!(buf.trim(), "y" | "Y" | "yes"))
}
