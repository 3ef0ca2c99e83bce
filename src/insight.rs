//! Daily reflection text derived from the recent history.
//!
//! The reflection looks at the last week of `{date, score, note}` tuples
//! and picks a short encouraging line matching the trend. Generation is
//! deterministic (the date key varies the pick) and can never fail; an
//! empty week degrades to a fixed fallback line.

use crate::models::HistoryMap;
use crate::utils::score::daily_score;

pub const FALLBACK_REFLECTION: &str =
    "The heart finds rest in remembrance. Keep going, you are doing beautifully.";

const STRONG_LINES: &[&str] = &[
    "Your days are full of light lately. May this constancy carry you gently through the rest of the month.",
    "A week this devoted is its own quiet celebration. Hold the rhythm softly and let mercy do the rest.",
    "You have built something beautiful this week. Guard it with gratitude, not with worry.",
];

const STEADY_LINES: &[&str] = &[
    "Steady steps, taken daily, outshine grand gestures. You are walking well.",
    "The middle of the road is still the road. Keep placing one small deed after another.",
    "Consistency is a mercy you give yourself. This week shows you already know how.",
];

const GENTLE_LINES: &[&str] = &[
    "Every small beginning counts. One prayer logged today is a door held open for tomorrow.",
    "Be gentle with yourself. The month is long, and mercy meets whoever turns toward it.",
    "A quiet week is not a lost week. Begin again tonight, softly.",
];

/// One row of the last-week window handed to the generator.
#[derive(Debug, Clone, PartialEq)]
pub struct DaySummary {
    pub date: String,
    pub score: u8,
    pub note: String,
}

/// The most recent `limit` recorded days, newest first.
pub fn recent_summaries(history: &HistoryMap, limit: usize) -> Vec<DaySummary> {
    history
        .iter()
        .rev()
        .take(limit)
        .map(|(key, rec)| DaySummary {
            date: key.clone(),
            score: daily_score(rec),
            note: rec.note.clone(),
        })
        .collect()
}

/// A short reflection for the current day based on the last up-to-7 days.
pub fn reflection(history: &HistoryMap, date_key: &str) -> String {
    let week = recent_summaries(history, 7);
    if week.is_empty() {
        return FALLBACK_REFLECTION.to_string();
    }

    let total: u32 = week.iter().map(|d| d.score as u32).sum();
    if total == 0 {
        return FALLBACK_REFLECTION.to_string();
    }
    let avg = total as f64 / week.len() as f64;

    let pool = if avg >= 8.0 {
        STRONG_LINES
    } else if avg >= 4.0 {
        STEADY_LINES
    } else {
        GENTLE_LINES
    };

    let seed: usize = date_key.bytes().map(|b| b as usize).sum();
    pool[seed % pool.len()].to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DayRecord, PrayerName};

    fn history_with_scores(scores: &[(&str, u8)]) -> HistoryMap {
        let mut history = HistoryMap::new();
        for (key, score) in scores {
            let mut rec = DayRecord::default();
            for prayer in PrayerName::all().into_iter().take(*score as usize) {
                rec = rec.with_prayer_toggled(prayer);
            }
            history.insert(key.to_string(), rec);
        }
        history
    }

    #[test]
    fn empty_history_yields_the_fallback() {
        assert_eq!(reflection(&HistoryMap::new(), "2026-02-18"), FALLBACK_REFLECTION);
    }

    #[test]
    fn scoreless_week_yields_the_fallback() {
        let history = history_with_scores(&[("2026-02-18", 0), ("2026-02-19", 0)]);
        assert_eq!(reflection(&history, "2026-02-20"), FALLBACK_REFLECTION);
    }

    #[test]
    fn active_week_yields_a_pool_line() {
        let history = history_with_scores(&[("2026-02-18", 3), ("2026-02-19", 2)]);
        let line = reflection(&history, "2026-02-20");
        assert_ne!(line, FALLBACK_REFLECTION);
        assert!(GENTLE_LINES.contains(&line.as_str()));
    }

    #[test]
    fn reflection_is_deterministic() {
        let history = history_with_scores(&[("2026-02-18", 4), ("2026-02-19", 5)]);
        assert_eq!(
            reflection(&history, "2026-02-20"),
            reflection(&history, "2026-02-20")
        );
    }

    #[test]
    fn summaries_are_newest_first_and_capped() {
        let mut scores = Vec::new();
        let keys: Vec<String> = (10..20).map(|d| format!("2026-02-{}", d)).collect();
        for key in &keys {
            scores.push((key.as_str(), 1));
        }
        let history = history_with_scores(&scores);
        let week = recent_summaries(&history, 7);
        assert_eq!(week.len(), 7);
        assert_eq!(week[0].date, "2026-02-19");
        assert_eq!(week[6].date, "2026-02-13");
    }

    #[test]
    fn summaries_carry_notes() {
        let mut history = HistoryMap::new();
        history.insert(
            "2026-02-18".to_string(),
            DayRecord::default().with_note("a good first night"),
        );
        let week = recent_summaries(&history, 7);
        assert_eq!(week[0].note, "a good first night");
    }
}
