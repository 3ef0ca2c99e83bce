use chrono::NaiveDate;

use crate::models::{DailyStats, DayRecord, HistoryMap, TARAWIH_MAX};
use crate::utils::date::{format_date_key, parse_date_key, ramadan_day_number};

/// Score one day: a point per prayed prayer, a point per prayer with Quran
/// read, and a single bonus point only for the full eight Tarawih rak'ahs.
/// Range 0..=11. Partial records score their present fields.
pub fn daily_score(record: &DayRecord) -> u8 {
    let tarawih_bonus = if record.tarawih == TARAWIH_MAX { 1 } else { 0 };
    record.prayer_count() + record.quran_count() + tarawih_bonus
}

/// Consecutive days with a positive score, walking backward from today.
///
/// Grace rule: an unlogged today does not break an active streak; the walk
/// starts at yesterday instead. Only when today and yesterday are both
/// empty is the streak 0, without scanning further back.
pub fn current_streak(history: &HistoryMap, today: NaiveDate) -> u32 {
    let score_on = |date: NaiveDate| {
        history
            .get(&format_date_key(date))
            .map(daily_score)
            .unwrap_or(0)
    };

    let Some(yesterday) = today.pred_opt() else {
        return if score_on(today) > 0 { 1 } else { 0 };
    };
    if score_on(today) == 0 && score_on(yesterday) == 0 {
        return 0;
    }

    let mut cursor = if score_on(today) > 0 { today } else { yesterday };
    let mut streak = 0;
    while score_on(cursor) > 0 {
        streak += 1;
        match cursor.pred_opt() {
            Some(prev) => cursor = prev,
            None => break,
        }
    }
    streak
}

/// Lifetime total across the whole history; unbounded.
pub fn total_deeds(history: &HistoryMap) -> u32 {
    history.values().map(|rec| daily_score(rec) as u32).sum()
}

/// Build the derived breakdown for one stored day. Keys that do not parse
/// are treated as outside Ramadan rather than an error.
pub fn day_stats(key: &str, record: &DayRecord, ramadan_start: NaiveDate) -> DailyStats {
    let day_number = parse_date_key(key)
        .map(|date| ramadan_day_number(date, ramadan_start))
        .unwrap_or(0);
    let tarawih_score = if record.tarawih == TARAWIH_MAX { 1 } else { 0 };
    DailyStats {
        date_key: key.to_string(),
        prayer_score: record.prayer_count(),
        quran_score: record.quran_count(),
        tarawih_score,
        total_score: daily_score(record),
        is_ramadan_day: day_number >= 1,
        ramadan_day_number: day_number,
    }
}

/// Breakdown rows for every recorded day, in key order.
pub fn history_stats(history: &HistoryMap, ramadan_start: NaiveDate) -> Vec<DailyStats> {
    history
        .iter()
        .map(|(key, record)| day_stats(key, record, ramadan_start))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{PrayerName, MAX_DAILY_SCORE};

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn full_day() -> DayRecord {
        let mut rec = DayRecord::default().with_tarawih(8);
        for p in PrayerName::all() {
            rec = rec.with_prayer_toggled(p).with_quran_toggled(p);
        }
        rec
    }

    #[test]
    fn empty_record_scores_zero() {
        assert_eq!(daily_score(&DayRecord::default()), 0);
    }

    #[test]
    fn full_record_scores_eleven() {
        assert_eq!(daily_score(&full_day()), MAX_DAILY_SCORE);
    }

    #[test]
    fn fajr_plus_full_tarawih_scores_two() {
        let rec = DayRecord::default()
            .with_prayer_toggled(PrayerName::Fajr)
            .with_tarawih(8);
        assert_eq!(daily_score(&rec), 2);
    }

    #[test]
    fn partial_tarawih_scores_nothing() {
        let rec = DayRecord::default().with_tarawih(7);
        assert_eq!(daily_score(&rec), 0);
    }

    #[test]
    fn double_toggle_restores_the_score() {
        let rec = DayRecord::default().with_prayer_toggled(PrayerName::Asr);
        let before = daily_score(&rec);
        let rec = rec
            .with_quran_toggled(PrayerName::Isha)
            .with_quran_toggled(PrayerName::Isha);
        assert_eq!(daily_score(&rec), before);
    }

    #[test]
    fn score_ignores_toggle_order() {
        let a = DayRecord::default()
            .with_prayer_toggled(PrayerName::Fajr)
            .with_quran_toggled(PrayerName::Maghrib);
        let b = DayRecord::default()
            .with_quran_toggled(PrayerName::Maghrib)
            .with_prayer_toggled(PrayerName::Fajr);
        assert_eq!(daily_score(&a), daily_score(&b));
    }

    fn day_with_score(history: &mut HistoryMap, date: NaiveDate) {
        history.insert(
            format_date_key(date),
            DayRecord::default().with_prayer_toggled(PrayerName::Fajr),
        );
    }

    #[test]
    fn streak_is_zero_when_today_and_yesterday_are_empty() {
        let today = d(2026, 3, 1);
        let mut history = HistoryMap::new();
        // Activity further back must not resurrect the streak.
        day_with_score(&mut history, d(2026, 2, 20));
        assert_eq!(current_streak(&history, today), 0);
    }

    #[test]
    fn streak_counts_consecutive_days_ending_today() {
        let today = d(2026, 3, 1);
        let mut history = HistoryMap::new();
        day_with_score(&mut history, today);
        day_with_score(&mut history, d(2026, 2, 28));
        day_with_score(&mut history, d(2026, 2, 27));
        // Day 4 back is recorded but scoreless, so the walk stops there.
        history.insert(format_date_key(d(2026, 2, 26)), DayRecord::default());
        assert_eq!(current_streak(&history, today), 3);
    }

    #[test]
    fn unlogged_today_keeps_yesterdays_streak_alive() {
        let today = d(2026, 3, 1);
        let mut history = HistoryMap::new();
        day_with_score(&mut history, d(2026, 2, 28));
        day_with_score(&mut history, d(2026, 2, 27));
        assert_eq!(current_streak(&history, today), 2);
    }

    #[test]
    fn scoreless_today_record_does_not_break_grace() {
        let today = d(2026, 3, 1);
        let mut history = HistoryMap::new();
        history.insert(format_date_key(today), DayRecord::default());
        day_with_score(&mut history, d(2026, 2, 28));
        assert_eq!(current_streak(&history, today), 1);
    }

    #[test]
    fn total_deeds_sums_every_day() {
        let mut history = HistoryMap::new();
        history.insert("2026-02-18".to_string(), full_day());
        history.insert(
            "2026-02-19".to_string(),
            DayRecord::default().with_prayer_toggled(PrayerName::Fajr),
        );
        assert_eq!(total_deeds(&history), 12);
    }

    #[test]
    fn day_stats_breaks_out_components() {
        let start = d(2026, 2, 18);
        let rec = DayRecord::default()
            .with_prayer_toggled(PrayerName::Fajr)
            .with_prayer_toggled(PrayerName::Dhuhr)
            .with_quran_toggled(PrayerName::Fajr)
            .with_tarawih(8);
        let stats = day_stats("2026-02-19", &rec, start);
        assert_eq!(stats.prayer_score, 2);
        assert_eq!(stats.quran_score, 1);
        assert_eq!(stats.tarawih_score, 1);
        assert_eq!(stats.total_score, 4);
        assert!(stats.is_ramadan_day);
        assert_eq!(stats.ramadan_day_number, 2);
    }

    #[test]
    fn day_stats_tolerates_malformed_keys() {
        let stats = day_stats("not-a-date", &DayRecord::default(), d(2026, 2, 18));
        assert!(!stats.is_ramadan_day);
        assert_eq!(stats.ramadan_day_number, 0);
    }
}
