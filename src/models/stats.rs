use serde::{Deserialize, Serialize};

/// 5 prayers + 5 Quran readings + the full-Tarawih bonus.
pub const MAX_DAILY_SCORE: u8 = 11;

/// Derived per-day breakdown; computed on demand, never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyStats {
    pub date_key: String,
    pub prayer_score: u8,
    pub quran_score: u8,
    pub tarawih_score: u8,
    pub total_score: u8,
    pub is_ramadan_day: bool,
    pub ramadan_day_number: i64,
}

impl DailyStats {
    pub fn completion_ratio(&self) -> f64 {
        self.total_score as f64 / MAX_DAILY_SCORE as f64
    }

    pub fn completion_percent(&self) -> u8 {
        (self.completion_ratio() * 100.0).round() as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn completion_percent_rounds() {
        let stats = DailyStats {
            date_key: "2026-02-18".to_string(),
            prayer_score: 5,
            quran_score: 0,
            tarawih_score: 1,
            total_score: 6,
            is_ramadan_day: true,
            ramadan_day_number: 1,
        };
        assert_eq!(stats.completion_percent(), 55);
    }
}
