/// Create a simple ASCII progress bar
pub fn progress_bar(filled: u32, total: u32, width: usize) -> String {
    if total == 0 {
        return "░".repeat(width);
    }
    let ratio = (filled as f64 / total as f64).min(1.0);
    let filled_count = (ratio * width as f64).round() as usize;
    let empty_count = width.saturating_sub(filled_count);
    format!("{}{}", "█".repeat(filled_count), "░".repeat(empty_count))
}

/// Heatmap glyph for a daily score out of 11
pub fn score_glyph(score: u8) -> &'static str {
    match score {
        0 => "○",
        1..=4 => "◑",
        5..=8 => "◕",
        _ => "●",
    }
}

pub fn days_label(count: u32) -> String {
    if count == 1 {
        "1 day".to_string()
    } else {
        format!("{} days", count)
    }
}

/// Human label for a Ramadan day number; numbers below 1 mean the month
/// has not started yet.
pub fn ramadan_label(day_number: i64) -> String {
    if day_number >= 1 {
        format!("Day {} of Ramadan", day_number)
    } else {
        let until = 1 - day_number;
        if until == 1 {
            "Ramadan begins tomorrow".to_string()
        } else {
            format!("Ramadan begins in {} days", until)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_bar_fills_proportionally() {
        assert_eq!(progress_bar(0, 11, 4), "░░░░");
        assert_eq!(progress_bar(11, 11, 4), "████");
        assert_eq!(progress_bar(6, 12, 4), "██░░");
    }

    #[test]
    fn progress_bar_handles_zero_total() {
        assert_eq!(progress_bar(3, 0, 5), "░░░░░");
    }

    #[test]
    fn score_glyph_ladder() {
        assert_eq!(score_glyph(0), "○");
        assert_eq!(score_glyph(3), "◑");
        assert_eq!(score_glyph(7), "◕");
        assert_eq!(score_glyph(11), "●");
    }

    #[test]
    fn days_label_pluralizes() {
        assert_eq!(days_label(1), "1 day");
        assert_eq!(days_label(0), "0 days");
        assert_eq!(days_label(12), "12 days");
    }

    #[test]
    fn ramadan_label_covers_before_and_during() {
        assert_eq!(ramadan_label(12), "Day 12 of Ramadan");
        assert_eq!(ramadan_label(1), "Day 1 of Ramadan");
        assert_eq!(ramadan_label(0), "Ramadan begins tomorrow");
        assert_eq!(ramadan_label(-4), "Ramadan begins in 5 days");
    }
}
