use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::str::FromStr;

/// Tarawih rak'ahs tracked per night; the full set scores the bonus point.
pub const TARAWIH_MAX: u8 = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PrayerName {
    Fajr,
    Dhuhr,
    Asr,
    Maghrib,
    Isha,
}

impl PrayerName {
    pub fn all() -> Vec<PrayerName> {
        vec![
            PrayerName::Fajr,
            PrayerName::Dhuhr,
            PrayerName::Asr,
            PrayerName::Maghrib,
            PrayerName::Isha,
        ]
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            PrayerName::Fajr => "Fajr",
            PrayerName::Dhuhr => "Dhuhr",
            PrayerName::Asr => "Asr",
            PrayerName::Maghrib => "Maghrib",
            PrayerName::Isha => "Isha",
        }
    }
}

impl std::fmt::Display for PrayerName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for PrayerName {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "fajr" => Ok(PrayerName::Fajr),
            "dhuhr" | "zuhr" | "dhuhur" => Ok(PrayerName::Dhuhr),
            "asr" => Ok(PrayerName::Asr),
            "maghrib" => Ok(PrayerName::Maghrib),
            "isha" => Ok(PrayerName::Isha),
            _ => Err(anyhow::anyhow!("Unknown prayer: {}", s)),
        }
    }
}

/// One day of logged devotions. Prayer flags live in maps keyed by prayer
/// name so partially-written blobs stay readable; absent entries read as
/// false.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayRecord {
    #[serde(default)]
    pub prayers: BTreeMap<PrayerName, bool>,
    #[serde(default)]
    pub quran: BTreeMap<PrayerName, bool>,
    #[serde(default)]
    pub tarawih: u8,
    #[serde(default)]
    pub note: String,
}

impl Default for DayRecord {
    fn default() -> Self {
        let all_false: BTreeMap<PrayerName, bool> =
            PrayerName::all().into_iter().map(|p| (p, false)).collect();
        DayRecord {
            prayers: all_false.clone(),
            quran: all_false,
            tarawih: 0,
            note: String::new(),
        }
    }
}

impl DayRecord {
    pub fn prayed(&self, prayer: PrayerName) -> bool {
        self.prayers.get(&prayer).copied().unwrap_or(false)
    }

    pub fn recited(&self, prayer: PrayerName) -> bool {
        self.quran.get(&prayer).copied().unwrap_or(false)
    }

    pub fn prayer_count(&self) -> u8 {
        PrayerName::all().iter().filter(|p| self.prayed(**p)).count() as u8
    }

    pub fn quran_count(&self) -> u8 {
        PrayerName::all().iter().filter(|p| self.recited(**p)).count() as u8
    }

    pub fn with_prayer_toggled(mut self, prayer: PrayerName) -> Self {
        let flipped = !self.prayed(prayer);
        self.prayers.insert(prayer, flipped);
        self
    }

    pub fn with_quran_toggled(mut self, prayer: PrayerName) -> Self {
        let flipped = !self.recited(prayer);
        self.quran.insert(prayer, flipped);
        self
    }

    pub fn with_tarawih(mut self, rakahs: u8) -> Self {
        self.tarawih = rakahs.min(TARAWIH_MAX);
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = note.into();
        self
    }

    pub fn is_empty(&self) -> bool {
        self.prayer_count() == 0 && self.quran_count() == 0 && self.tarawih == 0 && self.note.is_empty()
    }
}

/// Full history: canonical `YYYY-MM-DD` key to that day's record.
pub type HistoryMap = BTreeMap<String, DayRecord>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_record_has_all_five_entries() {
        let rec = DayRecord::default();
        for p in PrayerName::all() {
            assert_eq!(rec.prayers.get(&p), Some(&false));
            assert_eq!(rec.quran.get(&p), Some(&false));
        }
        assert_eq!(rec.tarawih, 0);
        assert!(rec.is_empty());
    }

    #[test]
    fn tarawih_is_clamped() {
        let rec = DayRecord::default().with_tarawih(20);
        assert_eq!(rec.tarawih, TARAWIH_MAX);
        let rec = rec.with_tarawih(3);
        assert_eq!(rec.tarawih, 3);
    }

    #[test]
    fn partial_record_reads_missing_flags_as_false() {
        let rec: DayRecord = serde_json::from_str(r#"{"prayers":{"Fajr":true}}"#).unwrap();
        assert!(rec.prayed(PrayerName::Fajr));
        assert!(!rec.prayed(PrayerName::Isha));
        assert!(!rec.recited(PrayerName::Fajr));
        assert_eq!(rec.prayer_count(), 1);
    }

    #[test]
    fn prayer_name_accepts_spelling_variants() {
        assert_eq!("zuhr".parse::<PrayerName>().unwrap(), PrayerName::Dhuhr);
        assert_eq!("Maghrib".parse::<PrayerName>().unwrap(), PrayerName::Maghrib);
        assert!("lunch".parse::<PrayerName>().is_err());
    }

    #[test]
    fn record_round_trips_through_json() {
        let rec = DayRecord::default()
            .with_prayer_toggled(PrayerName::Asr)
            .with_quran_toggled(PrayerName::Fajr)
            .with_tarawih(8)
            .with_note("alhamdulillah");
        let json = serde_json::to_string(&rec).unwrap();
        let back: DayRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(rec, back);
    }
}
