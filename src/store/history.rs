use crate::models::{DayRecord, HistoryMap, PrayerName};
use crate::store::storage::{JsonStore, HISTORY_KEY};

/// In-memory day-record history backed by the `history` blob.
///
/// Every mutation goes through [`HistoryStore::update_day`]:
/// fetch-or-default the record for the key, apply a pure updater, replace
/// the entry, persist best-effort. Records for other keys are never
/// touched.
pub struct HistoryStore {
    days: HistoryMap,
    store: JsonStore,
}

impl HistoryStore {
    pub fn load(store: JsonStore) -> Self {
        let days = store.read(HISTORY_KEY).unwrap_or_default();
        HistoryStore { days, store }
    }

    /// The record for a key, or a fresh default when nothing is logged yet.
    pub fn day(&self, key: &str) -> DayRecord {
        self.days.get(key).cloned().unwrap_or_default()
    }

    pub fn days(&self) -> &HistoryMap {
        &self.days
    }

    pub fn update_day<F>(&mut self, key: &str, updater: F)
    where
        F: FnOnce(DayRecord) -> DayRecord,
    {
        let next = updater(self.day(key));
        self.days.insert(key.to_string(), next);
        self.persist();
    }

    pub fn toggle_prayer(&mut self, key: &str, prayer: PrayerName) {
        self.update_day(key, |rec| rec.with_prayer_toggled(prayer));
    }

    pub fn toggle_quran(&mut self, key: &str, prayer: PrayerName) {
        self.update_day(key, |rec| rec.with_quran_toggled(prayer));
    }

    pub fn set_tarawih(&mut self, key: &str, rakahs: u8) {
        self.update_day(key, |rec| rec.with_tarawih(rakahs));
    }

    pub fn set_note(&mut self, key: &str, note: &str) {
        let note = note.to_string();
        self.update_day(key, |rec| rec.with_note(note));
    }

    /// Put one day back to all-false/zero/empty, leaving other days alone.
    pub fn reset_day(&mut self, key: &str) {
        self.update_day(key, |_| DayRecord::default());
    }

    /// Erase the whole history and its persisted blob.
    pub fn reset_all(&mut self) {
        self.days.clear();
        self.store.remove(HISTORY_KEY);
    }

    fn persist(&self) {
        self.store.write(HISTORY_KEY, &self.days);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_history() -> (tempfile::TempDir, HistoryStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::open(dir.path().to_path_buf()).unwrap();
        (dir, HistoryStore::load(store))
    }

    #[test]
    fn first_touch_starts_from_a_default_record() {
        let (_dir, mut history) = temp_history();
        history.toggle_prayer("2026-02-18", PrayerName::Fajr);
        let rec = history.day("2026-02-18");
        assert!(rec.prayed(PrayerName::Fajr));
        assert!(!rec.prayed(PrayerName::Isha));
    }

    #[test]
    fn update_day_leaves_other_keys_untouched() {
        let (_dir, mut history) = temp_history();
        history.toggle_prayer("2026-02-18", PrayerName::Fajr);
        let before = history.day("2026-02-18");
        history.update_day("2026-02-19", |rec| rec.with_tarawih(8));
        assert_eq!(history.day("2026-02-18"), before);
    }

    #[test]
    fn reset_day_only_clears_that_day() {
        let (_dir, mut history) = temp_history();
        history.toggle_prayer("2026-02-18", PrayerName::Fajr);
        history.toggle_prayer("2026-02-19", PrayerName::Asr);
        history.reset_day("2026-02-18");
        assert!(history.day("2026-02-18").is_empty());
        assert!(history.day("2026-02-19").prayed(PrayerName::Asr));
    }

    #[test]
    fn mutations_survive_a_reload() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::open(dir.path().to_path_buf()).unwrap();
        let mut history = HistoryStore::load(store.clone());
        history.toggle_prayer("2026-02-18", PrayerName::Maghrib);
        history.set_tarawih("2026-02-18", 8);
        history.set_note("2026-02-18", "first night");

        let reloaded = HistoryStore::load(store);
        let rec = reloaded.day("2026-02-18");
        assert!(rec.prayed(PrayerName::Maghrib));
        assert_eq!(rec.tarawih, 8);
        assert_eq!(rec.note, "first night");
    }

    #[test]
    fn reset_all_clears_map_and_blob() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::open(dir.path().to_path_buf()).unwrap();
        let mut history = HistoryStore::load(store.clone());
        history.toggle_prayer("2026-02-18", PrayerName::Fajr);
        history.reset_all();
        assert!(history.days().is_empty());
        assert!(!store.contains(HISTORY_KEY));
    }

    #[test]
    fn corrupt_blob_degrades_to_empty_history() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("history.json"), "{oops").unwrap();
        let store = JsonStore::open(dir.path().to_path_buf()).unwrap();
        let history = HistoryStore::load(store);
        assert!(history.days().is_empty());
    }
}
