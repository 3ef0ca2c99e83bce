use chrono::Local;

use crate::models::{starter_goals, Goal};
use crate::store::storage::{JsonStore, GOALS_KEY};

/// Ordered goal list backed by the `goals` blob.
///
/// A never-written blob seeds the starter goals; a blob the user saved as
/// an empty array stays empty. The two states are distinct on disk.
pub struct GoalStore {
    goals: Vec<Goal>,
    store: JsonStore,
    last_id_ms: i64,
}

impl GoalStore {
    pub fn load(store: JsonStore) -> Self {
        let goals = store.read(GOALS_KEY).unwrap_or_else(starter_goals);
        GoalStore {
            goals,
            store,
            last_id_ms: 0,
        }
    }

    pub fn goals(&self) -> &[Goal] {
        &self.goals
    }

    pub fn add(&mut self, text: &str) -> Goal {
        let goal = Goal::new(self.next_id(), text);
        self.goals.push(goal.clone());
        self.persist();
        goal
    }

    /// Flip a goal's completed flag. No-op (returns false) for unknown ids.
    pub fn toggle(&mut self, id: &str) -> bool {
        match self.goals.iter_mut().find(|g| g.id == id) {
            Some(goal) => {
                goal.completed = !goal.completed;
                self.persist();
                true
            }
            None => false,
        }
    }

    /// Remove a goal. No-op (returns false) for unknown ids.
    pub fn delete(&mut self, id: &str) -> bool {
        let before = self.goals.len();
        self.goals.retain(|g| g.id != id);
        if self.goals.len() == before {
            return false;
        }
        self.persist();
        true
    }

    /// Erase the list and its persisted blob.
    pub fn reset_all(&mut self) {
        self.goals.clear();
        self.store.remove(GOALS_KEY);
    }

    /// Millisecond timestamps, bumped past the last issued id so two goals
    /// added within the same millisecond still get distinct ids.
    fn next_id(&mut self) -> String {
        let mut ms = Local::now().timestamp_millis();
        if ms <= self.last_id_ms {
            ms = self.last_id_ms + 1;
        }
        self.last_id_ms = ms;
        ms.to_string()
    }

    fn persist(&self) {
        self.store.write(GOALS_KEY, &self.goals);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_goals() -> (tempfile::TempDir, GoalStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::open(dir.path().to_path_buf()).unwrap();
        (dir, GoalStore::load(store))
    }

    #[test]
    fn first_run_seeds_the_starter_goals() {
        let (_dir, goals) = temp_goals();
        assert_eq!(goals.goals(), starter_goals().as_slice());
    }

    #[test]
    fn saved_empty_list_stays_empty() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("goals.json"), "[]").unwrap();
        let store = JsonStore::open(dir.path().to_path_buf()).unwrap();
        let goals = GoalStore::load(store);
        assert!(goals.goals().is_empty());
    }

    #[test]
    fn deleting_the_last_goal_persists_an_empty_list() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::open(dir.path().to_path_buf()).unwrap();
        let mut goals = GoalStore::load(store.clone());
        for goal in starter_goals() {
            assert!(goals.delete(&goal.id));
        }
        assert!(goals.goals().is_empty());

        // The blob now exists and is empty, not "never written".
        let reloaded = GoalStore::load(store);
        assert!(reloaded.goals().is_empty());
    }

    #[test]
    fn add_then_delete_restores_the_sequence() {
        let (_dir, mut goals) = temp_goals();
        let before = goals.goals().to_vec();
        let id = goals.add("Finish a juz").id.clone();
        assert_eq!(goals.goals().len(), before.len() + 1);
        assert!(goals.delete(&id));
        assert_eq!(goals.goals(), before.as_slice());
    }

    #[test]
    fn toggle_flips_and_unknown_ids_are_noops() {
        let (_dir, mut goals) = temp_goals();
        let id = goals.goals()[0].id.clone();
        assert!(goals.toggle(&id));
        assert!(goals.goals()[0].completed);
        assert!(goals.toggle(&id));
        assert!(!goals.goals()[0].completed);
        assert!(!goals.toggle("no-such-id"));
        assert!(!goals.delete("no-such-id"));
    }

    #[test]
    fn ids_are_unique_within_a_session() {
        let (_dir, mut goals) = temp_goals();
        let a = goals.add("one").id.clone();
        let b = goals.add("two").id.clone();
        let c = goals.add("three").id.clone();
        assert_ne!(a, b);
        assert_ne!(b, c);
        assert_ne!(a, c);
    }

    #[test]
    fn reset_all_removes_the_blob() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::open(dir.path().to_path_buf()).unwrap();
        let mut goals = GoalStore::load(store.clone());
        goals.reset_all();
        assert!(goals.goals().is_empty());
        assert!(!store.contains(GOALS_KEY));
    }
}
