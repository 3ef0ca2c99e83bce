use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    pub id: String,
    pub text: String,
    pub completed: bool,
}

impl Goal {
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Goal {
            id: id.into(),
            text: text.into(),
            completed: false,
        }
    }
}

/// Seeded on the very first run only; a deliberately emptied list stays empty.
pub fn starter_goals() -> Vec<Goal> {
    vec![
        Goal::new("default-1", "Do not miss a prayer"),
        Goal::new("default-2", "Read some Quran daily"),
        Goal::new("default-3", "Give small charity (Sadaqah)"),
    ]
}
