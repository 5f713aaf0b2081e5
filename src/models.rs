use serde::{Deserialize, Serialize};

/// A tracked habit as the remote store returns it. `progress` is the percent
/// of the 21-day formation period completed; 100 means the habit is formed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Habit {
    pub id: u64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub progress: u8,
    /// Local calendar date (`YYYY-MM-DD`) of the last completion, or null.
    #[serde(default)]
    pub last_completed: Option<String>,
}

impl Habit {
    pub fn is_formed(&self) -> bool {
        self.progress >= 100
    }
}

/// Create-request body. The store assigns the id; `lastCompleted` is sent as
/// an explicit null so the record carries the field from day one.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewHabit {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub progress: u8,
    pub last_completed: Option<String>,
}

impl NewHabit {
    pub fn new(name: String, description: Option<String>, category: Option<String>) -> Self {
        Self {
            name,
            description,
            category,
            progress: 0,
            last_completed: None,
        }
    }
}

/// The single in-memory mirror of the habit list. `loading` starts true so
/// the UI shows a spinner until the first load settles.
#[derive(Debug, Clone, Serialize)]
pub struct HabitsState {
    pub habits: Vec<Habit>,
    pub loading: bool,
    pub error: Option<String>,
}

impl Default for HabitsState {
    fn default() -> Self {
        Self {
            habits: Vec::new(),
            loading: true,
            error: None,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    pub total_progress: u32,
    pub completed_today: u32,
    pub best_habit: Option<Habit>,
    pub total_habits: u32,
    pub streak: u32,
}

/// Progress after one more daily mark: one 21st of the period, rounded,
/// capped at 100.
pub fn next_progress(progress: u8) -> u8 {
    let stepped = f64::from(progress) + 100.0 / 21.0;
    stepped.min(100.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_mark_lands_on_five() {
        assert_eq!(next_progress(0), 5);
    }

    #[test]
    fn marks_saturate_at_one_hundred() {
        let mut progress = 0;
        for _ in 0..21 {
            progress = next_progress(progress);
        }
        assert_eq!(progress, 100);
        assert_eq!(next_progress(100), 100);
    }

    #[test]
    fn formed_at_full_progress() {
        let habit = Habit {
            id: 1,
            name: "Read".to_string(),
            description: None,
            category: None,
            progress: 100,
            last_completed: None,
        };
        assert!(habit.is_formed());
    }
}
