use crate::models::{Habit, HabitsState, NewHabit};
use crate::store::{HabitStore, StoreError};
use futures_util::future::join_all;
use tokio::sync::Mutex;
use tracing::error;

/// A single local state transition. Changes are only applied after the store
/// has acknowledged the matching remote call, so the mirror never runs ahead
/// of the server and nothing ever needs rolling back.
#[derive(Debug)]
enum StateChange {
    HabitsLoaded(Vec<Habit>),
    HabitAdded(Habit),
    ProgressUpdated { id: u64, progress: u8 },
    HabitDeleted(u64),
    NameEdited { id: u64, name: String },
    LoadingSet(bool),
    ErrorSet(String),
    ErrorCleared,
}

fn apply(state: &mut HabitsState, change: StateChange) {
    match change {
        StateChange::HabitsLoaded(habits) => {
            state.habits = habits;
            state.loading = false;
            state.error = None;
        }
        StateChange::HabitAdded(habit) => {
            state.habits.push(habit);
            state.error = None;
        }
        StateChange::ProgressUpdated { id, progress } => {
            if let Some(habit) = state.habits.iter_mut().find(|habit| habit.id == id) {
                habit.progress = progress;
            }
            state.error = None;
        }
        StateChange::HabitDeleted(id) => {
            state.habits.retain(|habit| habit.id != id);
            state.error = None;
        }
        StateChange::NameEdited { id, name } => {
            if let Some(habit) = state.habits.iter_mut().find(|habit| habit.id == id) {
                habit.name = name;
            }
            state.error = None;
        }
        StateChange::LoadingSet(value) => state.loading = value,
        StateChange::ErrorSet(message) => {
            state.error = Some(message);
            state.loading = false;
        }
        StateChange::ErrorCleared => state.error = None,
    }
}

/// The authoritative in-memory copy of the habit list, synchronized with the
/// remote store. One instance exists per process, owned by `AppState`.
pub struct HabitsContainer {
    store: HabitStore,
    state: Mutex<HabitsState>,
}

impl HabitsContainer {
    pub fn new(store: HabitStore) -> Self {
        Self {
            store,
            state: Mutex::new(HabitsState::default()),
        }
    }

    pub async fn snapshot(&self) -> HabitsState {
        self.state.lock().await.clone()
    }

    async fn commit(&self, change: StateChange) {
        let mut guard = self.state.lock().await;
        apply(&mut guard, change);
    }

    async fn fail(&self, err: StoreError) {
        error!("{err}");
        self.commit(StateChange::ErrorSet(err.user_message().to_string()))
            .await;
    }

    /// Replaces the local list with the store's. On failure the previous list
    /// survives and the load error message is set; the manual retry re-invokes
    /// this same operation.
    pub async fn load(&self) {
        self.commit(StateChange::LoadingSet(true)).await;
        match self.store.list().await {
            Ok(habits) => self.commit(StateChange::HabitsLoaded(habits)).await,
            Err(err) => self.fail(err).await,
        }
    }

    pub async fn add(&self, name: String, description: Option<String>, category: Option<String>) {
        self.commit(StateChange::LoadingSet(true)).await;
        match self
            .store
            .create(&NewHabit::new(name, description, category))
            .await
        {
            // The store assigns the id; append its copy, not ours.
            Ok(habit) => self.commit(StateChange::HabitAdded(habit)).await,
            Err(err) => self.fail(err).await,
        }
        self.commit(StateChange::LoadingSet(false)).await;
    }

    /// The store also stamps today's completion date in the same patch; the
    /// local copy keeps its previous `lastCompleted` until the next full load.
    pub async fn update_progress(&self, id: u64, progress: u8) {
        match self.store.update_progress(id, progress).await {
            Ok(_) => {
                self.commit(StateChange::ProgressUpdated { id, progress })
                    .await
            }
            Err(err) => self.fail(err).await,
        }
    }

    pub async fn delete(&self, id: u64) {
        match self.store.delete(id).await {
            Ok(()) => self.commit(StateChange::HabitDeleted(id)).await,
            Err(err) => self.fail(err).await,
        }
    }

    pub async fn edit_name(&self, id: u64, name: String) {
        match self.store.update_name(id, &name).await {
            Ok(_) => self.commit(StateChange::NameEdited { id, name }).await,
            Err(err) => self.fail(err).await,
        }
    }

    pub async fn clear_error(&self) {
        self.commit(StateChange::ErrorCleared).await;
    }

    /// One independent update per habit, issued concurrently and awaited
    /// together. Updates that succeed stay applied even when others fail; a
    /// failure leaves the update-progress error set.
    pub async fn reset_all_progress(&self) {
        let ids: Vec<u64> = {
            let state = self.state.lock().await;
            state.habits.iter().map(|habit| habit.id).collect()
        };
        join_all(ids.into_iter().map(|id| self.update_progress(id, 0))).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn habit(id: u64, name: &str, progress: u8) -> Habit {
        Habit {
            id,
            name: name.to_string(),
            description: None,
            category: None,
            progress,
            last_completed: None,
        }
    }

    #[test]
    fn initial_state_is_loading_and_empty() {
        let state = HabitsState::default();
        assert!(state.loading);
        assert!(state.habits.is_empty());
        assert!(state.error.is_none());
    }

    #[test]
    fn loaded_habits_replace_list_and_clear_error() {
        let mut state = HabitsState::default();
        state.error = Some("Failed to load habits".to_string());
        apply(
            &mut state,
            StateChange::HabitsLoaded(vec![habit(1, "Read", 10)]),
        );
        assert_eq!(state.habits.len(), 1);
        assert!(!state.loading);
        assert!(state.error.is_none());
    }

    #[test]
    fn progress_update_touches_only_matching_habit() {
        let mut state = HabitsState::default();
        apply(
            &mut state,
            StateChange::HabitsLoaded(vec![habit(1, "Read", 0), habit(2, "Run", 50)]),
        );
        apply(&mut state, StateChange::ProgressUpdated { id: 1, progress: 5 });
        assert_eq!(state.habits[0].progress, 5);
        assert_eq!(state.habits[1].progress, 50);
    }

    #[test]
    fn delete_keeps_remaining_order() {
        let mut state = HabitsState::default();
        apply(
            &mut state,
            StateChange::HabitsLoaded(vec![
                habit(1, "Read", 0),
                habit(2, "Run", 50),
                habit(3, "Sleep", 80),
            ]),
        );
        apply(&mut state, StateChange::HabitDeleted(2));
        let ids: Vec<u64> = state.habits.iter().map(|habit| habit.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn error_set_clears_loading() {
        let mut state = HabitsState::default();
        apply(&mut state, StateChange::LoadingSet(true));
        apply(
            &mut state,
            StateChange::ErrorSet("Failed to add habit".to_string()),
        );
        assert!(!state.loading);
        assert_eq!(state.error.as_deref(), Some("Failed to add habit"));
    }

    #[test]
    fn successful_change_overwrites_previous_error() {
        let mut state = HabitsState::default();
        apply(
            &mut state,
            StateChange::ErrorSet("Failed to delete habit".to_string()),
        );
        apply(&mut state, StateChange::HabitAdded(habit(4, "Stretch", 0)));
        assert!(state.error.is_none());
    }
}
