use crate::container::HabitsContainer;
use std::sync::Arc;

/// Shared context handed to every handler. Built once in `main`; the
/// container behind it is the only habit state in the process.
#[derive(Clone)]
pub struct AppState {
    pub habits: Arc<HabitsContainer>,
}

impl AppState {
    pub fn new(container: HabitsContainer) -> Self {
        Self {
            habits: Arc::new(container),
        }
    }
}
