pub mod app;
pub mod container;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod phrases;
pub mod state;
pub mod stats;
pub mod store;
pub mod ui;

pub use app::router;
pub use container::HabitsContainer;
pub use state::AppState;
pub use store::{resolve_store_url, HabitStore};
