use crate::errors::AppError;
use crate::models::{next_progress, HabitsState, Stats};
use crate::phrases;
use crate::state::AppState;
use crate::stats::build_stats;
use crate::ui::render_index;
use axum::{
    extract::{Path, State},
    response::Html,
    Json,
};
use chrono::Local;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct AddHabitRequest {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct RenameRequest {
    pub name: String,
}

#[derive(Debug, Serialize)]
pub struct MarkResponse {
    pub state: HabitsState,
    pub quote: &'static str,
}

pub async fn index() -> Html<String> {
    Html(render_index(&today_string()))
}

pub async fn get_habits(State(state): State<AppState>) -> Json<HabitsState> {
    Json(state.habits.snapshot().await)
}

pub async fn add_habit(
    State(state): State<AppState>,
    Json(payload): Json<AddHabitRequest>,
) -> Result<Json<HabitsState>, AppError> {
    let name = validate_name(&payload.name)?;
    state
        .habits
        .add(name, normalize(payload.description), normalize(payload.category))
        .await;
    Ok(Json(state.habits.snapshot().await))
}

pub async fn mark_habit(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<MarkResponse>, AppError> {
    let snapshot = state.habits.snapshot().await;
    let habit = snapshot
        .habits
        .iter()
        .find(|habit| habit.id == id)
        .ok_or_else(|| AppError::not_found("no habit with that id"))?;
    if habit.is_formed() {
        return Err(AppError::bad_request("habit is already formed"));
    }

    state
        .habits
        .update_progress(id, next_progress(habit.progress))
        .await;

    Ok(Json(MarkResponse {
        state: state.habits.snapshot().await,
        quote: phrases::random_phrase(),
    }))
}

pub async fn rename_habit(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Json(payload): Json<RenameRequest>,
) -> Result<Json<HabitsState>, AppError> {
    let name = validate_name(&payload.name)?;
    state.habits.edit_name(id, name).await;
    Ok(Json(state.habits.snapshot().await))
}

pub async fn delete_habit(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Json<HabitsState> {
    state.habits.delete(id).await;
    Json(state.habits.snapshot().await)
}

pub async fn reset_progress(State(state): State<AppState>) -> Json<HabitsState> {
    state.habits.reset_all_progress().await;
    Json(state.habits.snapshot().await)
}

pub async fn reload(State(state): State<AppState>) -> Json<HabitsState> {
    state.habits.load().await;
    Json(state.habits.snapshot().await)
}

pub async fn clear_error(State(state): State<AppState>) -> Json<HabitsState> {
    state.habits.clear_error().await;
    Json(state.habits.snapshot().await)
}

pub async fn get_stats(State(state): State<AppState>) -> Json<Stats> {
    let snapshot = state.habits.snapshot().await;
    Json(build_stats(&snapshot.habits))
}

fn validate_name(name: &str) -> Result<String, AppError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(AppError::bad_request("habit name must not be empty"));
    }
    if name.chars().count() > 50 {
        return Err(AppError::bad_request(
            "habit name must be 50 characters or fewer",
        ));
    }
    Ok(name.to_string())
}

fn normalize(value: Option<String>) -> Option<String> {
    value
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn today_string() -> String {
    Local::now().date_naive().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_is_trimmed() {
        assert_eq!(validate_name("  Read  ").unwrap(), "Read");
    }

    #[test]
    fn blank_name_is_rejected() {
        assert!(validate_name("   ").is_err());
    }

    #[test]
    fn overlong_name_is_rejected() {
        let name = "x".repeat(51);
        assert!(validate_name(&name).is_err());
        let name = "x".repeat(50);
        assert!(validate_name(&name).is_ok());
    }

    #[test]
    fn empty_optional_fields_normalize_to_none() {
        assert_eq!(normalize(Some("  ".to_string())), None);
        assert_eq!(normalize(Some(" Health ".to_string())), Some("Health".to_string()));
        assert_eq!(normalize(None), None);
    }
}
