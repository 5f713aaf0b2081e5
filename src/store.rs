use crate::models::{Habit, NewHabit};
use chrono::Local;
use reqwest::{Client, Response, StatusCode};
use serde::Serialize;
use std::{env, fmt};
use thiserror::Error;
use tracing::error;

pub fn resolve_store_url() -> String {
    env::var("HABIT_STORE_URL").unwrap_or_else(|_| "http://localhost:3001".to_string())
}

/// Which remote call failed. The tag picks the fixed user-facing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreOp {
    List,
    Create,
    UpdateProgress,
    UpdateName,
    Delete,
}

impl StoreOp {
    pub fn failure_message(self) -> &'static str {
        match self {
            StoreOp::List => "Failed to load habits",
            StoreOp::Create => "Failed to add habit",
            StoreOp::UpdateProgress => "Failed to update progress",
            StoreOp::UpdateName => "Failed to rename habit",
            StoreOp::Delete => "Failed to delete habit",
        }
    }
}

impl fmt::Display for StoreOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            StoreOp::List => "list",
            StoreOp::Create => "create",
            StoreOp::UpdateProgress => "update progress",
            StoreOp::UpdateName => "update name",
            StoreOp::Delete => "delete",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Error)]
pub enum StoreErrorKind {
    #[error("{0}")]
    Transport(#[from] reqwest::Error),
    #[error("unexpected status {0}")]
    Status(StatusCode),
}

/// Transport failures, non-2xx statuses, and undecodable bodies all collapse
/// into this one shape; callers only ever branch on success or failure.
#[derive(Debug, Error)]
#[error("habit store {op} failed: {kind}")]
pub struct StoreError {
    pub op: StoreOp,
    #[source]
    pub kind: StoreErrorKind,
}

impl StoreError {
    fn new(op: StoreOp, kind: impl Into<StoreErrorKind>) -> Self {
        Self {
            op,
            kind: kind.into(),
        }
    }

    pub fn user_message(&self) -> &'static str {
        self.op.failure_message()
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ProgressPatch {
    progress: u8,
    last_completed: String,
}

#[derive(Debug, Serialize)]
struct NamePatch<'a> {
    name: &'a str,
}

/// Client for the remote habit store, the authoritative copy of all records.
#[derive(Clone)]
pub struct HabitStore {
    client: Client,
    base_url: String,
}

impl HabitStore {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    pub async fn list(&self) -> Result<Vec<Habit>, StoreError> {
        let op = StoreOp::List;
        let response = self
            .client
            .get(self.url("/habits"))
            .send()
            .await
            .map_err(|err| StoreError::new(op, err))?;
        expect_success(op, response)?
            .json()
            .await
            .map_err(|err| StoreError::new(op, err))
    }

    pub async fn create(&self, habit: &NewHabit) -> Result<Habit, StoreError> {
        let op = StoreOp::Create;
        let response = self
            .client
            .post(self.url("/habits"))
            .json(habit)
            .send()
            .await
            .map_err(|err| StoreError::new(op, err))?;
        expect_success(op, response)?
            .json()
            .await
            .map_err(|err| StoreError::new(op, err))
    }

    /// Patches progress and stamps `lastCompleted` with today's local date in
    /// the same request.
    pub async fn update_progress(&self, id: u64, progress: u8) -> Result<Habit, StoreError> {
        let op = StoreOp::UpdateProgress;
        let patch = ProgressPatch {
            progress,
            last_completed: today_key(),
        };
        let response = self
            .client
            .patch(self.url(&format!("/habits/{id}")))
            .json(&patch)
            .send()
            .await
            .map_err(|err| StoreError::new(op, err))?;
        expect_success(op, response)?
            .json()
            .await
            .map_err(|err| StoreError::new(op, err))
    }

    pub async fn update_name(&self, id: u64, name: &str) -> Result<Habit, StoreError> {
        let op = StoreOp::UpdateName;
        let response = self
            .client
            .patch(self.url(&format!("/habits/{id}")))
            .json(&NamePatch { name })
            .send()
            .await
            .map_err(|err| StoreError::new(op, err))?;
        expect_success(op, response)?
            .json()
            .await
            .map_err(|err| StoreError::new(op, err))
    }

    pub async fn delete(&self, id: u64) -> Result<(), StoreError> {
        let op = StoreOp::Delete;
        let response = self
            .client
            .delete(self.url(&format!("/habits/{id}")))
            .send()
            .await
            .map_err(|err| StoreError::new(op, err))?;
        expect_success(op, response)?;
        Ok(())
    }
}

fn expect_success(op: StoreOp, response: Response) -> Result<Response, StoreError> {
    let status = response.status();
    if !status.is_success() {
        error!("habit store returned {status} for {op}");
        return Err(StoreError::new(op, StoreErrorKind::Status(status)));
    }
    Ok(response)
}

fn today_key() -> String {
    Local::now().date_naive().to_string()
}
