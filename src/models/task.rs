// src/models/task.rs

use serde::{Deserialize, Serialize};

pub const DEFAULT_STATUS: &str = "pending";

/// A task record. `id` is assigned by the store, `owner` is taken from the
/// caller's verified token; both are immutable afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Task {
    pub id: String,
    pub task: String,
    pub status: String,
    pub owner: String,
}

#[derive(Debug, Deserialize)]
pub struct CreateTaskRequest {
    pub task: Option<String>,
    pub status: Option<String>,
}

/// Partial update for PUT /todos/{id}. Only `task` and `status` are
/// mutable; unknown JSON keys are dropped by typed deserialization.
#[derive(Debug, Default, Deserialize)]
pub struct TaskPatch {
    pub task: Option<String>,
    pub status: Option<String>,
}
