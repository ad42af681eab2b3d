// src/handlers/tasks.rs

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Extension, Json,
};

use super::AppState;
use crate::auth::Claims;
use crate::error::{AppError, AppResult};
use crate::models::{CreateTaskRequest, MessageResponse, Task, TaskPatch};

pub async fn list_tasks(
    Extension(claims): Extension<Claims>,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<Task>>> {
    let tasks = state.store.tasks_for_owner(&claims.sub).await;
    Ok(Json(tasks))
}

pub async fn create_task(
    Extension(claims): Extension<Claims>,
    State(state): State<AppState>,
    Json(req): Json<CreateTaskRequest>,
) -> AppResult<(StatusCode, Json<Task>)> {
    let description = match req.task {
        Some(task) if !task.is_empty() => task,
        _ => {
            return Err(AppError::ValidationError(
                "Task description required".to_string(),
            ))
        }
    };

    let task = state
        .store
        .create_task(&claims.sub, description, req.status)
        .await?;

    Ok((StatusCode::CREATED, Json(task)))
}

pub async fn update_task(
    Extension(claims): Extension<Claims>,
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(patch): Json<TaskPatch>,
) -> AppResult<Json<Task>> {
    let task = state.store.update_task(&id, &claims.sub, patch).await?;
    Ok(Json(task))
}

pub async fn delete_task(
    Extension(claims): Extension<Claims>,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    state.store.delete_task(&id, &claims.sub).await?;
    Ok(Json(MessageResponse::new("Todo deleted successfully")))
}
