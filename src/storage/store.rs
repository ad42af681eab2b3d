// src/storage/store.rs

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;

use crate::error::{AppError, AppResult};
use crate::models::{Task, TaskPatch, User, DEFAULT_STATUS};

pub const USERS_FILE: &str = "users.json";
pub const TASKS_FILE: &str = "tasks.json";

/// File-backed store for the user and task collections. Each collection is
/// persisted as one pretty-printed JSON snapshot and rewritten whole on
/// every mutation, before the caller gets its result back.
///
/// One mutex guards both collections and the id counter; it is held across
/// the in-memory mutation and the flush so concurrent handlers cannot lose
/// updates or tear a snapshot.
pub struct Store {
    users_path: PathBuf,
    tasks_path: PathBuf,
    state: Mutex<StoreState>,
}

struct StoreState {
    users: BTreeMap<String, User>,
    tasks: BTreeMap<String, Task>,
    next_task_id: u64,
}

impl Store {
    /// Opens the store rooted at `data_dir`, creating the directory if
    /// needed. Missing or malformed snapshots load as empty collections.
    pub async fn open(data_dir: &Path) -> AppResult<Self> {
        tokio::fs::create_dir_all(data_dir).await?;

        let users_path = data_dir.join(USERS_FILE);
        let tasks_path = data_dir.join(TASKS_FILE);

        let users: BTreeMap<String, User> = load_collection(&users_path).await;
        let tasks: BTreeMap<String, Task> = load_collection(&tasks_path).await;

        // Seed the counter above every surviving id so deletions can never
        // lead to an id being handed out twice.
        let next_task_id = tasks
            .keys()
            .filter_map(|id| id.parse::<u64>().ok())
            .max()
            .unwrap_or(0)
            + 1;

        tracing::info!(
            users = users.len(),
            tasks = tasks.len(),
            "Store loaded from {:?}",
            data_dir
        );

        Ok(Self {
            users_path,
            tasks_path,
            state: Mutex::new(StoreState {
                users,
                tasks,
                next_task_id,
            }),
        })
    }

    // ---- users ----

    pub async fn register_user(&self, username: &str, password_hash: String) -> AppResult<()> {
        let mut state = self.state.lock().await;

        if state.users.contains_key(username) {
            return Err(AppError::Conflict("User already exists".to_string()));
        }

        state.users.insert(
            username.to_string(),
            User {
                username: username.to_string(),
                password_hash,
            },
        );

        save_collection(&self.users_path, &state.users).await
    }

    pub async fn find_user(&self, username: &str) -> Option<User> {
        let state = self.state.lock().await;
        state.users.get(username).cloned()
    }

    pub async fn list_users(&self) -> Vec<User> {
        let state = self.state.lock().await;
        state.users.values().cloned().collect()
    }

    // ---- tasks ----

    pub async fn tasks_for_owner(&self, owner: &str) -> Vec<Task> {
        let state = self.state.lock().await;
        state
            .tasks
            .values()
            .filter(|t| t.owner == owner)
            .cloned()
            .collect()
    }

    pub async fn create_task(
        &self,
        owner: &str,
        description: String,
        status: Option<String>,
    ) -> AppResult<Task> {
        let mut state = self.state.lock().await;

        if !state.users.contains_key(owner) {
            return Err(AppError::AuthError("Unknown task owner".to_string()));
        }

        let id = state.next_task_id.to_string();
        state.next_task_id += 1;

        let task = Task {
            id: id.clone(),
            task: description,
            status: status.unwrap_or_else(|| DEFAULT_STATUS.to_string()),
            owner: owner.to_string(),
        };
        state.tasks.insert(id, task.clone());

        save_collection(&self.tasks_path, &state.tasks).await?;
        Ok(task)
    }

    pub async fn update_task(&self, id: &str, owner: &str, patch: TaskPatch) -> AppResult<Task> {
        let mut state = self.state.lock().await;

        let task = state
            .tasks
            .get_mut(id)
            .ok_or_else(|| AppError::NotFound("Todo not found".to_string()))?;

        if task.owner != owner {
            return Err(AppError::PermissionDenied(
                "Not the owner of this todo".to_string(),
            ));
        }

        if let Some(description) = patch.task {
            task.task = description;
        }
        if let Some(status) = patch.status {
            task.status = status;
        }
        let updated = task.clone();

        save_collection(&self.tasks_path, &state.tasks).await?;
        Ok(updated)
    }

    pub async fn delete_task(&self, id: &str, owner: &str) -> AppResult<()> {
        let mut state = self.state.lock().await;

        let task = state
            .tasks
            .get(id)
            .ok_or_else(|| AppError::NotFound("Todo not found".to_string()))?;

        if task.owner != owner {
            return Err(AppError::PermissionDenied(
                "Not the owner of this todo".to_string(),
            ));
        }

        state.tasks.remove(id);
        save_collection(&self.tasks_path, &state.tasks).await
    }
}

/// Lenient load: a missing file or unparseable content yields an empty
/// collection, never an error.
async fn load_collection<T: DeserializeOwned>(path: &Path) -> BTreeMap<String, T> {
    let bytes = match tokio::fs::read(path).await {
        Ok(bytes) => bytes,
        Err(_) => return BTreeMap::new(),
    };

    match serde_json::from_slice(&bytes) {
        Ok(collection) => collection,
        Err(e) => {
            tracing::warn!("Malformed snapshot {:?}, starting empty: {}", path, e);
            BTreeMap::new()
        }
    }
}

async fn save_collection<T: Serialize>(path: &Path, collection: &BTreeMap<String, T>) -> AppResult<()> {
    let json = serde_json::to_vec_pretty(collection)
        .map_err(|e| AppError::Internal(format!("Failed to serialize snapshot: {}", e)))?;
    tokio::fs::write(path, json).await?;
    Ok(())
}
