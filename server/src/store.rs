//! In-memory task store shared across request handlers.
//!
//! Tasks live only as long as the process; nothing survives a restart.

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::model::{Task, TaskPayload};

#[derive(Debug, Default)]
struct StoreInner {
    tasks: Vec<Task>,
    next_id: i64,
}

/// Shared task collection. Cloning is cheap; every clone sees the same data.
#[derive(Debug, Clone, Default)]
pub struct TaskStore {
    inner: Arc<Mutex<StoreInner>>,
}

impl TaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn list(&self) -> Vec<Task> {
        self.inner.lock().await.tasks.clone()
    }

    pub async fn get(&self, id: i64) -> Option<Task> {
        self.inner
            .lock()
            .await
            .tasks
            .iter()
            .find(|task| task.id == id)
            .cloned()
    }

    /// Insert a new task under the next id (1, 2, ...).
    pub async fn create(&self, payload: TaskPayload) -> Task {
        let mut inner = self.inner.lock().await;
        inner.next_id += 1;
        let task = Task {
            id: inner.next_id,
            title: payload.title,
            description: payload.description,
            completed: payload.completed,
        };
        inner.tasks.push(task.clone());
        task
    }

    /// Overwrite the task at `id` with the payload, keeping its position.
    /// Returns the stored record, or `None` when no task has that id.
    pub async fn replace(&self, id: i64, payload: TaskPayload) -> Option<Task> {
        let mut inner = self.inner.lock().await;
        let task = inner.tasks.iter_mut().find(|task| task.id == id)?;
        task.title = payload.title;
        task.description = payload.description;
        task.completed = payload.completed;
        Some(task.clone())
    }

    /// Remove the task with `id`. Returns `false` when nothing matched.
    pub async fn remove(&self, id: i64) -> bool {
        let mut inner = self.inner.lock().await;
        let before = inner.tasks.len();
        inner.tasks.retain(|task| task.id != id);
        inner.tasks.len() != before
    }
}
