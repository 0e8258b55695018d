//! Todo list storage operations

use serde::{Deserialize, Serialize};

use super::Store;
use crate::errors::Result;

/// Timestamp format used throughout the store
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub(crate) fn now_string() -> String {
    chrono::Local::now().format(TIMESTAMP_FORMAT).to_string()
}

/// A single todo row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: u64,
    pub content: String,
    /// 0 = open, 1 = done
    pub status: i64,
    pub created_at: String,
    pub updated_at: String,
    #[serde(default)]
    pub completed_at: Option<String>,
}

impl Store {
    /// List todos, open items first, newest first within a status.
    pub async fn list_todos(&self) -> Vec<Todo> {
        self.read(|data| {
            let mut todos = data.todos.clone();
            todos.sort_by(|a, b| a.status.cmp(&b.status).then(b.id.cmp(&a.id)));
            todos
        })
        .await
    }

    /// Insert a new open todo.
    pub async fn add_todo(&self, content: String) -> Result<Todo> {
        self.write(|data| {
            let now = now_string();
            let todo = Todo {
                id: data.take_todo_id(),
                content,
                status: 0,
                created_at: now.clone(),
                updated_at: now,
                completed_at: None,
            };
            data.todos.push(todo.clone());
            todo
        })
        .await
    }

    /// Apply a partial update. Setting status also sets or clears the
    /// completion timestamp. Returns false for an unknown id.
    pub async fn update_todo(
        &self,
        id: u64,
        content: Option<String>,
        status: Option<i64>,
    ) -> Result<bool> {
        self.write(|data| {
            let Some(todo) = data.todos.iter_mut().find(|t| t.id == id) else {
                return false;
            };
            let now = now_string();
            todo.updated_at = now.clone();
            if let Some(content) = content {
                todo.content = content;
            }
            if let Some(status) = status {
                todo.status = status;
                todo.completed_at = if status == 1 { Some(now) } else { None };
            }
            true
        })
        .await
    }

    /// Remove a todo. Returns false for an unknown id.
    pub async fn delete_todo(&self, id: u64) -> Result<bool> {
        self.write(|data| {
            let before = data.todos.len();
            data.todos.retain(|t| t.id != id);
            data.todos.len() != before
        })
        .await
    }
}
