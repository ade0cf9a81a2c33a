use std::{collections::BTreeMap, sync::Arc};

use taskboard_core::{NewTodo, Todo, TodoPatch};
use tokio::sync::RwLock;

#[derive(Debug, Default)]
struct TodoTable {
    last_id: u64,
    rows: BTreeMap<u64, Todo>,
}

/// In-memory todo storage. Clones share the same table.
#[derive(Debug, Clone, Default)]
pub struct TodoRepository {
    table: Arc<RwLock<TodoTable>>,
}

impl TodoRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a new todo under the next id. Ids are never reused.
    pub async fn create(&self, input: NewTodo) -> Todo {
        let mut table = self.table.write().await;
        table.last_id += 1;
        let todo = Todo {
            id: table.last_id,
            content: input.content,
            due_date: input.due_date,
            done: input.done,
        };
        table.rows.insert(todo.id, todo.clone());
        todo
    }

    /// All todos in ascending id order.
    pub async fn list(&self) -> Vec<Todo> {
        self.table.read().await.rows.values().cloned().collect()
    }

    pub async fn get(&self, id: u64) -> Option<Todo> {
        self.table.read().await.rows.get(&id).cloned()
    }

    /// Returns whether a todo was removed.
    pub async fn delete(&self, id: u64) -> bool {
        self.table.write().await.rows.remove(&id).is_some()
    }

    /// Apply the fields present in `patch`; a `null` due date clears it.
    /// Returns `None`, leaving the table untouched, when `id` is unknown.
    pub async fn update(&self, id: u64, patch: TodoPatch) -> Option<Todo> {
        let mut table = self.table.write().await;
        let todo = table.rows.get_mut(&id)?;
        if let Some(content) = patch.content {
            todo.content = content;
        }
        if let Some(due_date) = patch.due_date {
            todo.due_date = due_date;
        }
        if let Some(done) = patch.done {
            todo.done = done;
        }
        Some(todo.clone())
    }
}
