use crate::core::errors::TodoError;
use crate::core::models::{
    todo::{Todo, TodoPatch},
    user::User,
};
use crate::infrastructure::storage::Storage;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Todos owned by one user, keyed by ID with insertion order kept separately.
#[derive(Clone, Debug, Default)]
struct TodoList {
    by_id: HashMap<String, Todo>,
    order: Vec<String>,
}

impl TodoList {
    fn push(&mut self, todo: Todo) {
        self.order.push(todo.id.clone());
        self.by_id.insert(todo.id.clone(), todo);
    }

    fn get_mut(&mut self, todo_id: &str) -> Option<&mut Todo> {
        self.by_id.get_mut(todo_id)
    }

    fn remove(&mut self, todo_id: &str) -> Option<Todo> {
        let todo = self.by_id.remove(todo_id)?;
        if let Some(index) = find_todo_index(&self.order, todo_id) {
            self.order.remove(index);
        }
        Some(todo)
    }

    fn to_vec(&self) -> Vec<Todo> {
        self.order
            .iter()
            .filter_map(|id| self.by_id.get(id))
            .cloned()
            .collect()
    }
}

/// Position of `todo_id` in an owner's insertion order.
fn find_todo_index(order: &[String], todo_id: &str) -> Option<usize> {
    order.iter().position(|id| id == todo_id)
}

#[derive(Clone, Debug)]
struct UserRecord {
    user: User,
    todos: TodoList,
}

/// Directory held entirely in process memory. Clones share the same directory.
///
/// Every read-modify-write runs under a single write guard, so concurrent
/// requests against the same user cannot lose updates.
#[derive(Clone, Default)]
pub struct InMemoryStorage {
    users: Arc<RwLock<HashMap<String, UserRecord>>>,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        InMemoryStorage {
            users: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

#[async_trait]
impl Storage for InMemoryStorage {
    async fn create_user_if_not_exists(&self, user: User) -> Result<User, TodoError> {
        let mut users = self.users.write().await;
        if users.contains_key(&user.username) {
            return Err(TodoError::UserAlreadyExists(user.username));
        }
        users.insert(
            user.username.clone(),
            UserRecord {
                user: user.clone(),
                todos: TodoList::default(),
            },
        );
        Ok(user)
    }

    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>, TodoError> {
        let users = self.users.read().await;
        Ok(users.get(username).map(|record| record.user.clone()))
    }

    async fn count_users(&self) -> Result<usize, TodoError> {
        let users = self.users.read().await;
        Ok(users.len())
    }

    async fn get_todo(&self, username: &str, todo_id: &str) -> Result<Option<Todo>, TodoError> {
        let users = self.users.read().await;
        Ok(users
            .get(username)
            .and_then(|record| record.todos.by_id.get(todo_id))
            .cloned())
    }

    async fn list_todos(&self, username: &str) -> Result<Vec<Todo>, TodoError> {
        let users = self.users.read().await;
        Ok(users
            .get(username)
            .map(|record| record.todos.to_vec())
            .unwrap_or_default())
    }

    async fn insert_todo(&self, username: &str, todo: Todo) -> Result<Todo, TodoError> {
        let mut users = self.users.write().await;
        let record = users
            .get_mut(username)
            .ok_or_else(|| TodoError::StorageError(format!("no directory entry for {}", username)))?;
        record.todos.push(todo.clone());
        Ok(todo)
    }

    async fn update_todo(&self, username: &str, todo_id: &str, patch: TodoPatch) -> Result<Option<Todo>, TodoError> {
        let mut users = self.users.write().await;
        Ok(users
            .get_mut(username)
            .and_then(|record| record.todos.get_mut(todo_id))
            .map(|todo| {
                patch.apply(todo);
                todo.clone()
            }))
    }

    async fn mark_todo_done(&self, username: &str, todo_id: &str) -> Result<Option<Todo>, TodoError> {
        let mut users = self.users.write().await;
        Ok(users
            .get_mut(username)
            .and_then(|record| record.todos.get_mut(todo_id))
            .map(|todo| {
                todo.done = true;
                todo.clone()
            }))
    }

    async fn remove_todo(&self, username: &str, todo_id: &str) -> Result<Option<Todo>, TodoError> {
        let mut users = self.users.write().await;
        Ok(users.get_mut(username).and_then(|record| record.todos.remove(todo_id)))
    }
}
