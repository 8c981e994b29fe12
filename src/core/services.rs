use crate::core::errors::TodoError;
use crate::core::models::{
    todo::{Todo, TodoPatch, parse_deadline},
    user::{User, UserWithTodos},
};
use crate::infrastructure::storage::Storage;
use chrono::Utc;
use log::{debug, info, warn};
use uuid::Uuid;

pub struct TodoService<S: Storage> {
    storage: S,
}

/// Empty strings count as "not supplied", matching how clients omit fields.
fn supplied(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

impl<S: Storage> TodoService<S> {
    pub fn new(storage: S) -> Self {
        TodoService { storage }
    }

    pub async fn add_user(&self, name: String, username: String) -> Result<UserWithTodos, TodoError> {
        info!("Registering user {}", username);
        let user = User {
            id: Uuid::new_v4().to_string(),
            name,
            username,
        };
        let created = self.storage.create_user_if_not_exists(user).await.inspect_err(|e| {
            warn!("Registration rejected: {}", e);
        })?;
        debug!("User created with ID: {}", created.id);
        Ok(UserWithTodos::new(created, Vec::new()))
    }

    /// Resolves the acting user from the identity header value.
    pub async fn authenticate(&self, username: Option<&str>) -> Result<User, TodoError> {
        let username = username.ok_or(TodoError::Unauthorized)?;
        self.storage
            .get_user_by_username(username)
            .await?
            .ok_or(TodoError::Unauthorized)
    }

    pub async fn count_users(&self) -> Result<usize, TodoError> {
        self.storage.count_users().await
    }

    pub async fn list_todos(&self, user: &User) -> Result<Vec<Todo>, TodoError> {
        self.storage.list_todos(&user.username).await
    }

    pub async fn create_todo(
        &self,
        user: &User,
        title: Option<String>,
        deadline: Option<String>,
    ) -> Result<Todo, TodoError> {
        let title = supplied(title).ok_or(TodoError::MissingField("title"))?;
        let deadline = supplied(deadline).ok_or(TodoError::MissingField("deadline"))?;
        let deadline = parse_deadline(&deadline)?;

        let todo = Todo {
            id: Uuid::new_v4().to_string(),
            title,
            done: false,
            deadline,
            created_at: Utc::now(),
        };
        let created = self.storage.insert_todo(&user.username, todo).await?;
        info!("Todo {} created for {}", created.id, user.username);
        Ok(created)
    }

    /// Replaces the supplied fields of an existing todo. An unknown ID is reported
    /// before the body is validated.
    pub async fn update_todo(
        &self,
        user: &User,
        todo_id: &str,
        title: Option<String>,
        deadline: Option<String>,
    ) -> Result<Todo, TodoError> {
        let not_found = || TodoError::TodoNotFound(todo_id.to_string());
        self.storage
            .get_todo(&user.username, todo_id)
            .await?
            .ok_or_else(not_found)?;

        let patch = TodoPatch {
            title: supplied(title),
            deadline: supplied(deadline).map(|d| parse_deadline(&d)).transpose()?,
        };
        let updated = self
            .storage
            .update_todo(&user.username, todo_id, patch)
            .await?
            .ok_or_else(not_found)?;
        debug!("Todo {} updated for {}", updated.id, user.username);
        Ok(updated)
    }

    pub async fn mark_todo_done(&self, user: &User, todo_id: &str) -> Result<Todo, TodoError> {
        let updated = self
            .storage
            .mark_todo_done(&user.username, todo_id)
            .await?
            .ok_or_else(|| TodoError::TodoNotFound(todo_id.to_string()))?;
        debug!("Todo {} marked done for {}", updated.id, user.username);
        Ok(updated)
    }

    pub async fn delete_todo(&self, user: &User, todo_id: &str) -> Result<Todo, TodoError> {
        let removed = self
            .storage
            .remove_todo(&user.username, todo_id)
            .await?
            .ok_or_else(|| TodoError::TodoNotFound(todo_id.to_string()))?;
        info!("Todo {} deleted by {}", removed.id, user.username);
        Ok(removed)
    }
}
