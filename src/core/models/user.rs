use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::todo::Todo;

/// A registered identity. Resolved from the `username` header on every todo route.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct User {
    pub id: String,
    pub name: String,
    pub username: String,
}

/// A user together with its todos, as returned by registration.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct UserWithTodos {
    pub id: String,
    pub name: String,
    pub username: String,
    pub todos: Vec<Todo>,
}

impl UserWithTodos {
    pub fn new(user: User, todos: Vec<Todo>) -> Self {
        UserWithTodos {
            id: user.id,
            name: user.name,
            username: user.username,
            todos,
        }
    }
}
