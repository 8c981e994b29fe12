use utoipa::OpenApi;

use crate::{
    api::models::{CreateTodoRequest, CreateUserRequest, ErrorResponse, UpdateTodoRequest},
    core::models::{
        todo::Todo,
        user::{User, UserWithTodos},
    },
};

#[derive(OpenApi)]
#[openapi(
    paths(
        super::handlers::create_user,
        super::handlers::list_todos,
        super::handlers::create_todo,
        super::handlers::update_todo,
        super::handlers::mark_todo_done,
        super::handlers::delete_todo
    ),
    components(schemas(
        CreateUserRequest,
        CreateTodoRequest,
        UpdateTodoRequest,
        ErrorResponse,
        User,
        UserWithTodos,
        Todo
    )),
    info(
        title = "Todo API",
        description = "Per-user to-do lists, identified by the `username` header",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;
