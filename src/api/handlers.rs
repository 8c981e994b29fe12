use crate::{
    api::models::*,
    core::{
        errors::TodoError,
        models::{
            todo::Todo,
            user::{User, UserWithTodos},
        },
        services::TodoService,
    },
    infrastructure::storage::in_memory::InMemoryStorage,
};
use axum::{
    Extension, Json, Router,
    extract::{Path, Request, State, rejection::JsonRejection},
    http::StatusCode,
    middleware::{self, Next},
    response::IntoResponse,
};
use std::sync::Arc;
use tracing::debug;

pub type AppService = TodoService<InMemoryStorage>;

/// Header carrying the caller's identity on every todo route.
pub const USERNAME_HEADER: &str = "username";

// Resolves the acting user and hands it to the handler as a request extension.
async fn auth_middleware(
    State(service): State<Arc<AppService>>,
    mut req: Request<axum::body::Body>,
    next: Next,
) -> Result<impl IntoResponse, ApiError> {
    let username = req
        .headers()
        .get(USERNAME_HEADER)
        .and_then(|h| h.to_str().ok())
        .map(str::to_owned);

    let user = service.authenticate(username.as_deref()).await.inspect_err(|_| {
        debug!(username = ?username, "rejected request without a registered username");
    })?;
    req.extensions_mut().insert(user);
    Ok(next.run(req).await)
}

// A request without a JSON content type carries no fields; only malformed JSON is rejected.
fn json_body<T: Default>(payload: Result<Json<T>, JsonRejection>) -> Result<T, ApiError> {
    match payload {
        Ok(Json(body)) => Ok(body),
        Err(JsonRejection::MissingJsonContentType(_)) => Ok(T::default()),
        Err(rejection) => Err(ApiError(TodoError::InvalidBody(rejection.body_text()))),
    }
}

// Define API routes
pub fn api_routes(service: Arc<AppService>) -> Router {
    let protected_routes = Router::new()
        .route("/todos", axum::routing::get(list_todos).post(create_todo))
        .route("/todos/{id}", axum::routing::put(update_todo).delete(delete_todo))
        .route("/todos/{id}/done", axum::routing::patch(mark_todo_done))
        .route_layer(middleware::from_fn_with_state(service.clone(), auth_middleware));

    Router::new()
        .route("/", axum::routing::get(|| async { "OK" }))
        .route("/users", axum::routing::post(create_user)) // Unprotected
        .merge(protected_routes)
        .with_state(service)
}

#[utoipa::path(
    post,
    path = "/users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created successfully", body = UserWithTodos),
        (status = 400, description = "Username taken or missing", body = ErrorResponse)
    )
)]
async fn create_user(
    State(service): State<Arc<AppService>>,
    payload: Result<Json<CreateUserRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<UserWithTodos>), ApiError> {
    let req = json_body(payload)?;
    let name = req.name.unwrap_or_default();
    let username = req
        .username
        .filter(|u| !u.is_empty())
        .ok_or(TodoError::MissingField("username"))?;
    let user = service.add_user(name, username).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

#[utoipa::path(
    get,
    path = "/todos",
    params(("username" = String, Header, description = "Username of the caller")),
    responses(
        (status = 200, description = "Caller's todos in insertion order", body = [Todo]),
        (status = 403, description = "Unknown username", body = ErrorResponse)
    )
)]
async fn list_todos(
    State(service): State<Arc<AppService>>,
    Extension(user): Extension<User>,
) -> Result<Json<Vec<Todo>>, ApiError> {
    let todos = service.list_todos(&user).await?;
    Ok(Json(todos))
}

#[utoipa::path(
    post,
    path = "/todos",
    params(("username" = String, Header, description = "Username of the caller")),
    request_body = CreateTodoRequest,
    responses(
        (status = 201, description = "Todo created", body = Todo),
        (status = 400, description = "Missing title or deadline", body = ErrorResponse),
        (status = 403, description = "Unknown username", body = ErrorResponse)
    )
)]
async fn create_todo(
    State(service): State<Arc<AppService>>,
    Extension(user): Extension<User>,
    payload: Result<Json<CreateTodoRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Todo>), ApiError> {
    let req = json_body(payload)?;
    let todo = service.create_todo(&user, req.title, req.deadline).await?;
    Ok((StatusCode::CREATED, Json(todo)))
}

#[utoipa::path(
    put,
    path = "/todos/{id}",
    params(
        ("id" = String, Path, description = "ID of the todo to update"),
        ("username" = String, Header, description = "Username of the caller")
    ),
    request_body = UpdateTodoRequest,
    responses(
        (status = 200, description = "Todo updated", body = Todo),
        (status = 403, description = "Unknown username", body = ErrorResponse),
        (status = 404, description = "Todo not found", body = ErrorResponse)
    )
)]
async fn update_todo(
    State(service): State<Arc<AppService>>,
    Extension(user): Extension<User>,
    Path(todo_id): Path<String>,
    payload: Result<Json<UpdateTodoRequest>, JsonRejection>,
) -> Result<Json<Todo>, ApiError> {
    let req = json_body(payload)?;
    let todo = service
        .update_todo(&user, &todo_id, req.title, req.deadline)
        .await?;
    Ok(Json(todo))
}

#[utoipa::path(
    patch,
    path = "/todos/{id}/done",
    params(
        ("id" = String, Path, description = "ID of the todo to complete"),
        ("username" = String, Header, description = "Username of the caller")
    ),
    responses(
        (status = 200, description = "Todo marked done", body = Todo),
        (status = 403, description = "Unknown username", body = ErrorResponse),
        (status = 404, description = "Todo not found", body = ErrorResponse)
    )
)]
async fn mark_todo_done(
    State(service): State<Arc<AppService>>,
    Extension(user): Extension<User>,
    Path(todo_id): Path<String>,
) -> Result<Json<Todo>, ApiError> {
    let todo = service.mark_todo_done(&user, &todo_id).await?;
    Ok(Json(todo))
}

#[utoipa::path(
    delete,
    path = "/todos/{id}",
    params(
        ("id" = String, Path, description = "ID of the todo to delete"),
        ("username" = String, Header, description = "Username of the caller")
    ),
    responses(
        (status = 204, description = "Todo deleted"),
        (status = 403, description = "Unknown username", body = ErrorResponse),
        (status = 404, description = "Todo not found", body = ErrorResponse)
    )
)]
async fn delete_todo(
    State(service): State<Arc<AppService>>,
    Extension(user): Extension<User>,
    Path(todo_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    service.delete_todo(&user, &todo_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
