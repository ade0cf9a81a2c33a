//! Todo store: CRUD over todo records.
//!
//! Creating never conflicts. Deleting or updating an unknown id answers 200
//! and changes nothing.

mod repository;

pub use repository::TodoRepository;

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use taskboard_core::{NewTodo, Todo, TodoPatch};
use tokio::net::TcpListener;

use crate::{
    error::ServiceError,
    extract::{JsonBody, PathParam},
    web,
};

pub fn app() -> Router {
    router(TodoRepository::new())
}

pub fn router(repo: TodoRepository) -> Router {
    let routes = Router::new()
        .route("/api/todo", post(create_todo))
        .route("/api/list-todo", get(list_todos))
        .route(
            "/api/todo/{id}",
            get(get_todo).patch(update_todo).delete(delete_todo),
        )
        .with_state(repo);
    web::with_common_layers(routes)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    web::serve(listener, app()).await
}

async fn create_todo(
    State(repo): State<TodoRepository>,
    JsonBody(input): JsonBody<NewTodo>,
) -> Json<Todo> {
    let todo = repo.create(input).await;
    tracing::info!(todo_id = todo.id, "todo created");
    Json(todo)
}

async fn list_todos(State(repo): State<TodoRepository>) -> Json<Vec<Todo>> {
    Json(repo.list().await)
}

async fn get_todo(
    State(repo): State<TodoRepository>,
    PathParam(id): PathParam<u64>,
) -> Result<Json<Todo>, ServiceError> {
    repo.get(id).await.map(Json).ok_or(ServiceError::NotFound)
}

async fn delete_todo(
    State(repo): State<TodoRepository>,
    PathParam(id): PathParam<u64>,
) -> StatusCode {
    if repo.delete(id).await {
        tracing::info!(todo_id = id, "todo deleted");
    }
    StatusCode::OK
}

// TODO: answer 404 for a missing id once the web frontend stops relying on
// the unconditional 200.
async fn update_todo(
    State(repo): State<TodoRepository>,
    PathParam(id): PathParam<u64>,
    JsonBody(patch): JsonBody<TodoPatch>,
) -> StatusCode {
    match repo.update(id, patch).await {
        Some(_) => tracing::info!(todo_id = id, "todo updated"),
        None => tracing::debug!(todo_id = id, "update ignored, todo does not exist"),
    }
    StatusCode::OK
}
