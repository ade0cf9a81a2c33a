//! User store: CRUD over user records, lookup by id or username.

mod repository;

pub use repository::UserRepository;

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use taskboard_core::{NewUser, User, UserPatch};
use tokio::net::TcpListener;

use crate::{
    error::ServiceError,
    extract::{JsonBody, PathParam},
    web,
};

pub fn app() -> Router {
    router(UserRepository::new())
}

pub fn router(repo: UserRepository) -> Router {
    let routes = Router::new()
        .route("/api/user", post(create_user))
        .route("/api/users", get(list_users))
        .route(
            "/api/user/{id}",
            get(get_user).patch(update_user).delete(delete_user),
        )
        .route("/api/user/username/{username}", get(get_user_by_username))
        .with_state(repo);
    web::with_common_layers(routes)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    web::serve(listener, app()).await
}

async fn create_user(
    State(repo): State<UserRepository>,
    JsonBody(input): JsonBody<NewUser>,
) -> Result<(StatusCode, Json<User>), ServiceError> {
    let user = repo.create(input).await.inspect_err(|error| {
        tracing::info!(error = %error, "user rejected");
    })?;
    tracing::info!(user_id = user.id, username = %user.username, "user created");
    Ok((StatusCode::CREATED, Json(user)))
}

async fn list_users(State(repo): State<UserRepository>) -> Json<Vec<User>> {
    Json(repo.list().await)
}

async fn get_user(
    State(repo): State<UserRepository>,
    PathParam(id): PathParam<u64>,
) -> Result<Json<User>, ServiceError> {
    repo.get(id).await.map(Json)
}

async fn get_user_by_username(
    State(repo): State<UserRepository>,
    PathParam(username): PathParam<String>,
) -> Result<Json<User>, ServiceError> {
    repo.get_by_username(&username).await.map(Json)
}

async fn delete_user(
    State(repo): State<UserRepository>,
    PathParam(id): PathParam<u64>,
) -> Result<StatusCode, ServiceError> {
    repo.delete(id).await?;
    tracing::info!(user_id = id, "user deleted");
    Ok(StatusCode::NO_CONTENT)
}

async fn update_user(
    State(repo): State<UserRepository>,
    PathParam(id): PathParam<u64>,
    JsonBody(patch): JsonBody<UserPatch>,
) -> Result<Json<User>, ServiceError> {
    let user = repo.update(id, patch).await?;
    tracing::info!(user_id = id, "user updated");
    Ok(Json(user))
}
