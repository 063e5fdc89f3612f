//! HTTP Handlers

use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use serde::de::DeserializeOwned;
use std::sync::Arc;

use crate::application::config::UsersConfig;
use crate::application::{
    CreateUserInput, CreateUserUseCase, DeleteUserUseCase, GetUserUseCase, ListUsersUseCase,
    UpdateUserInput, UpdateUserUseCase,
};
use crate::domain::repository::UserRepository;
use crate::error::{UserError, UserResult};
use crate::presentation::dto::{CreateUserRequest, UpdateUserRequest, UserResponse};
use crate::presentation::extract::UserIdParam;

/// Shared state for user handlers
#[derive(Clone)]
pub struct UsersAppState<R>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<UsersConfig>,
}

/// GET /users
pub async fn list_users<R>(
    State(state): State<UsersAppState<R>>,
) -> UserResult<Json<Vec<UserResponse>>>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let users = ListUsersUseCase::new(state.repo.clone()).execute().await?;
    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

/// POST /users
pub async fn create_user<R>(
    State(state): State<UsersAppState<R>>,
    body: Bytes,
) -> UserResult<Json<UserResponse>>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let req: CreateUserRequest = parse_json(&body)?;

    let use_case = CreateUserUseCase::new(state.repo.clone(), state.config.clone());
    let user = use_case
        .execute(CreateUserInput {
            id: req.id,
            name: req.name,
        })
        .await?;

    Ok(Json(user.into()))
}

/// GET /users/{id}
pub async fn get_user<R>(
    State(state): State<UsersAppState<R>>,
    UserIdParam(id): UserIdParam,
) -> UserResult<Json<UserResponse>>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let user = GetUserUseCase::new(state.repo.clone()).execute(id).await?;
    Ok(Json(user.into()))
}

/// PUT /users/{id}
pub async fn update_user<R>(
    State(state): State<UsersAppState<R>>,
    UserIdParam(id): UserIdParam,
    body: Bytes,
) -> UserResult<Json<UserResponse>>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let req: UpdateUserRequest = parse_json(&body)?;

    let use_case = UpdateUserUseCase::new(state.repo.clone(), state.config.clone());
    let user = use_case
        .execute(UpdateUserInput { id, name: req.name })
        .await?;

    Ok(Json(user.into()))
}

/// DELETE /users/{id}
pub async fn delete_user<R>(
    State(state): State<UsersAppState<R>>,
    UserIdParam(id): UserIdParam,
) -> UserResult<StatusCode>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    DeleteUserUseCase::new(state.repo.clone()).execute(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Decode a JSON body regardless of `Content-Type`.
fn parse_json<T: DeserializeOwned>(body: &[u8]) -> UserResult<T> {
    serde_json::from_slice(body).map_err(UserError::from)
}
