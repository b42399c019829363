use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post, put},
    Json, Router,
};
use tracing::{debug, error, info, instrument, warn};

use crate::state::AppState;
use crate::users::dto::{
    CreateUserRequest, CreateUserResponse, EmailLookupResponse, FailureResponse, StatusResponse,
    UpdateProfileRequest, UpdateProfileResponse, UpdateSetupRequest, UserResponse,
};
use crate::users::repo::StoreError;

pub fn read_routes() -> Router<AppState> {
    Router::new()
        .route("/email/:email", get(user_by_email))
        .route("/:id", get(user_by_id))
}

pub fn write_routes() -> Router<AppState> {
    Router::new()
        .route("/create", post(create_user))
        .route("/updateSetup", post(update_setup))
        .route("/profile/:id", put(update_profile))
}

// ---- Handlers ----

#[instrument(skip(state, payload))]
pub async fn create_user(
    State(state): State<AppState>,
    Json(payload): Json<CreateUserRequest>,
) -> Result<(StatusCode, Json<CreateUserResponse>), (StatusCode, Json<StatusResponse>)> {
    match state
        .users
        .create(&payload.name, &payload.email, &payload.password)
        .await
    {
        Ok(user_id) => {
            info!(user_id, email = %payload.email, "user created");
            Ok((
                StatusCode::CREATED,
                Json(CreateUserResponse {
                    message: "User created successfully".into(),
                    user_id,
                    status: "success".into(),
                }),
            ))
        }
        Err(e) => {
            error!(error = %e, email = %payload.email, "create user failed");
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(StatusResponse {
                    message: "Error creating user".into(),
                    status: "error".into(),
                }),
            ))
        }
    }
}

#[instrument(skip(state))]
pub async fn user_by_email(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> Result<Json<EmailLookupResponse>, (StatusCode, String)> {
    match state.users.find_by_email(&email).await {
        Ok(Some(user)) => Ok(Json(EmailLookupResponse {
            user: Some(user),
            exist: true,
        })),
        Ok(None) => {
            debug!(%email, "no user with that email");
            Ok(Json(EmailLookupResponse {
                user: None,
                exist: false,
            }))
        }
        Err(e) => {
            error!(error = %e, %email, "email lookup failed");
            Err((StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))
        }
    }
}

#[instrument(skip(state))]
pub async fn user_by_id(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<UserResponse>, (StatusCode, Json<FailureResponse>)> {
    match state.users.find_by_id(id).await {
        Ok(user) => Ok(Json(UserResponse {
            success: true,
            user,
        })),
        Err(StoreError::NotFound) => {
            warn!(%id, "user not found");
            Err((
                StatusCode::NOT_FOUND,
                Json(FailureResponse {
                    success: false,
                    message: "User not found".into(),
                }),
            ))
        }
        Err(e) => {
            error!(error = %e, %id, "id lookup failed");
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(FailureResponse {
                    success: false,
                    message: e.to_string(),
                }),
            ))
        }
    }
}

#[instrument(skip(state, payload))]
pub async fn update_setup(
    State(state): State<AppState>,
    Json(payload): Json<UpdateSetupRequest>,
) -> Result<Json<StatusResponse>, (StatusCode, Json<StatusResponse>)> {
    match state.users.update_setup(&payload).await {
        Ok(rows) => {
            // The documented contract reports success even when no row
            // matched; STRICT_SETUP turns that case into a 404.
            if state.config.strict_setup && rows == 0 {
                warn!(user_id = payload.user_id, "setup update matched no user");
                return Err((
                    StatusCode::NOT_FOUND,
                    Json(StatusResponse {
                        message: "User not found".into(),
                        status: "error".into(),
                    }),
                ));
            }
            info!(user_id = payload.user_id, rows, "user setup completed");
            Ok(Json(StatusResponse {
                message: "Setup completed successfully".into(),
                status: "success".into(),
            }))
        }
        Err(e) => {
            error!(error = %e, user_id = payload.user_id, "setup update failed");
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(StatusResponse {
                    message: "Error updating setup".into(),
                    status: "error".into(),
                }),
            ))
        }
    }
}

#[instrument(skip(state, payload))]
pub async fn update_profile(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateProfileRequest>,
) -> Result<Json<UpdateProfileResponse>, (StatusCode, Json<FailureResponse>)> {
    match state.users.update_profile(id, &payload).await {
        Ok(user) => {
            info!(%id, email = %user.email, "profile updated");
            Ok(Json(UpdateProfileResponse {
                success: true,
                message: "Profile updated successfully".into(),
                user,
            }))
        }
        Err(StoreError::NotFound) => {
            warn!(%id, "profile update for unknown user");
            Err((
                StatusCode::NOT_FOUND,
                Json(FailureResponse {
                    success: false,
                    message: "User not found".into(),
                }),
            ))
        }
        Err(e) => {
            error!(error = %e, %id, "profile update failed");
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(FailureResponse {
                    success: false,
                    message: e.to_string(),
                }),
            ))
        }
    }
}
