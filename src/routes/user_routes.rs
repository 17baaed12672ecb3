use axum::{
    extract::{Path, State},
    routing::{delete, get, post, put},
    Extension, Json, Router,
};
use uuid::Uuid;

use crate::controllers::user_controller::UserController;
use crate::dto::common::ApiResponse;
use crate::dto::user_dto::{CreateUserRequest, UpdateUserRequest};
use crate::middleware::auth::AuthenticatedUser;
use crate::models::user::User;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_user_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_user))
        .route("/", get(list_users))
        .route("/:id", get(get_user))
        .route("/:id", put(update_user))
        .route("/:id", delete(delete_user))
        .route("/:id/team", delete(clear_team))
}

async fn create_user(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Json(request): Json<CreateUserRequest>,
) -> Result<Json<ApiResponse<User>>, AppError> {
    let controller = UserController::new(state.tenant_db(user.organization_id));
    let response = controller.create(request).await?;
    Ok(Json(response))
}

async fn get_user(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<Uuid>,
) -> Result<Json<User>, AppError> {
    let controller = UserController::new(state.tenant_db(user.organization_id));
    let found = controller.get_by_id(id).await?;
    Ok(Json(found))
}

async fn list_users(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
) -> Result<Json<Vec<User>>, AppError> {
    let controller = UserController::new(state.tenant_db(user.organization_id));
    let users = controller.list().await?;
    Ok(Json(users))
}

async fn update_user(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateUserRequest>,
) -> Result<Json<ApiResponse<User>>, AppError> {
    let controller = UserController::new(state.tenant_db(user.organization_id));
    let response = controller.update(id, request).await?;
    Ok(Json(response))
}

async fn clear_team(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<Uuid>,
) -> Result<Json<User>, AppError> {
    let controller = UserController::new(state.tenant_db(user.organization_id));
    let updated = controller.clear_team(id).await?;
    Ok(Json(updated))
}

async fn delete_user(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let controller = UserController::new(state.tenant_db(user.organization_id));
    controller.delete(id).await?;
    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Usuario eliminado exitosamente"
    })))
}
