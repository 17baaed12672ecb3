use axum::{
    extract::{Path, State},
    routing::{delete, get, post},
    Extension, Json, Router,
};
use uuid::Uuid;

use crate::controllers::maintenance_controller::MaintenanceController;
use crate::dto::common::ApiResponse;
use crate::dto::maintenance_dto::{CreateMaintenanceRequest, MaintenanceResponse};
use crate::middleware::auth::AuthenticatedUser;
use crate::models::maintenance::Maintenance;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_maintenance_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_maintenance))
        .route("/:id", get(get_maintenance))
        .route("/:id", delete(delete_maintenance))
}

async fn create_maintenance(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Json(request): Json<CreateMaintenanceRequest>,
) -> Result<Json<ApiResponse<MaintenanceResponse>>, AppError> {
    let controller = MaintenanceController::new(state.tenant_db(user.organization_id));
    let response = controller.create(request).await?;
    Ok(Json(response))
}

async fn get_maintenance(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<Uuid>,
) -> Result<Json<Maintenance>, AppError> {
    let controller = MaintenanceController::new(state.tenant_db(user.organization_id));
    let record = controller.get_by_id(id).await?;
    Ok(Json(record))
}

async fn delete_maintenance(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let controller = MaintenanceController::new(state.tenant_db(user.organization_id));
    controller.delete(id).await?;
    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Mantenimiento eliminado exitosamente"
    })))
}
