use axum::{
    extract::{Path, State},
    routing::{get, post},
    Extension, Json, Router,
};
use uuid::Uuid;

use crate::dto::assignment_dto::AssignVehicleRequest;
use crate::dto::common::ApiResponse;
use crate::middleware::auth::AuthenticatedUser;
use crate::models::vehicle_assignment::VehicleAssignment;
use crate::repositories::vehicle_assignment_repository::VehicleAssignmentRepository;
use crate::services::assignment_service::AssignmentService;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_assignment_router() -> Router<AppState> {
    Router::new()
        .route("/", post(assign_vehicle))
        .route("/:id", get(get_assignment))
        .route("/:id/end", post(end_assignment))
}

async fn assign_vehicle(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Json(request): Json<AssignVehicleRequest>,
) -> Result<Json<ApiResponse<VehicleAssignment>>, AppError> {
    let service = AssignmentService::new(state.tenant_db(user.organization_id));
    let assignment = service
        .assign(
            request.vehicle_id,
            request.team_id,
            request.driver_id,
            request.start_date,
        )
        .await?;
    Ok(Json(ApiResponse::success_with_message(
        assignment,
        "Vehículo asignado exitosamente".to_string(),
    )))
}

async fn get_assignment(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<Uuid>,
) -> Result<Json<VehicleAssignment>, AppError> {
    let repository = VehicleAssignmentRepository::new(state.tenant_db(user.organization_id));
    let assignment = repository
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Asignación no encontrada".to_string()))?;
    Ok(Json(assignment))
}

async fn end_assignment(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<VehicleAssignment>>, AppError> {
    let service = AssignmentService::new(state.tenant_db(user.organization_id));
    let assignment = service.end(id).await?;
    Ok(Json(ApiResponse::success_with_message(
        assignment,
        "Asignación finalizada exitosamente".to_string(),
    )))
}
