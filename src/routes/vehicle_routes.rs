use axum::{
    extract::{Path, State},
    routing::{delete, get, post, put},
    Extension, Json, Router,
};
use uuid::Uuid;

use crate::controllers::expense_controller::ExpenseController;
use crate::controllers::maintenance_controller::MaintenanceController;
use crate::controllers::vehicle_controller::VehicleController;
use crate::dto::common::ApiResponse;
use crate::dto::vehicle_dto::{AttachPhotoRequest, CreateVehicleRequest, UpdateVehicleRequest, VehicleResponse};
use crate::middleware::auth::AuthenticatedUser;
use crate::models::expense::CarExpense;
use crate::models::maintenance::Maintenance;
use crate::models::vehicle_assignment::VehicleAssignment;
use crate::repositories::vehicle_assignment_repository::VehicleAssignmentRepository;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_vehicle_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_vehicle))
        .route("/", get(list_vehicles))
        .route("/:id", get(get_vehicle))
        .route("/:id", put(update_vehicle))
        .route("/:id", delete(delete_vehicle))
        .route("/:id/photos", post(attach_photo))
        .route("/photo/:photo_id", delete(remove_photo))
        .route("/:id/assignments", get(list_assignments))
        .route("/:id/assignment", get(get_open_assignment))
        .route("/:id/expenses", get(list_expenses))
        .route("/:id/maintenance", get(list_maintenance))
}

async fn create_vehicle(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Json(request): Json<CreateVehicleRequest>,
) -> Result<Json<ApiResponse<VehicleResponse>>, AppError> {
    let controller = VehicleController::new(state.tenant_db(user.organization_id));
    let response = controller.create(request).await?;
    Ok(Json(response))
}

async fn get_vehicle(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<Uuid>,
) -> Result<Json<VehicleResponse>, AppError> {
    let controller = VehicleController::new(state.tenant_db(user.organization_id));
    let response = controller.get_by_id(id).await?;
    Ok(Json(response))
}

async fn list_vehicles(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
) -> Result<Json<Vec<VehicleResponse>>, AppError> {
    let controller = VehicleController::new(state.tenant_db(user.organization_id));
    let response = controller.list().await?;
    Ok(Json(response))
}

async fn update_vehicle(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateVehicleRequest>,
) -> Result<Json<ApiResponse<VehicleResponse>>, AppError> {
    let controller = VehicleController::new(state.tenant_db(user.organization_id));
    let response = controller.update(id, request).await?;
    Ok(Json(response))
}

async fn delete_vehicle(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let controller = VehicleController::new(state.tenant_db(user.organization_id));
    controller.delete(id).await?;
    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Vehículo eliminado exitosamente"
    })))
}

async fn attach_photo(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<Uuid>,
    Json(request): Json<AttachPhotoRequest>,
) -> Result<Json<Vec<String>>, AppError> {
    let controller = VehicleController::new(state.tenant_db(user.organization_id));
    let photos = controller.attach_photo(&state.blob_store, id, request.path).await?;
    Ok(Json(photos))
}

async fn remove_photo(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(photo_id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let controller = VehicleController::new(state.tenant_db(user.organization_id));
    controller.remove_photo(&state.blob_store, photo_id).await?;
    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Foto eliminada exitosamente"
    })))
}

async fn list_assignments(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<VehicleAssignment>>, AppError> {
    let repository = VehicleAssignmentRepository::new(state.tenant_db(user.organization_id));
    let assignments = repository.list_by_vehicle(id).await?;
    Ok(Json(assignments))
}

/// Asignación abierta actual del vehículo, si la hay
async fn get_open_assignment(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<Uuid>,
) -> Result<Json<Option<VehicleAssignment>>, AppError> {
    let repository = VehicleAssignmentRepository::new(state.tenant_db(user.organization_id));
    let assignment = repository.find_open_for_vehicle(id).await?;
    Ok(Json(assignment))
}

async fn list_expenses(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<CarExpense>>, AppError> {
    let controller = ExpenseController::new(state.tenant_db(user.organization_id));
    let expenses = controller.list_by_vehicle(id).await?;
    Ok(Json(expenses))
}

async fn list_maintenance(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<Maintenance>>, AppError> {
    let controller = MaintenanceController::new(state.tenant_db(user.organization_id));
    let records = controller.list_by_vehicle(id).await?;
    Ok(Json(records))
}
