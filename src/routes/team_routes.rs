use axum::{
    extract::{Path, State},
    routing::{delete, get, post, put},
    Extension, Json, Router,
};
use uuid::Uuid;

use crate::controllers::material_controller::MaterialController;
use crate::controllers::team_controller::TeamController;
use crate::dto::common::ApiResponse;
use crate::dto::team_dto::{CreateTeamRequest, UpdateTeamRequest};
use crate::middleware::auth::AuthenticatedUser;
use crate::models::material::MaterialAssignment;
use crate::models::team::Team;
use crate::models::user::User;
use crate::models::vehicle_assignment::VehicleAssignment;
use crate::repositories::vehicle_assignment_repository::VehicleAssignmentRepository;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_team_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_team))
        .route("/", get(list_teams))
        .route("/:id", get(get_team))
        .route("/:id", put(update_team))
        .route("/:id", delete(delete_team))
        .route("/:id/lead", delete(clear_lead))
        .route("/:id/members", get(list_members))
        .route("/:id/materials", get(list_material_assignments))
        .route("/:id/vehicles", get(list_vehicle_assignments))
}

async fn create_team(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Json(request): Json<CreateTeamRequest>,
) -> Result<Json<ApiResponse<Team>>, AppError> {
    let controller = TeamController::new(state.tenant_db(user.organization_id));
    let response = controller.create(request).await?;
    Ok(Json(response))
}

async fn get_team(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<Uuid>,
) -> Result<Json<Team>, AppError> {
    let controller = TeamController::new(state.tenant_db(user.organization_id));
    let team = controller.get_by_id(id).await?;
    Ok(Json(team))
}

async fn list_teams(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
) -> Result<Json<Vec<Team>>, AppError> {
    let controller = TeamController::new(state.tenant_db(user.organization_id));
    let teams = controller.list().await?;
    Ok(Json(teams))
}

async fn update_team(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateTeamRequest>,
) -> Result<Json<ApiResponse<Team>>, AppError> {
    let controller = TeamController::new(state.tenant_db(user.organization_id));
    let response = controller.update(id, request).await?;
    Ok(Json(response))
}

async fn clear_lead(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<Uuid>,
) -> Result<Json<Team>, AppError> {
    let controller = TeamController::new(state.tenant_db(user.organization_id));
    let team = controller.clear_lead(id).await?;
    Ok(Json(team))
}

async fn delete_team(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let controller = TeamController::new(state.tenant_db(user.organization_id));
    controller.delete(id).await?;
    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Equipo eliminado exitosamente"
    })))
}

async fn list_members(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<User>>, AppError> {
    let controller = TeamController::new(state.tenant_db(user.organization_id));
    let members = controller.members(id).await?;
    Ok(Json(members))
}

async fn list_material_assignments(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<MaterialAssignment>>, AppError> {
    let controller = MaterialController::new(state.tenant_db(user.organization_id));
    let assignments = controller.list_team_assignments(id).await?;
    Ok(Json(assignments))
}

async fn list_vehicle_assignments(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<VehicleAssignment>>, AppError> {
    let repository = VehicleAssignmentRepository::new(state.tenant_db(user.organization_id));
    let assignments = repository.list_by_team(id).await?;
    Ok(Json(assignments))
}
