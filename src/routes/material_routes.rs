use axum::{
    extract::{Path, State},
    routing::{delete, get, post, put},
    Extension, Json, Router,
};
use uuid::Uuid;

use crate::controllers::material_controller::MaterialController;
use crate::dto::common::ApiResponse;
use crate::dto::material_dto::{
    ConfirmReturnRequest, CreateMaterialRequest, IssueMaterialRequest, MaterialResponse,
    RestockRequest, UpdateMaterialRequest,
};
use crate::middleware::auth::AuthenticatedUser;
use crate::models::material::MaterialAssignment;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_material_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_material))
        .route("/", get(list_materials))
        .route("/:id", get(get_material))
        .route("/:id", put(update_material))
        .route("/:id", delete(delete_material))
        .route("/:id/restock", post(restock_material))
        .route("/:id/issue", post(issue_material))
        .route("/:id/assignments", get(list_assignments))
        .route("/assignment/:id/mark-return", post(mark_for_return))
        .route("/assignment/:id/confirm-return", post(confirm_return))
}

async fn create_material(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Json(request): Json<CreateMaterialRequest>,
) -> Result<Json<ApiResponse<MaterialResponse>>, AppError> {
    let controller = MaterialController::new(state.tenant_db(user.organization_id));
    let response = controller.create(request).await?;
    Ok(Json(response))
}

async fn get_material(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<Uuid>,
) -> Result<Json<MaterialResponse>, AppError> {
    let controller = MaterialController::new(state.tenant_db(user.organization_id));
    let response = controller.get_by_id(id).await?;
    Ok(Json(response))
}

async fn list_materials(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
) -> Result<Json<Vec<MaterialResponse>>, AppError> {
    let controller = MaterialController::new(state.tenant_db(user.organization_id));
    let response = controller.list().await?;
    Ok(Json(response))
}

async fn update_material(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateMaterialRequest>,
) -> Result<Json<ApiResponse<MaterialResponse>>, AppError> {
    let controller = MaterialController::new(state.tenant_db(user.organization_id));
    let response = controller.update(id, request).await?;
    Ok(Json(response))
}

async fn restock_material(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<Uuid>,
    Json(request): Json<RestockRequest>,
) -> Result<Json<ApiResponse<MaterialResponse>>, AppError> {
    let controller = MaterialController::new(state.tenant_db(user.organization_id));
    let response = controller.restock(id, request).await?;
    Ok(Json(response))
}

async fn delete_material(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let controller = MaterialController::new(state.tenant_db(user.organization_id));
    controller.delete(id).await?;
    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Material eliminado exitosamente"
    })))
}

async fn issue_material(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<Uuid>,
    Json(request): Json<IssueMaterialRequest>,
) -> Result<Json<ApiResponse<MaterialAssignment>>, AppError> {
    let controller = MaterialController::new(state.tenant_db(user.organization_id));
    let response = controller.issue(id, request).await?;
    Ok(Json(response))
}

async fn list_assignments(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<MaterialAssignment>>, AppError> {
    let controller = MaterialController::new(state.tenant_db(user.organization_id));
    let assignments = controller.list_assignments(id).await?;
    Ok(Json(assignments))
}

async fn mark_for_return(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<MaterialAssignment>>, AppError> {
    let controller = MaterialController::new(state.tenant_db(user.organization_id));
    let response = controller.mark_for_return(id).await?;
    Ok(Json(response))
}

async fn confirm_return(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<Uuid>,
    Json(request): Json<ConfirmReturnRequest>,
) -> Result<Json<ApiResponse<MaterialAssignment>>, AppError> {
    let controller = MaterialController::new(state.tenant_db(user.organization_id));
    let response = controller.confirm_return(id, request).await?;
    Ok(Json(response))
}
