use axum::{
    extract::{Path, Query, State},
    routing::{delete, get, post},
    Extension, Json, Router,
};
use uuid::Uuid;

use crate::controllers::penalty_controller::PenaltyController;
use crate::dto::common::ApiResponse;
use crate::dto::penalty_dto::{CreatePenaltyRequest, PayPenaltyRequest, PenaltyFilters, PenaltyResponse};
use crate::middleware::auth::AuthenticatedUser;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_penalty_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_penalty))
        .route("/", get(list_penalties))
        .route("/:id", get(get_penalty))
        .route("/:id", delete(delete_penalty))
        .route("/:id/pay", post(pay_penalty))
        .route("/:id/receipts", post(add_receipt))
}

async fn create_penalty(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Json(request): Json<CreatePenaltyRequest>,
) -> Result<Json<ApiResponse<PenaltyResponse>>, AppError> {
    let controller = PenaltyController::new(state.tenant_db(user.organization_id));
    let response = controller.create(request).await?;
    Ok(Json(response))
}

async fn get_penalty(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<Uuid>,
) -> Result<Json<PenaltyResponse>, AppError> {
    let controller = PenaltyController::new(state.tenant_db(user.organization_id));
    let response = controller.get_by_id(id).await?;
    Ok(Json(response))
}

async fn list_penalties(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Query(filters): Query<PenaltyFilters>,
) -> Result<Json<Vec<PenaltyResponse>>, AppError> {
    let controller = PenaltyController::new(state.tenant_db(user.organization_id));
    let response = controller.list(filters).await?;
    Ok(Json(response))
}

async fn pay_penalty(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<Uuid>,
    Json(request): Json<PayPenaltyRequest>,
) -> Result<Json<ApiResponse<PenaltyResponse>>, AppError> {
    let controller = PenaltyController::new(state.tenant_db(user.organization_id));
    let response = controller.pay(&state.blob_store, id, request).await?;
    Ok(Json(response))
}

#[derive(Debug, serde::Deserialize)]
struct AddReceiptRequest {
    path: String,
}

async fn add_receipt(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<Uuid>,
    Json(request): Json<AddReceiptRequest>,
) -> Result<Json<Vec<String>>, AppError> {
    let controller = PenaltyController::new(state.tenant_db(user.organization_id));
    let receipts = controller.add_receipt(&state.blob_store, id, request.path).await?;
    Ok(Json(receipts))
}

async fn delete_penalty(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let controller = PenaltyController::new(state.tenant_db(user.organization_id));
    controller.delete(id).await?;
    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Sanción eliminada exitosamente"
    })))
}
