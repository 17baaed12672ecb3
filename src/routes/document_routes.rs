use axum::{
    extract::{Path, State},
    routing::{delete, get, post},
    Extension, Json, Router,
};
use uuid::Uuid;

use crate::controllers::document_controller::DocumentController;
use crate::dto::common::ApiResponse;
use crate::dto::document_dto::{AttachFileRequest, CreateDocumentRequest, DocumentResponse};
use crate::middleware::auth::AuthenticatedUser;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_document_router() -> Router<AppState> {
    Router::new()
        // Documentos de vehículo
        .route("/vehicle/:vehicle_id", post(create_vehicle_document))
        .route("/vehicle/:vehicle_id", get(list_vehicle_documents))
        .route("/vehicle/doc/:id", get(get_vehicle_document))
        .route("/vehicle/doc/:id", delete(deactivate_vehicle_document))
        .route("/vehicle/doc/:id/files", post(attach_vehicle_document_file))
        // Documentos de usuario
        .route("/user/:user_id", post(create_user_document))
        .route("/user/:user_id", get(list_user_documents))
        .route("/user/doc/:id", get(get_user_document))
        .route("/user/doc/:id", delete(deactivate_user_document))
        .route("/user/doc/:id/files", post(attach_user_document_file))
}

async fn create_vehicle_document(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(vehicle_id): Path<Uuid>,
    Json(request): Json<CreateDocumentRequest>,
) -> Result<Json<ApiResponse<DocumentResponse>>, AppError> {
    let controller = DocumentController::new(state.tenant_db(user.organization_id));
    let response = controller.create_vehicle_document(vehicle_id, request).await?;
    Ok(Json(response))
}

async fn list_vehicle_documents(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(vehicle_id): Path<Uuid>,
) -> Result<Json<Vec<DocumentResponse>>, AppError> {
    let controller = DocumentController::new(state.tenant_db(user.organization_id));
    let response = controller.list_vehicle_documents(vehicle_id).await?;
    Ok(Json(response))
}

async fn get_vehicle_document(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<Uuid>,
) -> Result<Json<DocumentResponse>, AppError> {
    let controller = DocumentController::new(state.tenant_db(user.organization_id));
    let response = controller.get_vehicle_document(id).await?;
    Ok(Json(response))
}

async fn deactivate_vehicle_document(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let controller = DocumentController::new(state.tenant_db(user.organization_id));
    controller.deactivate_vehicle_document(id).await?;
    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Documento dado de baja exitosamente"
    })))
}

async fn attach_vehicle_document_file(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<Uuid>,
    Json(request): Json<AttachFileRequest>,
) -> Result<Json<Vec<String>>, AppError> {
    let controller = DocumentController::new(state.tenant_db(user.organization_id));
    let files = controller
        .attach_vehicle_document_file(&state.blob_store, id, request)
        .await?;
    Ok(Json(files))
}

async fn create_user_document(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(user_id): Path<Uuid>,
    Json(request): Json<CreateDocumentRequest>,
) -> Result<Json<ApiResponse<DocumentResponse>>, AppError> {
    let controller = DocumentController::new(state.tenant_db(user.organization_id));
    let response = controller.create_user_document(user_id, request).await?;
    Ok(Json(response))
}

async fn list_user_documents(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(user_id): Path<Uuid>,
) -> Result<Json<Vec<DocumentResponse>>, AppError> {
    let controller = DocumentController::new(state.tenant_db(user.organization_id));
    let response = controller.list_user_documents(user_id).await?;
    Ok(Json(response))
}

async fn get_user_document(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<Uuid>,
) -> Result<Json<DocumentResponse>, AppError> {
    let controller = DocumentController::new(state.tenant_db(user.organization_id));
    let response = controller.get_user_document(id).await?;
    Ok(Json(response))
}

async fn deactivate_user_document(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let controller = DocumentController::new(state.tenant_db(user.organization_id));
    controller.deactivate_user_document(id).await?;
    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Documento dado de baja exitosamente"
    })))
}

async fn attach_user_document_file(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<Uuid>,
    Json(request): Json<AttachFileRequest>,
) -> Result<Json<Vec<String>>, AppError> {
    let controller = DocumentController::new(state.tenant_db(user.organization_id));
    let files = controller
        .attach_user_document_file(&state.blob_store, id, request)
        .await?;
    Ok(Json(files))
}
