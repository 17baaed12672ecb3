use axum::{
    body::Bytes,
    extract::{Path, Query, State},
    http::header,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;

use crate::state::AppState;
use crate::utils::errors::AppError;

#[derive(Debug, Deserialize)]
pub struct UploadParams {
    // Extensión opcional para conservar el tipo del archivo original
    pub ext: Option<String>,
}

pub fn create_file_router() -> Router<AppState> {
    Router::new()
        .route("/upload/:category", post(upload_file))
        .route("/download/*path", get(download_file))
}

/// Sube un archivo al almacén y devuelve su ruta estable.
/// La ruta se adjunta después a la entidad correspondiente.
async fn upload_file(
    State(state): State<AppState>,
    Path(category): Path<String>,
    Query(params): Query<UploadParams>,
    body: Bytes,
) -> Result<Json<serde_json::Value>, AppError> {
    if body.is_empty() {
        return Err(AppError::BadRequest("El archivo está vacío".to_string()));
    }

    let path = state
        .blob_store
        .store(&body, &category, params.ext.as_deref())
        .await?;

    Ok(Json(serde_json::json!({
        "success": true,
        "path": path
    })))
}

async fn download_file(
    State(state): State<AppState>,
    Path(path): Path<String>,
) -> Result<Response, AppError> {
    let bytes = state.blob_store.read(&path).await?;

    Ok((
        [(header::CONTENT_TYPE, "application/octet-stream")],
        bytes,
    )
        .into_response())
}
