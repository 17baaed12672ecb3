use axum::{
    extract::{Query, State},
    http::header,
    response::{IntoResponse, Response},
    routing::get,
    Extension, Json, Router,
};
use serde::Deserialize;

use crate::middleware::auth::AuthenticatedUser;
use crate::services::report_service::{rows_to_csv, ReportService};
use crate::state::AppState;
use crate::utils::errors::AppError;

#[derive(Debug, Deserialize)]
pub struct ReportParams {
    // format=csv activa el export informativo
    pub format: Option<String>,
}

impl ReportParams {
    fn wants_csv(&self) -> bool {
        self.format.as_deref() == Some("csv")
    }
}

pub fn create_report_router() -> Router<AppState> {
    Router::new()
        .route("/penalties/by-team", get(penalties_by_team))
        .route("/penalties/by-user", get(penalties_by_user))
        .route("/penalties/by-month", get(penalties_by_month))
}

fn csv_response(csv: String) -> Response {
    ([(header::CONTENT_TYPE, "text/csv; charset=utf-8")], csv).into_response()
}

async fn penalties_by_team(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Query(params): Query<ReportParams>,
) -> Result<Response, AppError> {
    let service = ReportService::new(state.tenant_db(user.organization_id));
    let rows = service.penalties_by_team().await?;

    if params.wants_csv() {
        Ok(csv_response(rows_to_csv(&rows)?))
    } else {
        Ok(Json(rows).into_response())
    }
}

async fn penalties_by_user(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Query(params): Query<ReportParams>,
) -> Result<Response, AppError> {
    let service = ReportService::new(state.tenant_db(user.organization_id));
    let rows = service.penalties_by_user().await?;

    if params.wants_csv() {
        Ok(csv_response(rows_to_csv(&rows)?))
    } else {
        Ok(Json(rows).into_response())
    }
}

async fn penalties_by_month(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Query(params): Query<ReportParams>,
) -> Result<Response, AppError> {
    let service = ReportService::new(state.tenant_db(user.organization_id));
    let rows = service.penalties_by_month().await?;

    if params.wants_csv() {
        Ok(csv_response(rows_to_csv(&rows)?))
    } else {
        Ok(Json(rows).into_response())
    }
}
