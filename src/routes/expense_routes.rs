use axum::{
    extract::{Path, State},
    routing::{delete, get, post, put},
    Extension, Json, Router,
};
use uuid::Uuid;

use crate::controllers::expense_controller::ExpenseController;
use crate::dto::common::ApiResponse;
use crate::dto::expense_dto::{CreateExpenseRequest, UpdateExpenseRequest};
use crate::middleware::auth::AuthenticatedUser;
use crate::models::expense::CarExpense;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_expense_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_expense))
        .route("/", get(list_expenses))
        .route("/:id", get(get_expense))
        .route("/:id", put(update_expense))
        .route("/:id", delete(delete_expense))
}

async fn create_expense(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Json(request): Json<CreateExpenseRequest>,
) -> Result<Json<ApiResponse<CarExpense>>, AppError> {
    let controller = ExpenseController::new(state.tenant_db(user.organization_id));
    let response = controller.create(request).await?;
    Ok(Json(response))
}

async fn get_expense(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<Uuid>,
) -> Result<Json<CarExpense>, AppError> {
    let controller = ExpenseController::new(state.tenant_db(user.organization_id));
    let expense = controller.get_by_id(id).await?;
    Ok(Json(expense))
}

async fn list_expenses(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
) -> Result<Json<Vec<CarExpense>>, AppError> {
    let controller = ExpenseController::new(state.tenant_db(user.organization_id));
    let expenses = controller.list().await?;
    Ok(Json(expenses))
}

async fn update_expense(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateExpenseRequest>,
) -> Result<Json<ApiResponse<CarExpense>>, AppError> {
    let controller = ExpenseController::new(state.tenant_db(user.organization_id));
    let response = controller.update(id, request).await?;
    Ok(Json(response))
}

async fn delete_expense(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let controller = ExpenseController::new(state.tenant_db(user.organization_id));
    controller.delete(id).await?;
    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Gasto eliminado exitosamente"
    })))
}
