use axum::{
    extract::State,
    routing::{get, post},
    Extension, Json, Router,
};
use crate::controllers::auth_controller::AuthController;
use crate::dto::auth_dto::{LoginRequest, LoginResponse, RegisterOrganizationRequest};
use crate::middleware::auth::AuthenticatedUser;
use crate::models::organization::Organization;
use crate::repositories::organization_repository::OrganizationRepository;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_auth_router() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
}

/// Rutas de organización (protegidas): datos del tenant autenticado
pub fn create_organization_router() -> Router<AppState> {
    Router::new().route("/", get(get_current_organization))
}

async fn get_current_organization(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
) -> Result<Json<Organization>, AppError> {
    let repository = OrganizationRepository::new(state.pool.clone());
    let organization = repository
        .find_by_id(user.organization_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Organización no encontrada".to_string()))?;
    Ok(Json(organization))
}

async fn register(
    State(state): State<AppState>,
    Json(request): Json<RegisterOrganizationRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let controller = AuthController::new(state.pool.clone());
    let response = controller.register(&state.jwt, request).await?;
    Ok(Json(response))
}

async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let controller = AuthController::new(state.pool.clone());
    let response = controller.login(&state.jwt, request).await?;
    Ok(Json(response))
}
