use crate::database::TenantDb;
use crate::dto::common::ApiResponse;
use crate::dto::user_dto::{CreateUserRequest, UpdateUserRequest};
use crate::models::user::User;
use crate::repositories::team_repository::TeamRepository;
use crate::repositories::user_repository::UserRepository;
use crate::utils::errors::AppError;
use bcrypt::{hash, DEFAULT_COST};
use uuid::Uuid;
use validator::Validate;

pub struct UserController {
    repository: UserRepository,
    teams: TeamRepository,
}

impl UserController {
    pub fn new(db: TenantDb) -> Self {
        Self {
            repository: UserRepository::new(db.clone()),
            teams: TeamRepository::new(db),
        }
    }

    pub async fn create(&self, request: CreateUserRequest) -> Result<ApiResponse<User>, AppError> {
        request.validate()?;

        // Contraseña solo tiene sentido con email de login
        if request.password.is_some() && request.email.is_none() {
            return Err(AppError::ValidationError(
                "No se puede asignar contraseña a un usuario sin email".to_string(),
            ));
        }

        if let Some(team_id) = request.team_id {
            self.teams
                .find_by_id(team_id)
                .await?
                .ok_or_else(|| AppError::NotFound("El equipo indicado no existe".to_string()))?;
        }

        let password_hash = match &request.password {
            Some(password) => Some(
                hash(password, DEFAULT_COST)
                    .map_err(|e| AppError::Internal(format!("Error hashing password: {}", e)))?,
            ),
            None => None,
        };

        let user = self
            .repository
            .create(
                request.first_name,
                request.last_name,
                request.email,
                password_hash,
                request.role,
                request.team_id,
                request.phone,
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            user,
            "Usuario creado exitosamente".to_string(),
        ))
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<User, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Usuario no encontrado".to_string()))
    }

    pub async fn list(&self) -> Result<Vec<User>, AppError> {
        self.repository.list().await
    }

    pub async fn update(
        &self,
        id: Uuid,
        request: UpdateUserRequest,
    ) -> Result<ApiResponse<User>, AppError> {
        request.validate()?;

        if let Some(team_id) = request.team_id {
            self.teams
                .find_by_id(team_id)
                .await?
                .ok_or_else(|| AppError::NotFound("El equipo indicado no existe".to_string()))?;
        }

        let user = self
            .repository
            .update(
                id,
                request.first_name,
                request.last_name,
                request.role,
                request.team_id,
                request.phone,
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            user,
            "Usuario actualizado exitosamente".to_string(),
        ))
    }

    pub async fn clear_team(&self, id: Uuid) -> Result<User, AppError> {
        self.repository.clear_team(id).await
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        self.repository.delete(id).await
    }
}
