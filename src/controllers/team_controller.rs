use crate::database::TenantDb;
use crate::dto::common::ApiResponse;
use crate::dto::team_dto::{CreateTeamRequest, UpdateTeamRequest};
use crate::models::team::Team;
use crate::models::user::User;
use crate::repositories::team_repository::TeamRepository;
use crate::repositories::user_repository::UserRepository;
use crate::utils::errors::AppError;
use uuid::Uuid;
use validator::Validate;

pub struct TeamController {
    repository: TeamRepository,
    users: UserRepository,
}

impl TeamController {
    pub fn new(db: TenantDb) -> Self {
        Self {
            repository: TeamRepository::new(db.clone()),
            users: UserRepository::new(db),
        }
    }

    pub async fn create(&self, request: CreateTeamRequest) -> Result<ApiResponse<Team>, AppError> {
        request.validate()?;

        // El responsable debe existir en la organización
        if let Some(lead_id) = request.lead_user_id {
            self.users
                .find_by_id(lead_id)
                .await?
                .ok_or_else(|| AppError::NotFound("El responsable indicado no existe".to_string()))?;
        }

        let team = self.repository.create(request.name, request.lead_user_id).await?;

        Ok(ApiResponse::success_with_message(
            team,
            "Equipo creado exitosamente".to_string(),
        ))
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<Team, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Equipo no encontrado".to_string()))
    }

    pub async fn list(&self) -> Result<Vec<Team>, AppError> {
        self.repository.list().await
    }

    pub async fn members(&self, id: Uuid) -> Result<Vec<User>, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Equipo no encontrado".to_string()))?;

        self.users.list_by_team(id).await
    }

    pub async fn update(
        &self,
        id: Uuid,
        request: UpdateTeamRequest,
    ) -> Result<ApiResponse<Team>, AppError> {
        request.validate()?;

        if let Some(lead_id) = request.lead_user_id {
            self.users
                .find_by_id(lead_id)
                .await?
                .ok_or_else(|| AppError::NotFound("El responsable indicado no existe".to_string()))?;
        }

        let team = self.repository.update(id, request.name, request.lead_user_id).await?;

        Ok(ApiResponse::success_with_message(
            team,
            "Equipo actualizado exitosamente".to_string(),
        ))
    }

    pub async fn clear_lead(&self, id: Uuid) -> Result<Team, AppError> {
        self.repository.clear_lead(id).await
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        self.repository.delete(id).await
    }
}
