use crate::database::TenantDb;
use crate::dto::common::ApiResponse;
use crate::dto::material_dto::{
    ConfirmReturnRequest, CreateMaterialRequest, IssueMaterialRequest, MaterialResponse,
    RestockRequest, UpdateMaterialRequest,
};
use crate::models::material::{FaultAttribution, MaterialAssignment};
use crate::repositories::material_repository::MaterialRepository;
use crate::repositories::team_repository::TeamRepository;
use crate::services::material_ledger_service::MaterialLedgerService;
use crate::utils::errors::AppError;
use uuid::Uuid;
use validator::Validate;

pub struct MaterialController {
    repository: MaterialRepository,
    teams: TeamRepository,
    ledger: MaterialLedgerService,
}

impl MaterialController {
    pub fn new(db: TenantDb) -> Self {
        Self {
            repository: MaterialRepository::new(db.clone()),
            teams: TeamRepository::new(db.clone()),
            ledger: MaterialLedgerService::new(db),
        }
    }

    pub async fn create(
        &self,
        request: CreateMaterialRequest,
    ) -> Result<ApiResponse<MaterialResponse>, AppError> {
        request.validate()?;

        let material = self
            .repository
            .create(
                request.name,
                request.material_type,
                request.unit,
                request.unit_price,
                request.total_quantity,
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            material.into(),
            "Material creado exitosamente".to_string(),
        ))
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<MaterialResponse, AppError> {
        let material = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Material no encontrado".to_string()))?;

        Ok(material.into())
    }

    pub async fn list(&self) -> Result<Vec<MaterialResponse>, AppError> {
        let materials = self.repository.list().await?;
        Ok(materials.into_iter().map(MaterialResponse::from).collect())
    }

    pub async fn update(
        &self,
        id: Uuid,
        request: UpdateMaterialRequest,
    ) -> Result<ApiResponse<MaterialResponse>, AppError> {
        request.validate()?;

        let material = self
            .repository
            .update(id, request.name, request.unit, request.unit_price)
            .await?;

        Ok(ApiResponse::success_with_message(
            material.into(),
            "Material actualizado exitosamente".to_string(),
        ))
    }

    pub async fn restock(
        &self,
        id: Uuid,
        request: RestockRequest,
    ) -> Result<ApiResponse<MaterialResponse>, AppError> {
        request.validate()?;

        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Material no encontrado".to_string()))?;

        let material = self.repository.restock(id, request.quantity).await?;

        Ok(ApiResponse::success_with_message(
            material.into(),
            "Stock repuesto exitosamente".to_string(),
        ))
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        self.repository.delete(id).await
    }

    // --- Operaciones del ledger ---

    pub async fn issue(
        &self,
        material_id: Uuid,
        request: IssueMaterialRequest,
    ) -> Result<ApiResponse<MaterialAssignment>, AppError> {
        request.validate()?;

        self.teams
            .find_by_id(request.team_id)
            .await?
            .ok_or_else(|| AppError::NotFound("El equipo indicado no existe".to_string()))?;

        let assignment = self
            .ledger
            .issue(
                material_id,
                request.team_id,
                request.quantity,
                request.date,
                request.notes,
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            assignment,
            "Material entregado exitosamente".to_string(),
        ))
    }

    pub async fn mark_for_return(
        &self,
        assignment_id: Uuid,
    ) -> Result<ApiResponse<MaterialAssignment>, AppError> {
        let assignment = self.ledger.mark_for_return(assignment_id).await?;

        Ok(ApiResponse::success_with_message(
            assignment,
            "Asignación marcada para devolución".to_string(),
        ))
    }

    pub async fn confirm_return(
        &self,
        assignment_id: Uuid,
        request: ConfirmReturnRequest,
    ) -> Result<ApiResponse<MaterialAssignment>, AppError> {
        let fault = request.fault.unwrap_or(FaultAttribution::Worker);
        let assignment = self
            .ledger
            .confirm_return(assignment_id, request.outcome, fault)
            .await?;

        Ok(ApiResponse::success_with_message(
            assignment,
            "Devolución confirmada".to_string(),
        ))
    }

    pub async fn list_assignments(&self, material_id: Uuid) -> Result<Vec<MaterialAssignment>, AppError> {
        self.repository
            .find_by_id(material_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Material no encontrado".to_string()))?;

        self.repository.list_assignments_by_material(material_id).await
    }

    pub async fn list_team_assignments(&self, team_id: Uuid) -> Result<Vec<MaterialAssignment>, AppError> {
        self.repository.list_assignments_by_team(team_id).await
    }
}
