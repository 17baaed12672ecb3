use crate::database::TenantDb;
use crate::dto::common::ApiResponse;
use crate::dto::penalty_dto::{CreatePenaltyRequest, PayPenaltyRequest, PenaltyFilters, PenaltyResponse};
use crate::repositories::penalty_repository::PenaltyRepository;
use crate::services::penalty_service::PenaltyService;
use crate::storage::BlobStore;
use crate::utils::errors::AppError;
use uuid::Uuid;
use validator::Validate;

pub struct PenaltyController {
    repository: PenaltyRepository,
    service: PenaltyService,
}

impl PenaltyController {
    pub fn new(db: TenantDb) -> Self {
        Self {
            repository: PenaltyRepository::new(db.clone()),
            service: PenaltyService::new(db),
        }
    }

    pub async fn create(
        &self,
        request: CreatePenaltyRequest,
    ) -> Result<ApiResponse<PenaltyResponse>, AppError> {
        request.validate()?;

        let penalty = self
            .service
            .create(
                request.vehicle_id,
                request.team_id,
                request.user_id,
                request.date,
                request.amount,
                request.description,
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            PenaltyResponse::from_penalty(penalty, Vec::new()),
            "Sanción registrada exitosamente".to_string(),
        ))
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<PenaltyResponse, AppError> {
        let penalty = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Sanción no encontrada".to_string()))?;

        let receipts = self
            .repository
            .list_receipts(id)
            .await?
            .into_iter()
            .map(|r| r.path)
            .collect();

        Ok(PenaltyResponse::from_penalty(penalty, receipts))
    }

    pub async fn list(&self, filters: PenaltyFilters) -> Result<Vec<PenaltyResponse>, AppError> {
        let penalties = self.repository.list(filters.status, filters.origin).await?;

        let mut response = Vec::with_capacity(penalties.len());
        for penalty in penalties {
            let receipts = self
                .repository
                .list_receipts(penalty.id)
                .await?
                .into_iter()
                .map(|r| r.path)
                .collect();
            response.push(PenaltyResponse::from_penalty(penalty, receipts));
        }

        Ok(response)
    }

    /// Pago con recibo obligatorio. El recibo se sube antes al almacén.
    pub async fn pay(
        &self,
        blob_store: &BlobStore,
        id: Uuid,
        request: PayPenaltyRequest,
    ) -> Result<ApiResponse<PenaltyResponse>, AppError> {
        if request.receipt_path.trim().is_empty() {
            return Err(AppError::ReceiptRequired);
        }
        if !blob_store.exists(&request.receipt_path).await? {
            return Err(AppError::BadRequest(format!(
                "El recibo '{}' no existe en el almacén",
                request.receipt_path
            )));
        }

        let penalty = self
            .service
            .mark_paid(id, request.receipt_path, request.payment_notes)
            .await?;

        let receipts = self
            .repository
            .list_receipts(id)
            .await?
            .into_iter()
            .map(|r| r.path)
            .collect();

        Ok(ApiResponse::success_with_message(
            PenaltyResponse::from_penalty(penalty, receipts),
            "Sanción pagada exitosamente".to_string(),
        ))
    }

    /// Adjunta un recibo adicional a una sanción ya pagada (los recibos se
    /// acumulan, nunca se sustituyen)
    pub async fn add_receipt(
        &self,
        blob_store: &BlobStore,
        id: Uuid,
        path: String,
    ) -> Result<Vec<String>, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Sanción no encontrada".to_string()))?;

        if !blob_store.exists(&path).await? {
            return Err(AppError::BadRequest(format!(
                "El recibo '{}' no existe en el almacén",
                path
            )));
        }

        self.repository.add_receipt(id, path).await?;

        let receipts = self
            .repository
            .list_receipts(id)
            .await?
            .into_iter()
            .map(|r| r.path)
            .collect();

        Ok(receipts)
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        self.service.delete(id).await
    }
}
