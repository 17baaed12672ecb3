//! Servicio de sanciones
//!
//! Alta manual de multas, pago con recibo obligatorio y borrado. Las
//! sanciones generadas por roturas las crea el ledger de materiales; aquí
//! solo se gestionan su pago y consulta.

use crate::database::TenantDb;
use crate::models::penalty::{Penalty, PenaltyOrigin};
use crate::repositories::penalty_repository::PenaltyRepository;
use crate::utils::errors::AppError;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use uuid::Uuid;

pub struct PenaltyService {
    repository: PenaltyRepository,
}

impl PenaltyService {
    pub fn new(db: TenantDb) -> Self {
        Self {
            repository: PenaltyRepository::new(db),
        }
    }

    /// Alta manual de una multa de tráfico
    #[allow(clippy::too_many_arguments)]
    pub async fn create(
        &self,
        vehicle_id: Option<Uuid>,
        team_id: Option<Uuid>,
        user_id: Option<Uuid>,
        date: NaiveDate,
        amount: Decimal,
        description: String,
    ) -> Result<Penalty, AppError> {
        if description.trim().is_empty() {
            return Err(AppError::ValidationError(
                "La descripción es requerida".to_string(),
            ));
        }
        if amount < Decimal::ZERO {
            return Err(AppError::ValidationError(
                "El importe no puede ser negativo".to_string(),
            ));
        }

        self.repository
            .create(
                vehicle_id,
                team_id,
                user_id,
                date,
                amount,
                PenaltyOrigin::Manual,
                description,
            )
            .await
    }

    /// Pago de una sanción. El recibo es obligatorio y el segundo intento
    /// sobre una sanción pagada se rechaza.
    pub async fn mark_paid(
        &self,
        penalty_id: Uuid,
        receipt_path: String,
        payment_notes: Option<String>,
    ) -> Result<Penalty, AppError> {
        let penalty = self
            .repository
            .find_by_id(penalty_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Penalty not found".to_string()))?;

        penalty.check_mark_paid(&receipt_path)?;

        self.repository
            .mark_paid(penalty_id, receipt_path, payment_notes)
            .await
    }

    pub async fn delete(&self, penalty_id: Uuid) -> Result<(), AppError> {
        self.repository.delete(penalty_id).await
    }
}
