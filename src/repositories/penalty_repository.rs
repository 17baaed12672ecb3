use crate::database::TenantDb;
use crate::models::penalty::{Penalty, PenaltyOrigin, PenaltyStatus};
use crate::utils::errors::AppError;
use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

/// Recibo de pago de una sanción (lista ordenada, los recibos se acumulan)
#[derive(Debug, sqlx::FromRow, serde::Serialize)]
pub struct PenaltyReceipt {
    pub id: Uuid,
    pub penalty_id: Uuid,
    pub path: String,
    pub position: i32,
}

pub struct PenaltyRepository {
    db: TenantDb,
}

impl PenaltyRepository {
    pub fn new(db: TenantDb) -> Self {
        Self { db }
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn create(
        &self,
        vehicle_id: Option<Uuid>,
        team_id: Option<Uuid>,
        user_id: Option<Uuid>,
        date: NaiveDate,
        amount: Decimal,
        origin: PenaltyOrigin,
        description: String,
    ) -> Result<Penalty, AppError> {
        let penalty = sqlx::query_as::<_, Penalty>(
            r#"
            INSERT INTO penalties (id, organization_id, vehicle_id, team_id, user_id,
                                   date, amount, status, origin, description, payment_notes, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, NULL, $11)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(self.db.organization_id())
        .bind(vehicle_id)
        .bind(team_id)
        .bind(user_id)
        .bind(date)
        .bind(amount)
        .bind(PenaltyStatus::Open)
        .bind(origin)
        .bind(description)
        .bind(Utc::now())
        .fetch_one(self.db.pool())
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error creating penalty: {}", e)))?;

        Ok(penalty)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Penalty>, AppError> {
        let penalty = sqlx::query_as::<_, Penalty>(
            "SELECT * FROM penalties WHERE id = $1 AND organization_id = $2",
        )
        .bind(id)
        .bind(self.db.organization_id())
        .fetch_optional(self.db.pool())
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error finding penalty: {}", e)))?;

        Ok(penalty)
    }

    pub async fn list(
        &self,
        status: Option<PenaltyStatus>,
        origin: Option<PenaltyOrigin>,
    ) -> Result<Vec<Penalty>, AppError> {
        let penalties = sqlx::query_as::<_, Penalty>(
            r#"
            SELECT * FROM penalties
            WHERE organization_id = $1
              AND ($2::penalty_status IS NULL OR status = $2)
              AND ($3::penalty_origin IS NULL OR origin = $3)
            ORDER BY date DESC, created_at DESC
            "#,
        )
        .bind(self.db.organization_id())
        .bind(status)
        .bind(origin)
        .fetch_all(self.db.pool())
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error listing penalties: {}", e)))?;

        Ok(penalties)
    }

    /// Marca la sanción como pagada y acumula el recibo. El WHERE sobre el
    /// estado garantiza que un segundo envío simultáneo no duplique el pago.
    pub async fn mark_paid(
        &self,
        id: Uuid,
        receipt_path: String,
        payment_notes: Option<String>,
    ) -> Result<Penalty, AppError> {
        let mut tx = self
            .db
            .pool()
            .begin()
            .await
            .map_err(|e| AppError::DatabaseError(format!("Error starting transaction: {}", e)))?;

        let penalty = sqlx::query_as::<_, Penalty>(
            r#"
            UPDATE penalties
            SET status = $3,
                payment_notes = CASE
                    WHEN payment_notes IS NULL THEN $4
                    WHEN $4::text IS NULL THEN payment_notes
                    ELSE payment_notes || '; ' || $4
                END
            WHERE id = $1 AND organization_id = $2 AND status = $5
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(self.db.organization_id())
        .bind(PenaltyStatus::Paid)
        .bind(payment_notes)
        .bind(PenaltyStatus::Open)
        .fetch_optional(&mut *tx)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error marking penalty paid: {}", e)))?
        .ok_or_else(|| {
            AppError::InvalidStateTransition("Penalty is not open for payment".to_string())
        })?;

        sqlx::query(
            r#"
            INSERT INTO penalty_receipts (id, organization_id, penalty_id, path, position, created_at)
            VALUES ($1, $2, $3, $4,
                    COALESCE((SELECT MAX(position) + 1 FROM penalty_receipts WHERE penalty_id = $3), 0),
                    $5)
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(self.db.organization_id())
        .bind(id)
        .bind(receipt_path)
        .bind(Utc::now())
        .execute(&mut *tx)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error storing penalty receipt: {}", e)))?;

        tx.commit()
            .await
            .map_err(|e| AppError::DatabaseError(format!("Error committing payment: {}", e)))?;

        Ok(penalty)
    }

    pub async fn add_receipt(&self, penalty_id: Uuid, path: String) -> Result<PenaltyReceipt, AppError> {
        let receipt = sqlx::query_as::<_, PenaltyReceipt>(
            r#"
            INSERT INTO penalty_receipts (id, organization_id, penalty_id, path, position, created_at)
            VALUES ($1, $2, $3, $4,
                    COALESCE((SELECT MAX(position) + 1 FROM penalty_receipts WHERE penalty_id = $3), 0),
                    $5)
            RETURNING id, penalty_id, path, position
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(self.db.organization_id())
        .bind(penalty_id)
        .bind(path)
        .bind(Utc::now())
        .fetch_one(self.db.pool())
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error adding penalty receipt: {}", e)))?;

        Ok(receipt)
    }

    pub async fn list_receipts(&self, penalty_id: Uuid) -> Result<Vec<PenaltyReceipt>, AppError> {
        let receipts = sqlx::query_as::<_, PenaltyReceipt>(
            r#"
            SELECT id, penalty_id, path, position FROM penalty_receipts
            WHERE penalty_id = $1 AND organization_id = $2
            ORDER BY position
            "#,
        )
        .bind(penalty_id)
        .bind(self.db.organization_id())
        .fetch_all(self.db.pool())
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error listing penalty receipts: {}", e)))?;

        Ok(receipts)
    }

    /// Borrado directo, sin condiciones
    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM penalties WHERE id = $1 AND organization_id = $2")
            .bind(id)
            .bind(self.db.organization_id())
            .execute(self.db.pool())
            .await
            .map_err(|e| AppError::DatabaseError(format!("Error deleting penalty: {}", e)))?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Penalty not found".to_string()));
        }

        Ok(())
    }
}
