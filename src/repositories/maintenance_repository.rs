use crate::database::TenantDb;
use crate::models::expense::CarExpense;
use crate::models::maintenance::{Maintenance, MaintenanceType};
use crate::utils::errors::AppError;
use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

pub struct MaintenanceRepository {
    db: TenantDb,
}

impl MaintenanceRepository {
    pub fn new(db: TenantDb) -> Self {
        Self { db }
    }

    /// Crea el mantenimiento y su gasto enlazado en una sola transacción.
    /// El gasto resultante queda marcado como inmutable vía maintenance_id.
    #[allow(clippy::too_many_arguments)]
    pub async fn create_with_expense(
        &self,
        vehicle_id: Uuid,
        date: NaiveDate,
        maintenance_type: MaintenanceType,
        description: Option<String>,
        cost: Decimal,
        receipt_path: Option<String>,
    ) -> Result<(Maintenance, CarExpense), AppError> {
        let mut tx = self
            .db
            .pool()
            .begin()
            .await
            .map_err(|e| AppError::DatabaseError(format!("Error starting transaction: {}", e)))?;

        let maintenance = sqlx::query_as::<_, Maintenance>(
            r#"
            INSERT INTO maintenance_records (id, organization_id, vehicle_id, date,
                                             maintenance_type, description, cost, receipt_path, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(self.db.organization_id())
        .bind(vehicle_id)
        .bind(date)
        .bind(maintenance_type)
        .bind(description.clone())
        .bind(cost)
        .bind(receipt_path.clone())
        .bind(Utc::now())
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error creating maintenance record: {}", e)))?;

        let category = match maintenance_type {
            MaintenanceType::Inspection => "inspection",
            MaintenanceType::Repair => "repair",
        };

        let expense = sqlx::query_as::<_, CarExpense>(
            r#"
            INSERT INTO car_expenses (id, organization_id, vehicle_id, category, date,
                                      amount, description, receipt_path, maintenance_id, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(self.db.organization_id())
        .bind(vehicle_id)
        .bind(category)
        .bind(date)
        .bind(cost)
        .bind(description)
        .bind(receipt_path)
        .bind(maintenance.id)
        .bind(Utc::now())
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error creating maintenance expense: {}", e)))?;

        tx.commit()
            .await
            .map_err(|e| AppError::DatabaseError(format!("Error committing maintenance: {}", e)))?;

        Ok((maintenance, expense))
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Maintenance>, AppError> {
        let maintenance = sqlx::query_as::<_, Maintenance>(
            "SELECT * FROM maintenance_records WHERE id = $1 AND organization_id = $2",
        )
        .bind(id)
        .bind(self.db.organization_id())
        .fetch_optional(self.db.pool())
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error finding maintenance record: {}", e)))?;

        Ok(maintenance)
    }

    pub async fn list_by_vehicle(&self, vehicle_id: Uuid) -> Result<Vec<Maintenance>, AppError> {
        let records = sqlx::query_as::<_, Maintenance>(
            r#"
            SELECT * FROM maintenance_records
            WHERE vehicle_id = $1 AND organization_id = $2
            ORDER BY date DESC, created_at DESC
            "#,
        )
        .bind(vehicle_id)
        .bind(self.db.organization_id())
        .fetch_all(self.db.pool())
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error listing maintenance records: {}", e)))?;

        Ok(records)
    }

    /// Borra el mantenimiento y su gasto enlazado en una sola transacción
    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let mut tx = self
            .db
            .pool()
            .begin()
            .await
            .map_err(|e| AppError::DatabaseError(format!("Error starting transaction: {}", e)))?;

        sqlx::query("DELETE FROM car_expenses WHERE maintenance_id = $1 AND organization_id = $2")
            .bind(id)
            .bind(self.db.organization_id())
            .execute(&mut *tx)
            .await
            .map_err(|e| AppError::DatabaseError(format!("Error deleting maintenance expense: {}", e)))?;

        let result = sqlx::query("DELETE FROM maintenance_records WHERE id = $1 AND organization_id = $2")
            .bind(id)
            .bind(self.db.organization_id())
            .execute(&mut *tx)
            .await
            .map_err(|e| AppError::DatabaseError(format!("Error deleting maintenance record: {}", e)))?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Maintenance record not found".to_string()));
        }

        tx.commit()
            .await
            .map_err(|e| AppError::DatabaseError(format!("Error committing delete: {}", e)))?;

        Ok(())
    }
}
