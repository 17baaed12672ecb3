use crate::database::TenantDb;
use crate::models::expense::CarExpense;
use crate::utils::errors::AppError;
use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

pub struct ExpenseRepository {
    db: TenantDb,
}

impl ExpenseRepository {
    pub fn new(db: TenantDb) -> Self {
        Self { db }
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn create(
        &self,
        vehicle_id: Uuid,
        category: String,
        date: NaiveDate,
        amount: Decimal,
        description: Option<String>,
        receipt_path: Option<String>,
    ) -> Result<CarExpense, AppError> {
        let expense = sqlx::query_as::<_, CarExpense>(
            r#"
            INSERT INTO car_expenses (id, organization_id, vehicle_id, category, date,
                                      amount, description, receipt_path, maintenance_id, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, NULL, $9)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(self.db.organization_id())
        .bind(vehicle_id)
        .bind(category)
        .bind(date)
        .bind(amount)
        .bind(description)
        .bind(receipt_path)
        .bind(Utc::now())
        .fetch_one(self.db.pool())
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error creating expense: {}", e)))?;

        Ok(expense)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<CarExpense>, AppError> {
        let expense = sqlx::query_as::<_, CarExpense>(
            "SELECT * FROM car_expenses WHERE id = $1 AND organization_id = $2",
        )
        .bind(id)
        .bind(self.db.organization_id())
        .fetch_optional(self.db.pool())
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error finding expense: {}", e)))?;

        Ok(expense)
    }

    pub async fn list_by_vehicle(&self, vehicle_id: Uuid) -> Result<Vec<CarExpense>, AppError> {
        let expenses = sqlx::query_as::<_, CarExpense>(
            r#"
            SELECT * FROM car_expenses
            WHERE vehicle_id = $1 AND organization_id = $2
            ORDER BY date DESC, created_at DESC
            "#,
        )
        .bind(vehicle_id)
        .bind(self.db.organization_id())
        .fetch_all(self.db.pool())
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error listing expenses: {}", e)))?;

        Ok(expenses)
    }

    pub async fn list(&self) -> Result<Vec<CarExpense>, AppError> {
        let expenses = sqlx::query_as::<_, CarExpense>(
            r#"
            SELECT * FROM car_expenses
            WHERE organization_id = $1
            ORDER BY date DESC, created_at DESC
            "#,
        )
        .bind(self.db.organization_id())
        .fetch_all(self.db.pool())
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error listing expenses: {}", e)))?;

        Ok(expenses)
    }

    /// Actualización de un gasto manual. Los gastos enlazados a mantenimiento
    /// son inmutables: el controller lo comprueba con check_mutable antes.
    #[allow(clippy::too_many_arguments)]
    pub async fn update(
        &self,
        id: Uuid,
        category: Option<String>,
        date: Option<NaiveDate>,
        amount: Option<Decimal>,
        description: Option<String>,
        receipt_path: Option<String>,
    ) -> Result<CarExpense, AppError> {
        let current = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Expense not found".to_string()))?;

        let expense = sqlx::query_as::<_, CarExpense>(
            r#"
            UPDATE car_expenses
            SET category = $3, date = $4, amount = $5, description = $6, receipt_path = $7
            WHERE id = $1 AND organization_id = $2
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(self.db.organization_id())
        .bind(category.unwrap_or(current.category))
        .bind(date.unwrap_or(current.date))
        .bind(amount.unwrap_or(current.amount))
        .bind(description.or(current.description))
        .bind(receipt_path.or(current.receipt_path))
        .fetch_one(self.db.pool())
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error updating expense: {}", e)))?;

        Ok(expense)
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM car_expenses WHERE id = $1 AND organization_id = $2")
            .bind(id)
            .bind(self.db.organization_id())
            .execute(self.db.pool())
            .await
            .map_err(|e| AppError::DatabaseError(format!("Error deleting expense: {}", e)))?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Expense not found".to_string()));
        }

        Ok(())
    }
}
