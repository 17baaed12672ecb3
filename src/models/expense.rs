//! Modelo de CarExpense
//!
//! Gastos asociados a un vehículo. Los gastos creados por un evento de
//! mantenimiento quedan enlazados a él y son inmutables desde las
//! operaciones de gastos.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;
use rust_decimal::Decimal;

use crate::utils::errors::AppError;

/// CarExpense - mapea exactamente a la tabla car_expenses
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CarExpense {
    pub id: Uuid,
    pub organization_id: Uuid,
    pub vehicle_id: Uuid,
    pub category: String,
    pub date: NaiveDate,
    pub amount: Decimal,
    pub description: Option<String>,
    pub receipt_path: Option<String>,
    pub maintenance_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

impl CarExpense {
    pub fn is_maintenance_linked(&self) -> bool {
        self.maintenance_id.is_some()
    }

    /// Los gastos generados por mantenimiento no se editan ni se borran
    /// desde las operaciones de gastos
    pub fn check_mutable(&self) -> Result<(), AppError> {
        if self.is_maintenance_linked() {
            return Err(AppError::InvalidStateTransition(
                "Expenses created by a maintenance event cannot be modified".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn expense(maintenance_id: Option<Uuid>) -> CarExpense {
        CarExpense {
            id: Uuid::new_v4(),
            organization_id: Uuid::new_v4(),
            vehicle_id: Uuid::new_v4(),
            category: "fuel".to_string(),
            date: Utc::now().date_naive(),
            amount: Decimal::from(60),
            description: None,
            receipt_path: None,
            maintenance_id,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_maintenance_linked_expense_is_immutable() {
        assert!(expense(Some(Uuid::new_v4())).check_mutable().is_err());
        assert!(expense(None).check_mutable().is_ok());
    }
}
