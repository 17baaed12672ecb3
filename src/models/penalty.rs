//! Modelo de Penalty
//!
//! Sanciones contra un equipo/usuario/vehículo: multas de tráfico
//! introducidas a mano o cargos generados por el sistema al confirmar
//! roturas de material o equipamiento. El origen es un campo explícito,
//! nunca una convención sobre el texto de la descripción.

use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;
use rust_decimal::Decimal;

use crate::utils::errors::AppError;

/// Estado de la sanción - mapea al ENUM penalty_status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Type, PartialEq, Eq)]
#[sqlx(type_name = "penalty_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum PenaltyStatus {
    Open,
    Paid,
}

/// Origen de la sanción - mapea al ENUM penalty_origin
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Type, PartialEq, Eq)]
#[sqlx(type_name = "penalty_origin", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum PenaltyOrigin {
    Manual,
    EquipmentDamage,
    MaterialDamage,
}

impl PenaltyOrigin {
    /// Cargos por daños generados por el sistema (vs. multas reales)
    pub fn is_damage(&self) -> bool {
        matches!(
            self,
            PenaltyOrigin::EquipmentDamage | PenaltyOrigin::MaterialDamage
        )
    }
}

/// Penalty - mapea exactamente a la tabla penalties
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Penalty {
    pub id: Uuid,
    pub organization_id: Uuid,
    pub vehicle_id: Option<Uuid>,
    pub team_id: Option<Uuid>,
    pub user_id: Option<Uuid>,
    pub date: NaiveDate,
    pub amount: Decimal,
    pub status: PenaltyStatus,
    pub origin: PenaltyOrigin,
    pub description: String,
    pub payment_notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Penalty {
    /// Precondición de pago: solo sanciones abiertas admiten el pago, y el
    /// recibo es obligatorio. El segundo intento sobre una sanción ya pagada
    /// se rechaza en vez de duplicar el pago.
    pub fn check_mark_paid(&self, receipt_path: &str) -> Result<(), AppError> {
        if receipt_path.trim().is_empty() {
            return Err(AppError::ReceiptRequired);
        }
        if self.status == PenaltyStatus::Paid {
            return Err(AppError::InvalidStateTransition(
                "Penalty is already paid".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn penalty(status: PenaltyStatus) -> Penalty {
        Penalty {
            id: Uuid::new_v4(),
            organization_id: Uuid::new_v4(),
            vehicle_id: None,
            team_id: Some(Uuid::new_v4()),
            user_id: None,
            date: Utc::now().date_naive(),
            amount: Decimal::from(150),
            status,
            origin: PenaltyOrigin::Manual,
            description: "Exceso de velocidad".to_string(),
            payment_notes: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_mark_paid_requires_receipt() {
        let p = penalty(PenaltyStatus::Open);
        assert!(matches!(p.check_mark_paid(""), Err(AppError::ReceiptRequired)));
        assert!(matches!(p.check_mark_paid("   "), Err(AppError::ReceiptRequired)));
        assert!(p.check_mark_paid("penalties/recibo.pdf").is_ok());
    }

    #[test]
    fn test_mark_paid_rejects_double_payment() {
        let p = penalty(PenaltyStatus::Paid);
        assert!(matches!(
            p.check_mark_paid("penalties/recibo.pdf"),
            Err(AppError::InvalidStateTransition(_))
        ));
    }

    #[test]
    fn test_origin_is_damage() {
        assert!(PenaltyOrigin::EquipmentDamage.is_damage());
        assert!(PenaltyOrigin::MaterialDamage.is_damage());
        assert!(!PenaltyOrigin::Manual.is_damage());
    }
}
