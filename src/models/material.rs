//! Modelo de Material y sus asignaciones
//!
//! Un material es consumible (el stock se descuenta de forma permanente al
//! entregarlo) o equipamiento (retornable, con contador de unidades fuera).
//! Aquí viven también las reglas puras del ciclo de vida de una asignación;
//! el servicio de ledger las aplica dentro de transacciones SQL.

use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;
use rust_decimal::Decimal;

use crate::utils::errors::AppError;

/// Tipo de material - mapea al ENUM material_type
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Type, PartialEq, Eq)]
#[sqlx(type_name = "material_type", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum MaterialType {
    Consumable,
    Equipment,
}

/// Estado de una asignación de material - mapea al ENUM material_assignment_status
///
/// Equipamiento: active → pending_return → {returned | broken}.
/// Consumibles: consumed desde el momento de la entrega.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Type, PartialEq, Eq)]
#[sqlx(type_name = "material_assignment_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum MaterialAssignmentStatus {
    Active,
    PendingReturn,
    Returned,
    Broken,
    Consumed,
}

impl MaterialAssignmentStatus {
    /// Estados finales: no admiten ninguna transición posterior
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            MaterialAssignmentStatus::Returned
                | MaterialAssignmentStatus::Broken
                | MaterialAssignmentStatus::Consumed
        )
    }
}

/// Resultado de la confirmación de devolución de equipamiento
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ReturnOutcome {
    Returned,
    Broken,
}

/// Atribución de la avería al confirmar una rotura
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FaultAttribution {
    Worker,
    Technical,
}

/// Material - mapea exactamente a la tabla materials
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Material {
    pub id: Uuid,
    pub organization_id: Uuid,
    pub name: String,
    pub material_type: MaterialType,
    pub unit: String,
    pub unit_price: Option<Decimal>,
    pub total_quantity: i32,
    pub assigned_quantity: i32,
    pub created_at: DateTime<Utc>,
}

impl Material {
    /// Unidades disponibles para entregar.
    ///
    /// Consumibles: todo el stock restante. Equipamiento: stock total menos
    /// las unidades actualmente fuera.
    pub fn available(&self) -> i32 {
        match self.material_type {
            MaterialType::Consumable => self.total_quantity,
            MaterialType::Equipment => self.total_quantity - self.assigned_quantity,
        }
    }

    /// Precondición de entrega. No muta nada: el decremento real se hace con
    /// un UPDATE condicional atómico en el repositorio.
    pub fn check_issue(&self, quantity: i32) -> Result<(), AppError> {
        if quantity <= 0 {
            return Err(AppError::ValidationError(
                "La cantidad debe ser mayor que cero".to_string(),
            ));
        }
        match self.material_type {
            MaterialType::Consumable => {
                if self.total_quantity < quantity {
                    return Err(AppError::InsufficientStock(format!(
                        "Requested {} but only {} in stock for material '{}'",
                        quantity, self.total_quantity, self.name
                    )));
                }
            }
            MaterialType::Equipment => {
                if self.available() < quantity {
                    return Err(AppError::InsufficientAvailability(format!(
                        "Requested {} but only {} available for material '{}'",
                        quantity,
                        self.available(),
                        self.name
                    )));
                }
            }
        }
        Ok(())
    }

    /// Estado inicial de la asignación según el tipo de material
    pub fn initial_assignment_status(&self) -> MaterialAssignmentStatus {
        match self.material_type {
            MaterialType::Consumable => MaterialAssignmentStatus::Consumed,
            MaterialType::Equipment => MaterialAssignmentStatus::Active,
        }
    }

    /// Importe de la sanción por rotura, si el precio unitario lo permite
    pub fn damage_penalty_amount(&self, quantity: i32) -> Option<Decimal> {
        match self.unit_price {
            Some(price) if price > Decimal::ZERO => Some(price * Decimal::from(quantity)),
            _ => None,
        }
    }
}

/// MaterialAssignment - mapea exactamente a la tabla material_assignments
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct MaterialAssignment {
    pub id: Uuid,
    pub organization_id: Uuid,
    pub material_id: Uuid,
    pub team_id: Uuid,
    pub quantity: i32,
    pub issued_on: NaiveDate,
    pub status: MaterialAssignmentStatus,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl MaterialAssignment {
    /// Precondición para marcar la devolución (solo equipamiento activo)
    pub fn check_mark_for_return(&self) -> Result<(), AppError> {
        if self.status != MaterialAssignmentStatus::Active {
            return Err(AppError::InvalidStateTransition(format!(
                "Assignment is in state '{:?}', only active assignments can be marked for return",
                self.status
            )));
        }
        Ok(())
    }

    /// Precondición para confirmar la devolución (solo desde pending_return)
    pub fn check_confirm_return(&self) -> Result<(), AppError> {
        if self.status != MaterialAssignmentStatus::PendingReturn {
            return Err(AppError::InvalidStateTransition(format!(
                "Assignment is in state '{:?}', only pending_return assignments can be confirmed",
                self.status
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn material(material_type: MaterialType, total: i32, assigned: i32, price: Option<i64>) -> Material {
        Material {
            id: Uuid::new_v4(),
            organization_id: Uuid::new_v4(),
            name: "Taladro".to_string(),
            material_type,
            unit: "ud".to_string(),
            unit_price: price.map(Decimal::from),
            total_quantity: total,
            assigned_quantity: assigned,
            created_at: Utc::now(),
        }
    }

    fn assignment(status: MaterialAssignmentStatus, quantity: i32) -> MaterialAssignment {
        MaterialAssignment {
            id: Uuid::new_v4(),
            organization_id: Uuid::new_v4(),
            material_id: Uuid::new_v4(),
            team_id: Uuid::new_v4(),
            quantity,
            issued_on: Utc::now().date_naive(),
            status,
            notes: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_equipment_availability() {
        let m = material(MaterialType::Equipment, 5, 3, Some(100));
        assert_eq!(m.available(), 2);
        assert!(m.check_issue(2).is_ok());
        assert!(matches!(
            m.check_issue(3),
            Err(AppError::InsufficientAvailability(_))
        ));
    }

    #[test]
    fn test_consumable_stock() {
        let m = material(MaterialType::Consumable, 50, 0, None);
        assert_eq!(m.available(), 50);
        assert!(m.check_issue(50).is_ok());
        assert!(matches!(
            m.check_issue(51),
            Err(AppError::InsufficientStock(_))
        ));
    }

    #[test]
    fn test_issue_rejects_non_positive_quantity() {
        let m = material(MaterialType::Equipment, 5, 0, None);
        assert!(matches!(m.check_issue(0), Err(AppError::ValidationError(_))));
        assert!(matches!(m.check_issue(-1), Err(AppError::ValidationError(_))));
    }

    #[test]
    fn test_initial_assignment_status() {
        let consumable = material(MaterialType::Consumable, 10, 0, None);
        let equipment = material(MaterialType::Equipment, 10, 0, None);
        assert_eq!(
            consumable.initial_assignment_status(),
            MaterialAssignmentStatus::Consumed
        );
        assert_eq!(
            equipment.initial_assignment_status(),
            MaterialAssignmentStatus::Active
        );
    }

    #[test]
    fn test_damage_penalty_amount() {
        let priced = material(MaterialType::Equipment, 5, 3, Some(100));
        assert_eq!(priced.damage_penalty_amount(3), Some(Decimal::from(300)));

        let unpriced = material(MaterialType::Equipment, 5, 3, None);
        assert_eq!(unpriced.damage_penalty_amount(3), None);

        let free = material(MaterialType::Equipment, 5, 3, Some(0));
        assert_eq!(free.damage_penalty_amount(3), None);
    }

    #[test]
    fn test_mark_for_return_only_from_active() {
        assert!(assignment(MaterialAssignmentStatus::Active, 1)
            .check_mark_for_return()
            .is_ok());
        for status in [
            MaterialAssignmentStatus::PendingReturn,
            MaterialAssignmentStatus::Returned,
            MaterialAssignmentStatus::Broken,
            MaterialAssignmentStatus::Consumed,
        ] {
            assert!(matches!(
                assignment(status, 1).check_mark_for_return(),
                Err(AppError::InvalidStateTransition(_))
            ));
        }
    }

    #[test]
    fn test_confirm_return_only_from_pending() {
        assert!(assignment(MaterialAssignmentStatus::PendingReturn, 1)
            .check_confirm_return()
            .is_ok());
        for status in [
            MaterialAssignmentStatus::Active,
            MaterialAssignmentStatus::Returned,
            MaterialAssignmentStatus::Broken,
            MaterialAssignmentStatus::Consumed,
        ] {
            assert!(matches!(
                assignment(status, 1).check_confirm_return(),
                Err(AppError::InvalidStateTransition(_))
            ));
        }
    }

    #[test]
    fn test_terminal_states_are_final() {
        // Una vez returned/broken/consumed no se acepta ninguna transición
        for status in [
            MaterialAssignmentStatus::Returned,
            MaterialAssignmentStatus::Broken,
            MaterialAssignmentStatus::Consumed,
        ] {
            assert!(status.is_terminal());
            assert!(assignment(status, 1).check_mark_for_return().is_err());
            assert!(assignment(status, 1).check_confirm_return().is_err());
        }
        assert!(!MaterialAssignmentStatus::Active.is_terminal());
        assert!(!MaterialAssignmentStatus::PendingReturn.is_terminal());
    }
}
