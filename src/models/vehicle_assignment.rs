//! Modelo de VehicleAssignment
//!
//! Asignación de un vehículo a un equipo (y opcionalmente a un conductor)
//! durante un intervalo de fechas. `end_date IS NULL` significa asignación
//! activa; como máximo una por vehículo.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

/// VehicleAssignment - mapea exactamente a la tabla vehicle_assignments
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct VehicleAssignment {
    pub id: Uuid,
    pub organization_id: Uuid,
    pub vehicle_id: Uuid,
    pub team_id: Uuid,
    pub driver_id: Option<Uuid>,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
}

impl VehicleAssignment {
    pub fn is_open(&self) -> bool {
        self.end_date.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_is_open() {
        let mut assignment = VehicleAssignment {
            id: Uuid::new_v4(),
            organization_id: Uuid::new_v4(),
            vehicle_id: Uuid::new_v4(),
            team_id: Uuid::new_v4(),
            driver_id: None,
            start_date: Utc::now().date_naive(),
            end_date: None,
            created_at: Utc::now(),
        };
        assert!(assignment.is_open());

        assignment.end_date = Some(Utc::now().date_naive());
        assert!(!assignment.is_open());
    }
}
