//! Registro de asignaciones de vehículos
//!
//! Garantiza la invariante de una única asignación abierta por vehículo:
//! asignar un equipo nuevo cierra la asignación anterior con end_date igual
//! al start_date nuevo, todo en una transacción.

use crate::database::TenantDb;
use crate::models::vehicle_assignment::VehicleAssignment;
use crate::repositories::team_repository::TeamRepository;
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::utils::errors::AppError;
use chrono::{NaiveDate, Utc};
use uuid::Uuid;

pub struct AssignmentService {
    db: TenantDb,
}

impl AssignmentService {
    pub fn new(db: TenantDb) -> Self {
        Self { db }
    }

    /// Asigna un vehículo a un equipo (y opcionalmente a un conductor).
    /// Cierra la asignación abierta anterior si existe.
    pub async fn assign(
        &self,
        vehicle_id: Uuid,
        team_id: Uuid,
        driver_id: Option<Uuid>,
        start_date: NaiveDate,
    ) -> Result<VehicleAssignment, AppError> {
        VehicleRepository::new(self.db.clone())
            .find_by_id(vehicle_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Vehicle not found".to_string()))?;
        TeamRepository::new(self.db.clone())
            .find_by_id(team_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Team not found".to_string()))?;

        let mut tx = self
            .db
            .pool()
            .begin()
            .await
            .map_err(|e| AppError::DatabaseError(format!("Error starting transaction: {}", e)))?;

        sqlx::query(
            r#"
            UPDATE vehicle_assignments
            SET end_date = $3
            WHERE vehicle_id = $1 AND organization_id = $2 AND end_date IS NULL
            "#,
        )
        .bind(vehicle_id)
        .bind(self.db.organization_id())
        .bind(start_date)
        .execute(&mut *tx)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error closing previous assignment: {}", e)))?;

        let assignment = sqlx::query_as::<_, VehicleAssignment>(
            r#"
            INSERT INTO vehicle_assignments (id, organization_id, vehicle_id, team_id,
                                             driver_id, start_date, end_date, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, NULL, $7)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(self.db.organization_id())
        .bind(vehicle_id)
        .bind(team_id)
        .bind(driver_id)
        .bind(start_date)
        .bind(Utc::now())
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error creating assignment: {}", e)))?;

        tx.commit()
            .await
            .map_err(|e| AppError::DatabaseError(format!("Error committing assignment: {}", e)))?;

        log::info!(
            "🚗 Vehículo {} asignado al equipo {} desde {}",
            vehicle_id,
            team_id,
            start_date
        );

        Ok(assignment)
    }

    /// Cierra una asignación abierta con fecha de hoy
    pub async fn end(&self, assignment_id: Uuid) -> Result<VehicleAssignment, AppError> {
        let closed = sqlx::query_as::<_, VehicleAssignment>(
            r#"
            UPDATE vehicle_assignments
            SET end_date = $3
            WHERE id = $1 AND organization_id = $2 AND end_date IS NULL
            RETURNING *
            "#,
        )
        .bind(assignment_id)
        .bind(self.db.organization_id())
        .bind(Utc::now().date_naive())
        .fetch_optional(self.db.pool())
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error ending assignment: {}", e)))?;

        match closed {
            Some(assignment) => Ok(assignment),
            None => {
                // Distinguir entre inexistente y ya cerrada
                let exists: (bool,) = sqlx::query_as(
                    "SELECT EXISTS(SELECT 1 FROM vehicle_assignments WHERE id = $1 AND organization_id = $2)",
                )
                .bind(assignment_id)
                .bind(self.db.organization_id())
                .fetch_one(self.db.pool())
                .await
                .map_err(|e| AppError::DatabaseError(format!("Error checking assignment: {}", e)))?;

                if exists.0 {
                    Err(AppError::InvalidStateTransition(
                        "Assignment is already closed".to_string(),
                    ))
                } else {
                    Err(AppError::NotFound("Vehicle assignment not found".to_string()))
                }
            }
        }
    }
}
