use crate::database::TenantDb;
use crate::models::vehicle_assignment::VehicleAssignment;
use crate::utils::errors::AppError;
use uuid::Uuid;

pub struct VehicleAssignmentRepository {
    db: TenantDb,
}

impl VehicleAssignmentRepository {
    pub fn new(db: TenantDb) -> Self {
        Self { db }
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<VehicleAssignment>, AppError> {
        let assignment = sqlx::query_as::<_, VehicleAssignment>(
            "SELECT * FROM vehicle_assignments WHERE id = $1 AND organization_id = $2",
        )
        .bind(id)
        .bind(self.db.organization_id())
        .fetch_optional(self.db.pool())
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error finding assignment: {}", e)))?;

        Ok(assignment)
    }

    pub async fn find_open_for_vehicle(
        &self,
        vehicle_id: Uuid,
    ) -> Result<Option<VehicleAssignment>, AppError> {
        let assignment = sqlx::query_as::<_, VehicleAssignment>(
            r#"
            SELECT * FROM vehicle_assignments
            WHERE vehicle_id = $1 AND organization_id = $2 AND end_date IS NULL
            "#,
        )
        .bind(vehicle_id)
        .bind(self.db.organization_id())
        .fetch_optional(self.db.pool())
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error finding open assignment: {}", e)))?;

        Ok(assignment)
    }

    /// Historial completo de asignaciones de un vehículo
    pub async fn list_by_vehicle(&self, vehicle_id: Uuid) -> Result<Vec<VehicleAssignment>, AppError> {
        let assignments = sqlx::query_as::<_, VehicleAssignment>(
            r#"
            SELECT * FROM vehicle_assignments
            WHERE vehicle_id = $1 AND organization_id = $2
            ORDER BY start_date DESC, created_at DESC
            "#,
        )
        .bind(vehicle_id)
        .bind(self.db.organization_id())
        .fetch_all(self.db.pool())
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error listing vehicle assignments: {}", e)))?;

        Ok(assignments)
    }

    pub async fn list_by_team(&self, team_id: Uuid) -> Result<Vec<VehicleAssignment>, AppError> {
        let assignments = sqlx::query_as::<_, VehicleAssignment>(
            r#"
            SELECT * FROM vehicle_assignments
            WHERE team_id = $1 AND organization_id = $2
            ORDER BY start_date DESC, created_at DESC
            "#,
        )
        .bind(team_id)
        .bind(self.db.organization_id())
        .fetch_all(self.db.pool())
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error listing team assignments: {}", e)))?;

        Ok(assignments)
    }
}
