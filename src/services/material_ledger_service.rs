//! Ledger de materiales y equipamiento
//!
//! Única puerta de entrada para mover los contadores de stock. Las
//! precondiciones se comprueban sobre el modelo y el decremento/incremento
//! real se hace con un UPDATE condicional atómico dentro de una transacción,
//! comprobando las filas afectadas: dos entregas concurrentes no pueden
//! sobre-asignar el mismo stock.

use crate::database::TenantDb;
use crate::models::material::{
    FaultAttribution, MaterialAssignment, MaterialAssignmentStatus, MaterialType, ReturnOutcome,
};
use crate::models::penalty::{PenaltyOrigin, PenaltyStatus};
use crate::repositories::material_repository::MaterialRepository;
use crate::utils::errors::{not_found_error, AppError};
use chrono::{NaiveDate, Utc};
use uuid::Uuid;

pub struct MaterialLedgerService {
    db: TenantDb,
    repository: MaterialRepository,
}

impl MaterialLedgerService {
    pub fn new(db: TenantDb) -> Self {
        Self {
            repository: MaterialRepository::new(db.clone()),
            db,
        }
    }

    /// Entrega de material a un equipo.
    ///
    /// Consumible: descuenta stock de forma permanente y registra la
    /// asignación ya consumida. Equipamiento: incrementa el contador de
    /// unidades fuera y deja la asignación activa.
    pub async fn issue(
        &self,
        material_id: Uuid,
        team_id: Uuid,
        quantity: i32,
        date: NaiveDate,
        notes: Option<String>,
    ) -> Result<MaterialAssignment, AppError> {
        let material = self
            .repository
            .find_by_id(material_id)
            .await?
            .ok_or_else(|| not_found_error("Material", &material_id.to_string()))?;

        // Precondición amigable; la garantía real es el UPDATE condicional
        material.check_issue(quantity)?;

        let mut tx = self
            .db
            .pool()
            .begin()
            .await
            .map_err(|e| AppError::DatabaseError(format!("Error starting transaction: {}", e)))?;

        let updated = match material.material_type {
            MaterialType::Consumable => sqlx::query(
                r#"
                UPDATE materials
                SET total_quantity = total_quantity - $3
                WHERE id = $1 AND organization_id = $2 AND total_quantity >= $3
                "#,
            )
            .bind(material_id)
            .bind(self.db.organization_id())
            .bind(quantity)
            .execute(&mut *tx)
            .await
            .map_err(|e| AppError::DatabaseError(format!("Error issuing material: {}", e)))?,
            MaterialType::Equipment => sqlx::query(
                r#"
                UPDATE materials
                SET assigned_quantity = assigned_quantity + $3
                WHERE id = $1 AND organization_id = $2
                  AND total_quantity - assigned_quantity >= $3
                "#,
            )
            .bind(material_id)
            .bind(self.db.organization_id())
            .bind(quantity)
            .execute(&mut *tx)
            .await
            .map_err(|e| AppError::DatabaseError(format!("Error issuing equipment: {}", e)))?,
        };

        // Otra sesión pudo ganar la carrera entre la lectura y el UPDATE
        if updated.rows_affected() == 0 {
            tx.rollback()
                .await
                .map_err(|e| AppError::DatabaseError(format!("Error rolling back: {}", e)))?;
            return Err(match material.material_type {
                MaterialType::Consumable => AppError::InsufficientStock(format!(
                    "Requested {} of material '{}' but stock was taken by a concurrent issue",
                    quantity, material.name
                )),
                MaterialType::Equipment => AppError::InsufficientAvailability(format!(
                    "Requested {} of material '{}' but availability was taken by a concurrent issue",
                    quantity, material.name
                )),
            });
        }

        let assignment = sqlx::query_as::<_, MaterialAssignment>(
            r#"
            INSERT INTO material_assignments (id, organization_id, material_id, team_id,
                                              quantity, issued_on, status, notes, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(self.db.organization_id())
        .bind(material_id)
        .bind(team_id)
        .bind(quantity)
        .bind(date)
        .bind(material.initial_assignment_status())
        .bind(notes)
        .bind(Utc::now())
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error creating assignment: {}", e)))?;

        tx.commit()
            .await
            .map_err(|e| AppError::DatabaseError(format!("Error committing issue: {}", e)))?;

        log::info!(
            "📦 Material '{}' entregado: {} {} al equipo {}",
            material.name,
            quantity,
            material.unit,
            team_id
        );

        Ok(assignment)
    }

    /// Marca una asignación de equipamiento para devolución. El stock sigue
    /// fuera hasta que se confirme.
    pub async fn mark_for_return(&self, assignment_id: Uuid) -> Result<MaterialAssignment, AppError> {
        let assignment = self
            .repository
            .find_assignment(assignment_id)
            .await?
            .ok_or_else(|| not_found_error("MaterialAssignment", &assignment_id.to_string()))?;

        assignment.check_mark_for_return()?;

        let updated = sqlx::query_as::<_, MaterialAssignment>(
            r#"
            UPDATE material_assignments
            SET status = $3
            WHERE id = $1 AND organization_id = $2 AND status = $4
            RETURNING *
            "#,
        )
        .bind(assignment_id)
        .bind(self.db.organization_id())
        .bind(MaterialAssignmentStatus::PendingReturn)
        .bind(MaterialAssignmentStatus::Active)
        .fetch_optional(self.db.pool())
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error marking for return: {}", e)))?
        .ok_or_else(|| {
            AppError::InvalidStateTransition(
                "Assignment is no longer active".to_string(),
            )
        })?;

        Ok(updated)
    }

    /// Confirma la devolución de una asignación pendiente.
    ///
    /// returned: el stock vuelve a estar disponible. broken: el stock deja de
    /// estar fuera (está destruido) y, si la avería es imputable al equipo y
    /// el material tiene precio, se genera la sanción por daños en la misma
    /// transacción.
    pub async fn confirm_return(
        &self,
        assignment_id: Uuid,
        outcome: ReturnOutcome,
        fault: FaultAttribution,
    ) -> Result<MaterialAssignment, AppError> {
        let assignment = self
            .repository
            .find_assignment(assignment_id)
            .await?
            .ok_or_else(|| not_found_error("MaterialAssignment", &assignment_id.to_string()))?;

        assignment.check_confirm_return()?;

        let material = self
            .repository
            .find_by_id(assignment.material_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Material not found".to_string()))?;

        let terminal_status = match outcome {
            ReturnOutcome::Returned => MaterialAssignmentStatus::Returned,
            ReturnOutcome::Broken => MaterialAssignmentStatus::Broken,
        };

        let mut tx = self
            .db
            .pool()
            .begin()
            .await
            .map_err(|e| AppError::DatabaseError(format!("Error starting transaction: {}", e)))?;

        let updated = sqlx::query_as::<_, MaterialAssignment>(
            r#"
            UPDATE material_assignments
            SET status = $3
            WHERE id = $1 AND organization_id = $2 AND status = $4
            RETURNING *
            "#,
        )
        .bind(assignment_id)
        .bind(self.db.organization_id())
        .bind(terminal_status)
        .bind(MaterialAssignmentStatus::PendingReturn)
        .fetch_optional(&mut *tx)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error confirming return: {}", e)))?
        .ok_or_else(|| {
            AppError::InvalidStateTransition(
                "Assignment is no longer pending return".to_string(),
            )
        })?;

        // Las unidades dejan de estar fuera en ambos desenlaces
        sqlx::query(
            r#"
            UPDATE materials
            SET assigned_quantity = assigned_quantity - $3
            WHERE id = $1 AND organization_id = $2 AND assigned_quantity >= $3
            "#,
        )
        .bind(assignment.material_id)
        .bind(self.db.organization_id())
        .bind(assignment.quantity)
        .execute(&mut *tx)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error releasing assigned quantity: {}", e)))?;

        if outcome == ReturnOutcome::Broken && fault == FaultAttribution::Worker {
            if let Some(amount) = material.damage_penalty_amount(assignment.quantity) {
                let origin = match material.material_type {
                    MaterialType::Equipment => PenaltyOrigin::EquipmentDamage,
                    MaterialType::Consumable => PenaltyOrigin::MaterialDamage,
                };

                sqlx::query(
                    r#"
                    INSERT INTO penalties (id, organization_id, vehicle_id, team_id, user_id,
                                           date, amount, status, origin, description, payment_notes, created_at)
                    VALUES ($1, $2, NULL, $3, NULL, $4, $5, $6, $7, $8, NULL, $9)
                    "#,
                )
                .bind(Uuid::new_v4())
                .bind(self.db.organization_id())
                .bind(assignment.team_id)
                .bind(Utc::now().date_naive())
                .bind(amount)
                .bind(PenaltyStatus::Open)
                .bind(origin)
                .bind(format!(
                    "Damage charge: {} x{} {}",
                    material.name, assignment.quantity, material.unit
                ))
                .bind(Utc::now())
                .execute(&mut *tx)
                .await
                .map_err(|e| AppError::DatabaseError(format!("Error creating damage penalty: {}", e)))?;

                log::info!(
                    "💸 Sanción por rotura generada: {} x{} ({}) para el equipo {}",
                    material.name,
                    assignment.quantity,
                    amount,
                    assignment.team_id
                );
            }
        }

        tx.commit()
            .await
            .map_err(|e| AppError::DatabaseError(format!("Error committing confirmation: {}", e)))?;

        Ok(updated)
    }
}
