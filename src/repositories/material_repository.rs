use crate::database::TenantDb;
use crate::models::material::{Material, MaterialAssignment, MaterialType};
use crate::utils::errors::{has_dependents_error, AppError};
use chrono::Utc;
use rust_decimal::Decimal;
use uuid::Uuid;

pub struct MaterialRepository {
    db: TenantDb,
}

impl MaterialRepository {
    pub fn new(db: TenantDb) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        name: String,
        material_type: MaterialType,
        unit: String,
        unit_price: Option<Decimal>,
        total_quantity: i32,
    ) -> Result<Material, AppError> {
        let material = sqlx::query_as::<_, Material>(
            r#"
            INSERT INTO materials (id, organization_id, name, material_type, unit,
                                   unit_price, total_quantity, assigned_quantity, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, 0, $8)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(self.db.organization_id())
        .bind(name)
        .bind(material_type)
        .bind(unit)
        .bind(unit_price)
        .bind(total_quantity)
        .bind(Utc::now())
        .fetch_one(self.db.pool())
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error creating material: {}", e)))?;

        Ok(material)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Material>, AppError> {
        let material = sqlx::query_as::<_, Material>(
            "SELECT * FROM materials WHERE id = $1 AND organization_id = $2",
        )
        .bind(id)
        .bind(self.db.organization_id())
        .fetch_optional(self.db.pool())
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error finding material: {}", e)))?;

        Ok(material)
    }

    pub async fn list(&self) -> Result<Vec<Material>, AppError> {
        let materials = sqlx::query_as::<_, Material>(
            "SELECT * FROM materials WHERE organization_id = $1 ORDER BY name",
        )
        .bind(self.db.organization_id())
        .fetch_all(self.db.pool())
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error listing materials: {}", e)))?;

        Ok(materials)
    }

    /// Actualiza los datos descriptivos. Los contadores de stock solo los
    /// mueven las operaciones del ledger.
    pub async fn update(
        &self,
        id: Uuid,
        name: Option<String>,
        unit: Option<String>,
        unit_price: Option<Decimal>,
    ) -> Result<Material, AppError> {
        let current = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Material not found".to_string()))?;

        let material = sqlx::query_as::<_, Material>(
            r#"
            UPDATE materials
            SET name = $3, unit = $4, unit_price = $5
            WHERE id = $1 AND organization_id = $2
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(self.db.organization_id())
        .bind(name.unwrap_or(current.name))
        .bind(unit.unwrap_or(current.unit))
        .bind(unit_price.or(current.unit_price))
        .fetch_one(self.db.pool())
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error updating material: {}", e)))?;

        Ok(material)
    }

    /// Reposición de stock (entrada de almacén)
    pub async fn restock(&self, id: Uuid, quantity: i32) -> Result<Material, AppError> {
        if quantity <= 0 {
            return Err(AppError::ValidationError(
                "Restock quantity must be positive".to_string(),
            ));
        }

        let material = sqlx::query_as::<_, Material>(
            r#"
            UPDATE materials
            SET total_quantity = total_quantity + $3
            WHERE id = $1 AND organization_id = $2
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(self.db.organization_id())
        .bind(quantity)
        .fetch_one(self.db.pool())
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error restocking material: {}", e)))?;

        Ok(material)
    }

    pub async fn has_assignments(&self, id: Uuid) -> Result<bool, AppError> {
        let result: (bool,) = sqlx::query_as(
            "SELECT EXISTS(SELECT 1 FROM material_assignments WHERE material_id = $1)",
        )
        .bind(id)
        .fetch_one(self.db.pool())
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error checking material assignments: {}", e)))?;

        Ok(result.0)
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        self.find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Material not found".to_string()))?;

        // Con cualquier asignación registrada (histórica o activa) el borrado se rechaza
        if self.has_assignments(id).await? {
            return Err(has_dependents_error("material", "assignment records"));
        }

        sqlx::query("DELETE FROM materials WHERE id = $1 AND organization_id = $2")
            .bind(id)
            .bind(self.db.organization_id())
            .execute(self.db.pool())
            .await
            .map_err(|e| AppError::DatabaseError(format!("Error deleting material: {}", e)))?;

        Ok(())
    }

    pub async fn find_assignment(&self, id: Uuid) -> Result<Option<MaterialAssignment>, AppError> {
        let assignment = sqlx::query_as::<_, MaterialAssignment>(
            "SELECT * FROM material_assignments WHERE id = $1 AND organization_id = $2",
        )
        .bind(id)
        .bind(self.db.organization_id())
        .fetch_optional(self.db.pool())
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error finding material assignment: {}", e)))?;

        Ok(assignment)
    }

    pub async fn list_assignments_by_material(
        &self,
        material_id: Uuid,
    ) -> Result<Vec<MaterialAssignment>, AppError> {
        let assignments = sqlx::query_as::<_, MaterialAssignment>(
            r#"
            SELECT * FROM material_assignments
            WHERE material_id = $1 AND organization_id = $2
            ORDER BY issued_on DESC, created_at DESC
            "#,
        )
        .bind(material_id)
        .bind(self.db.organization_id())
        .fetch_all(self.db.pool())
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error listing material assignments: {}", e)))?;

        Ok(assignments)
    }

    pub async fn list_assignments_by_team(
        &self,
        team_id: Uuid,
    ) -> Result<Vec<MaterialAssignment>, AppError> {
        let assignments = sqlx::query_as::<_, MaterialAssignment>(
            r#"
            SELECT * FROM material_assignments
            WHERE team_id = $1 AND organization_id = $2
            ORDER BY issued_on DESC, created_at DESC
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
