use crate::database::TenantDb;
use crate::models::team::Team;
use crate::utils::errors::{has_dependents_error, AppError};
use chrono::Utc;
use uuid::Uuid;

pub struct TeamRepository {
    db: TenantDb,
}

impl TeamRepository {
    pub fn new(db: TenantDb) -> Self {
        Self { db }
    }

    pub async fn create(&self, name: String, lead_user_id: Option<Uuid>) -> Result<Team, AppError> {
        let team = sqlx::query_as::<_, Team>(
            r#"
            INSERT INTO teams (id, organization_id, name, lead_user_id, created_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(self.db.organization_id())
        .bind(name)
        .bind(lead_user_id)
        .bind(Utc::now())
        .fetch_one(self.db.pool())
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error creating team: {}", e)))?;

        Ok(team)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Team>, AppError> {
        let team = sqlx::query_as::<_, Team>(
            "SELECT * FROM teams WHERE id = $1 AND organization_id = $2",
        )
        .bind(id)
        .bind(self.db.organization_id())
        .fetch_optional(self.db.pool())
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error finding team: {}", e)))?;

        Ok(team)
    }

    pub async fn list(&self) -> Result<Vec<Team>, AppError> {
        let teams = sqlx::query_as::<_, Team>(
            "SELECT * FROM teams WHERE organization_id = $1 ORDER BY name",
        )
        .bind(self.db.organization_id())
        .fetch_all(self.db.pool())
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error listing teams: {}", e)))?;

        Ok(teams)
    }

    pub async fn update(
        &self,
        id: Uuid,
        name: Option<String>,
        lead_user_id: Option<Uuid>,
    ) -> Result<Team, AppError> {
        let current = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Team not found".to_string()))?;

        let team = sqlx::query_as::<_, Team>(
            r#"
            UPDATE teams
            SET name = $3, lead_user_id = $4
            WHERE id = $1 AND organization_id = $2
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(self.db.organization_id())
        .bind(name.unwrap_or(current.name))
        .bind(lead_user_id.or(current.lead_user_id))
        .fetch_one(self.db.pool())
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error updating team: {}", e)))?;

        Ok(team)
    }

    /// Retira al responsable actual del equipo
    pub async fn clear_lead(&self, id: Uuid) -> Result<Team, AppError> {
        let team = sqlx::query_as::<_, Team>(
            r#"
            UPDATE teams
            SET lead_user_id = NULL
            WHERE id = $1 AND organization_id = $2
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(self.db.organization_id())
        .fetch_optional(self.db.pool())
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error clearing team lead: {}", e)))?
        .ok_or_else(|| AppError::NotFound("Team not found".to_string()))?;

        Ok(team)
    }

    pub async fn member_count(&self, id: Uuid) -> Result<i64, AppError> {
        let result: (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM users WHERE team_id = $1 AND organization_id = $2",
        )
        .bind(id)
        .bind(self.db.organization_id())
        .fetch_one(self.db.pool())
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error counting team members: {}", e)))?;

        Ok(result.0)
    }

    pub async fn open_vehicle_assignment_count(&self, id: Uuid) -> Result<i64, AppError> {
        let result: (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM vehicle_assignments WHERE team_id = $1 AND end_date IS NULL",
        )
        .bind(id)
        .fetch_one(self.db.pool())
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error counting open assignments: {}", e)))?;

        Ok(result.0)
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        self.find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Team not found".to_string()))?;

        if self.member_count(id).await? > 0 {
            return Err(has_dependents_error("team", "members"));
        }
        if self.open_vehicle_assignment_count(id).await? > 0 {
            return Err(has_dependents_error("team", "active vehicle assignments"));
        }

        sqlx::query("DELETE FROM teams WHERE id = $1 AND organization_id = $2")
            .bind(id)
            .bind(self.db.organization_id())
            .execute(self.db.pool())
            .await
            .map_err(|e| AppError::DatabaseError(format!("Error deleting team: {}", e)))?;

        Ok(())
    }
}
