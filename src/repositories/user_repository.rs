use crate::database::TenantDb;
use crate::models::user::{User, UserRole};
use crate::utils::errors::AppError;
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

pub struct UserRepository {
    db: TenantDb,
}

impl UserRepository {
    pub fn new(db: TenantDb) -> Self {
        Self { db }
    }

    /// Búsqueda global por email para el login (todavía sin tenant en contexto)
    pub async fn find_by_email_global(pool: &PgPool, email: &str) -> Result<Option<User>, AppError> {
        let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE email = $1")
            .bind(email)
            .fetch_optional(pool)
            .await
            .map_err(|e| AppError::DatabaseError(format!("Error finding user by email: {}", e)))?;

        Ok(user)
    }

    /// Alta del usuario owner al registrar la organización
    pub async fn create_owner(
        pool: &PgPool,
        organization_id: Uuid,
        first_name: String,
        last_name: String,
        email: String,
        password_hash: String,
    ) -> Result<User, AppError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (id, organization_id, first_name, last_name, email,
                               password_hash, role, team_id, phone, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, NULL, NULL, $8)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(organization_id)
        .bind(first_name)
        .bind(last_name)
        .bind(email)
        .bind(password_hash)
        .bind(UserRole::Owner)
        .bind(Utc::now())
        .fetch_one(pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error creating owner user: {}", e)))?;

        Ok(user)
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn create(
        &self,
        first_name: String,
        last_name: String,
        email: Option<String>,
        password_hash: Option<String>,
        role: UserRole,
        team_id: Option<Uuid>,
        phone: Option<String>,
    ) -> Result<User, AppError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (id, organization_id, first_name, last_name, email,
                               password_hash, role, team_id, phone, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(self.db.organization_id())
        .bind(first_name)
        .bind(last_name)
        .bind(email)
        .bind(password_hash)
        .bind(role)
        .bind(team_id)
        .bind(phone)
        .bind(Utc::now())
        .fetch_one(self.db.pool())
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error creating user: {}", e)))?;

        Ok(user)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, AppError> {
        let user = sqlx::query_as::<_, User>(
            "SELECT * FROM users WHERE id = $1 AND organization_id = $2",
        )
        .bind(id)
        .bind(self.db.organization_id())
        .fetch_optional(self.db.pool())
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error finding user: {}", e)))?;

        Ok(user)
    }

    pub async fn list(&self) -> Result<Vec<User>, AppError> {
        let users = sqlx::query_as::<_, User>(
            "SELECT * FROM users WHERE organization_id = $1 ORDER BY last_name, first_name",
        )
        .bind(self.db.organization_id())
        .fetch_all(self.db.pool())
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error listing users: {}", e)))?;

        Ok(users)
    }

    pub async fn list_by_team(&self, team_id: Uuid) -> Result<Vec<User>, AppError> {
        let users = sqlx::query_as::<_, User>(
            "SELECT * FROM users WHERE team_id = $1 AND organization_id = $2 ORDER BY last_name",
        )
        .bind(team_id)
        .bind(self.db.organization_id())
        .fetch_all(self.db.pool())
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error listing team users: {}", e)))?;

        Ok(users)
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn update(
        &self,
        id: Uuid,
        first_name: Option<String>,
        last_name: Option<String>,
        role: Option<UserRole>,
        team_id: Option<Uuid>,
        phone: Option<String>,
    ) -> Result<User, AppError> {
        let current = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        let user = sqlx::query_as::<_, User>(
            r#"
            UPDATE users
            SET first_name = $3, last_name = $4, role = $5, team_id = $6, phone = $7
            WHERE id = $1 AND organization_id = $2
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(self.db.organization_id())
        .bind(first_name.unwrap_or(current.first_name))
        .bind(last_name.unwrap_or(current.last_name))
        .bind(role.unwrap_or(current.role))
        .bind(team_id.or(current.team_id))
        .bind(phone.or(current.phone))
        .fetch_one(self.db.pool())
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error updating user: {}", e)))?;

        Ok(user)
    }

    /// Saca al usuario de su equipo actual
    pub async fn clear_team(&self, id: Uuid) -> Result<User, AppError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            UPDATE users
            SET team_id = NULL
            WHERE id = $1 AND organization_id = $2
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(self.db.organization_id())
        .fetch_optional(self.db.pool())
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error clearing user team: {}", e)))?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        Ok(user)
    }

    /// ¿Es el usuario responsable de algún equipo?
    pub async fn leads_team(&self, id: Uuid) -> Result<bool, AppError> {
        let result: (bool,) = sqlx::query_as(
            "SELECT EXISTS(SELECT 1 FROM teams WHERE lead_user_id = $1 AND organization_id = $2)",
        )
        .bind(id)
        .bind(self.db.organization_id())
        .fetch_one(self.db.pool())
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error checking team leadership: {}", e)))?;

        Ok(result.0)
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        self.find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        if self.leads_team(id).await? {
            return Err(AppError::HasDependents(
                "Cannot delete user: reassign team leadership first".to_string(),
            ));
        }

        sqlx::query("DELETE FROM users WHERE id = $1 AND organization_id = $2")
            .bind(id)
            .bind(self.db.organization_id())
            .execute(self.db.pool())
            .await
            .map_err(|e| AppError::DatabaseError(format!("Error deleting user: {}", e)))?;

        Ok(())
    }
}
