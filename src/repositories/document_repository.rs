use crate::database::TenantDb;
use crate::models::document::{UserDocument, VehicleDocument};
use crate::utils::errors::AppError;
use chrono::{NaiveDate, Utc};
use uuid::Uuid;

/// Archivo adjunto de un documento (lista ordenada de rutas de blobs)
#[derive(Debug, sqlx::FromRow, serde::Serialize)]
pub struct DocumentFile {
    pub id: Uuid,
    pub document_id: Uuid,
    pub path: String,
    pub position: i32,
}

pub struct DocumentRepository {
    db: TenantDb,
}

impl DocumentRepository {
    pub fn new(db: TenantDb) -> Self {
        Self { db }
    }

    // --- Documentos de vehículo ---

    pub async fn create_vehicle_document(
        &self,
        vehicle_id: Uuid,
        document_type: String,
        title: String,
        date_issued: NaiveDate,
        date_expiry: Option<NaiveDate>,
    ) -> Result<VehicleDocument, AppError> {
        let document = sqlx::query_as::<_, VehicleDocument>(
            r#"
            INSERT INTO vehicle_documents (id, organization_id, vehicle_id, document_type,
                                           title, date_issued, date_expiry, is_active, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, TRUE, $8)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(self.db.organization_id())
        .bind(vehicle_id)
        .bind(document_type)
        .bind(title)
        .bind(date_issued)
        .bind(date_expiry)
        .bind(Utc::now())
        .fetch_one(self.db.pool())
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error creating vehicle document: {}", e)))?;

        Ok(document)
    }

    pub async fn find_vehicle_document(&self, id: Uuid) -> Result<Option<VehicleDocument>, AppError> {
        let document = sqlx::query_as::<_, VehicleDocument>(
            "SELECT * FROM vehicle_documents WHERE id = $1 AND organization_id = $2 AND is_active",
        )
        .bind(id)
        .bind(self.db.organization_id())
        .fetch_optional(self.db.pool())
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error finding vehicle document: {}", e)))?;

        Ok(document)
    }

    pub async fn list_vehicle_documents(&self, vehicle_id: Uuid) -> Result<Vec<VehicleDocument>, AppError> {
        let documents = sqlx::query_as::<_, VehicleDocument>(
            r#"
            SELECT * FROM vehicle_documents
            WHERE vehicle_id = $1 AND organization_id = $2 AND is_active
            ORDER BY date_issued DESC
            "#,
        )
        .bind(vehicle_id)
        .bind(self.db.organization_id())
        .fetch_all(self.db.pool())
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error listing vehicle documents: {}", e)))?;

        Ok(documents)
    }

    /// Baja lógica: el documento deja de listarse pero conserva sus archivos
    pub async fn deactivate_vehicle_document(&self, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query(
            "UPDATE vehicle_documents SET is_active = FALSE WHERE id = $1 AND organization_id = $2 AND is_active",
        )
        .bind(id)
        .bind(self.db.organization_id())
        .execute(self.db.pool())
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error deactivating vehicle document: {}", e)))?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Vehicle document not found".to_string()));
        }

        Ok(())
    }

    pub async fn add_vehicle_document_file(
        &self,
        document_id: Uuid,
        path: String,
    ) -> Result<DocumentFile, AppError> {
        let file = sqlx::query_as::<_, DocumentFile>(
            r#"
            INSERT INTO vehicle_document_files (id, organization_id, document_id, path, position, created_at)
            VALUES ($1, $2, $3, $4,
                    COALESCE((SELECT MAX(position) + 1 FROM vehicle_document_files WHERE document_id = $3), 0),
                    $5)
            RETURNING id, document_id, path, position
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(self.db.organization_id())
        .bind(document_id)
        .bind(path)
        .bind(Utc::now())
        .fetch_one(self.db.pool())
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error adding document file: {}", e)))?;

        Ok(file)
    }

    pub async fn list_vehicle_document_files(&self, document_id: Uuid) -> Result<Vec<DocumentFile>, AppError> {
        let files = sqlx::query_as::<_, DocumentFile>(
            r#"
            SELECT id, document_id, path, position FROM vehicle_document_files
            WHERE document_id = $1 AND organization_id = $2
            ORDER BY position
            "#,
        )
        .bind(document_id)
        .bind(self.db.organization_id())
        .fetch_all(self.db.pool())
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error listing document files: {}", e)))?;

        Ok(files)
    }

    // --- Documentos de usuario ---

    pub async fn create_user_document(
        &self,
        user_id: Uuid,
        document_type: String,
        title: String,
        date_issued: NaiveDate,
        date_expiry: Option<NaiveDate>,
    ) -> Result<UserDocument, AppError> {
        let document = sqlx::query_as::<_, UserDocument>(
            r#"
            INSERT INTO user_documents (id, organization_id, user_id, document_type,
                                        title, date_issued, date_expiry, is_active, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, TRUE, $8)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(self.db.organization_id())
        .bind(user_id)
        .bind(document_type)
        .bind(title)
        .bind(date_issued)
        .bind(date_expiry)
        .bind(Utc::now())
        .fetch_one(self.db.pool())
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error creating user document: {}", e)))?;

        Ok(document)
    }

    pub async fn find_user_document(&self, id: Uuid) -> Result<Option<UserDocument>, AppError> {
        let document = sqlx::query_as::<_, UserDocument>(
            "SELECT * FROM user_documents WHERE id = $1 AND organization_id = $2 AND is_active",
        )
        .bind(id)
        .bind(self.db.organization_id())
        .fetch_optional(self.db.pool())
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error finding user document: {}", e)))?;

        Ok(document)
    }

    pub async fn list_user_documents(&self, user_id: Uuid) -> Result<Vec<UserDocument>, AppError> {
        let documents = sqlx::query_as::<_, UserDocument>(
            r#"
            SELECT * FROM user_documents
            WHERE user_id = $1 AND organization_id = $2 AND is_active
            ORDER BY date_issued DESC
            "#,
        )
        .bind(user_id)
        .bind(self.db.organization_id())
        .fetch_all(self.db.pool())
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error listing user documents: {}", e)))?;

        Ok(documents)
    }

    pub async fn deactivate_user_document(&self, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query(
            "UPDATE user_documents SET is_active = FALSE WHERE id = $1 AND organization_id = $2 AND is_active",
        )
        .bind(id)
        .bind(self.db.organization_id())
        .execute(self.db.pool())
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error deactivating user document: {}", e)))?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("User document not found".to_string()));
        }

        Ok(())
    }

    pub async fn add_user_document_file(
        &self,
        document_id: Uuid,
        path: String,
    ) -> Result<DocumentFile, AppError> {
        let file = sqlx::query_as::<_, DocumentFile>(
            r#"
            INSERT INTO user_document_files (id, organization_id, document_id, path, position, created_at)
            VALUES ($1, $2, $3, $4,
                    COALESCE((SELECT MAX(position) + 1 FROM user_document_files WHERE document_id = $3), 0),
                    $5)
            RETURNING id, document_id, path, position
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(self.db.organization_id())
        .bind(document_id)
        .bind(path)
        .bind(Utc::now())
        .fetch_one(self.db.pool())
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error adding document file: {}", e)))?;

        Ok(file)
    }

    pub async fn list_user_document_files(&self, document_id: Uuid) -> Result<Vec<DocumentFile>, AppError> {
        let files = sqlx::query_as::<_, DocumentFile>(
            r#"
            SELECT id, document_id, path, position FROM user_document_files
            WHERE document_id = $1 AND organization_id = $2
            ORDER BY position
            "#,
        )
        .bind(document_id)
        .bind(self.db.organization_id())
        .fetch_all(self.db.pool())
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error listing document files: {}", e)))?;

        Ok(files)
    }
}
