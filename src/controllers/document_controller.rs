use crate::database::TenantDb;
use crate::dto::common::ApiResponse;
use crate::dto::document_dto::{AttachFileRequest, CreateDocumentRequest, DocumentResponse};
use crate::repositories::document_repository::DocumentRepository;
use crate::repositories::user_repository::UserRepository;
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::storage::BlobStore;
use crate::utils::errors::AppError;
use chrono::Utc;
use uuid::Uuid;
use validator::Validate;

pub struct DocumentController {
    repository: DocumentRepository,
    vehicles: VehicleRepository,
    users: UserRepository,
}

impl DocumentController {
    pub fn new(db: TenantDb) -> Self {
        Self {
            repository: DocumentRepository::new(db.clone()),
            vehicles: VehicleRepository::new(db.clone()),
            users: UserRepository::new(db),
        }
    }

    // --- Documentos de vehículo ---

    pub async fn create_vehicle_document(
        &self,
        vehicle_id: Uuid,
        request: CreateDocumentRequest,
    ) -> Result<ApiResponse<DocumentResponse>, AppError> {
        request.validate()?;

        self.vehicles
            .find_by_id(vehicle_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Vehículo no encontrado".to_string()))?;

        let document = self
            .repository
            .create_vehicle_document(
                vehicle_id,
                request.document_type,
                request.title,
                request.date_issued,
                request.date_expiry,
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            DocumentResponse::from_vehicle_document(document, Vec::new(), Utc::now().date_naive()),
            "Documento creado exitosamente".to_string(),
        ))
    }

    pub async fn get_vehicle_document(&self, id: Uuid) -> Result<DocumentResponse, AppError> {
        let document = self
            .repository
            .find_vehicle_document(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Documento no encontrado".to_string()))?;

        let files = self
            .repository
            .list_vehicle_document_files(id)
            .await?
            .into_iter()
            .map(|f| f.path)
            .collect();

        Ok(DocumentResponse::from_vehicle_document(
            document,
            files,
            Utc::now().date_naive(),
        ))
    }

    pub async fn list_vehicle_documents(&self, vehicle_id: Uuid) -> Result<Vec<DocumentResponse>, AppError> {
        let today = Utc::now().date_naive();
        let documents = self.repository.list_vehicle_documents(vehicle_id).await?;

        let mut response = Vec::with_capacity(documents.len());
        for document in documents {
            let files = self
                .repository
                .list_vehicle_document_files(document.id)
                .await?
                .into_iter()
                .map(|f| f.path)
                .collect();
            response.push(DocumentResponse::from_vehicle_document(document, files, today));
        }

        Ok(response)
    }

    pub async fn attach_vehicle_document_file(
        &self,
        blob_store: &BlobStore,
        document_id: Uuid,
        request: AttachFileRequest,
    ) -> Result<Vec<String>, AppError> {
        self.repository
            .find_vehicle_document(document_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Documento no encontrado".to_string()))?;

        if !blob_store.exists(&request.path).await? {
            return Err(AppError::BadRequest(format!(
                "El archivo '{}' no existe en el almacén",
                request.path
            )));
        }

        self.repository
            .add_vehicle_document_file(document_id, request.path)
            .await?;

        let files = self
            .repository
            .list_vehicle_document_files(document_id)
            .await?
            .into_iter()
            .map(|f| f.path)
            .collect();

        Ok(files)
    }

    pub async fn deactivate_vehicle_document(&self, id: Uuid) -> Result<(), AppError> {
        self.repository.deactivate_vehicle_document(id).await
    }

    // --- Documentos de usuario ---

    pub async fn create_user_document(
        &self,
        user_id: Uuid,
        request: CreateDocumentRequest,
    ) -> Result<ApiResponse<DocumentResponse>, AppError> {
        request.validate()?;

        self.users
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Usuario no encontrado".to_string()))?;

        let document = self
            .repository
            .create_user_document(
                user_id,
                request.document_type,
                request.title,
                request.date_issued,
                request.date_expiry,
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            DocumentResponse::from_user_document(document, Vec::new(), Utc::now().date_naive()),
            "Documento creado exitosamente".to_string(),
        ))
    }

    pub async fn get_user_document(&self, id: Uuid) -> Result<DocumentResponse, AppError> {
        let document = self
            .repository
            .find_user_document(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Documento no encontrado".to_string()))?;

        let files = self
            .repository
            .list_user_document_files(id)
            .await?
            .into_iter()
            .map(|f| f.path)
            .collect();

        Ok(DocumentResponse::from_user_document(
            document,
            files,
            Utc::now().date_naive(),
        ))
    }

    pub async fn list_user_documents(&self, user_id: Uuid) -> Result<Vec<DocumentResponse>, AppError> {
        let today = Utc::now().date_naive();
        let documents = self.repository.list_user_documents(user_id).await?;

        let mut response = Vec::with_capacity(documents.len());
        for document in documents {
            let files = self
                .repository
                .list_user_document_files(document.id)
                .await?
                .into_iter()
                .map(|f| f.path)
                .collect();
            response.push(DocumentResponse::from_user_document(document, files, today));
        }

        Ok(response)
    }

    pub async fn attach_user_document_file(
        &self,
        blob_store: &BlobStore,
        document_id: Uuid,
        request: AttachFileRequest,
    ) -> Result<Vec<String>, AppError> {
        self.repository
            .find_user_document(document_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Documento no encontrado".to_string()))?;

        if !blob_store.exists(&request.path).await? {
            return Err(AppError::BadRequest(format!(
                "El archivo '{}' no existe en el almacén",
                request.path
            )));
        }

        self.repository
            .add_user_document_file(document_id, request.path)
            .await?;

        let files = self
            .repository
            .list_user_document_files(document_id)
            .await?
            .into_iter()
            .map(|f| f.path)
            .collect();

        Ok(files)
    }

    pub async fn deactivate_user_document(&self, id: Uuid) -> Result<(), AppError> {
        self.repository.deactivate_user_document(id).await
    }
}
