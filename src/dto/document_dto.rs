use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, NaiveDate, Utc};
use validator::Validate;

use crate::models::document::{document_status, DocumentStatus, UserDocument, VehicleDocument};

// Request para crear un documento (de vehículo o de usuario)
#[derive(Debug, Deserialize, Validate)]
pub struct CreateDocumentRequest {
    #[validate(length(min = 1, max = 100))]
    pub document_type: String,

    #[validate(length(min = 1, max = 200))]
    pub title: String,

    pub date_issued: NaiveDate,
    pub date_expiry: Option<NaiveDate>,
}

// Request para adjuntar un archivo ya subido al almacén
#[derive(Debug, Deserialize)]
pub struct AttachFileRequest {
    pub path: String,
}

// Response de documento con estado derivado y archivos adjuntos
#[derive(Debug, Serialize)]
pub struct DocumentResponse {
    pub id: Uuid,
    pub organization_id: Uuid,
    pub owner_id: Uuid,
    pub document_type: String,
    pub title: String,
    pub date_issued: NaiveDate,
    pub date_expiry: Option<NaiveDate>,
    pub status: DocumentStatus,
    pub files: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl DocumentResponse {
    pub fn from_vehicle_document(
        document: VehicleDocument,
        files: Vec<String>,
        today: NaiveDate,
    ) -> Self {
        Self {
            id: document.id,
            organization_id: document.organization_id,
            owner_id: document.vehicle_id,
            document_type: document.document_type,
            title: document.title,
            date_issued: document.date_issued,
            date_expiry: document.date_expiry,
            status: document_status(document.date_expiry, today),
            files,
            created_at: document.created_at,
        }
    }

    pub fn from_user_document(document: UserDocument, files: Vec<String>, today: NaiveDate) -> Self {
        Self {
            id: document.id,
            organization_id: document.organization_id,
            owner_id: document.user_id,
            document_type: document.document_type,
            title: document.title,
            date_issued: document.date_issued,
            date_expiry: document.date_expiry,
            status: document_status(document.date_expiry, today),
            files,
            created_at: document.created_at,
        }
    }
}
