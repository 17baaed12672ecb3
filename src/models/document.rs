//! Modelos de documentos con caducidad
//!
//! Documentos de vehículo (ITV, seguro, permiso de circulación...) y de
//! usuario (carnet, certificados). El estado valid/expiring/expired es una
//! derivación pura de la fecha de caducidad y la fecha actual; nunca se
//! persiste.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use chrono::{DateTime, Duration, NaiveDate, Utc};
use uuid::Uuid;

/// Ventana de preaviso de caducidad
pub const EXPIRY_WARNING_DAYS: i64 = 30;

/// Estado derivado de un documento - no se almacena
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DocumentStatus {
    Valid,
    Expiring,
    Expired,
}

/// Clasificar un documento según su fecha de caducidad.
///
/// expired si caducó antes de hoy; expiring si caduca dentro de la ventana
/// de preaviso; valid en el resto de casos (incluida caducidad nula).
pub fn document_status(date_expiry: Option<NaiveDate>, today: NaiveDate) -> DocumentStatus {
    match date_expiry {
        None => DocumentStatus::Valid,
        Some(expiry) => {
            if expiry < today {
                DocumentStatus::Expired
            } else if expiry <= today + Duration::days(EXPIRY_WARNING_DAYS) {
                DocumentStatus::Expiring
            } else {
                DocumentStatus::Valid
            }
        }
    }
}

/// VehicleDocument - mapea exactamente a la tabla vehicle_documents
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct VehicleDocument {
    pub id: Uuid,
    pub organization_id: Uuid,
    pub vehicle_id: Uuid,
    pub document_type: String,
    pub title: String,
    pub date_issued: NaiveDate,
    pub date_expiry: Option<NaiveDate>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

/// UserDocument - mapea exactamente a la tabla user_documents
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct UserDocument {
    pub id: Uuid,
    pub organization_id: Uuid,
    pub user_id: Uuid,
    pub document_type: String,
    pub title: String,
    pub date_issued: NaiveDate,
    pub date_expiry: Option<NaiveDate>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_null_expiry_is_valid() {
        assert_eq!(document_status(None, date(2026, 8, 7)), DocumentStatus::Valid);
    }

    #[test]
    fn test_expired_before_today() {
        let today = date(2026, 8, 7);
        assert_eq!(
            document_status(Some(date(2026, 8, 6)), today),
            DocumentStatus::Expired
        );
    }

    #[test]
    fn test_expiring_window_boundaries() {
        let today = date(2026, 8, 7);
        // Caduca hoy: dentro de la ventana
        assert_eq!(
            document_status(Some(today), today),
            DocumentStatus::Expiring
        );
        // Último día de la ventana de 30 días
        assert_eq!(
            document_status(Some(date(2026, 9, 6)), today),
            DocumentStatus::Expiring
        );
        // Un día más allá de la ventana
        assert_eq!(
            document_status(Some(date(2026, 9, 7)), today),
            DocumentStatus::Valid
        );
    }
}
