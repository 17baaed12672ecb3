use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use validator::Validate;

use crate::models::penalty::{Penalty, PenaltyOrigin, PenaltyStatus};

// Request para registrar una multa manual
#[derive(Debug, Deserialize, Validate)]
pub struct CreatePenaltyRequest {
    pub vehicle_id: Option<Uuid>,
    pub team_id: Option<Uuid>,
    pub user_id: Option<Uuid>,
    pub date: NaiveDate,
    pub amount: Decimal,

    #[validate(length(min = 1, max = 1000))]
    pub description: String,
}

// Request de pago: el recibo se sube antes al almacén de archivos
#[derive(Debug, Deserialize)]
pub struct PayPenaltyRequest {
    #[serde(default)]
    pub receipt_path: String,
    pub payment_notes: Option<String>,
}

// Filtros de listado
#[derive(Debug, Deserialize)]
pub struct PenaltyFilters {
    pub status: Option<PenaltyStatus>,
    pub origin: Option<PenaltyOrigin>,
}

// Response de sanción con sus recibos acumulados
#[derive(Debug, Serialize)]
pub struct PenaltyResponse {
    pub id: Uuid,
    pub organization_id: Uuid,
    pub vehicle_id: Option<Uuid>,
    pub team_id: Option<Uuid>,
    pub user_id: Option<Uuid>,
    pub date: NaiveDate,
    pub amount: Decimal,
    pub status: PenaltyStatus,
    pub origin: PenaltyOrigin,
    pub description: String,
    pub payment_notes: Option<String>,
    pub receipts: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl PenaltyResponse {
    pub fn from_penalty(penalty: Penalty, receipts: Vec<String>) -> Self {
        Self {
            id: penalty.id,
            organization_id: penalty.organization_id,
            vehicle_id: penalty.vehicle_id,
            team_id: penalty.team_id,
            user_id: penalty.user_id,
            date: penalty.date,
            amount: penalty.amount,
            status: penalty.status,
            origin: penalty.origin,
            description: penalty.description,
            payment_notes: penalty.payment_notes,
            receipts,
            created_at: penalty.created_at,
        }
    }
}
