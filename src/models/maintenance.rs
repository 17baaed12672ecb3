//! Modelo de Maintenance
//!
//! Inspecciones y reparaciones de vehículos. Crear un mantenimiento genera
//! su gasto enlazado en la misma transacción.

use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;
use rust_decimal::Decimal;

/// Tipo de mantenimiento - mapea al ENUM maintenance_type
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Type, PartialEq, Eq)]
#[sqlx(type_name = "maintenance_type", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum MaintenanceType {
    Inspection,
    Repair,
}

/// Maintenance - mapea exactamente a la tabla maintenance_records
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Maintenance {
    pub id: Uuid,
    pub organization_id: Uuid,
    pub vehicle_id: Uuid,
    pub date: NaiveDate,
    pub maintenance_type: MaintenanceType,
    pub description: Option<String>,
    pub cost: Decimal,
    pub receipt_path: Option<String>,
    pub created_at: DateTime<Utc>,
}
