use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use validator::Validate;

use crate::models::expense::CarExpense;
use crate::models::maintenance::{Maintenance, MaintenanceType};

// Request para registrar un mantenimiento; genera su gasto enlazado
#[derive(Debug, Deserialize, Validate)]
pub struct CreateMaintenanceRequest {
    pub vehicle_id: Uuid,
    pub date: NaiveDate,
    pub maintenance_type: MaintenanceType,
    pub description: Option<String>,
    pub cost: Decimal,
    pub receipt_path: Option<String>,
}

// Response con el mantenimiento y el gasto que creó
#[derive(Debug, Serialize)]
pub struct MaintenanceResponse {
    pub maintenance: Maintenance,
    pub expense: CarExpense,
}
