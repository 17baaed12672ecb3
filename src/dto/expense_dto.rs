use serde::Deserialize;
use uuid::Uuid;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use validator::Validate;

// Request para registrar un gasto manual de vehículo
#[derive(Debug, Deserialize, Validate)]
pub struct CreateExpenseRequest {
    pub vehicle_id: Uuid,

    #[validate(length(min = 1, max = 100))]
    pub category: String,

    pub date: NaiveDate,
    pub amount: Decimal,
    pub description: Option<String>,
    pub receipt_path: Option<String>,
}

// Request para actualizar un gasto manual
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateExpenseRequest {
    #[validate(length(min = 1, max = 100))]
    pub category: Option<String>,

    pub date: Option<NaiveDate>,
    pub amount: Option<Decimal>,
    pub description: Option<String>,
    pub receipt_path: Option<String>,
}
