use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use validator::Validate;

use crate::models::material::{
    FaultAttribution, Material, MaterialType, ReturnOutcome,
};

// Request para dar de alta un material
#[derive(Debug, Deserialize, Validate)]
pub struct CreateMaterialRequest {
    #[validate(length(min = 1, max = 200))]
    pub name: String,

    pub material_type: MaterialType,

    #[validate(length(min = 1, max = 20))]
    pub unit: String,

    pub unit_price: Option<Decimal>,

    #[validate(range(min = 0))]
    pub total_quantity: i32,
}

// Request para actualizar los datos descriptivos de un material
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateMaterialRequest {
    #[validate(length(min = 1, max = 200))]
    pub name: Option<String>,

    #[validate(length(min = 1, max = 20))]
    pub unit: Option<String>,

    pub unit_price: Option<Decimal>,
}

// Request de reposición de stock
#[derive(Debug, Deserialize, Validate)]
pub struct RestockRequest {
    #[validate(range(min = 1))]
    pub quantity: i32,
}

// Request de entrega de material a un equipo
#[derive(Debug, Deserialize, Validate)]
pub struct IssueMaterialRequest {
    pub team_id: Uuid,

    #[validate(range(min = 1))]
    pub quantity: i32,

    pub date: NaiveDate,
    pub notes: Option<String>,
}

// Request de confirmación de devolución
#[derive(Debug, Deserialize)]
pub struct ConfirmReturnRequest {
    pub outcome: ReturnOutcome,
    // worker por defecto: la rotura imputable genera sanción
    pub fault: Option<FaultAttribution>,
}

// Response de material con disponibilidad derivada
#[derive(Debug, Serialize)]
pub struct MaterialResponse {
    pub id: Uuid,
    pub organization_id: Uuid,
    pub name: String,
    pub material_type: MaterialType,
    pub unit: String,
    pub unit_price: Option<Decimal>,
    pub total_quantity: i32,
    pub assigned_quantity: i32,
    pub available: i32,
    pub created_at: DateTime<Utc>,
}

impl From<Material> for MaterialResponse {
    fn from(material: Material) -> Self {
        let available = material.available();
        Self {
            id: material.id,
            organization_id: material.organization_id,
            name: material.name,
            material_type: material.material_type,
            unit: material.unit,
            unit_price: material.unit_price,
            total_quantity: material.total_quantity,
            assigned_quantity: material.assigned_quantity,
            available,
            created_at: material.created_at,
        }
    }
}
