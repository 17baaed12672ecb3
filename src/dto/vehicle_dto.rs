use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use validator::Validate;

use crate::models::vehicle::{Vehicle, VehicleStatus};

// Request para crear un vehículo
#[derive(Debug, Deserialize, Validate)]
pub struct CreateVehicleRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: String,

    pub license_plate: String,
    pub vin: String,

    #[serde(default)]
    pub is_rental: bool,
    pub rental_start: Option<NaiveDate>,
    pub rental_end: Option<NaiveDate>,
    pub monthly_price: Option<Decimal>,
}

// Request para actualizar un vehículo
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateVehicleRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: Option<String>,

    pub license_plate: Option<String>,
    pub vin: Option<String>,
    pub status: Option<VehicleStatus>,
    pub is_rental: Option<bool>,
    pub rental_start: Option<NaiveDate>,
    pub rental_end: Option<NaiveDate>,
    pub monthly_price: Option<Decimal>,
}

// Request para adjuntar una foto ya subida al almacén
#[derive(Debug, Deserialize)]
pub struct AttachPhotoRequest {
    pub path: String,
}

// Response de vehículo con su lista ordenada de fotos
#[derive(Debug, Serialize)]
pub struct VehicleResponse {
    pub id: Uuid,
    pub organization_id: Uuid,
    pub name: String,
    pub license_plate: String,
    pub vin: String,
    pub status: VehicleStatus,
    pub is_rental: bool,
    pub rental_start: Option<NaiveDate>,
    pub rental_end: Option<NaiveDate>,
    pub monthly_price: Option<Decimal>,
    pub photos: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl VehicleResponse {
    pub fn from_vehicle(vehicle: Vehicle, photos: Vec<String>) -> Self {
        Self {
            id: vehicle.id,
            organization_id: vehicle.organization_id,
            name: vehicle.name,
            license_plate: vehicle.license_plate,
            vin: vehicle.vin,
            status: vehicle.status,
            is_rental: vehicle.is_rental,
            rental_start: vehicle.rental_start,
            rental_end: vehicle.rental_end,
            monthly_price: vehicle.monthly_price,
            photos,
            created_at: vehicle.created_at,
        }
    }
}
