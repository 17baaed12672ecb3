use serde::Deserialize;
use uuid::Uuid;
use chrono::NaiveDate;

// Request para asignar un vehículo a un equipo
#[derive(Debug, Deserialize)]
pub struct AssignVehicleRequest {
    pub vehicle_id: Uuid,
    pub team_id: Uuid,
    pub driver_id: Option<Uuid>,
    pub start_date: NaiveDate,
}
