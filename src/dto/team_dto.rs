use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

// Request para crear un equipo
#[derive(Debug, Deserialize, Validate)]
pub struct CreateTeamRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: String,

    pub lead_user_id: Option<Uuid>,
}

// Request para actualizar un equipo. Para retirar al responsable existe
// DELETE /:id/lead.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateTeamRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: Option<String>,

    pub lead_user_id: Option<Uuid>,
}
