use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use crate::models::user::UserRole;

// Request para crear un usuario de la organización
#[derive(Debug, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[validate(length(min = 1, max = 100))]
    pub first_name: String,

    #[validate(length(min = 1, max = 100))]
    pub last_name: String,

    #[validate(email)]
    pub email: Option<String>,

    // Solo los usuarios con email y contraseña pueden hacer login
    #[validate(length(min = 6, max = 100))]
    pub password: Option<String>,

    pub role: UserRole,
    pub team_id: Option<Uuid>,
    pub phone: Option<String>,
}

// Request para actualizar un usuario existente
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateUserRequest {
    #[validate(length(min = 1, max = 100))]
    pub first_name: Option<String>,

    #[validate(length(min = 1, max = 100))]
    pub last_name: Option<String>,

    pub role: Option<UserRole>,
    pub team_id: Option<Uuid>,
    pub phone: Option<String>,
}
