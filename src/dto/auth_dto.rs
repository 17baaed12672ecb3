use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, Utc};
use validator::Validate;

use crate::models::user::{User, UserRole};

// Request para registrar una organización con su usuario owner
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterOrganizationRequest {
    #[validate(length(min = 2, max = 200))]
    pub organization_name: String,

    #[validate(length(min = 2, max = 100))]
    pub admin_first_name: String,

    #[validate(length(min = 2, max = 100))]
    pub admin_last_name: String,

    #[validate(email)]
    pub admin_email: String,

    #[validate(length(min = 6, max = 100))]
    pub admin_password: String,
}

// Request de login
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email)]
    pub email: String,

    #[validate(length(min = 1))]
    pub password: String,
}

// Response de usuario autenticado (sin hash)
#[derive(Debug, Serialize)]
pub struct AuthUserResponse {
    pub id: Uuid,
    pub organization_id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
}

impl From<User> for AuthUserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            organization_id: user.organization_id,
            first_name: user.first_name,
            last_name: user.last_name,
            email: user.email,
            role: user.role,
            created_at: user.created_at,
        }
    }
}

// Response de login
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: AuthUserResponse,
}
