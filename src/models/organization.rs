//! Modelo de Organization
//!
//! La organización es la frontera multi-tenant: todas las demás tablas
//! llevan `organization_id`.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Organization - mapea exactamente a la tabla organizations
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Organization {
    pub id: Uuid,
    pub name: String,
    pub admin_email: String,
    #[serde(skip_serializing)]
    pub admin_password_hash: String,
    pub created_at: DateTime<Utc>,
}
