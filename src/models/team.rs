//! Modelo de Team
//!
//! Equipos de trabajo de la organización. Un equipo puede tener un
//! responsable (lead) que referencia a un User.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Team - mapea exactamente a la tabla teams
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Team {
    pub id: Uuid,
    pub organization_id: Uuid,
    pub name: String,
    pub lead_user_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}
