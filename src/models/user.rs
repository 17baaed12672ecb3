//! Modelo de User
//!
//! Usuarios de la organización (trabajadores, responsables y
//! administradores). Mapea exactamente a la tabla users.

use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Rol del usuario - mapea al ENUM user_role
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Type, PartialEq, Eq)]
#[sqlx(type_name = "user_role", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    Owner,
    Admin,
    Manager,
    TeamLead,
    Worker,
}

impl UserRole {
    /// Roles con permisos de administración sobre la organización
    pub fn is_admin(&self) -> bool {
        matches!(self, UserRole::Owner | UserRole::Admin)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Owner => "owner",
            UserRole::Admin => "admin",
            UserRole::Manager => "manager",
            UserRole::TeamLead => "team_lead",
            UserRole::Worker => "worker",
        }
    }

    pub fn from_str(value: &str) -> Option<Self> {
        match value {
            "owner" => Some(UserRole::Owner),
            "admin" => Some(UserRole::Admin),
            "manager" => Some(UserRole::Manager),
            "team_lead" => Some(UserRole::TeamLead),
            "worker" => Some(UserRole::Worker),
            _ => None,
        }
    }
}

/// User - mapea exactamente a la tabla users
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: Uuid,
    pub organization_id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    #[serde(skip_serializing)]
    pub password_hash: Option<String>,
    pub role: UserRole,
    pub team_id: Option<Uuid>,
    pub phone: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_round_trip() {
        for role in [
            UserRole::Owner,
            UserRole::Admin,
            UserRole::Manager,
            UserRole::TeamLead,
            UserRole::Worker,
        ] {
            assert_eq!(UserRole::from_str(role.as_str()), Some(role));
        }
        assert_eq!(UserRole::from_str("driver"), None);
    }

    #[test]
    fn test_full_name() {
        let user = User {
            id: Uuid::new_v4(),
            organization_id: Uuid::new_v4(),
            first_name: "Ana".to_string(),
            last_name: "García".to_string(),
            email: None,
            password_hash: None,
            role: UserRole::Worker,
            team_id: None,
            phone: None,
            created_at: Utc::now(),
        };
        assert_eq!(user.full_name(), "Ana García");
    }

    #[test]
    fn test_is_admin() {
        assert!(UserRole::Owner.is_admin());
        assert!(UserRole::Admin.is_admin());
        assert!(!UserRole::Worker.is_admin());
        assert!(!UserRole::TeamLead.is_admin());
    }
}
