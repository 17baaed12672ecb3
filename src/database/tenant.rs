//! Acceso a datos con alcance de organización
//!
//! Todas las tablas llevan `organization_id`. En lugar de confiar en que cada
//! query recuerde el filtro, los repositorios se construyen sobre este handle
//! y toman el id de organización de aquí.

use sqlx::PgPool;
use uuid::Uuid;

/// Handle de base de datos ligado a una organización concreta.
///
/// Los repositorios reciben un `TenantDb` y nunca un `PgPool` directo, de modo
/// que todas las consultas quedan acotadas al tenant autenticado.
#[derive(Debug, Clone)]
pub struct TenantDb {
    pool: PgPool,
    organization_id: Uuid,
}

impl TenantDb {
    pub fn new(pool: PgPool, organization_id: Uuid) -> Self {
        Self { pool, organization_id }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    pub fn organization_id(&self) -> Uuid {
        self.organization_id
    }
}
