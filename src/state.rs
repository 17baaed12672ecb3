//! Shared application state
//!
//! Este módulo define el estado compartido de la aplicación que se pasa
//! a través del router de Axum.

use sqlx::PgPool;
use std::sync::Arc;
use uuid::Uuid;

use crate::config::environment::EnvironmentConfig;
use crate::database::TenantDb;
use crate::services::jwt_service::JwtService;
use crate::storage::BlobStore;

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub config: EnvironmentConfig,
    pub blob_store: BlobStore,
    pub jwt: Arc<JwtService>,
}

impl AppState {
    pub fn new(pool: PgPool, config: EnvironmentConfig) -> Self {
        let blob_store = BlobStore::new(config.storage_root.clone());
        Self {
            pool,
            config,
            blob_store,
            jwt: Arc::new(JwtService::new()),
        }
    }

    /// Handle de base de datos acotado a la organización autenticada
    pub fn tenant_db(&self, organization_id: Uuid) -> TenantDb {
        TenantDb::new(self.pool.clone(), organization_id)
    }
}
