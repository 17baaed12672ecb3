mod config;
mod state;
mod database;
mod storage;
mod services;
mod utils;
mod models;
mod middleware;
mod controllers;
mod repositories;
mod routes;
mod dto;

use anyhow::Result;
use axum::{
    middleware::{from_fn, from_fn_with_state},
    response::Json,
    routing::get,
    Router,
};
use std::net::SocketAddr;
use tokio::signal;
use tracing::{error, info};
use dotenvy::dotenv;
use serde_json::json;

use config::environment::EnvironmentConfig;
use database::DatabaseConnection;
use middleware::auth::{admin_only_middleware, auth_middleware};
use middleware::cors::cors_middleware;
use state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    info!("🚛 Fleet Back-Office API");
    info!("========================");

    // Inicializar base de datos
    let db_connection = match DatabaseConnection::new_default().await {
        Ok(conn) => conn,
        Err(e) => {
            error!("❌ Error conectando a la base de datos: {}", e);
            return Err(anyhow::anyhow!("Error de base de datos: {}", e));
        }
    };

    if let Err(e) = db_connection.run_migrations().await {
        error!("❌ Error ejecutando migraciones: {}", e);
        return Err(anyhow::anyhow!("Error de migraciones: {}", e));
    }
    info!("✅ Migraciones aplicadas");

    let config = EnvironmentConfig::default();
    let app_state = AppState::new(db_connection.pool().clone(), config.clone());

    // Rutas protegidas por JWT; la gestión de usuarios requiere admin
    let protected = Router::new()
        .nest("/api/organization", routes::auth_routes::create_organization_router())
        .nest("/api/vehicle", routes::vehicle_routes::create_vehicle_router())
        .nest("/api/team", routes::team_routes::create_team_router())
        .nest(
            "/api/user",
            routes::user_routes::create_user_router()
                .route_layer(from_fn(admin_only_middleware)),
        )
        .nest("/api/assignment", routes::assignment_routes::create_assignment_router())
        .nest("/api/material", routes::material_routes::create_material_router())
        .nest("/api/penalty", routes::penalty_routes::create_penalty_router())
        .nest("/api/document", routes::document_routes::create_document_router())
        .nest("/api/expense", routes::expense_routes::create_expense_router())
        .nest("/api/maintenance", routes::maintenance_routes::create_maintenance_router())
        .nest("/api/report", routes::report_routes::create_report_router())
        .nest("/api/file", routes::file_routes::create_file_router())
        .layer(from_fn_with_state(app_state.clone(), auth_middleware));

    let app = Router::new()
        .route("/health", get(health_endpoint))
        .nest("/api/auth", routes::auth_routes::create_auth_router())
        .merge(protected)
        .layer(cors_middleware(&config.cors_origins))
        .with_state(app_state);

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET  /health - Health check");
    info!("🔐 Auth:");
    info!("   POST /api/auth/register - Registrar organización");
    info!("   POST /api/auth/login - Login");
    info!("🚗 Vehicle:");
    info!("   POST /api/vehicle - Crear vehículo");
    info!("   GET  /api/vehicle - Listar vehículos");
    info!("   GET  /api/vehicle/:id - Obtener vehículo");
    info!("   PUT  /api/vehicle/:id - Actualizar vehículo");
    info!("   DELETE /api/vehicle/:id - Eliminar vehículo");
    info!("   POST /api/vehicle/:id/photos - Adjuntar foto");
    info!("   GET  /api/vehicle/:id/assignments - Historial de asignaciones");
    info!("👥 Team / User:");
    info!("   CRUD /api/team, /api/user");
    info!("🔄 Assignment:");
    info!("   POST /api/assignment - Asignar vehículo a equipo");
    info!("   POST /api/assignment/:id/end - Finalizar asignación");
    info!("📦 Material:");
    info!("   CRUD /api/material");
    info!("   POST /api/material/:id/issue - Entregar material");
    info!("   POST /api/material/assignment/:id/mark-return - Marcar devolución");
    info!("   POST /api/material/assignment/:id/confirm-return - Confirmar devolución");
    info!("💸 Penalty:");
    info!("   CRUD /api/penalty");
    info!("   POST /api/penalty/:id/pay - Pagar con recibo");
    info!("📄 Document:");
    info!("   CRUD /api/document/vehicle, /api/document/user");
    info!("🧾 Expense / Maintenance:");
    info!("   CRUD /api/expense, /api/maintenance");
    info!("📊 Report:");
    info!("   GET  /api/report/penalties/by-team");
    info!("   GET  /api/report/penalties/by-user");
    info!("   GET  /api/report/penalties/by-month");
    info!("🗂️ Files:");
    info!("   POST /api/file/upload/:category - Subir archivo");
    info!("   GET  /api/file/download/*path - Descargar archivo");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| {
            error!("❌ Error del servidor: {}", e);
            e
        })?;

    info!("👋 Servidor terminado");
    Ok(())
}

/// Health check simple
async fn health_endpoint() -> Json<serde_json::Value> {
    Json(json!({
        "service": "fleet-backoffice",
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Señal Ctrl+C recibida, apagando servidor...");
        },
        _ = terminate => {
            info!("🛑 Señal de terminación recibida, apagando servidor...");
        },
    }
}
