//! Informes de sanciones
//!
//! Agregados de solo lectura sobre la tabla de sanciones, separando multas
//! de tráfico de cargos por daños mediante el campo origin. Los totales se
//! recalculan en cada consulta; no se almacena nada derivado. Incluye un
//! export CSV informativo de las filas del informe.

use crate::database::TenantDb;
use crate::utils::errors::AppError;
use rust_decimal::Decimal;
use serde::Serialize;
use uuid::Uuid;

/// Fila del informe por equipo
#[derive(Debug, sqlx::FromRow, Serialize)]
pub struct TeamPenaltyReport {
    pub team_id: Uuid,
    pub team_name: String,
    pub traffic_amount: Decimal,
    pub damage_amount: Decimal,
    pub total_amount: Decimal,
}

/// Fila del informe por usuario (conductor de la asignación activa)
#[derive(Debug, sqlx::FromRow, Serialize)]
pub struct UserPenaltyReport {
    pub user_id: Uuid,
    pub user_name: String,
    pub traffic_amount: Decimal,
    pub damage_amount: Decimal,
    pub total_amount: Decimal,
}

/// Fila del informe por mes (YYYY-MM)
#[derive(Debug, sqlx::FromRow, Serialize)]
pub struct MonthlyPenaltyReport {
    pub month: String,
    pub traffic_amount: Decimal,
    pub damage_amount: Decimal,
    pub total_amount: Decimal,
}

pub struct ReportService {
    db: TenantDb,
}

impl ReportService {
    pub fn new(db: TenantDb) -> Self {
        Self { db }
    }

    pub async fn penalties_by_team(&self) -> Result<Vec<TeamPenaltyReport>, AppError> {
        let rows = sqlx::query_as::<_, TeamPenaltyReport>(
            r#"
            SELECT t.id AS team_id,
                   t.name AS team_name,
                   COALESCE(SUM(p.amount) FILTER (WHERE p.origin = 'manual'), 0) AS traffic_amount,
                   COALESCE(SUM(p.amount) FILTER (WHERE p.origin <> 'manual'), 0) AS damage_amount,
                   COALESCE(SUM(p.amount), 0) AS total_amount
            FROM penalties p
            JOIN teams t ON t.id = p.team_id
            WHERE p.organization_id = $1
            GROUP BY t.id, t.name
            ORDER BY total_amount DESC
            "#,
        )
        .bind(self.db.organization_id())
        .fetch_all(self.db.pool())
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error building team report: {}", e)))?;

        Ok(rows)
    }

    /// Sanciones por usuario: las imputadas directamente y las del vehículo
    /// cuya asignación activa conduce el usuario
    pub async fn penalties_by_user(&self) -> Result<Vec<UserPenaltyReport>, AppError> {
        let rows = sqlx::query_as::<_, UserPenaltyReport>(
            r#"
            SELECT u.id AS user_id,
                   u.first_name || ' ' || u.last_name AS user_name,
                   COALESCE(SUM(p.amount) FILTER (WHERE p.origin = 'manual'), 0) AS traffic_amount,
                   COALESCE(SUM(p.amount) FILTER (WHERE p.origin <> 'manual'), 0) AS damage_amount,
                   COALESCE(SUM(p.amount), 0) AS total_amount
            FROM penalties p
            JOIN users u ON u.id = COALESCE(
                p.user_id,
                (SELECT va.driver_id FROM vehicle_assignments va
                  WHERE va.vehicle_id = p.vehicle_id AND va.end_date IS NULL)
            )
            WHERE p.organization_id = $1
            GROUP BY u.id, u.first_name, u.last_name
            ORDER BY total_amount DESC
            "#,
        )
        .bind(self.db.organization_id())
        .fetch_all(self.db.pool())
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error building user report: {}", e)))?;

        Ok(rows)
    }

    pub async fn penalties_by_month(&self) -> Result<Vec<MonthlyPenaltyReport>, AppError> {
        let rows = sqlx::query_as::<_, MonthlyPenaltyReport>(
            r#"
            SELECT to_char(p.date, 'YYYY-MM') AS month,
                   COALESCE(SUM(p.amount) FILTER (WHERE p.origin = 'manual'), 0) AS traffic_amount,
                   COALESCE(SUM(p.amount) FILTER (WHERE p.origin <> 'manual'), 0) AS damage_amount,
                   COALESCE(SUM(p.amount), 0) AS total_amount
            FROM penalties p
            WHERE p.organization_id = $1
            GROUP BY to_char(p.date, 'YYYY-MM')
            ORDER BY month DESC
            "#,
        )
        .bind(self.db.organization_id())
        .fetch_all(self.db.pool())
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error building monthly report: {}", e)))?;

        Ok(rows)
    }
}

/// Serializa filas de informe a CSV (export informativo)
pub fn rows_to_csv<T: Serialize>(rows: &[T]) -> Result<String, AppError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for row in rows {
        writer
            .serialize(row)
            .map_err(|e| AppError::Internal(format!("Error serializing CSV row: {}", e)))?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| AppError::Internal(format!("Error flushing CSV: {}", e)))?;
    String::from_utf8(bytes).map_err(|e| AppError::Internal(format!("Invalid CSV output: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_to_csv_includes_header_and_values() {
        let rows = vec![MonthlyPenaltyReport {
            month: "2026-08".to_string(),
            traffic_amount: Decimal::from(150),
            damage_amount: Decimal::from(300),
            total_amount: Decimal::from(450),
        }];

        let csv = rows_to_csv(&rows).unwrap();
        assert!(csv.starts_with("month,traffic_amount,damage_amount,total_amount"));
        assert!(csv.contains("2026-08"));
        assert!(csv.contains("450"));
    }

    #[test]
    fn test_rows_to_csv_empty() {
        let rows: Vec<MonthlyPenaltyReport> = vec![];
        let csv = rows_to_csv(&rows).unwrap();
        assert!(csv.is_empty());
    }
}
