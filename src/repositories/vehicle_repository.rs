use crate::database::TenantDb;
use crate::models::vehicle::{Vehicle, VehicleStatus};
use crate::utils::errors::{has_dependents_error, AppError};
use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

/// Foto de vehículo (lista ordenada de rutas de blobs)
#[derive(Debug, sqlx::FromRow, serde::Serialize)]
pub struct VehiclePhoto {
    pub id: Uuid,
    pub vehicle_id: Uuid,
    pub path: String,
    pub position: i32,
}

pub struct VehicleRepository {
    db: TenantDb,
}

impl VehicleRepository {
    pub fn new(db: TenantDb) -> Self {
        Self { db }
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn create(
        &self,
        name: String,
        license_plate: String,
        vin: String,
        is_rental: bool,
        rental_start: Option<NaiveDate>,
        rental_end: Option<NaiveDate>,
        monthly_price: Option<Decimal>,
    ) -> Result<Vehicle, AppError> {
        let vehicle = sqlx::query_as::<_, Vehicle>(
            r#"
            INSERT INTO vehicles (id, organization_id, name, license_plate, vin, status,
                                  is_rental, rental_start, rental_end, monthly_price, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(self.db.organization_id())
        .bind(name)
        .bind(license_plate)
        .bind(vin)
        .bind(VehicleStatus::Active)
        .bind(is_rental)
        .bind(rental_start)
        .bind(rental_end)
        .bind(monthly_price)
        .bind(Utc::now())
        .fetch_one(self.db.pool())
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error creating vehicle: {}", e)))?;

        Ok(vehicle)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Vehicle>, AppError> {
        let vehicle = sqlx::query_as::<_, Vehicle>(
            "SELECT * FROM vehicles WHERE id = $1 AND organization_id = $2",
        )
        .bind(id)
        .bind(self.db.organization_id())
        .fetch_optional(self.db.pool())
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error finding vehicle: {}", e)))?;

        Ok(vehicle)
    }

    pub async fn list(&self) -> Result<Vec<Vehicle>, AppError> {
        let vehicles = sqlx::query_as::<_, Vehicle>(
            "SELECT * FROM vehicles WHERE organization_id = $1 ORDER BY created_at DESC",
        )
        .bind(self.db.organization_id())
        .fetch_all(self.db.pool())
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error listing vehicles: {}", e)))?;

        Ok(vehicles)
    }

    pub async fn license_plate_exists(&self, license_plate: &str) -> Result<bool, AppError> {
        let result: (bool,) = sqlx::query_as(
            "SELECT EXISTS(SELECT 1 FROM vehicles WHERE license_plate = $1 AND organization_id = $2)",
        )
        .bind(license_plate)
        .bind(self.db.organization_id())
        .fetch_one(self.db.pool())
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error checking license plate: {}", e)))?;

        Ok(result.0)
    }

    pub async fn vin_exists(&self, vin: &str) -> Result<bool, AppError> {
        let result: (bool,) = sqlx::query_as(
            "SELECT EXISTS(SELECT 1 FROM vehicles WHERE vin = $1 AND organization_id = $2)",
        )
        .bind(vin)
        .bind(self.db.organization_id())
        .fetch_one(self.db.pool())
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error checking vin: {}", e)))?;

        Ok(result.0)
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn update(
        &self,
        id: Uuid,
        name: Option<String>,
        license_plate: Option<String>,
        vin: Option<String>,
        status: Option<VehicleStatus>,
        is_rental: Option<bool>,
        rental_start: Option<NaiveDate>,
        rental_end: Option<NaiveDate>,
        monthly_price: Option<Decimal>,
    ) -> Result<Vehicle, AppError> {
        let current = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Vehicle not found".to_string()))?;

        let vehicle = sqlx::query_as::<_, Vehicle>(
            r#"
            UPDATE vehicles
            SET name = $3, license_plate = $4, vin = $5, status = $6,
                is_rental = $7, rental_start = $8, rental_end = $9, monthly_price = $10
            WHERE id = $1 AND organization_id = $2
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(self.db.organization_id())
        .bind(name.unwrap_or(current.name))
        .bind(license_plate.unwrap_or(current.license_plate))
        .bind(vin.unwrap_or(current.vin))
        .bind(status.unwrap_or(current.status))
        .bind(is_rental.unwrap_or(current.is_rental))
        .bind(rental_start.or(current.rental_start))
        .bind(rental_end.or(current.rental_end))
        .bind(monthly_price.or(current.monthly_price))
        .fetch_one(self.db.pool())
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error updating vehicle: {}", e)))?;

        Ok(vehicle)
    }

    /// Cuenta las referencias externas que bloquean el borrado
    pub async fn reference_count(&self, id: Uuid) -> Result<i64, AppError> {
        let result: (i64,) = sqlx::query_as(
            r#"
            SELECT (SELECT COUNT(*) FROM vehicle_assignments WHERE vehicle_id = $1)
                 + (SELECT COUNT(*) FROM penalties WHERE vehicle_id = $1)
                 + (SELECT COUNT(*) FROM vehicle_documents WHERE vehicle_id = $1)
                 + (SELECT COUNT(*) FROM car_expenses WHERE vehicle_id = $1)
                 + (SELECT COUNT(*) FROM maintenance_records WHERE vehicle_id = $1)
            "#,
        )
        .bind(id)
        .fetch_one(self.db.pool())
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error counting vehicle references: {}", e)))?;

        Ok(result.0)
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        self.find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Vehicle not found".to_string()))?;

        if self.reference_count(id).await? > 0 {
            return Err(has_dependents_error(
                "vehicle",
                "assignments, penalties, documents, expenses or maintenance records",
            ));
        }

        sqlx::query("DELETE FROM vehicle_photos WHERE vehicle_id = $1 AND organization_id = $2")
            .bind(id)
            .bind(self.db.organization_id())
            .execute(self.db.pool())
            .await
            .map_err(|e| AppError::DatabaseError(format!("Error deleting vehicle photos: {}", e)))?;

        sqlx::query("DELETE FROM vehicles WHERE id = $1 AND organization_id = $2")
            .bind(id)
            .bind(self.db.organization_id())
            .execute(self.db.pool())
            .await
            .map_err(|e| AppError::DatabaseError(format!("Error deleting vehicle: {}", e)))?;

        Ok(())
    }

    pub async fn add_photo(&self, vehicle_id: Uuid, path: String) -> Result<VehiclePhoto, AppError> {
        let photo = sqlx::query_as::<_, VehiclePhoto>(
            r#"
            INSERT INTO vehicle_photos (id, organization_id, vehicle_id, path, position, created_at)
            VALUES ($1, $2, $3, $4,
                    COALESCE((SELECT MAX(position) + 1 FROM vehicle_photos WHERE vehicle_id = $3), 0),
                    $5)
            RETURNING id, vehicle_id, path, position
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(self.db.organization_id())
        .bind(vehicle_id)
        .bind(path)
        .bind(Utc::now())
        .fetch_one(self.db.pool())
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error adding vehicle photo: {}", e)))?;

        Ok(photo)
    }

    pub async fn list_photos(&self, vehicle_id: Uuid) -> Result<Vec<VehiclePhoto>, AppError> {
        let photos = sqlx::query_as::<_, VehiclePhoto>(
            r#"
            SELECT id, vehicle_id, path, position FROM vehicle_photos
            WHERE vehicle_id = $1 AND organization_id = $2
            ORDER BY position
            "#,
        )
        .bind(vehicle_id)
        .bind(self.db.organization_id())
        .fetch_all(self.db.pool())
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error listing vehicle photos: {}", e)))?;

        Ok(photos)
    }

    pub async fn delete_photo(&self, photo_id: Uuid) -> Result<Option<String>, AppError> {
        let path: Option<(String,)> = sqlx::query_as(
            "DELETE FROM vehicle_photos WHERE id = $1 AND organization_id = $2 RETURNING path",
        )
        .bind(photo_id)
        .bind(self.db.organization_id())
        .fetch_optional(self.db.pool())
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error deleting vehicle photo: {}", e)))?;

        Ok(path.map(|p| p.0))
    }
}
