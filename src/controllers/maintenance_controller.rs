use crate::database::TenantDb;
use crate::dto::common::ApiResponse;
use crate::dto::maintenance_dto::{CreateMaintenanceRequest, MaintenanceResponse};
use crate::models::maintenance::Maintenance;
use crate::repositories::maintenance_repository::MaintenanceRepository;
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::utils::errors::AppError;
use rust_decimal::Decimal;
use uuid::Uuid;
use validator::Validate;

pub struct MaintenanceController {
    repository: MaintenanceRepository,
    vehicles: VehicleRepository,
}

impl MaintenanceController {
    pub fn new(db: TenantDb) -> Self {
        Self {
            repository: MaintenanceRepository::new(db.clone()),
            vehicles: VehicleRepository::new(db),
        }
    }

    pub async fn create(
        &self,
        request: CreateMaintenanceRequest,
    ) -> Result<ApiResponse<MaintenanceResponse>, AppError> {
        request.validate()?;

        if request.cost < Decimal::ZERO {
            return Err(AppError::ValidationError(
                "El coste no puede ser negativo".to_string(),
            ));
        }

        self.vehicles
            .find_by_id(request.vehicle_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Vehículo no encontrado".to_string()))?;

        let (maintenance, expense) = self
            .repository
            .create_with_expense(
                request.vehicle_id,
                request.date,
                request.maintenance_type,
                request.description,
                request.cost,
                request.receipt_path,
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            MaintenanceResponse { maintenance, expense },
            "Mantenimiento registrado exitosamente".to_string(),
        ))
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<Maintenance, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Mantenimiento no encontrado".to_string()))
    }

    pub async fn list_by_vehicle(&self, vehicle_id: Uuid) -> Result<Vec<Maintenance>, AppError> {
        self.repository.list_by_vehicle(vehicle_id).await
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        self.repository.delete(id).await
    }
}
