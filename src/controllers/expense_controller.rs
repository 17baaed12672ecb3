use crate::database::TenantDb;
use crate::dto::common::ApiResponse;
use crate::dto::expense_dto::{CreateExpenseRequest, UpdateExpenseRequest};
use crate::models::expense::CarExpense;
use crate::repositories::expense_repository::ExpenseRepository;
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::utils::errors::AppError;
use rust_decimal::Decimal;
use uuid::Uuid;
use validator::Validate;

pub struct ExpenseController {
    repository: ExpenseRepository,
    vehicles: VehicleRepository,
}

impl ExpenseController {
    pub fn new(db: TenantDb) -> Self {
        Self {
            repository: ExpenseRepository::new(db.clone()),
            vehicles: VehicleRepository::new(db),
        }
    }

    pub async fn create(
        &self,
        request: CreateExpenseRequest,
    ) -> Result<ApiResponse<CarExpense>, AppError> {
        request.validate()?;

        if request.amount < Decimal::ZERO {
            return Err(AppError::ValidationError(
                "El importe no puede ser negativo".to_string(),
            ));
        }

        self.vehicles
            .find_by_id(request.vehicle_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Vehículo no encontrado".to_string()))?;

        let expense = self
            .repository
            .create(
                request.vehicle_id,
                request.category,
                request.date,
                request.amount,
                request.description,
                request.receipt_path,
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            expense,
            "Gasto registrado exitosamente".to_string(),
        ))
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<CarExpense, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Gasto no encontrado".to_string()))
    }

    pub async fn list(&self) -> Result<Vec<CarExpense>, AppError> {
        self.repository.list().await
    }

    pub async fn list_by_vehicle(&self, vehicle_id: Uuid) -> Result<Vec<CarExpense>, AppError> {
        self.repository.list_by_vehicle(vehicle_id).await
    }

    pub async fn update(
        &self,
        id: Uuid,
        request: UpdateExpenseRequest,
    ) -> Result<ApiResponse<CarExpense>, AppError> {
        request.validate()?;

        let current = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Gasto no encontrado".to_string()))?;

        // Los gastos generados por mantenimiento son inmutables desde aquí
        current.check_mutable()?;

        if let Some(amount) = request.amount {
            if amount < Decimal::ZERO {
                return Err(AppError::ValidationError(
                    "El importe no puede ser negativo".to_string(),
                ));
            }
        }

        let expense = self
            .repository
            .update(
                id,
                request.category,
                request.date,
                request.amount,
                request.description,
                request.receipt_path,
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            expense,
            "Gasto actualizado exitosamente".to_string(),
        ))
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let current = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Gasto no encontrado".to_string()))?;

        current.check_mutable()?;

        self.repository.delete(id).await
    }
}
