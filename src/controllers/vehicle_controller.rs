use crate::database::TenantDb;
use crate::dto::common::ApiResponse;
use crate::dto::vehicle_dto::{CreateVehicleRequest, UpdateVehicleRequest, VehicleResponse};
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::storage::BlobStore;
use crate::utils::errors::AppError;
use crate::utils::validation::{validate_license_plate, validate_vin};
use uuid::Uuid;
use validator::Validate;

pub struct VehicleController {
    repository: VehicleRepository,
}

impl VehicleController {
    pub fn new(db: TenantDb) -> Self {
        Self {
            repository: VehicleRepository::new(db),
        }
    }

    pub async fn create(
        &self,
        request: CreateVehicleRequest,
    ) -> Result<ApiResponse<VehicleResponse>, AppError> {
        request.validate()?;

        validate_license_plate(&request.license_plate)
            .map_err(|_| AppError::ValidationError("Formato de matrícula inválido".to_string()))?;
        validate_vin(&request.vin)
            .map_err(|_| AppError::ValidationError("Formato de VIN inválido".to_string()))?;

        // Matrícula y VIN únicos dentro de la organización
        if self.repository.license_plate_exists(&request.license_plate).await? {
            return Err(AppError::Conflict(
                "La matrícula ya está registrada para esta organización".to_string(),
            ));
        }
        if self.repository.vin_exists(&request.vin).await? {
            return Err(AppError::Conflict(
                "El VIN ya está registrado para esta organización".to_string(),
            ));
        }

        let vehicle = self
            .repository
            .create(
                request.name,
                request.license_plate,
                request.vin,
                request.is_rental,
                request.rental_start,
                request.rental_end,
                request.monthly_price,
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            VehicleResponse::from_vehicle(vehicle, Vec::new()),
            "Vehículo creado exitosamente".to_string(),
        ))
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<VehicleResponse, AppError> {
        let vehicle = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Vehículo no encontrado".to_string()))?;

        let photos = self
            .repository
            .list_photos(id)
            .await?
            .into_iter()
            .map(|p| p.path)
            .collect();

        Ok(VehicleResponse::from_vehicle(vehicle, photos))
    }

    pub async fn list(&self) -> Result<Vec<VehicleResponse>, AppError> {
        let vehicles = self.repository.list().await?;

        let mut response = Vec::with_capacity(vehicles.len());
        for vehicle in vehicles {
            let photos = self
                .repository
                .list_photos(vehicle.id)
                .await?
                .into_iter()
                .map(|p| p.path)
                .collect();
            response.push(VehicleResponse::from_vehicle(vehicle, photos));
        }

        Ok(response)
    }

    pub async fn update(
        &self,
        id: Uuid,
        request: UpdateVehicleRequest,
    ) -> Result<ApiResponse<VehicleResponse>, AppError> {
        request.validate()?;

        let current = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Vehículo no encontrado".to_string()))?;

        if let Some(plate) = &request.license_plate {
            validate_license_plate(plate)
                .map_err(|_| AppError::ValidationError("Formato de matrícula inválido".to_string()))?;
            if plate != &current.license_plate && self.repository.license_plate_exists(plate).await? {
                return Err(AppError::Conflict(
                    "La matrícula ya está registrada para esta organización".to_string(),
                ));
            }
        }
        if let Some(vin) = &request.vin {
            validate_vin(vin)
                .map_err(|_| AppError::ValidationError("Formato de VIN inválido".to_string()))?;
            if vin != &current.vin && self.repository.vin_exists(vin).await? {
                return Err(AppError::Conflict(
                    "El VIN ya está registrado para esta organización".to_string(),
                ));
            }
        }

        let vehicle = self
            .repository
            .update(
                id,
                request.name,
                request.license_plate,
                request.vin,
                request.status,
                request.is_rental,
                request.rental_start,
                request.rental_end,
                request.monthly_price,
            )
            .await?;

        let photos = self
            .repository
            .list_photos(id)
            .await?
            .into_iter()
            .map(|p| p.path)
            .collect();

        Ok(ApiResponse::success_with_message(
            VehicleResponse::from_vehicle(vehicle, photos),
            "Vehículo actualizado exitosamente".to_string(),
        ))
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        self.repository.delete(id).await
    }

    /// Adjunta una foto previamente subida al almacén de archivos
    pub async fn attach_photo(
        &self,
        blob_store: &BlobStore,
        vehicle_id: Uuid,
        path: String,
    ) -> Result<Vec<String>, AppError> {
        self.repository
            .find_by_id(vehicle_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Vehículo no encontrado".to_string()))?;

        if !blob_store.exists(&path).await? {
            return Err(AppError::BadRequest(format!(
                "El archivo '{}' no existe en el almacén",
                path
            )));
        }

        self.repository.add_photo(vehicle_id, path).await?;

        let photos = self
            .repository
            .list_photos(vehicle_id)
            .await?
            .into_iter()
            .map(|p| p.path)
            .collect();

        Ok(photos)
    }

    pub async fn remove_photo(
        &self,
        blob_store: &BlobStore,
        photo_id: Uuid,
    ) -> Result<(), AppError> {
        let path = self
            .repository
            .delete_photo(photo_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Foto no encontrada".to_string()))?;

        // El borrado del blob es best-effort: el registro ya no existe
        if let Err(e) = blob_store.delete(&path).await {
            log::warn!("⚠️ No se pudo borrar el blob '{}': {}", path, e);
        }

        Ok(())
    }
}
