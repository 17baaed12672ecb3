use crate::dto::auth_dto::{LoginRequest, LoginResponse, RegisterOrganizationRequest};
use crate::repositories::organization_repository::OrganizationRepository;
use crate::repositories::user_repository::UserRepository;
use crate::services::jwt_service::JwtService;
use crate::utils::errors::{conflict_error, AppError};
use bcrypt::{hash, verify, DEFAULT_COST};
use sqlx::PgPool;
use validator::Validate;

pub struct AuthController {
    pool: PgPool,
    organizations: OrganizationRepository,
}

impl AuthController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            organizations: OrganizationRepository::new(pool.clone()),
            pool,
        }
    }

    /// Registra la organización y su usuario owner, y devuelve el token
    pub async fn register(
        &self,
        jwt: &JwtService,
        request: RegisterOrganizationRequest,
    ) -> Result<LoginResponse, AppError> {
        request.validate()?;

        if self.organizations.email_exists(&request.admin_email).await? {
            return Err(conflict_error("Organization", "email", &request.admin_email));
        }
        if UserRepository::find_by_email_global(&self.pool, &request.admin_email)
            .await?
            .is_some()
        {
            return Err(conflict_error("User", "email", &request.admin_email));
        }

        let password_hash = hash(&request.admin_password, DEFAULT_COST)
            .map_err(|e| AppError::Internal(format!("Error hashing password: {}", e)))?;

        let organization = self
            .organizations
            .create(
                request.organization_name,
                request.admin_email.clone(),
                password_hash.clone(),
            )
            .await?;

        let owner = UserRepository::create_owner(
            &self.pool,
            organization.id,
            request.admin_first_name,
            request.admin_last_name,
            request.admin_email,
            password_hash,
        )
        .await?;

        log::info!("🏢 Organización '{}' registrada", organization.name);

        let token = jwt.generate_access_token(&owner)?;
        Ok(LoginResponse {
            token,
            user: owner.into(),
        })
    }

    /// Login por email y contraseña
    pub async fn login(
        &self,
        jwt: &JwtService,
        request: LoginRequest,
    ) -> Result<LoginResponse, AppError> {
        request.validate()?;

        let user = UserRepository::find_by_email_global(&self.pool, &request.email)
            .await?
            .ok_or_else(|| AppError::Unauthorized("Credenciales inválidas".to_string()))?;

        let password_hash = user
            .password_hash
            .as_deref()
            .ok_or_else(|| AppError::Unauthorized("El usuario no admite login".to_string()))?;

        let valid = verify(&request.password, password_hash)
            .map_err(|e| AppError::Internal(format!("Error verifying password: {}", e)))?;
        if !valid {
            return Err(AppError::Unauthorized("Credenciales inválidas".to_string()));
        }

        let token = jwt.generate_access_token(&user)?;
        Ok(LoginResponse {
            token,
            user: user.into(),
        })
    }
}
