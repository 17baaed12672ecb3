use jsonwebtoken::{encode, decode, Header, Algorithm, Validation, EncodingKey, DecodingKey};
use chrono::{Utc, Duration};
use serde::{Deserialize, Serialize};
use std::env;
use uuid::Uuid;

use crate::models::user::{User, UserRole};
use crate::utils::errors::AppError;

/// Claims del JWT
#[derive(Debug, Serialize, Deserialize)]
pub struct JwtClaims {
    pub sub: String,
    pub organization_id: String,
    pub role: String,
    pub exp: i64,
    pub iat: i64,
}

/// Configuración JWT
pub struct JwtConfig {
    pub secret: String,
    pub algorithm: Algorithm,
    pub access_token_duration: Duration,
}

impl JwtConfig {
    pub fn new() -> Self {
        let secret = env::var("JWT_SECRET")
            .unwrap_or_else(|_| "your-super-secret-jwt-key-change-in-production".to_string());

        Self {
            secret,
            algorithm: Algorithm::HS256,
            access_token_duration: Duration::hours(24), // 24 horas
        }
    }
}

/// Servicio JWT
pub struct JwtService {
    config: JwtConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl JwtService {
    pub fn new() -> Self {
        let config = JwtConfig::new();
        let encoding_key = EncodingKey::from_secret(config.secret.as_ref());
        let decoding_key = DecodingKey::from_secret(config.secret.as_ref());

        Self {
            config,
            encoding_key,
            decoding_key,
        }
    }

    /// Genera un token de acceso para un usuario
    pub fn generate_access_token(&self, user: &User) -> Result<String, AppError> {
        let now = Utc::now();
        let exp = now + self.config.access_token_duration;

        let claims = JwtClaims {
            sub: user.id.to_string(),
            organization_id: user.organization_id.to_string(),
            role: user.role.as_str().to_string(),
            exp: exp.timestamp(),
            iat: now.timestamp(),
        };

        encode(&Header::new(self.config.algorithm), &claims, &self.encoding_key)
            .map_err(|e| AppError::Internal(format!("Error generating access token: {}", e)))
    }

    /// Valida y decodifica un token
    pub fn validate_token(&self, token: &str) -> Result<JwtClaims, AppError> {
        let validation = Validation::new(self.config.algorithm);

        decode::<JwtClaims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|e| AppError::Unauthorized(format!("Invalid token: {}", e)))
    }

    /// Extrae el user_id y organization_id del token
    pub fn token_identity(&self, token: &str) -> Result<(Uuid, Uuid, UserRole), AppError> {
        let claims = self.validate_token(token)?;

        let user_id = Uuid::parse_str(&claims.sub)
            .map_err(|_| AppError::Unauthorized("Invalid user id in token".to_string()))?;
        let organization_id = Uuid::parse_str(&claims.organization_id)
            .map_err(|_| AppError::Unauthorized("Invalid organization id in token".to_string()))?;
        let role = UserRole::from_str(&claims.role)
            .ok_or_else(|| AppError::Unauthorized("Invalid role in token".to_string()))?;

        Ok((user_id, organization_id, role))
    }
}

impl Default for JwtService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn test_user() -> User {
        User {
            id: Uuid::new_v4(),
            organization_id: Uuid::new_v4(),
            first_name: "Ana".to_string(),
            last_name: "García".to_string(),
            email: Some("ana@example.com".to_string()),
            password_hash: Some("hash".to_string()),
            role: UserRole::Admin,
            team_id: None,
            phone: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_generate_and_validate_token() {
        let jwt_service = JwtService::new();
        let user = test_user();

        let token = jwt_service.generate_access_token(&user).unwrap();
        assert!(!token.is_empty());

        let (user_id, organization_id, role) = jwt_service.token_identity(&token).unwrap();
        assert_eq!(user_id, user.id);
        assert_eq!(organization_id, user.organization_id);
        assert_eq!(role, UserRole::Admin);
    }

    #[test]
    fn test_invalid_token_is_rejected() {
        let jwt_service = JwtService::new();
        assert!(jwt_service.validate_token("not-a-token").is_err());
    }
}
