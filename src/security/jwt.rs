use crate::api::config::Config;
use crate::data::models::user::User;
use crate::security::errors::AuthError;
use serde::{Deserialize, Serialize};

/// Issues and checks the bearer tokens customers get at login.
#[derive(Debug, Clone)]
pub struct JwtService {
    secret: String,
    expiration_minutes: u64,
}

impl JwtService {
    pub fn new(secret: &str, expiration_minutes: u64) -> Self {
        JwtService {
            secret: secret.to_string(),
            expiration_minutes,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        JwtService::new(&config.jwt_secret, config.jwt_expiration_minutes)
    }

    /// Seconds a fresh token stays valid.
    pub fn expires_in(&self) -> u64 {
        self.expiration_minutes * 60
    }

    pub fn generate_token(&self, user: &User) -> Result<String, AuthError> {
        self.generate_token_at(user, chrono::Utc::now().timestamp())
    }

    /// Issues a token as if the current time were `issued_at` (unix seconds).
    pub fn generate_token_at(&self, user: &User, issued_at: i64) -> Result<String, AuthError> {
        let issued_at = usize::try_from(issued_at).map_err(|_| AuthError::TokenCreationError)?;

        let claims = AccessClaims {
            sub: user.id as usize,
            username: user.username.clone(),
            iat: issued_at,
            exp: issued_at + self.expires_in() as usize,
        };

        let token = jsonwebtoken::encode(
            &jsonwebtoken::Header::default(),
            &claims,
            &jsonwebtoken::EncodingKey::from_secret(self.secret.as_ref()),
        )
        .map_err(|_| AuthError::TokenCreationError)?;

        tracing::info!(user_id = user.id, "Token generated");
        Ok(token)
    }

    pub fn decode_token<T: for<'de> Deserialize<'de>>(&self, token: &str) -> Result<T, AuthError> {
        let validation = jsonwebtoken::Validation::default();

        let token_data = jsonwebtoken::decode::<T>(
            token,
            &jsonwebtoken::DecodingKey::from_secret(self.secret.as_ref()),
            &validation,
        )
        .map_err(|_| AuthError::InvalidToken)?;

        Ok(token_data.claims)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccessClaims {
    /// Subject (user ID)
    pub sub: usize,
    pub username: String,
    /// Issued at (as UTC timestamp)
    pub iat: usize,
    /// Expiration time (as UTC timestamp)
    pub exp: usize,
}

impl AccessClaims {
    pub fn user_id(&self) -> Result<i32, AuthError> {
        i32::try_from(self.sub).map_err(|_| AuthError::InvalidToken)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn user() -> User {
        User {
            id: 42,
            username: "builder_01".into(),
            email: "builder@example.com".into(),
            first_name: "Ivan".into(),
            last_name: "Petrov".into(),
            password_hash: String::new(),
            date_joined: Utc::now(),
        }
    }

    #[test]
    fn token_round_trips_to_the_user() {
        let service = JwtService::new("secret", 60);
        let token = service.generate_token(&user()).unwrap();

        let claims: AccessClaims = service.decode_token(&token).unwrap();
        assert_eq!(claims.user_id(), Ok(42));
        assert_eq!(claims.username, "builder_01");
        assert_eq!(claims.exp - claims.iat, 3600);
    }

    #[test]
    fn token_signed_with_another_secret_is_rejected() {
        let token = JwtService::new("secret", 60).generate_token(&user()).unwrap();

        let decoded = JwtService::new("other", 60).decode_token::<AccessClaims>(&token);
        assert_eq!(decoded, Err(AuthError::InvalidToken));
    }

    #[test]
    fn expired_token_is_rejected() {
        let service = JwtService::new("secret", 5);
        let two_hours_ago = Utc::now().timestamp() - 2 * 3600;
        let token = service.generate_token_at(&user(), two_hours_ago).unwrap();

        assert_eq!(
            service.decode_token::<AccessClaims>(&token),
            Err(AuthError::InvalidToken)
        );
    }
}
