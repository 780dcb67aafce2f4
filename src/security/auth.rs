use crate::security::errors::AuthError;
use argon2::password_hash::SaltString;
use argon2::password_hash::rand_core::OsRng;
use argon2::{Argon2, PasswordHasher, PasswordVerifier};
use tokio::task;

/// Argon2 password hashing, run off the async executor.
pub struct PasswordService;

impl PasswordService {
    pub fn new() -> Self {
        PasswordService
    }

    pub async fn hash_password(&self, password: &str) -> Result<String, AuthError> {
        let password = password.to_string();

        task::spawn_blocking(move || {
            let argon2 = Argon2::default();
            let salt = SaltString::generate(&mut OsRng);

            match argon2.hash_password(password.as_bytes(), &salt) {
                Ok(hash) => Ok(hash.to_string()),
                Err(_) => Err(AuthError::HashingError),
            }
        })
        .await
        .map_err(|_| AuthError::HashingError)?
    }

    pub async fn verify_password(&self, password: &str, hash: &str) -> Result<bool, AuthError> {
        let password = password.to_string();
        let hash = hash.to_string();

        task::spawn_blocking(move || {
            let parsed_hash = match argon2::password_hash::PasswordHash::new(&hash) {
                Ok(h) => h,
                Err(_) => return Err(AuthError::VerificationError),
            };

            let argon2 = Argon2::default();

            match argon2.verify_password(password.as_bytes(), &parsed_hash) {
                Ok(_) => Ok(true),
                Err(argon2::password_hash::Error::Password) => Ok(false),
                Err(_) => Err(AuthError::VerificationError),
            }
        })
        .await
        .map_err(|_| AuthError::VerificationError)?
    }
}

impl Default for PasswordService {
    fn default() -> Self {
        Self::new()
    }
}

/// Compares an admin token without short-circuiting on the first mismatch.
pub fn admin_token_matches(expected: &str, presented: &str) -> Result<(), AuthError> {
    if expected.is_empty() {
        return Err(AuthError::UnauthorizedAccess);
    }

    let expected = expected.as_bytes();
    let presented = presented.as_bytes();
    let mut diff = expected.len() ^ presented.len();
    for (i, byte) in expected.iter().enumerate() {
        diff |= usize::from(byte ^ presented.get(i).copied().unwrap_or(0));
    }

    if diff == 0 {
        Ok(())
    } else {
        Err(AuthError::UnauthorizedAccess)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn hash_then_verify() {
        let service = PasswordService::new();
        let hash = service.hash_password("brick-and-mortar").await.unwrap();

        assert!(service.verify_password("brick-and-mortar", &hash).await.unwrap());
        assert!(!service.verify_password("wrong", &hash).await.unwrap());
    }

    #[tokio::test]
    async fn malformed_hash_is_an_error() {
        let service = PasswordService::new();
        assert_eq!(
            service.verify_password("x", "not-a-hash").await,
            Err(AuthError::VerificationError)
        );
    }

    #[test]
    fn admin_token_comparison() {
        assert!(admin_token_matches("secret", "secret").is_ok());
        assert!(admin_token_matches("secret", "secreT").is_err());
        assert!(admin_token_matches("secret", "secret-longer").is_err());
        assert!(admin_token_matches("", "").is_err());
    }
}
