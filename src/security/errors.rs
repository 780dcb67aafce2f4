#[derive(Debug, PartialEq)]
pub enum AuthError {
    HashingError,
    VerificationError,
    InvalidCredentials,
    UnauthorizedAccess,
    TokenCreationError,
    InvalidToken,
}

impl std::error::Error for AuthError {}

impl std::fmt::Display for AuthError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AuthError::HashingError => write!(f, "Password hashing failed"),
            AuthError::VerificationError => write!(f, "Password verification failed"),
            AuthError::InvalidCredentials => write!(f, "Invalid credentials provided."),
            AuthError::UnauthorizedAccess => write!(f, "Unauthorized access attempt detected."),
            AuthError::TokenCreationError => write!(f, "Failed to create token"),
            AuthError::InvalidToken => write!(f, "Invalid or expired token"),
        }
    }
}
