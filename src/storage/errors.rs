#[derive(Debug)]
pub enum StorageError {
    Request(reqwest::Error),
    Status { status: u16, body: String },
    Io(std::io::Error),
    InvalidKey(String),
}

impl std::error::Error for StorageError {}

impl std::fmt::Display for StorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageError::Request(e) => write!(f, "Storage request failed: {}", e),
            StorageError::Status { status, body } => {
                write!(f, "Storage responded with {}: {}", status, body)
            }
            StorageError::Io(e) => write!(f, "Storage I/O error: {}", e),
            StorageError::InvalidKey(key) => write!(f, "Invalid storage key: {}", key),
        }
    }
}

impl From<reqwest::Error> for StorageError {
    fn from(e: reqwest::Error) -> Self {
        StorageError::Request(e)
    }
}

impl From<std::io::Error> for StorageError {
    fn from(e: std::io::Error) -> Self {
        StorageError::Io(e)
    }
}
