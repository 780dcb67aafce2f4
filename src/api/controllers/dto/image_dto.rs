use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ImageUploadResponse {
    pub id: i32,
    pub storage_path: Option<String>,
    pub url: Option<String>,
}
