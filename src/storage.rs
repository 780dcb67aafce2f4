pub mod backend;
pub mod content_type;
pub mod errors;
pub mod local;
pub mod supabase;

pub use backend::StorageBackend;
pub use local::LocalStorage;
pub use supabase::{SupabaseConfig, SupabaseStorage};
