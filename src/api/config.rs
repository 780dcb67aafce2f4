use crate::storage::SupabaseConfig;
use dotenvy::dotenv;
use std::net::SocketAddr;
use std::path::PathBuf;

pub const DEFAULT_BUCKET: &str = "products";
pub const DEFAULT_MEDIA_ROOT: &str = "media";
pub const DEFAULT_MEDIA_URL: &str = "/media/";
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";
pub const DEFAULT_JWT_EXPIRATION_MINUTES: u64 = 60;

/// Everything the server needs at startup, read once from the environment.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub supabase: SupabaseConfig,
    pub media_root: PathBuf,
    pub media_url: String,
    pub bind_addr: SocketAddr,
    pub admin_token: String,
    pub jwt_secret: String,
    pub jwt_expiration_minutes: u64,
}

#[derive(Debug, PartialEq)]
pub enum ConfigError {
    Missing(&'static str),
    Invalid(&'static str, String),
}

impl std::error::Error for ConfigError {}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Missing(key) => write!(f, "{} must be set", key),
            ConfigError::Invalid(key, value) => {
                write!(f, "{} has an invalid value: {}", key, value)
            }
        }
    }
}

impl Config {
    /// Loads `.env` if present, then reads the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv().ok();

        let config = Config::from_lookup(|key| std::env::var(key).ok())?;
        tracing::info!(
            bind_addr = %config.bind_addr,
            bucket = %config.supabase.bucket,
            "Config loaded"
        );
        Ok(config)
    }

    /// Builds the config from any key lookup; blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let require = |key: &'static str| get(key).ok_or(ConfigError::Missing(key));

        let bind_raw = get("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_raw
            .parse::<SocketAddr>()
            .map_err(|_| ConfigError::Invalid("BIND_ADDR", bind_raw.clone()))?;

        let jwt_expiration_minutes = match get("JWT_EXPIRATION_MINUTES") {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|minutes| *minutes > 0)
                .ok_or(ConfigError::Invalid("JWT_EXPIRATION_MINUTES", raw.clone()))?,
            None => DEFAULT_JWT_EXPIRATION_MINUTES,
        };

        let mut media_url = get("MEDIA_URL").unwrap_or_else(|| DEFAULT_MEDIA_URL.to_string());
        if !media_url.ends_with('/') {
            media_url.push('/');
        }

        Ok(Config {
            database_url: require("DATABASE_URL")?,
            supabase: SupabaseConfig {
                url: require("SUPABASE_URL")?.trim_end_matches('/').to_string(),
                service_key: require("SUPABASE_KEY")?,
                bucket: get("SUPABASE_BUCKET").unwrap_or_else(|| DEFAULT_BUCKET.to_string()),
            },
            media_root: PathBuf::from(
                get("MEDIA_ROOT").unwrap_or_else(|| DEFAULT_MEDIA_ROOT.to_string()),
            ),
            media_url,
            bind_addr,
            admin_token: require("ADMIN_TOKEN")?,
            jwt_secret: require("JWT_SECRET")?,
            jwt_expiration_minutes,
        })
    }
}
