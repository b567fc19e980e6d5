use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 4000;
pub const DEFAULT_LABELS_DIR: &str = "public/labels";

/// Carrier API settings.
///
/// All fields stay optional: the deployment contract is that they are
/// validated when a label is actually requested, not at startup, so a
/// dashboard without shipping credentials still serves everything else.
#[derive(Debug, Clone, Default)]
pub struct CarrierConfig {
    /// Shipment-creation endpoint, e.g. the Delhivery `cmu/create.json` URL.
    pub api_url: Option<String>,
    /// Static API token, sent as `Authorization: Token <token>`.
    pub api_token: Option<String>,
    /// Registered pickup location identifier for the merchant's warehouse.
    pub pickup_location: Option<String>,
    /// "delhivery" (default) or "mock".
    pub provider: String,
}

impl CarrierConfig {
    /// Read carrier settings from the environment.
    ///
    /// # Environment Variables
    /// - `DELHIVERY_API_URL`: shipment-creation endpoint
    /// - `DELHIVERY_API_TOKEN`: API token
    /// - `DELHIVERY_PICKUP_ADDRESS`: registered pickup location name
    /// - `CARRIER_PROVIDER`: optional, "mock" selects the in-process stub
    pub fn from_env() -> Self {
        Self {
            api_url: non_empty(env::var("DELHIVERY_API_URL").ok()),
            api_token: non_empty(env::var("DELHIVERY_API_TOKEN").ok()),
            pickup_location: non_empty(env::var("DELHIVERY_PICKUP_ADDRESS").ok()),
            provider: env::var("CARRIER_PROVIDER").unwrap_or_else(|_| "delhivery".to_string()),
        }
    }
}

/// HTTP server settings, read once at startup.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Directory label PDFs are written to and served from (`/labels/...`).
    pub labels_dir: PathBuf,
    /// Allowed CORS origins; empty means permissive (local development).
    pub cors_origins: Vec<String>,
}

impl ServerConfig {
    /// Read server settings from the environment.
    ///
    /// # Environment Variables
    /// - `HOST`: optional bind address (default "0.0.0.0")
    /// - `PORT`: optional port (default 4000)
    /// - `LABELS_DIR`: optional label directory (default "public/labels")
    /// - `CORS_ORIGINS`: optional comma-separated origin list
    pub fn from_env() -> Result<Self> {
        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());

        let port = match env::var("PORT") {
            Ok(raw) => raw.parse().context("PORT must be a number")?,
            Err(_) => DEFAULT_PORT,
        };

        let labels_dir = env::var("LABELS_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_LABELS_DIR));

        let cors_origins = env::var("CORS_ORIGINS")
            .map(|raw| {
                raw.split(',')
                    .map(|origin| origin.trim().to_string())
                    .filter(|origin| !origin.is_empty())
                    .collect()
            })
            .unwrap_or_default();

        Ok(Self {
            host,
            port,
            labels_dir,
            cors_origins,
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}
