//! Application configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;

/// Which document store backs the user collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreBackend {
    /// Google Cloud Firestore in the given project.
    Firestore { project_id: String },
    /// In-process store; contents are lost on restart.
    Memory,
}

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server port
    pub port: u16,
    /// Document store backend
    pub store: StoreBackend,
    /// Allowed CORS origin; any origin when unset
    pub allowed_origin: Option<String>,
    /// Directory of static assets served at the root
    pub public_dir: PathBuf,
    /// Landing page served at `/`
    pub index_file: PathBuf,
}

impl Config {
    /// Default config for testing only.
    pub fn test_default() -> Self {
        Self {
            port: 3000,
            store: StoreBackend::Memory,
            allowed_origin: None,
            public_dir: PathBuf::from("public"),
            index_file: PathBuf::from("views/index.html"),
        }
    }

    /// Load configuration from environment variables.
    ///
    /// A `.env` file is read first if present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let store = match env::var("STORE_BACKEND")
            .unwrap_or_else(|_| "firestore".to_string())
            .trim()
            .to_ascii_lowercase()
            .as_str()
        {
            "firestore" => StoreBackend::Firestore {
                project_id: env::var("GCP_PROJECT_ID")
                    .map(|v| v.trim().to_string())
                    .map_err(|_| ConfigError::Missing("GCP_PROJECT_ID"))?,
            },
            "memory" => StoreBackend::Memory,
            other => {
                return Err(ConfigError::Invalid {
                    name: "STORE_BACKEND",
                    value: other.to_string(),
                })
            }
        };

        let port = match env::var("PORT") {
            Ok(raw) => raw.trim().parse().map_err(|_| ConfigError::Invalid {
                name: "PORT",
                value: raw,
            })?,
            Err(_) => 3000,
        };

        Ok(Self {
            port,
            store,
            allowed_origin: env::var("ALLOWED_ORIGIN")
                .ok()
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty()),
            public_dir: env::var("PUBLIC_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("public")),
            index_file: env::var("INDEX_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("views/index.html")),
        })
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),

    #[error("Invalid value for {name}: {value}")]
    Invalid { name: &'static str, value: String },
}
