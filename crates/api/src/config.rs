use std::path::PathBuf;

use folio_core::upload::DEFAULT_MAX_UPLOAD_BYTES;

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `5000`).
    pub port: u16,
    /// Allowed CORS origins. Empty means any origin.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`). Does not apply to
    /// `/api/upload`, see `upload_timeout_secs`.
    pub request_timeout_secs: u64,
    /// Timeout for `/api/upload` in seconds (default: `600`), long enough for
    /// a body near `max_upload_bytes` on a slow link.
    pub upload_timeout_secs: u64,
    /// Directory uploaded images are written to and served from.
    pub upload_dir: PathBuf,
    /// Prefix for returned upload URLs, e.g. `http://localhost:5000`.
    pub public_base_url: String,
    /// Largest accepted upload in bytes.
    pub max_upload_bytes: usize,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `5000`                     |
    /// | `CORS_ORIGINS`         | `*`                        |
    /// | `REQUEST_TIMEOUT_SECS` | `30` (not for uploads)     |
    /// | `UPLOAD_TIMEOUT_SECS`  | `600`                      |
    /// | `UPLOAD_DIR`           | `uploads`                  |
    /// | `PUBLIC_BASE_URL`      | `http://localhost:5000`    |
    /// | `MAX_UPLOAD_BYTES`     | `104857600`                |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "5000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins =
            parse_cors_origins(&std::env::var("CORS_ORIGINS").unwrap_or_else(|_| "*".into()));

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let upload_timeout_secs: u64 = std::env::var("UPLOAD_TIMEOUT_SECS")
            .unwrap_or_else(|_| "600".into())
            .parse()
            .expect("UPLOAD_TIMEOUT_SECS must be a valid u64");

        let upload_dir = PathBuf::from(
            std::env::var("UPLOAD_DIR").unwrap_or_else(|_| "uploads".into()),
        );

        let public_base_url = std::env::var("PUBLIC_BASE_URL")
            .unwrap_or_else(|_| "http://localhost:5000".into())
            .trim_end_matches('/')
            .to_string();

        let max_upload_bytes: usize = std::env::var("MAX_UPLOAD_BYTES")
            .map(|v| v.parse().expect("MAX_UPLOAD_BYTES must be a valid usize"))
            .unwrap_or(DEFAULT_MAX_UPLOAD_BYTES);

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            upload_timeout_secs,
            upload_dir,
            public_base_url,
            max_upload_bytes,
        }
    }
}

/// Split a comma-separated origin list. `*` anywhere means any origin.
fn parse_cors_origins(raw: &str) -> Vec<String> {
    let origins: Vec<String> = raw
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect();

    if origins.iter().any(|o| o == "*") {
        Vec::new()
    } else {
        origins
    }
}
