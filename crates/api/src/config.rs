use std::path::PathBuf;
use std::str::FromStr;

use postboard_core::keys::DEFAULT_NAMESPACE;

/// Shared secret accepted by `POST /submit` unless `SUBMIT_SECRET` is set.
pub const DEFAULT_SUBMIT_SECRET: &str = "P@ssW0rd!";

/// A configuration value that could not be parsed.
#[derive(Debug, thiserror::Error)]
#[error("{var} has invalid value '{value}': expected {expected}")]
pub struct ConfigError {
    pub var: &'static str,
    pub value: String,
    pub expected: &'static str,
}

/// Where records are kept.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Postgres URL. `None` selects the in-memory store.
    pub database_url: Option<String>,
    /// Namespace partitioning every record key (default: `default`).
    pub namespace: String,
}

/// Identity of the running instance as reported by the hosting platform.
#[derive(Debug, Clone, Default)]
pub struct PlatformInfo {
    /// `GAE_INSTANCE`.
    pub instance_id: Option<String>,
    /// `GAE_VERSION`.
    pub version_id: Option<String>,
}

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `8080`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Shared secret required to publish a post.
    pub submit_secret: String,
    /// Directory holding `home.html`, `article.html` and `editor.html`.
    /// `None` uses the templates compiled into the binary.
    pub template_dir: Option<PathBuf>,
    pub store: StoreConfig,
    pub platform: PlatformInfo,
}

impl ServerConfig {
    /// Load configuration from the process environment.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `8080`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:8080`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `SUBMIT_SECRET`        | `P@ssW0rd!`                |
    /// | `TEMPLATE_DIR`         | built-in templates         |
    /// | `STORE_NAMESPACE`      | `default`                  |
    /// | `DATABASE_URL`         | in-memory store            |
    /// | `GAE_INSTANCE`         | unset                      |
    /// | `GAE_VERSION`          | unset                      |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let host = var("HOST").unwrap_or_else(|| "0.0.0.0".into());
        let port = parse_var("PORT", var("PORT"), 8080, "a port number")?;

        let cors_origins: Vec<String> = var("CORS_ORIGINS")
            .unwrap_or_else(|| "http://localhost:8080".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs = parse_var(
            "REQUEST_TIMEOUT_SECS",
            var("REQUEST_TIMEOUT_SECS"),
            30,
            "a number of seconds",
        )?;

        Ok(Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            submit_secret: lookup("SUBMIT_SECRET")
                .unwrap_or_else(|| DEFAULT_SUBMIT_SECRET.into()),
            template_dir: var("TEMPLATE_DIR").map(PathBuf::from),
            store: StoreConfig {
                database_url: var("DATABASE_URL"),
                namespace: var("STORE_NAMESPACE").unwrap_or_else(|| DEFAULT_NAMESPACE.into()),
            },
            platform: PlatformInfo {
                instance_id: lookup("GAE_INSTANCE"),
                version_id: lookup("GAE_VERSION"),
            },
        })
    }
}

fn parse_var<T: FromStr>(
    name: &'static str,
    raw: Option<String>,
    default: T,
    expected: &'static str,
) -> Result<T, ConfigError> {
    match raw {
        None => Ok(default),
        Some(value) => value.trim().parse().map_err(|_| ConfigError {
            var: name,
            value,
            expected,
        }),
    }
}
