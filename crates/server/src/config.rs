use std::sync::OnceLock;
use std::time::Duration;

static CONFIG: OnceLock<ServerConfig> = OnceLock::new();

/// Runtime configuration for the proxy layer, read from the environment.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Base URL of the upstream ExpressFood API.
    pub upstream_base_url: String,
    /// Per-request timeout for upstream calls.
    pub request_timeout: Duration,
    /// Whether the session cookie carries the `Secure` attribute.
    pub cookie_secure: bool,
    /// Optional `Domain` attribute for the session cookie.
    pub cookie_domain: Option<String>,
}

impl ServerConfig {
    fn from_env() -> Self {
        let upstream_base_url = std::env::var("UPSTREAM_API_URL")
            .unwrap_or_else(|_| "http://localhost:3001".to_string());

        let request_timeout = std::env::var("UPSTREAM_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .map(Duration::from_secs)
            .unwrap_or(Duration::from_secs(10));

        let cookie_secure = std::env::var("COOKIE_SECURE")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(false);

        let cookie_domain = std::env::var("COOKIE_DOMAIN")
            .ok()
            .filter(|d| !d.is_empty());

        Self {
            upstream_base_url,
            request_timeout,
            cookie_secure,
            cookie_domain,
        }
    }
}

/// Load `.env` and populate the global config. Safe to call multiple
/// times — only the first call has effect.
pub fn load_config() {
    let cfg = config();
    tracing::info!(
        upstream = %cfg.upstream_base_url,
        timeout_secs = cfg.request_timeout.as_secs(),
        "server configuration loaded"
    );
}

/// Get the loaded configuration, initializing from the environment on
/// first use.
pub fn config() -> &'static ServerConfig {
    CONFIG.get_or_init(|| {
        let _ = dotenvy::dotenv();
        ServerConfig::from_env()
    })
}
