use crate::core::ResponseMode;
use axum::http::{HeaderValue, Method, header};
use dotenv::dotenv;
use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tracing::{info, warn};

/// Backend dello store degli inviti
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    MySql,
    Memory,
}

impl FromStr for StoreBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mysql" => Ok(Self::MySql),
            "memory" => Ok(Self::Memory),
            other => Err(format!(
                "Invalid INVITE_STORE '{}': expected 'mysql' or 'memory'",
                other
            )),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub store_backend: StoreBackend,
    pub database_url: Option<String>,
    pub server_host: String,
    pub server_port: u16,
    pub max_connections: u32,
    pub connection_lifetime_secs: u64,
    pub app_env: String,
    pub public_dir: PathBuf,
    pub response_mode: ResponseMode,
    pub cors_allowed_origins: Vec<String>,
}

impl Config {
    /// Carica la configurazione dalle variabili d'ambiente
    /// Chiama dotenv() automaticamente
    pub fn from_env() -> Result<Self, String> {
        dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Costruisce la configurazione leggendo i valori da `lookup`
    /// (nei test si passa una mappa al posto dell'ambiente)
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, String> {
        let store_backend = lookup("INVITE_STORE")
            .unwrap_or_else(|| "mysql".to_string())
            .parse::<StoreBackend>()?;

        let database_url = lookup("DATABASE_URL").filter(|url| !url.trim().is_empty());
        if store_backend == StoreBackend::MySql && database_url.is_none() {
            return Err("DATABASE_URL must be set in .env file when INVITE_STORE=mysql".to_string());
        }

        let server_host = lookup("SERVER_HOST").unwrap_or_else(|| "127.0.0.1".to_string());

        let server_port = lookup("SERVER_PORT")
            .or_else(|| lookup("PORT"))
            .unwrap_or_else(|| "3000".to_string())
            .parse::<u16>()
            .map_err(|_| "Invalid SERVER_PORT: must be a number between 0-65535".to_string())?;

        let max_connections = lookup("MAX_DB_CONNECTIONS")
            .unwrap_or_else(|| "10".to_string())
            .parse::<u32>()
            .ok()
            .filter(|n| *n > 0)
            .ok_or_else(|| "Invalid MAX_DB_CONNECTIONS: must be a positive number".to_string())?;

        let connection_lifetime_secs = lookup("DB_CONNECTION_LIFETIME_SECS")
            .unwrap_or_else(|| "1800".to_string())
            .parse::<u64>()
            .map_err(|_| {
                "Invalid DB_CONNECTION_LIFETIME_SECS: must be a positive number".to_string()
            })?;

        let app_env = lookup("APP_ENV").unwrap_or_else(|| "development".to_string());

        let public_dir = PathBuf::from(lookup("PUBLIC_DIR").unwrap_or_else(|| "public".to_string()));

        let response_mode = match lookup("RESPONSE_STATUS_MODE") {
            Some(mode) => mode.parse::<ResponseMode>()?,
            None => ResponseMode::default(),
        };

        let cors_allowed_origins = lookup("CORS_ALLOWED_ORIGINS")
            .map(|origins| {
                origins
                    .split(',')
                    .map(str::trim)
                    .filter(|o| !o.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        Ok(Config {
            store_backend,
            database_url,
            server_host,
            server_port,
            max_connections,
            connection_lifetime_secs,
            app_env,
            public_dir,
            response_mode,
            cors_allowed_origins,
        })
    }

    pub fn is_development(&self) -> bool {
        self.app_env == "development"
    }

    pub fn connection_lifetime(&self) -> Duration {
        Duration::from_secs(self.connection_lifetime_secs)
    }

    /// Logga la configurazione (nascondendo i segreti)
    pub fn print_info(&self) {
        info!("Server Configuration:");
        info!("   Environment: {}", self.app_env);
        info!("   Server Address: {}:{}", self.server_host, self.server_port);
        info!("   Invite Store: {:?}", self.store_backend);
        if let Some(url) = &self.database_url {
            info!("   Database: {}", Self::mask_url(url));
            info!("   Max DB Connections: {}", self.max_connections);
            info!("   Connection Lifetime: {}s", self.connection_lifetime_secs);
        }
        info!("   Public Dir: {}", self.public_dir.display());
        info!("   Response Mode: {:?}", self.response_mode);
    }

    /// Maschera le credenziali nell'URL del database per il logging
    fn mask_url(url: &str) -> String {
        if let Some(at_pos) = url.find('@') {
            if let Some(scheme_end) = url.find("://") {
                let scheme = &url[..scheme_end + 3];
                let after_at = &url[at_pos..];
                return format!("{}***{}", scheme, after_at);
            }
        }
        "***".to_string()
    }

    /// CORS: origini esplicite se configurate, altrimenti in development si
    /// rispecchia l'Origin della richiesta e in produzione si nega tutto
    pub fn cors_layer(&self) -> CorsLayer {
        let methods = [Method::GET, Method::POST, Method::DELETE, Method::OPTIONS];
        let headers = [header::CONTENT_TYPE, header::ACCEPT, header::ORIGIN];

        if self.cors_allowed_origins.is_empty() {
            if self.is_development() {
                warn!("CORS: No origins configured in development, mirroring request origin");
                return CorsLayer::new()
                    .allow_origin(AllowOrigin::mirror_request())
                    .allow_methods(methods)
                    .allow_headers(headers);
            }
            warn!("CORS: No origins configured, denying all cross-origin requests");
            return CorsLayer::new().allow_origin(AllowOrigin::exact(HeaderValue::from_static("null")));
        }

        let origins: Vec<HeaderValue> = self
            .cors_allowed_origins
            .iter()
            .filter_map(|origin| {
                origin.parse::<HeaderValue>().ok().or_else(|| {
                    warn!("CORS: Invalid origin in config: {}", origin);
                    None
                })
            })
            .collect();

        info!("CORS: Allowing {} origin(s)", origins.len());
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(methods)
            .allow_headers(headers)
    }
}
