//! Runtime configuration for the server and the store.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::time::Duration;

pub const DEFAULT_DATABASE_URL: &str = "sqlite://lang_portal.db";
pub const DEFAULT_LOG_FILTER: &str = "lang_portal=info,lang_portal_server=info,tower_http=info";

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub database_url: String,
    pub host: IpAddr,
    pub port: u16,
    /// Upper bound on concurrently open storage connections.
    pub max_connections: u32,
    /// Deadline applied to every store call.
    pub store_timeout: Duration,
    /// Extra attempts for reads that fail with a storage error. Writes are never retried.
    pub store_read_retries: u32,
    pub seed_on_startup: bool,
    /// Single allowed browser origin; `None` allows any origin.
    pub cors_allowed_origin: Option<String>,
    pub max_body_bytes: usize,
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            database_url: DEFAULT_DATABASE_URL.into(),
            host: IpAddr::V4(Ipv4Addr::new(0, 0, 0, 0)),
            port: 8081,
            max_connections: 5,
            store_timeout: Duration::from_millis(5000),
            store_read_retries: 1,
            seed_on_startup: true,
            cors_allowed_origin: None,
            max_body_bytes: 64 * 1024,
            log_filter: DEFAULT_LOG_FILTER.into(),
        }
    }
}

impl AppConfig {
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
