use std::env;
use std::path::PathBuf;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_DATABASE_URL: &str = "mongodb://127.0.0.1:27017/solarDB";
pub const DEFAULT_PAGES_DIR: &str = "public";

/// Process configuration. Every field has a fixed default; the environment
/// (or a `.env` file) may override it.
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub pages_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            database_url: DEFAULT_DATABASE_URL.to_string(),
            pages_dir: PathBuf::from(DEFAULT_PAGES_DIR),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let port = match env::var("PORT") {
            Ok(raw) => parse_port(&raw).unwrap_or_else(|| {
                log::warn!("⚠️  Invalid PORT '{}', using {}", raw, DEFAULT_PORT);
                DEFAULT_PORT
            }),
            Err(_) => defaults.port,
        };

        Self {
            host: env::var("HOST").unwrap_or(defaults.host),
            port,
            database_url: env::var("DATABASE_URL").unwrap_or(defaults.database_url),
            pages_dir: env::var("PAGES_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.pages_dir),
        }
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_port(raw: &str) -> Option<u16> {
    raw.trim().parse().ok()
}
