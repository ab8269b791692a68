use std::env;

/// Environment variable names - single source of truth
pub mod env_vars {
    pub const PORT: &str = "PORT";
    pub const DATABASE_URL: &str = "DATABASE_URL";
    /// Explicit override for the service's own public URL
    /// (e.g. "https://notes.example.com").
    pub const PUBLIC_URL: &str = "NOTES_PUBLIC_URL";
}

/// Default values
pub mod defaults {
    pub const PORT: u16 = 8080;
    pub const DATABASE_URL: &str = "./.db/notes.db";
}

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub database_url: String,
}

impl Config {
    pub fn from_env() -> Self {
        let port = env::var(env_vars::PORT)
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(defaults::PORT);
        let database_url = env::var(env_vars::DATABASE_URL)
            .unwrap_or_else(|_| defaults::DATABASE_URL.to_string());

        Self { port, database_url }
    }
}

/// The service's externally-reachable URL (for client base URLs).
///
/// Set NOTES_PUBLIC_URL to the instance's public URL.
/// Falls back to http://localhost:{PORT} if not set.
pub fn self_url() -> String {
    if let Ok(url) = env::var(env_vars::PUBLIC_URL) {
        return url.trim_end_matches('/').to_string();
    }

    let port = env::var(env_vars::PORT).unwrap_or_else(|_| defaults::PORT.to_string());
    format!("http://localhost:{}", port)
}
