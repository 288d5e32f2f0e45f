use std::env;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    // Web server
    pub host: String,
    pub port: u16,

    // Startup
    pub seed_on_start: bool,
}

impl Config {
    /// Load configuration from environment variables. Everything has a
    /// default; set REELFLIX_SKIP_SEED to start with an empty catalog.
    pub fn from_env() -> Self {
        Self {
            host: env::var("REELFLIX_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("REELFLIX_PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .expect("REELFLIX_PORT must be a number"),
            seed_on_start: env::var("REELFLIX_SKIP_SEED").is_err(),
        }
    }
}
