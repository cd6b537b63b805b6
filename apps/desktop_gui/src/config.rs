//! Startup configuration for the user directory app.

/// Remote collection this build talks to when nothing overrides it.
pub const DEFAULT_API_BASE_URL: &str = "https://dd68f8476d3179e5.mokky.dev";

pub const API_URL_ENV_VAR: &str = "USER_DIRECTORY_API_URL";

#[derive(Debug, Clone)]
pub struct StartupConfig {
    pub api_base_url: String,
}

impl Default for StartupConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
        }
    }
}

/// Default configuration with environment overrides applied. An override
/// that is set but blank is ignored.
pub fn load_startup_config() -> StartupConfig {
    let mut config = StartupConfig::default();
    if let Some(url) = read_non_empty_env_var(API_URL_ENV_VAR) {
        config.api_base_url = url;
    }
    config
}

fn read_non_empty_env_var(name: &str) -> Option<String> {
    match std::env::var(name) {
        Ok(value) if value.trim().is_empty() => None,
        Ok(value) => Some(value),
        Err(_) => None,
    }
}
