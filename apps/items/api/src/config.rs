use core_config::{app_info, server::ServerConfig, AppInfo, FromEnv};

// Re-export Environment for use in other modules
pub use core_config::Environment;

/// Application configuration, composed from the shared config components.
///
/// Every field has a default, so the service starts with no environment at all.
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub server: ServerConfig,
    pub environment: Environment,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let server = ServerConfig::from_env()?; // HOST=0.0.0.0, PORT=5000 unless overridden

        Ok(Self {
            app: app_info!(),
            server,
            environment,
        })
    }
}
