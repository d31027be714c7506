#[derive(serde::Deserialize, Clone)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub log_level: String,
}

#[derive(serde::Deserialize, Clone)]
pub struct ApplicationSettings {
    pub host: String,
    pub port: u16,
    /// When enabled, error responses carry the full error chain instead of a
    /// generic failure page. Meant for local development only.
    pub debug: bool,
}

/// Reads `configuration.yaml`, then applies `APP__`-prefixed environment
/// variables on top (e.g. `APP__APPLICATION__PORT=8000`).
pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    config::Config::builder()
        .add_source(config::File::with_name("configuration"))
        .add_source(config::Environment::with_prefix("APP").separator("__"))
        .build()?
        .try_deserialize()
}
