//! Configuration loading from disk.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::GatewayConfig;

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// File could not be read.
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    /// File is not valid TOML for the schema.
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Load configuration from a TOML file.
///
/// Missing fields fall back to their defaults; route-table construction
/// performs the semantic checks.
pub fn load_config(path: &Path) -> Result<GatewayConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config: GatewayConfig = toml::from_str(&content)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn loads_a_full_config_file() {
        let mut file = tempfile_path("gateway-config-full");
        write!(
            file.1,
            r#"
            [listener]
            bind_address = "127.0.0.1:9000"

            [services]
            user_service_url = "http://users:8001"
            product_service_url = "http://products:8002"
            order_service_url = "http://orders:8003"

            [timeouts]
            backend_secs = 10
            "#
        )
        .unwrap();

        let config = load_config(&file.0).unwrap();
        assert_eq!(config.listener.bind_address, "127.0.0.1:9000");
        assert_eq!(config.services.product_service_url, "http://products:8002");
        assert_eq!(config.timeouts.backend_secs, 10);
        // Defaulted section.
        assert_eq!(config.timeouts.connect_secs, 5);

        let _ = fs::remove_file(&file.0);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = load_config(Path::new("/nonexistent/gateway.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn invalid_toml_is_a_parse_error() {
        let mut file = tempfile_path("gateway-config-bad");
        write!(file.1, "listener = 7").unwrap();

        let err = load_config(&file.0).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));

        let _ = fs::remove_file(&file.0);
    }

    fn tempfile_path(name: &str) -> (std::path::PathBuf, fs::File) {
        let path = std::env::temp_dir().join(format!("{}-{}.toml", name, std::process::id()));
        let file = fs::File::create(&path).unwrap();
        (path, file)
    }
}
