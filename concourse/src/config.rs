use serde::Deserialize;
use std::fs::File;
use std::path::Path;
use thiserror::Error;
use url::Url;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("could not load config from file: {0}")]
    LoadError(#[from] std::io::Error),
    #[error("could not parse config: {0}")]
    ParseError(#[from] serde_yaml::Error),
}

#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Port cannot be 0")]
    InvalidPort,
}

#[derive(Debug, Deserialize)]
pub struct Config {
    /// Main listener for incoming requests
    pub listener: Listener,
    pub flights: FlightsConfig,
    pub movies: MoviesConfig,
    pub metrics: Option<MetricsConfig>,
}

impl Config {
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let file = File::open(path)?;
        let data = serde_yaml::from_reader(file)?;

        Ok(data)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        self.listener.validate()
    }
}

/// Network listener configuration
#[derive(Debug, Deserialize)]
pub struct Listener {
    /// Host address to bind to (e.g., "0.0.0.0" or "127.0.0.1")
    pub host: String,
    /// Port number to listen on
    pub port: u16,
}

impl Listener {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.port == 0 {
            return Err(ValidationError::InvalidPort);
        }
        Ok(())
    }
}

/// Flight provider upstreams.
#[derive(Debug, Deserialize)]
pub struct FlightsConfig {
    /// Base URL of the airline A upstream
    ///
    /// Note: Uses the `url::Url` type for compile-time URL validation.
    /// Invalid URLs will be rejected during config deserialization.
    pub airline_a_url: Url,
    /// Base URL of the airline B upstream
    pub airline_b_url: Url,
    /// Per-request deadline applied to both providers
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

/// Movie catalog upstream.
#[derive(Debug, Deserialize)]
pub struct MoviesConfig {
    /// Base URL of the catalog upstream
    pub catalog_url: Url,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

#[derive(Debug, Deserialize)]
pub struct MetricsConfig {
    pub statsd_host: String,
    pub statsd_port: u16,
}

fn default_request_timeout_secs() -> u64 {
    10
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_tmp_file(s: &str) -> tempfile::NamedTempFile {
        let mut tmp = tempfile::NamedTempFile::new().expect("create temp file");
        write!(tmp, "{}", s).expect("write yaml");

        tmp
    }

    const VALID_YAML: &str = r#"
listener:
    host: 0.0.0.0
    port: 8000
flights:
    airline_a_url: "http://127.0.0.1:9001/airline_a"
    airline_b_url: "http://127.0.0.1:9002/airline_b"
    request_timeout_secs: 5
movies:
    catalog_url: "http://127.0.0.1:9003/api/v1/"
metrics:
    statsd_host: 127.0.0.1
    statsd_port: 8125
"#;

    #[test]
    fn parses_full_config_from_file() {
        let tmp = write_tmp_file(VALID_YAML);
        let config = Config::from_file(tmp.path()).expect("load config");

        assert!(config.validate().is_ok());
        assert_eq!(config.listener.port, 8000);
        assert_eq!(config.flights.request_timeout_secs, 5);
        assert_eq!(
            config.flights.airline_a_url.as_str(),
            "http://127.0.0.1:9001/airline_a"
        );
        assert_eq!(config.movies.request_timeout_secs, 10);

        let metrics = config.metrics.expect("metrics config");
        assert_eq!(metrics.statsd_port, 8125);
    }

    #[test]
    fn metrics_block_is_optional() {
        let yaml = r#"
listener: {host: "127.0.0.1", port: 8000}
flights:
    airline_a_url: "http://127.0.0.1:9001"
    airline_b_url: "http://127.0.0.1:9002"
movies:
    catalog_url: "http://127.0.0.1:9003"
"#;
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert!(config.metrics.is_none());
        assert_eq!(config.flights.request_timeout_secs, 10);
    }

    #[test]
    fn rejects_port_zero() {
        let yaml = r#"
listener: {host: "127.0.0.1", port: 0}
flights:
    airline_a_url: "http://127.0.0.1:9001"
    airline_b_url: "http://127.0.0.1:9002"
movies:
    catalog_url: "http://127.0.0.1:9003"
"#;
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert!(matches!(
            config.validate().unwrap_err(),
            ValidationError::InvalidPort
        ));
    }

    #[test]
    fn deserialization_errors() {
        // Invalid upstream URL
        assert!(
            serde_yaml::from_str::<Config>(
                r#"
listener: {host: "127.0.0.1", port: 8000}
flights:
    airline_a_url: "not-a-url"
    airline_b_url: "http://127.0.0.1:9002"
movies:
    catalog_url: "http://127.0.0.1:9003"
"#
            )
            .is_err()
        );

        // Missing required section
        assert!(
            serde_yaml::from_str::<Config>(
                r#"
listener: {host: "127.0.0.1", port: 8000}
"#
            )
            .is_err()
        );
    }

    #[test]
    fn missing_file_is_a_load_error() {
        let error = Config::from_file(Path::new("/nonexistent/concourse.yaml")).unwrap_err();
        assert!(matches!(error, ConfigError::LoadError(_)));
    }
}
