use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

use super::KafkaConfig;

/// Application configuration for the patient-events service.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    /// Kafka transport configuration.
    pub kafka: KafkaConfig,
}

impl AppConfig {
    /// Creates a new `AppConfig` by reading from the configuration directory.
    ///
    /// Values from `<config_dir>/app.yaml` can be overridden through
    /// `PATIENT_EVENTS`-prefixed environment variables, e.g.
    /// `PATIENT_EVENTS__KAFKA__BROKERS`.
    pub fn new(config_dir: Option<&str>) -> Result<Self, ConfigError> {
        let config_dir_str = config_dir.unwrap_or("configs");
        let s = Config::builder()
            .add_source(File::with_name(&format!("{}/app.yaml", config_dir_str)))
            .add_source(Environment::with_prefix("PATIENT_EVENTS").separator("__"))
            .build()?;

        s.try_deserialize()
    }

    /// Creates a new `AppConfigBuilder` for testing purposes.
    #[cfg(test)]
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }
}

/// A builder for creating `AppConfig` instances for testing.
#[cfg(test)]
#[derive(Default)]
pub struct AppConfigBuilder {
    config: AppConfig,
}

#[cfg(test)]
impl AppConfigBuilder {
    pub fn brokers(mut self, brokers: &str) -> Self {
        self.config.kafka.brokers = brokers.to_string();
        self
    }

    pub fn build(self) -> AppConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_config_builder() {
        let config = AppConfig::builder().brokers("localhost:9092").build();

        assert_eq!(config.kafka.brokers, "localhost:9092");
        assert!(config.kafka.validate().is_ok());
    }

    #[test]
    fn test_app_config_from_file() {
        let config_content = r#"
        kafka:
          brokers: "broker-1:9092,broker-2:9092"
        "#;
        let temp_dir = tempfile::tempdir().unwrap();
        let app_yaml_path = temp_dir.path().join("app.yaml");
        std::fs::write(&app_yaml_path, config_content).unwrap();

        let config = AppConfig::new(Some(temp_dir.path().to_str().unwrap())).unwrap();

        assert_eq!(config.kafka.brokers, "broker-1:9092,broker-2:9092");
        // Unspecified sections fall back to their defaults.
        assert_eq!(config.kafka.security.protocol, "PLAINTEXT");
        assert_eq!(config.kafka.producer.message_timeout_ms, 5000);
        assert_eq!(config.kafka.producer.compression_codec, "none");
    }

    #[test]
    fn test_app_config_from_file_with_security() {
        let config_content = r#"
        kafka:
          brokers: "broker-1:9093"
          security:
            protocol: SASL_SSL
            sasl_mechanism: SCRAM-SHA-256
            sasl_username: patient-service
            sasl_password: hunter2
          producer:
            message_timeout_ms: 10000
            compression_codec: zstd
        "#;
        let temp_dir = tempfile::tempdir().unwrap();
        let app_yaml_path = temp_dir.path().join("app.yaml");
        std::fs::write(&app_yaml_path, config_content).unwrap();

        let config = AppConfig::new(Some(temp_dir.path().to_str().unwrap())).unwrap();

        assert_eq!(config.kafka.security.protocol, "SASL_SSL");
        assert_eq!(config.kafka.security.sasl_mechanism.as_deref(), Some("SCRAM-SHA-256"));
        assert_eq!(config.kafka.security.sasl_username.as_deref(), Some("patient-service"));
        assert_eq!(config.kafka.producer.message_timeout_ms, 10000);
        assert_eq!(config.kafka.producer.compression_codec, "zstd");
    }

    #[test]
    fn test_app_config_from_file_with_env_var_override() {
        let config_content = r#"
        kafka:
          brokers: "broker-1:9092"
        "#;
        let temp_dir = tempfile::tempdir().unwrap();
        let app_yaml_path = temp_dir.path().join("app.yaml");
        std::fs::write(&app_yaml_path, config_content).unwrap();

        unsafe {
            std::env::set_var("PATIENT_EVENTS__KAFKA__PRODUCER__ACKS", "1");
        }

        let config = AppConfig::new(Some(temp_dir.path().to_str().unwrap())).unwrap();

        assert_eq!(config.kafka.producer.acks, "1");

        unsafe {
            std::env::remove_var("PATIENT_EVENTS__KAFKA__PRODUCER__ACKS");
        }
    }

    #[test]
    fn test_app_config_missing_file_errors() {
        let temp_dir = tempfile::tempdir().unwrap();

        let result = AppConfig::new(Some(temp_dir.path().to_str().unwrap()));

        assert!(result.is_err());
    }
}
