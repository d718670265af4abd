//! Configuration module for the patient-events service.
//!
//! The publish operation itself owns no configuration; everything here
//! exists to construct the Kafka transport.

mod app_config;
mod kafka;

pub use app_config::AppConfig;
pub use kafka::{KafkaConfig, KafkaConfigError, KafkaProducerConfig, KafkaSecurityConfig};
