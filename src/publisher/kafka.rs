use std::time::Duration;

use rdkafka::{
    ClientConfig,
    producer::{FutureProducer, FutureRecord, Producer},
};

use crate::{
    config::KafkaConfig,
    publisher::{EventPublisher, PublisherError},
};

/// A Kafka event publisher backed by an `rdkafka` `FutureProducer`.
///
/// The producer is internally thread-safe; connection handling and queuing
/// are librdkafka's responsibility.
pub struct KafkaEventPublisher {
    producer: FutureProducer,
}

impl KafkaEventPublisher {
    /// Creates a new `KafkaEventPublisher` from the given `KafkaConfig`.
    ///
    /// This only builds the client; connections are established lazily on
    /// first use.
    pub fn from_config(config: &KafkaConfig) -> Result<Self, PublisherError> {
        let mut client_config = ClientConfig::new();

        client_config.set("bootstrap.servers", &config.brokers);

        client_config.set("security.protocol", &config.security.protocol);
        if let Some(mechanism) = &config.security.sasl_mechanism {
            client_config.set("sasl.mechanism", mechanism);
        }
        if let Some(username) = &config.security.sasl_username {
            client_config.set("sasl.username", username);
        }
        if let Some(password) = &config.security.sasl_password {
            client_config.set("sasl.password", password);
        }
        if let Some(ca_location) = &config.security.ssl_ca_location {
            client_config.set("ssl.ca.location", ca_location);
        }

        client_config.set("message.timeout.ms", config.producer.message_timeout_ms.to_string());
        client_config.set("compression.codec", &config.producer.compression_codec);
        client_config.set("acks", &config.producer.acks);

        let producer = client_config.create::<FutureProducer>()?;

        Ok(Self { producer })
    }
}

#[async_trait::async_trait]
impl EventPublisher for KafkaEventPublisher {
    async fn publish(&self, topic: &str, key: &str, payload: &[u8]) -> Result<(), PublisherError> {
        let record = FutureRecord::to(topic).key(key).payload(payload);

        self.producer
            .send(record, Duration::from_secs(0))
            .await
            .map(|_| ())
            .map_err(|(kafka_error, _)| PublisherError::Kafka(kafka_error))?;

        Ok(())
    }

    async fn flush(&self, timeout: Duration) -> Result<(), PublisherError> {
        self.producer.flush(timeout).map_err(|e| e.into())
    }
}
