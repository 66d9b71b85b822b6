use std::env;

use aws_config::Region;
use aws_sdk_sqs::config::SharedCredentialsProvider;

use crate::errors::ConfigError;

const DEFAULT_REGION: &str = "us-east-1";

/// Connection parameters for one queue endpoint.
///
/// A config is built once, handed to a drainer, and never mutated again: the
/// credentials, region, and queue URL are fixed for the lifetime of the
/// client that owns them. There is no process-wide shared client; each
/// drainer carries its own endpoint.
#[derive(Debug, Clone)]
pub struct QueueEndpointConfig {
    pub access_key_id: String,
    pub secret_access_key: String,
    pub region: String,
    pub queue_url: String,
}

impl QueueEndpointConfig {
    pub fn new(
        access_key_id: impl Into<String>,
        secret_access_key: impl Into<String>,
        region: impl Into<String>,
        queue_url: impl Into<String>,
    ) -> Self {
        QueueEndpointConfig {
            access_key_id: access_key_id.into(),
            secret_access_key: secret_access_key.into(),
            region: region.into(),
            queue_url: queue_url.into(),
        }
    }

    /// Loads the endpoint configuration from environment variables:
    /// `AWS_ACCESS_KEY_ID`, `AWS_SECRET_ACCESS_KEY`, `AWS_REGION`
    /// (defaults to `us-east-1` when unset), and `SQS_QUEUE_URL`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(QueueEndpointConfig {
            access_key_id: require_var("AWS_ACCESS_KEY_ID")?,
            secret_access_key: require_var("AWS_SECRET_ACCESS_KEY")?,
            region: env::var("AWS_REGION").unwrap_or_else(|_| DEFAULT_REGION.to_string()),
            queue_url: require_var("SQS_QUEUE_URL")?,
        })
    }

    /// Builds an SQS client bound to this endpoint's credentials and region.
    pub fn build_client(&self) -> aws_sdk_sqs::Client {
        let credentials = aws_sdk_sqs::config::Credentials::new(
            &self.access_key_id,
            &self.secret_access_key,
            None,
            None,
            "queue-endpoint-config",
        );

        let config = aws_sdk_sqs::config::Builder::new()
            .behavior_version(aws_sdk_sqs::config::BehaviorVersion::latest())
            .region(Region::new(self.region.clone()))
            .credentials_provider(SharedCredentialsProvider::new(credentials))
            .build();

        aws_sdk_sqs::Client::from_conf(config)
    }
}

fn require_var(name: &str) -> Result<String, ConfigError> {
    env::var(name).map_err(|_| ConfigError::MissingVariable {
        name: name.to_string(),
    })
}

/// Creates an SQS client from the ambient AWS environment
/// (`AWS_ACCESS_KEY_ID`, `AWS_SECRET_ACCESS_KEY`, `AWS_REGION`,
/// `AWS_PROFILE`, and friends).
///
/// Useful when credentials are managed outside the process; for explicit,
/// self-contained configuration use [`QueueEndpointConfig::build_client`].
pub async fn create_sqs_client_from_env() -> aws_sdk_sqs::Client {
    let config = aws_config::load_from_env().await;
    aws_sdk_sqs::Client::new(&config)
}

#[cfg(test)]
mod tests {
    use super::*;

    // Single test so the shared process environment is only touched from one
    // thread.
    #[test]
    fn loads_endpoint_config_from_env() {
        dotenvy::dotenv().ok();

        unsafe {
            env::remove_var("SQS_QUEUE_URL");
            env::set_var("AWS_ACCESS_KEY_ID", "test-access-key");
            env::set_var("AWS_SECRET_ACCESS_KEY", "test-secret-key");
            env::set_var("AWS_REGION", "eu-west-1");
        }

        let error = QueueEndpointConfig::from_env().unwrap_err();
        assert_eq!(
            error.to_string(),
            "missing required environment variable SQS_QUEUE_URL"
        );

        unsafe {
            env::set_var(
                "SQS_QUEUE_URL",
                "https://sqs.eu-west-1.amazonaws.com/123456789012/orders.fifo",
            );
        }

        let config = QueueEndpointConfig::from_env().unwrap();
        assert_eq!(config.access_key_id, "test-access-key");
        assert_eq!(config.region, "eu-west-1");
        assert_eq!(
            config.queue_url,
            "https://sqs.eu-west-1.amazonaws.com/123456789012/orders.fifo"
        );

        unsafe {
            env::remove_var("AWS_REGION");
        }
        let config = QueueEndpointConfig::from_env().unwrap();
        assert_eq!(config.region, DEFAULT_REGION);
    }

    #[test]
    fn builds_a_client_without_touching_the_network() {
        let config = QueueEndpointConfig::new(
            "test-access-key",
            "test-secret-key",
            "us-east-1",
            "https://sqs.us-east-1.amazonaws.com/123456789012/test-queue",
        );
        // Construction alone must not issue any request.
        let _client = config.build_client();
    }
}
