use mongodb::Client;
use std::time::{Duration, Instant};

use super::connector::{MongoError, ping};

/// Result of a timed MongoDB health probe
#[derive(Debug, Clone)]
pub struct HealthStatus {
    pub healthy: bool,
    /// Error details when unhealthy
    pub message: Option<String>,
    pub latency: Duration,
}

/// Health check with latency and error details
pub async fn check_health_detailed(client: &Client) -> HealthStatus {
    let start = Instant::now();
    let result = ping(client).await;
    let latency = start.elapsed();

    match result {
        Ok(()) => HealthStatus {
            healthy: true,
            message: None,
            latency,
        },
        Err(e) => {
            tracing::warn!(error = %e, ?latency, "MongoDB health check failed");
            HealthStatus {
                healthy: false,
                message: Some(e.to_string()),
                latency,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::options::ClientOptions;

    #[tokio::test]
    async fn test_unreachable_server_is_unhealthy() {
        let mut options = ClientOptions::parse("mongodb://127.0.0.1:1").await.unwrap();
        options.server_selection_timeout = Some(Duration::from_millis(200));
        let client = Client::with_options(options).unwrap();

        let status = check_health_detailed(&client).await;

        assert!(!status.healthy);
        assert!(status.message.is_some());
    }
}
