use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;

/// Anything that can push a payload onto a named pub/sub channel.
#[async_trait]
pub trait Broker: Send + Sync {
    async fn publish(&self, channel: &str, payload: &str) -> Result<()>;
}

/// Forwards messages to the one configured channel.
pub struct Publisher {
    broker: Arc<dyn Broker>,
    channel: String,
}

impl Publisher {
    pub fn new(broker: Arc<dyn Broker>, channel: impl Into<String>) -> Self {
        Self {
            broker,
            channel: channel.into(),
        }
    }

    pub fn channel(&self) -> &str {
        &self.channel
    }

    pub async fn publish(&self, message: &str) -> Result<()> {
        tracing::info!("publishing: {message}");

        self.broker.publish(&self.channel, message).await
    }
}

pub fn acknowledgement(message: &str) -> String {
    format!("Message published -> {message}")
}

#[cfg(test)]
mod tests {
    use tokio::sync::Mutex;

    use super::*;

    #[derive(Default)]
    struct Recorder {
        sent: Mutex<Vec<(String, String)>>,
    }

    #[async_trait]
    impl Broker for Recorder {
        async fn publish(&self, channel: &str, payload: &str) -> Result<()> {
            self.sent
                .lock()
                .await
                .push((channel.to_string(), payload.to_string()));
            Ok(())
        }
    }

    struct Down;

    #[async_trait]
    impl Broker for Down {
        async fn publish(&self, _channel: &str, _payload: &str) -> Result<()> {
            anyhow::bail!("connection refused")
        }
    }

    #[tokio::test]
    async fn publishes_once_on_configured_channel() {
        let recorder = Arc::new(Recorder::default());
        let publisher = Publisher::new(recorder.clone(), "demo-channel");

        publisher.publish("hello").await.unwrap();

        let sent = recorder.sent.lock().await;
        assert_eq!(
            *sent,
            vec![("demo-channel".to_string(), "hello".to_string())]
        );
    }

    #[tokio::test]
    async fn broker_errors_propagate() {
        let publisher = Publisher::new(Arc::new(Down), "demo-channel");

        let err = publisher.publish("hello").await.unwrap_err();

        assert_eq!(err.to_string(), "connection refused");
    }

    #[test]
    fn acknowledgement_is_plain_concatenation() {
        assert_eq!(acknowledgement("hi"), "Message published -> hi");
        assert_eq!(acknowledgement(""), "Message published -> ");
        assert_eq!(acknowledgement("a&b <c>"), "Message published -> a&b <c>");
    }
}
