use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use redis::{Client, RedisResult, aio::MultiplexedConnection};
use tokio::sync::Mutex;

use crate::{config::RedisConfig, usecases::publish::Broker};

pub mod publish;

pub type RedisConnectionManager = Arc<RedisConnection>;

/// Lazily connected multiplexed connection.
///
/// The socket is opened on first use, so the service starts even when the
/// broker is down; requests fail until it comes back.
pub struct RedisConnection {
    client: Client,
    slot: Mutex<Slot>,
}

/// Every fresh connection bumps `generation`, so a failure seen on an old
/// connection cannot evict a newer one.
#[derive(Default)]
struct Slot {
    generation: u64,
    connection: Option<MultiplexedConnection>,
}

impl RedisConnection {
    /// Returns the cached connection and its generation, connecting if needed.
    pub async fn get(&self) -> RedisResult<(u64, MultiplexedConnection)> {
        let mut slot = self.slot.lock().await;

        if let Some(conn) = slot.connection.as_ref() {
            return Ok((slot.generation, conn.clone()));
        }

        let conn = self.client.get_multiplexed_async_connection().await?;
        slot.generation += 1;
        slot.connection = Some(conn.clone());

        tracing::info!("connected to redis (generation {})", slot.generation);

        Ok((slot.generation, conn))
    }

    /// drops the cached connection if it is still `generation`
    pub async fn reset(&self, generation: u64) {
        let mut slot = self.slot.lock().await;

        if slot.generation == generation && slot.connection.take().is_some() {
            tracing::warn!("dropped redis connection (generation {generation})");
        }
    }
}

pub fn create_connection(config: &RedisConfig) -> Result<RedisConnectionManager> {
    let client = Client::open(config.url())?;

    Ok(Arc::new(RedisConnection {
        client,
        slot: Mutex::new(Slot::default()),
    }))
}

#[async_trait]
impl Broker for RedisConnection {
    async fn publish(&self, channel: &str, payload: &str) -> Result<()> {
        let receivers = publish::publish(self, channel, payload).await?;

        tracing::debug!("{channel} delivered to {receivers} subscriber(s)");

        Ok(())
    }
}
