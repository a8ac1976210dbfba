use anyhow::Result;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub port: u16,
    pub redis: RedisConfig,
    /// every message lands here, callers never pick it
    pub channel: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RedisConfig {
    pub host: String,
    pub port: u16,
    pub password: Option<String>,
    pub db: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            redis: RedisConfig::default(),
            channel: "demo-channel".into(),
        }
    }
}

impl Default for RedisConfig {
    fn default() -> Self {
        Self {
            host: "localhost".into(),
            port: 6379,
            password: None,
            db: 0,
        }
    }
}

impl RedisConfig {
    pub fn url(&self) -> String {
        match &self.password {
            Some(pass) => format!("redis://:{}@{}:{}/{}", pass, self.host, self.port, self.db),
            None => format!("redis://{}:{}/{}", self.host, self.port, self.db),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let mut config = Config::default();

        if let Ok(port) = std::env::var("PORT") {
            config.port = port.parse()?;
        }
        if let Ok(channel) = std::env::var("PUBLISH_CHANNEL") {
            config.channel = channel;
        }

        if let Ok(redis_host) = std::env::var("REDIS_HOST") {
            config.redis.host = redis_host;
        }
        if let Ok(redis_port) = std::env::var("REDIS_PORT") {
            config.redis.port = redis_port.parse()?;
        }
        if let Ok(redis_pass) = std::env::var("REDIS_PASSWORD") {
            config.redis.password = Some(redis_pass);
        }
        if let Ok(redis_db) = std::env::var("REDIS_DB") {
            config.redis.db = redis_db.parse()?;
        }

        Ok(config)
    }
}
