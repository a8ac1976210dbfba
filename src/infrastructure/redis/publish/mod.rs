use super::RedisConnection;

/// Sends a single `PUBLISH`, returning how many subscribers received it.
pub async fn publish(
    redis: &RedisConnection,
    channel: &str,
    payload: &str,
) -> redis::RedisResult<usize> {
    let (generation, mut conn) = redis.get().await?;

    let result = redis::cmd("PUBLISH")
        .arg(channel)
        .arg(payload)
        .query_async(&mut conn)
        .await;

    if let Err(e) = &result {
        if e.is_io_error() || e.is_connection_dropped() {
            redis.reset(generation).await;
        }
    }

    result
}
