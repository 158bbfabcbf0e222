//! Integration tests against a real Redis container

use std::time::Duration;

use setstore_cache::{ExpiryCache, RedisCache};
use setstore_core::CacheConfig;
use testcontainers::{runners::AsyncRunner, ContainerAsync, GenericImage};

async fn start_redis() -> anyhow::Result<(ContainerAsync<GenericImage>, CacheConfig)> {
    let container = GenericImage::new("redis", "7-alpine").start().await?;
    let port = container.get_host_port_ipv4(6379).await?;

    // Wait for Redis to be ready
    tokio::time::sleep(Duration::from_secs(1)).await;

    Ok((
        container,
        CacheConfig {
            host: "localhost".to_string(),
            port,
        },
    ))
}

#[tokio::test]
#[ignore] // Requires Docker for Redis testcontainer
async fn test_set_with_expiry_then_remaining_expiry() -> anyhow::Result<()> {
    let (_container, config) = start_redis().await?;
    let cache = RedisCache::connect(&config).await?;

    cache.set_with_expiry("theme", "dark", 60).await?;

    let remaining = cache.remaining_expiry("theme").await?.expect("ttl should be set");
    assert!(remaining <= Duration::from_secs(60));
    assert!(remaining > Duration::from_secs(0));

    Ok(())
}

#[tokio::test]
#[ignore] // Requires Docker for Redis testcontainer
async fn test_remaining_expiry_missing_key() -> anyhow::Result<()> {
    let (_container, config) = start_redis().await?;
    let cache = RedisCache::connect(&config).await?;

    assert_eq!(cache.remaining_expiry("never-set").await?, None);
    Ok(())
}

#[tokio::test]
#[ignore] // Requires Docker for Redis testcontainer
async fn test_set_with_expiry_overwrites_previous_ttl() -> anyhow::Result<()> {
    let (_container, config) = start_redis().await?;
    let cache = RedisCache::connect(&config).await?;

    cache.set_with_expiry("theme", "dark", 10).await?;
    cache.set_with_expiry("theme", "dark", 3600).await?;

    let remaining = cache.remaining_expiry("theme").await?.expect("ttl should be set");
    assert!(remaining > Duration::from_secs(10));
    Ok(())
}

#[tokio::test]
async fn test_connect_unreachable_server_fails() {
    let config = CacheConfig {
        host: "127.0.0.1".to_string(),
        port: 1,
    };

    let started = std::time::Instant::now();
    assert!(RedisCache::connect(&config).await.is_err());
    assert!(started.elapsed() < Duration::from_secs(10));
}
