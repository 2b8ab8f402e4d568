//! Service entry-point: loads settings, prepares infrastructure, and serves
//! the REST API.

mod server;

use std::sync::Arc;

use actix_web::web;
use mockable::DefaultClock;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use card_aggregator::domain::CacheWritePolicy;
use card_aggregator::domain::ports::CardListCache;
use card_aggregator::inbound::http::health::HealthState;
use card_aggregator::outbound::cache::{InMemoryCardListCache, RedisCardListCache};
use card_aggregator::outbound::core_banking::CoreBankingHttpSource;
use card_aggregator::outbound::persistence::{DbPool, PoolConfig, run_pending_migrations};
use card_aggregator::settings::CardsSettings;
use server::{ServerConfig, create_server};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = CardsSettings::load_from_iter(std::env::args_os())
        .map_err(|e| std::io::Error::other(format!("failed to load settings: {e}")))?;

    let database_url = settings.database_url()?;
    let pool_max_size = settings.pool_max_size()?;
    run_pending_migrations(database_url)
        .await
        .map_err(std::io::Error::other)?;

    let db_pool = DbPool::new(
        PoolConfig::new(database_url).with_max_size(pool_max_size),
    )
    .await
    .map_err(std::io::Error::other)?;

    let cache = build_cache(settings.redis_url(), pool_max_size).await?;
    let source = CoreBankingHttpSource::new(
        &settings.core_banking_system_url()?,
        settings.upstream_timeout(),
    )
    .map_err(std::io::Error::other)?;

    let write_policy = if settings.strict_cache_writes {
        CacheWritePolicy::Strict
    } else {
        CacheWritePolicy::BestEffort
    };
    let bind_addr = settings.bind_addr()?;
    let config = ServerConfig::new(bind_addr, db_pool, cache, Arc::new(source))
        .with_write_policy(write_policy);

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state.clone(), config)?;
    info!(%bind_addr, ?write_policy, "card aggregator listening");

    let outcome = server.await;
    health_state.mark_unhealthy();
    outcome
}

async fn build_cache(
    redis_url: Option<&str>,
    pool_max_size: u32,
) -> std::io::Result<Arc<dyn CardListCache>> {
    match redis_url {
        Some(url) => {
            let cache = RedisCardListCache::connect(url, pool_max_size)
                .await
                .map_err(|e| std::io::Error::other(format!("failed to connect to Redis: {e}")))?;
            info!("using Redis card list cache");
            Ok(Arc::new(cache))
        }
        None => {
            info!("CARDS_REDIS_URL unset; using in-process card list cache");
            Ok(Arc::new(InMemoryCardListCache::new(Arc::new(DefaultClock))))
        }
    }
}
