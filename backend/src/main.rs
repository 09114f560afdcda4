//! Storefront entry point: configuration, tracing, and server bootstrap.

use std::env;

use actix_web::cookie::Key;
use actix_web::web;
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

use snackshop::inbound::http::health::HealthState;
use snackshop::outbound::persistence::{DbPool, PoolConfig};
use snackshop::server::{ServerConfig, create_server};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let key = load_session_key()?;
    let cookie_secure = env::var("SESSION_COOKIE_SECURE")
        .map(|v| v != "0")
        .unwrap_or(true);
    let bind_addr = env::var("BIND_ADDR")
        .unwrap_or_else(|_| "0.0.0.0:8080".into())
        .parse()
        .map_err(|e| std::io::Error::other(format!("invalid BIND_ADDR: {e}")))?;

    let mut config = ServerConfig::new(key, cookie_secure, bind_addr);
    match env::var("DATABASE_URL") {
        Ok(url) => {
            let pool = DbPool::new(PoolConfig::new(url))
                .await
                .map_err(std::io::Error::other)?;
            config = config.with_db_pool(pool);
        }
        Err(_) => warn!("DATABASE_URL not set; serving fixture data"),
    }

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state, config)?;
    server.await
}

/// Minimum key material accepted; `Key::derive_from` panics below this.
const SESSION_KEY_MIN_BYTES: usize = 64;

fn load_session_key() -> std::io::Result<Key> {
    let key_path =
        env::var("SESSION_KEY_FILE").unwrap_or_else(|_| "/var/run/secrets/session_key".into());
    match std::fs::read(&key_path) {
        Ok(bytes) => key_from_bytes(&bytes, &key_path),
        Err(e) => {
            let allow_dev = env::var("SESSION_ALLOW_EPHEMERAL").ok().as_deref() == Some("1");
            if cfg!(debug_assertions) || allow_dev {
                warn!(path = %key_path, error = %e, "using temporary session key (dev only)");
                Ok(Key::generate())
            } else {
                Err(std::io::Error::other(format!(
                    "failed to read session key at {key_path}: {e}"
                )))
            }
        }
    }
}

fn key_from_bytes(bytes: &[u8], path: &str) -> std::io::Result<Key> {
    if bytes.len() < SESSION_KEY_MIN_BYTES {
        return Err(std::io::Error::other(format!(
            "session key at {path} is too short: {} bytes, need at least {SESSION_KEY_MIN_BYTES}",
            bytes.len()
        )));
    }
    Ok(Key::derive_from(bytes))
}
