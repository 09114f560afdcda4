//! Server construction and middleware wiring.

mod config;

pub use config::ServerConfig;

use std::sync::Arc;

use actix_session::config::PersistentSession;
use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::cookie::time::Duration;
use actix_web::cookie::{Key, SameSite};
use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};

use crate::domain::ports::{
    AccountsQuery, FixtureAccountsQuery, FixtureSnackCatalogue, SnackCatalogue,
};
use crate::inbound::http::health::{HealthState, live, ready};
use crate::inbound::http::pages::{basket, home, register, snack_listing};
use crate::inbound::http::state::HttpState;
use crate::middleware::trace::Trace;
use crate::outbound::persistence::{DieselAccountsQuery, DieselSnackCatalogue};
use crate::outbound::templates::MiniJinjaRenderer;

/// Session cookie lifetime; matches the observed storefront behaviour.
const SESSION_TTL: Duration = Duration::hours(24);

fn build_store_ports(config: &ServerConfig) -> (Arc<dyn AccountsQuery>, Arc<dyn SnackCatalogue>) {
    match &config.db_pool {
        Some(pool) => (
            Arc::new(DieselAccountsQuery::new(pool.clone())),
            Arc::new(DieselSnackCatalogue::new(pool.clone())),
        ),
        None => (
            Arc::new(FixtureAccountsQuery::default()),
            Arc::new(FixtureSnackCatalogue::default()),
        ),
    }
}

#[derive(Clone)]
struct AppDependencies {
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
    key: Key,
    cookie_secure: bool,
}

fn build_app(
    deps: AppDependencies,
) -> App<
    impl ServiceFactory<
            ServiceRequest,
            Config = (),
            Response = ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
> {
    let AppDependencies {
        health_state,
        http_state,
        key,
        cookie_secure,
    } = deps;

    let session = SessionMiddleware::builder(CookieSessionStore::default(), key)
        .cookie_name("session".into())
        .cookie_path("/".into())
        .cookie_secure(cookie_secure)
        .cookie_http_only(true)
        .cookie_same_site(SameSite::Lax)
        .session_lifecycle(PersistentSession::default().session_ttl(SESSION_TTL))
        .build();

    App::new()
        .app_data(health_state)
        .app_data(http_state)
        .wrap(session)
        .wrap(Trace)
        .service(home)
        .service(snack_listing)
        .service(basket)
        .service(register)
        .service(ready)
        .service(live)
}

/// Construct an Actix HTTP server from the provided configuration.
///
/// # Errors
///
/// Propagates [`std::io::Error`] when template compilation, socket binding,
/// or server startup fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let (accounts, snacks) = build_store_ports(&config);
    let renderer = MiniJinjaRenderer::new()
        .map_err(|error| std::io::Error::other(format!("renderer setup failed: {error}")))?;
    let http_state = web::Data::new(HttpState::new(accounts, snacks, Arc::new(renderer)));

    let ServerConfig {
        key,
        cookie_secure,
        bind_addr,
        db_pool: _,
    } = config;

    let server_health_state = health_state.clone();
    let server = HttpServer::new(move || {
        build_app(AppDependencies {
            health_state: server_health_state.clone(),
            http_state: http_state.clone(),
            key: key.clone(),
            cookie_secure,
        })
    })
    .bind(bind_addr)?
    .run();

    health_state.mark_ready();
    Ok(server)
}
