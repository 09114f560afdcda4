//! Shared fixtures for HTTP handler tests.

use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::cookie::Key;

/// Cookie-session middleware matching the storefront's production settings,
/// minus the `Secure` flag so plain-HTTP test requests keep their cookie.
///
/// Generates a throwaway key per call; cookies from one test app are
/// unreadable in another.
pub fn test_session_middleware() -> SessionMiddleware<CookieSessionStore> {
    session_middleware_with_key(Key::generate())
}

/// Same middleware with a caller-provided key, for tests that replay a
/// `user_id` cookie across separately built apps.
pub fn session_middleware_with_key(key: Key) -> SessionMiddleware<CookieSessionStore> {
    SessionMiddleware::builder(CookieSessionStore::default(), key)
        .cookie_name("session".to_owned())
        .cookie_secure(false)
        .build()
}
