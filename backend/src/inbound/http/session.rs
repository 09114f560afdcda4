//! Session helpers to keep HTTP handlers free of framework-specific logic.
//!
//! Provides a thin wrapper around Actix sessions so handlers only deal with
//! the one domain-relevant question: which account, if any, does this
//! request belong to? The authentication flow that writes the identity
//! lives outside this service.

use actix_session::Session;
use actix_web::{FromRequest, HttpRequest, dev::Payload};
use futures_util::future::LocalBoxFuture;
use tracing::warn;

use crate::domain::AccountId;

pub(crate) const USER_ID_KEY: &str = "user_id";

/// Newtype wrapper exposing the visitor identity carried by the cookie.
#[derive(Clone)]
pub struct SessionContext(Session);

impl SessionContext {
    /// Construct a new wrapper from the underlying Actix session.
    pub fn new(session: Session) -> Self {
        Self(session)
    }

    /// Fetch the visitor's account id, if the session carries one.
    ///
    /// A missing or malformed value is an anonymous visitor, never a hard
    /// failure; every page renders either way.
    pub fn visitor(&self) -> Option<AccountId> {
        match self.0.get::<i32>(USER_ID_KEY) {
            Ok(Some(raw)) => Some(AccountId::new(raw)),
            Ok(None) => None,
            Err(error) => {
                warn!(%error, "unreadable user id in session cookie; treating visitor as anonymous");
                None
            }
        }
    }
}

impl FromRequest for SessionContext {
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let fut = Session::from_request(req, payload);
        Box::pin(async move { fut.await.map(SessionContext::new) })
    }
}
