//! Storefront page handlers.
//!
//! ```text
//! GET /         home
//! GET /snacks   snack listing
//! GET /basket   basket
//! GET /register registration form
//! ```

use actix_web::http::header::ContentType;
use actix_web::{HttpResponse, get, web};

use crate::domain::{Page, ViewModel};
use crate::inbound::http::ApiResult;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;

fn html(body: String) -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(body)
}

/// Home page; no page-specific data.
#[get("/")]
pub async fn home(state: web::Data<HttpState>, session: SessionContext) -> ApiResult<HttpResponse> {
    let body = state
        .resolver
        .render_for_visitor(session.visitor(), Page::Home, ViewModel::new())
        .await?;
    Ok(html(body))
}

/// Full snack catalogue, unfiltered and unpaginated.
#[get("/snacks")]
pub async fn snack_listing(
    state: web::Data<HttpState>,
    session: SessionContext,
) -> ApiResult<HttpResponse> {
    let snacks = state.snacks.list_snacks().await?;
    let mut model = ViewModel::new();
    model.insert("snacks", &snacks)?;
    let body = state
        .resolver
        .render_for_visitor(session.visitor(), Page::Snacks, model)
        .await?;
    Ok(html(body))
}

/// Basket page. Shows the same catalogue read as the listing page; per-visitor
/// selections are not persisted.
#[get("/basket")]
pub async fn basket(
    state: web::Data<HttpState>,
    session: SessionContext,
) -> ApiResult<HttpResponse> {
    let snacks = state.snacks.list_snacks().await?;
    let mut model = ViewModel::new();
    model.insert("snacks", &snacks)?;
    let body = state
        .resolver
        .render_for_visitor(session.visitor(), Page::Basket, model)
        .await?;
    Ok(html(body))
}

/// Registration form. Renders without session identity; this page never
/// shows the visitor's name.
#[get("/register")]
pub async fn register(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    let body = state.renderer.render(Page::Register, &ViewModel::new())?;
    Ok(html(body))
}
