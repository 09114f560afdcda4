//! HTTP adapter mapping for domain errors.
//!
//! Keeps the domain error type HTTP-agnostic while guaranteeing every
//! failed request still receives an explicit HTML response with a correct
//! status code. Server-side detail is redacted from client-facing copy.

use actix_web::http::StatusCode;
use actix_web::http::header::ContentType;
use actix_web::{HttpResponse, ResponseError};
use tracing::error;

use crate::domain::{Error, ErrorCode};

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
        ErrorCode::Unauthorized => StatusCode::UNAUTHORIZED,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn client_message(err: &Error) -> &str {
    match err.code() {
        ErrorCode::ServiceUnavailable => "The snack store is temporarily unreachable.",
        ErrorCode::InternalError => "Something went wrong on our side.",
        _ => err.message(),
    }
}

fn error_page(status: StatusCode, message: &str) -> String {
    let reason = status.canonical_reason().unwrap_or("Error");
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n  <head><meta charset=\"utf-8\"><title>{code} {reason}</title></head>\n  <body>\n    <h1>{code} {reason}</h1>\n    <p>{message}</p>\n    <p><a href=\"/\">Back to the shop</a></p>\n  </body>\n</html>\n",
        code = status.as_u16(),
    )
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        if status.is_server_error() {
            error!(code = ?self.code(), message = %self.message(), "request failed");
        }
        HttpResponse::build(status)
            .content_type(ContentType::html())
            .body(error_page(status, client_message(self)))
    }
}
