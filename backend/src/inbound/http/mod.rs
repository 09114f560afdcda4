//! HTTP inbound adapter exposing the storefront pages.

pub mod error;
pub mod health;
pub mod pages;
pub mod session;
pub mod state;
#[cfg(test)]
pub mod test_utils;

pub use error::ApiResult;
