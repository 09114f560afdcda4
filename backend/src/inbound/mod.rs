//! Inbound adapters driving the storefront core.

pub mod http;
