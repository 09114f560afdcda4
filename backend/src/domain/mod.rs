//! Domain types, errors, and ports for the storefront core.

pub mod account;
pub mod error;
pub mod page;
pub mod ports;
pub mod resolver;
pub mod snack;
pub mod view_model;

pub use account::{Account, AccountId};
pub use error::{Error, ErrorCode};
pub use page::Page;
pub use resolver::PageResolver;
pub use snack::Snack;
pub use view_model::ViewModel;
