//! Diesel table definitions for the storefront schema.
//!
//! Both relations are owned by the external registration and catalogue
//! tooling; this service only reads them.

diesel::table! {
    /// Registered accounts, written by the external registration flow.
    accounts (userid) {
        /// Primary key.
        userid -> Int4,
        /// Login email; assumed unique by the registration flow.
        email -> Varchar,
        /// Display name shown in the page chrome.
        name -> Varchar,
    }
}

diesel::table! {
    /// Snack catalogue.
    snacks (id) {
        /// Primary key.
        id -> Int4,
        name -> Varchar,
        description -> Text,
        /// Unit price in cents.
        price_cents -> Int4,
    }
}
