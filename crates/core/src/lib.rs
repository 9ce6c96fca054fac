//! PUGIL Core - Shared types and local persistence.
//!
//! This crate provides the pieces used across all PUGIL components:
//! - `storefront` - Cart, catalog and checkout hand-off
//! - `admin` - Product and order management over local storage
//! - `cli` - Command-line front end driving both
//!
//! # Architecture
//!
//! The core crate holds the domain types and the key/value persistence seam.
//! Stores are explicit values handed to whoever needs them; nothing here
//! reaches for global state.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, prices, emails, statuses and notices
//! - [`models`] - Persisted records (products and orders)
//! - [`storage`] - Local key/value storage with JSON helpers

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod models;
pub mod storage;
pub mod types;

pub use models::*;
pub use types::*;
