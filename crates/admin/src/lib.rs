//! PUGIL Admin library.
//!
//! Product and order management over local storage, for the admin panel.
//!
//! # Security
//!
//! The [`access`] gate only decides whether the admin screens are shown.
//! It trusts client-supplied profile fields and is not an authorization
//! boundary; anyone with access to the local data directory can edit the
//! collections directly.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod access;
pub mod error;
pub mod manager;
pub mod notices;
pub mod options;
pub mod orders;
pub mod products;
pub mod seed;

pub use access::{AccessDecision, check_admin_access};
pub use error::AdminError;
pub use manager::AdminDataManager;
pub use options::{AvailableOptions, ColorOption};
pub use products::ProductForm;
