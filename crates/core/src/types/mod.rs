//! Core types for PUGIL.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod email;
pub mod id;
pub mod identity;
pub mod notice;
pub mod price;
pub mod status;

pub use email::{Email, EmailError};
pub use id::*;
pub use identity::Identity;
pub use notice::{Notice, Severity};
pub use price::{CurrencyCode, Price, PriceError};
pub use status::OrderStatus;
