//! Unified error handling for admin.
//!
//! Every variant maps to a [`Notice`]. Storage failures are logged in full
//! and shown as a generic message; everything else is safe to show as is.

use pugil_core::storage::StorageError;
use pugil_core::{Notice, OrderId, ProductId};
use thiserror::Error;

/// Error type for admin data operations.
#[derive(Debug, Error)]
pub enum AdminError {
    /// Required form fields are missing.
    #[error("Validation error: {0}")]
    Validation(String),

    /// No product with this id.
    #[error("Product not found: {0}")]
    ProductNotFound(ProductId),

    /// No order with this id.
    #[error("Order not found: {0}")]
    OrderNotFound(OrderId),

    /// The delivery code does not match, or the order has none.
    #[error("Invalid delivery code")]
    InvalidDeliveryCode,

    /// Local storage failed.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

impl AdminError {
    /// User-facing notice for this error.
    #[must_use]
    pub fn notice(&self) -> Notice {
        match self {
            Self::Validation(message) => Notice::destructive("Erro", message.clone()),
            Self::ProductNotFound(id) => {
                Notice::destructive("Não encontrado", format!("Produto não encontrado: {id}"))
            }
            Self::OrderNotFound(id) => {
                Notice::destructive("Não encontrado", format!("Pedido não encontrado: {id}"))
            }
            Self::InvalidDeliveryCode => Notice::destructive(
                "Código inválido",
                "Código de entrega inválido. Verifique e tente novamente.",
            ),
            Self::Storage(e) => {
                tracing::error!(error = %e, "Admin storage failure");
                Notice::destructive("Erro", "Não foi possível guardar os dados locais.")
            }
        }
    }
}

/// Result type alias for `AdminError`.
pub type Result<T> = std::result::Result<T, AdminError>;
