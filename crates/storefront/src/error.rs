//! Storefront error type.
//!
//! Every variant maps to a [`Notice`] for the shopper. Storage failures are
//! logged in full but shown as a generic message.

use pugil_core::Notice;
use pugil_core::storage::StorageError;
use thiserror::Error;

/// Errors raised by checkout.
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// Nobody is signed in.
    #[error("sign-in required to check out")]
    NotSignedIn,

    /// Nothing to buy.
    #[error("cart is empty")]
    EmptyCart,

    /// Local storage failed.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
}

impl CheckoutError {
    /// User-facing notice for this error.
    #[must_use]
    pub fn notice(&self) -> Notice {
        match self {
            Self::NotSignedIn => Notice::destructive(
                "Atenção",
                "Precisas de entrar com a tua conta para fazer a compra.",
            ),
            Self::EmptyCart => Notice::info(
                "Carrinho vazio",
                "Adicione produtos ao carrinho antes de finalizar a compra.",
            ),
            Self::Storage(e) => {
                tracing::error!(error = %e, "Checkout storage failure");
                Notice::destructive("Erro", "Não foi possível guardar o pedido. Tente novamente.")
            }
        }
    }
}

/// Result type alias for checkout operations.
pub type Result<T> = std::result::Result<T, CheckoutError>;

#[cfg(test)]
mod tests {
    use pugil_core::Severity;

    use super::*;

    #[test]
    fn test_checkout_error_display() {
        assert_eq!(CheckoutError::EmptyCart.to_string(), "cart is empty");
        assert_eq!(
            CheckoutError::NotSignedIn.to_string(),
            "sign-in required to check out"
        );
    }

    #[test]
    fn test_checkout_error_notices() {
        assert_eq!(
            CheckoutError::NotSignedIn.notice().severity,
            Severity::Destructive
        );
        assert_eq!(CheckoutError::EmptyCart.notice().severity, Severity::Default);
        assert_eq!(CheckoutError::EmptyCart.notice().title, "Carrinho vazio");
        assert_eq!(
            CheckoutError::NotSignedIn.notice().to_string(),
            "Atenção: Precisas de entrar com a tua conta para fazer a compra."
        );

        let storage = CheckoutError::Storage(StorageError::InvalidKey("x/y".to_owned()));
        // Internal details stay out of the notice
        assert!(!storage.notice().description.contains("x/y"));
    }
}
