//! Success notices for admin operations.
//!
//! Failures carry their own notice through [`crate::AdminError::notice`].

use pugil_core::{Notice, OrderStatus};

#[must_use]
pub fn product_added() -> Notice {
    Notice::info(
        "Sucesso",
        "Produto adicionado com sucesso! O produto já está disponível no catálogo.",
    )
}

#[must_use]
pub fn product_updated() -> Notice {
    Notice::info(
        "Sucesso",
        "Produto atualizado com sucesso! As alterações já estão disponíveis no catálogo.",
    )
}

#[must_use]
pub fn product_deleted() -> Notice {
    Notice::info(
        "Sucesso",
        "Produto excluído com sucesso! O produto foi removido do catálogo.",
    )
}

#[must_use]
pub fn status_updated(status: OrderStatus) -> Notice {
    Notice::info("Sucesso", format!("Status do pedido atualizado para: {status}"))
}

#[must_use]
pub fn order_verified() -> Notice {
    Notice::info(
        "Pedido verificado",
        "Código de entrega confirmado. Pedido marcado como concluído.",
    )
}

#[must_use]
pub fn data_reset() -> Notice {
    Notice::info(
        "Dados resetados",
        "Os dados locais foram resetados para os valores padrão.",
    )
}

/// Shown when stored data could not be read and the seeds are used instead.
#[must_use]
pub fn load_fallback() -> Notice {
    Notice::destructive("Erro", "Erro ao carregar dados. Usando dados padrão.")
}
