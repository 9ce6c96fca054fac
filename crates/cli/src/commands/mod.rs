//! Command implementations.

use pugil_admin::{AccessDecision, AdminDataManager, AdminError, check_admin_access};
use pugil_core::storage::{FileStorage, StorageError};
use pugil_core::{CatalogProductId, Notice};
use pugil_storefront::CheckoutError;
use thiserror::Error;

use crate::config::CliConfig;

pub mod cart;
pub mod catalog;
pub mod data;
pub mod orders;
pub mod products;

/// Errors a command can end with.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Bundled data is malformed: {0}")]
    Catalog(#[from] serde_json::Error),

    #[error("No catalog product with id {0}")]
    UnknownProduct(CatalogProductId),

    #[error("{}", .0.notice())]
    Checkout(#[from] CheckoutError),

    #[error("{}", .0.notice())]
    Admin(#[from] AdminError),

    #[error("{notice} (redirect to {redirect_to})")]
    AccessDenied {
        redirect_to: &'static str,
        notice: Notice,
    },
}

/// Open the configured data directory.
pub fn open_storage(config: &CliConfig) -> Result<FileStorage, CommandError> {
    Ok(FileStorage::open(&config.data_dir)?)
}

/// Run the admin gate for the configured identity.
pub fn require_admin(config: &CliConfig) -> Result<(), CommandError> {
    match check_admin_access(&config.identity) {
        AccessDecision::Granted => Ok(()),
        AccessDecision::Denied {
            redirect_to,
            notice,
        } => Err(CommandError::AccessDenied {
            redirect_to,
            notice,
        }),
    }
}

/// Run the admin gate and, if it passes, load the admin data.
///
/// A load fallback notice is logged; the command still runs on the seeds.
pub fn admin_manager(config: &CliConfig) -> Result<AdminDataManager<FileStorage>, CommandError> {
    require_admin(config)?;

    let (manager, notice) = AdminDataManager::load(open_storage(config)?);
    if let Some(notice) = notice {
        report(&notice);
    }
    Ok(manager)
}

/// Log a notice at the level its severity calls for.
pub fn report(notice: &Notice) {
    if notice.is_destructive() {
        tracing::warn!("{notice}");
    } else {
        tracing::info!("{notice}");
    }
}
