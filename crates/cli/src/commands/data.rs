//! `pugil admin options` and `pugil admin reset`.

use pugil_admin::AvailableOptions;
use tracing::info;

use super::{CommandError, admin_manager, report, require_admin};
use crate::config::CliConfig;

/// List the colors and sizes the product form offers.
pub fn options(config: &CliConfig) -> Result<(), CommandError> {
    require_admin(config)?;
    let options = AvailableOptions::bundled()?;
    for color in &options.colors {
        info!("color: {} ({})", color.name, color.value);
    }
    info!("sizes: {}", options.sizes.join(", "));
    Ok(())
}

/// Clear local admin data and restore the defaults.
pub fn reset(config: &CliConfig) -> Result<(), CommandError> {
    let mut manager = admin_manager(config)?;
    let notice = manager.reset()?;
    report(&notice);
    Ok(())
}
