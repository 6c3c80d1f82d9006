//! Full configuration validation.
//!
//! Each domain has its own submodule; this orchestrator calls them all
//! and collects errors into a single `ConfigError`.

mod appearance;
mod helpers;
mod panels;


use crate::schema::SideNavConfig;
use sidenav_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &SideNavConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    panels::validate_panels(&mut errors, config);
    appearance::validate_content(&mut errors, config);
    appearance::validate_shadow(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
