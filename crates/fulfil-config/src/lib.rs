// SPDX-FileCopyrightText: 2026 Fulfil Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration for Fulfil.
//!
//! TOML files and `FULFIL_*` environment variables are merged with Figment,
//! checked with [`validation::validate_config`], and any failure comes back
//! as a list of miette diagnostics ready for [`render_errors`].
//!
//! ```no_run
//! use fulfil_config::load_and_validate;
//!
//! let config = load_and_validate().expect("config errors");
//! println!("schema version: {}", config.webhook.version);
//! ```

pub mod diagnostic;
pub mod loader;
pub mod model;
pub mod validation;

use std::path::Path;

pub use diagnostic::{ConfigError, render_errors};
pub use loader::{load_config, load_config_from_path, load_config_from_str};
pub use model::{FulfilConfig, IdentityConfig, WebhookConfig};

/// Load from the file hierarchy and environment, then validate.
pub fn load_and_validate() -> Result<FulfilConfig, Vec<ConfigError>> {
    finish(loader::load_config(), collect_toml_sources)
}

/// Load and validate an inline TOML document.
pub fn load_and_validate_str(toml_content: &str) -> Result<FulfilConfig, Vec<ConfigError>> {
    finish(loader::load_config_from_str(toml_content), || {
        vec![("<inline>".to_string(), toml_content.to_string())]
    })
}

/// Load and validate one explicit file (plus environment overrides).
pub fn load_and_validate_path(path: &Path) -> Result<FulfilConfig, Vec<ConfigError>> {
    finish(loader::load_config_from_path(path), || {
        std::fs::read_to_string(path)
            .map(|content| vec![(path.display().to_string(), content)])
            .unwrap_or_default()
    })
}

fn finish(
    loaded: Result<FulfilConfig, figment::Error>,
    sources: impl FnOnce() -> Vec<(String, String)>,
) -> Result<FulfilConfig, Vec<ConfigError>> {
    match loaded {
        Ok(config) => {
            validation::validate_config(&config)?;
            tracing::debug!(
                version = %config.webhook.version,
                create_payload_object = config.webhook.create_payload_object,
                "configuration loaded"
            );
            Ok(config)
        }
        Err(err) => Err(diagnostic::figment_to_config_errors(err, &sources())),
    }
}

/// Contents of whichever config files exist, for span lookup.
fn collect_toml_sources() -> Vec<(String, String)> {
    let mut candidates = vec![
        std::env::current_dir()
            .map(|dir| dir.join(loader::LOCAL_CONFIG))
            .unwrap_or_else(|_| loader::LOCAL_CONFIG.into()),
    ];
    candidates.extend(loader::user_config_path());
    candidates.push(loader::SYSTEM_CONFIG.into());

    candidates
        .into_iter()
        .filter_map(|path| {
            let content = std::fs::read_to_string(&path).ok()?;
            Some((path.display().to_string(), content))
        })
        .collect()
}
