// SPDX-FileCopyrightText: 2026 Fulfil Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Layered loading with Figment.
//!
//! Lookup order, later layers winning: compiled defaults,
//! `/etc/fulfil/fulfil.toml`, `~/.config/fulfil/fulfil.toml`, `./fulfil.toml`,
//! then `FULFIL_*` environment variables.

#![allow(clippy::result_large_err)] // figment::Error is external

use std::path::{Path, PathBuf};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};

use crate::model::FulfilConfig;

pub(crate) const SYSTEM_CONFIG: &str = "/etc/fulfil/fulfil.toml";
pub(crate) const LOCAL_CONFIG: &str = "fulfil.toml";

/// `~/.config/fulfil/fulfil.toml`, when the platform has a config dir.
pub(crate) fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("fulfil/fulfil.toml"))
}

/// Load from the full file hierarchy plus environment overrides.
pub fn load_config() -> Result<FulfilConfig, figment::Error> {
    build_figment().extract()
}

/// Load from an inline TOML document over the defaults. No files, no env.
pub fn load_config_from_str(toml_content: &str) -> Result<FulfilConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(FulfilConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load a single explicit file, still honouring environment overrides.
pub fn load_config_from_path(path: &Path) -> Result<FulfilConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(FulfilConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// The unextracted figment behind [`load_config`].
pub fn build_figment() -> Figment {
    Figment::new()
        .merge(Serialized::defaults(FulfilConfig::default()))
        .merge(Toml::file(SYSTEM_CONFIG))
        .merge(Toml::file(user_config_path().unwrap_or_default()))
        .merge(Toml::file(LOCAL_CONFIG))
        .merge(env_provider())
}

/// `FULFIL_WEBHOOK_CREATE_PAYLOAD_OBJECT` maps to
/// `webhook.create_payload_object`. Only the section prefix is split, since
/// key names themselves contain underscores.
fn env_provider() -> Env {
    Env::prefixed("FULFIL_").map(|key| section_key(key.as_str()).into())
}

pub(crate) fn section_key(env_key: &str) -> String {
    env_key
        .to_ascii_lowercase()
        .replacen("webhook_", "webhook.", 1)
        .replacen("identity_", "identity.", 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_keys_split_only_the_section() {
        assert_eq!(
            section_key("WEBHOOK_CREATE_PAYLOAD_OBJECT"),
            "webhook.create_payload_object"
        );
        assert_eq!(section_key("identity_client_id"), "identity.client_id");
    }
}
