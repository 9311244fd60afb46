//! Environment-driven settings.
//!
//! Settings are read from process environment variables after `.env.local` /
//! `.env` have been loaded by the binary. Every variable is optional.
//!
//! | Variable | Meaning | Default |
//! |----------|---------|---------|
//! | `BOOTSY_EDITOR_OPTIONS` | JSON object of editor flags, layered over the classic set | classic set |
//! | `BOOTSY_DATABASE` | SQLite file holding galleries | `bootsy.db` |
//! | `SERVER_HOST` | Bind address | `0.0.0.0` |
//! | `SERVER_PORT` / `PORT` | Bind port | `3000` |

use bootsy_domain::{DomainError, EditorFeatures};
use serde::{Deserialize, Serialize};

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("{var} is not valid: {source}")]
    InvalidEditorOptions {
        var: &'static str,
        #[source]
        source: DomainError,
    },
    #[error("{var} must be a port number, got {value:?}")]
    InvalidPort { var: &'static str, value: String },
}

/// Process-wide configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BootsySettings {
    /// Default editor flags applied to every editor field
    pub editor_options: EditorFeatures,
    pub database_path: String,
    pub server_host: String,
    pub server_port: u16,
}

impl Default for BootsySettings {
    fn default() -> Self {
        Self {
            editor_options: EditorFeatures::classic(),
            database_path: "bootsy.db".into(),
            server_host: "0.0.0.0".into(),
            server_port: 3000,
        }
    }
}

impl BootsySettings {
    pub fn from_env() -> Result<Self, SettingsError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, SettingsError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut settings = Self::default();

        if let Some(raw) = non_empty(lookup("BOOTSY_EDITOR_OPTIONS")) {
            let overrides = EditorFeatures::from_json(&raw).map_err(|source| {
                SettingsError::InvalidEditorOptions {
                    var: "BOOTSY_EDITOR_OPTIONS",
                    source,
                }
            })?;
            settings.editor_options = settings.editor_options.merged_with(&overrides);
        }

        if let Some(path) = non_empty(lookup("BOOTSY_DATABASE")) {
            settings.database_path = path;
        }

        if let Some(host) = non_empty(lookup("SERVER_HOST")) {
            settings.server_host = host;
        }

        let port_var = ["SERVER_PORT", "PORT"]
            .into_iter()
            .find_map(|var| non_empty(lookup(var)).map(|value| (var, value)));
        if let Some((var, value)) = port_var {
            settings.server_port = value
                .parse()
                .map_err(|_| SettingsError::InvalidPort { var, value })?;
        }

        Ok(settings)
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
