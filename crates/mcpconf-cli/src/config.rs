//! User configuration and server input files.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use indexmap::IndexMap;
use serde::Deserialize;

use mcpconf_core::client::find_client;
use mcpconf_core::mcp::McpServer;

/// Contents of `config.toml`.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct UserConfig {
    /// Default target clients for `render`
    pub clients: Vec<String>,
    /// Named server presets for `render --server`
    pub servers: Vec<McpServer>,
}

impl UserConfig {
    /// Load from `path`, or from the default location when `None`.
    ///
    /// A missing file at the default location yields an empty config; an
    /// explicitly requested file must exist.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let (path, explicit) = match path {
            Some(p) => (p.to_path_buf(), true),
            None => (default_config_path()?, false),
        };

        if !path.exists() {
            if explicit {
                anyhow::bail!("Config file not found: {}", path.display());
            }
            tracing::debug!("No config file at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::parse_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    pub fn parse_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;

        let mut seen = HashSet::new();
        for server in &config.servers {
            if !seen.insert(server.name()) {
                anyhow::bail!("Duplicate server preset: {}", server.name());
            }
        }

        Ok(config)
    }

    /// Default target clients, skipping slugs that are not registered.
    pub fn default_clients(&self) -> Vec<String> {
        self.clients
            .iter()
            .filter(|slug| {
                let known = find_client(slug).is_some();
                if !known {
                    tracing::warn!("Ignoring unknown client '{}' in config", slug);
                }
                known
            })
            .cloned()
            .collect()
    }

    /// Look up a server preset by name.
    pub fn server(&self, name: &str) -> Option<&McpServer> {
        self.servers.iter().find(|s| s.name() == name)
    }
}

/// `<config_dir>/mcpconf/config.toml`
pub fn default_config_path() -> Result<PathBuf> {
    let dir = dirs::config_dir()
        .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;
    Ok(dir.join("mcpconf").join("config.toml"))
}

/// Read a server description from a `.json` or `.toml` file.
pub fn load_server_file(path: &Path) -> Result<McpServer> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read server file: {}", path.display()))?;

    let server = match path.extension().and_then(|e| e.to_str()) {
        Some("toml") => toml::from_str(&content).map_err(anyhow::Error::from),
        Some("json") | None => serde_json::from_str(&content).map_err(anyhow::Error::from),
        Some(other) => anyhow::bail!(
            "Unsupported server file extension '.{}' (expected .json or .toml)",
            other
        ),
    };
    server.with_context(|| format!("Failed to parse server file: {}", path.display()))
}

/// Parse `KEY=VALUE` pairs into an ordered map.
pub fn parse_key_values(pairs: &[String], label: &str) -> Result<IndexMap<String, String>> {
    let mut map = IndexMap::new();
    for pair in pairs {
        let (key, value) = pair.split_once('=').ok_or_else(|| {
            anyhow::anyhow!("Invalid {} entry (expected KEY=VALUE): {}", label, pair)
        })?;
        if key.is_empty() {
            anyhow::bail!("Invalid {} entry (empty key): {}", label, pair);
        }
        map.insert(key.to_string(), value.to_string());
    }
    Ok(map)
}
