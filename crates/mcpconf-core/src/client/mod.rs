//! Client metadata for every application mcpconf can render config for.
//!
//! Each client is described by a static [`ClientDescriptor`]:
//! - which syntax family it expects ([`ConfigFormat`])
//! - which transports it can consume (remote HTTP, local stdio)
//! - where its MCP documentation lives
//!
//! The full table lives in [`registry`].

pub mod registry;

use std::fmt;

use serde::Serialize;

use crate::mcp::TransportKind;

pub use registry::{client_slugs, clients_supporting, find_client, list_clients};

/// Syntax family of a client's configuration input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfigFormat {
    /// JSON document
    Json,
    /// Single shell command line
    Cli,
    /// TOML fragment
    Toml,
}

impl ConfigFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            ConfigFormat::Json => "json",
            ConfigFormat::Cli => "cli",
            ConfigFormat::Toml => "toml",
        }
    }
}

impl fmt::Display for ConfigFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Static description of one client application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientDescriptor {
    /// Stable lookup key, e.g. `claude-desktop`
    pub slug: &'static str,
    /// Human-readable name
    #[serde(rename = "name")]
    pub display_name: &'static str,
    /// Syntax family; the concrete shape is chosen per slug
    pub format: ConfigFormat,
    /// Accepts remote (HTTP) servers
    pub supports_remote: bool,
    /// Accepts local (stdio) servers
    pub supports_local: bool,
    /// Link to the client's MCP documentation
    pub docs_url: Option<&'static str>,
}

impl ClientDescriptor {
    /// Check whether this client accepts servers over the given transport.
    pub fn supports(&self, transport: TransportKind) -> bool {
        match transport {
            TransportKind::Remote => self.supports_remote,
            TransportKind::Local => self.supports_local,
        }
    }
}
