//! MCP server description accepted by every config renderer.

use std::fmt;
use std::str::FromStr;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// How a client reaches an MCP server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransportKind {
    /// Network endpoint (HTTP).
    Remote,
    /// Locally spawned process speaking over stdio.
    Local,
}

impl TransportKind {
    pub fn as_str(self) -> &'static str {
        match self {
            TransportKind::Remote => "remote",
            TransportKind::Local => "local",
        }
    }

    /// Human label used in error messages, e.g. `remote (HTTP)`.
    pub fn label(self) -> &'static str {
        match self {
            TransportKind::Remote => "remote (HTTP)",
            TransportKind::Local => "local (stdio)",
        }
    }
}

impl fmt::Display for TransportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransportKind {
    type Err = anyhow::Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_lowercase().as_str() {
            "remote" | "http" => Ok(TransportKind::Remote),
            "local" | "stdio" => Ok(TransportKind::Local),
            _ => anyhow::bail!(
                "Invalid transport: '{}'. Valid values: remote, local (or http, stdio)",
                value
            ),
        }
    }
}

/// An MCP server, either remote (HTTP) or local (stdio).
///
/// Serialized with a `type` tag so JSON or TOML input reads like the
/// configs it gets turned into:
///
/// ```json
/// { "type": "http", "name": "docs", "url": "https://example.com/mcp" }
/// { "type": "stdio", "name": "fs", "command": "npx", "args": ["-y", "@mcp/fs"] }
/// ```
///
/// Header and environment maps keep the order they were given in; every
/// renderer emits them in that order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum McpServer {
    Http {
        name: String,
        url: String,
        #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
        headers: IndexMap<String, String>,
    },
    Stdio {
        name: String,
        command: String,
        #[serde(default)]
        args: Vec<String>,
        #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
        env: IndexMap<String, String>,
    },
}

impl McpServer {
    pub fn http(
        name: impl Into<String>,
        url: impl Into<String>,
        headers: IndexMap<String, String>,
    ) -> Self {
        McpServer::Http {
            name: name.into(),
            url: url.into(),
            headers,
        }
    }

    pub fn stdio(
        name: impl Into<String>,
        command: impl Into<String>,
        args: Vec<String>,
        env: IndexMap<String, String>,
    ) -> Self {
        McpServer::Stdio {
            name: name.into(),
            command: command.into(),
            args,
            env,
        }
    }

    /// Server name, used both as display key and as config key.
    pub fn name(&self) -> &str {
        match self {
            McpServer::Http { name, .. } | McpServer::Stdio { name, .. } => name,
        }
    }

    pub fn transport(&self) -> TransportKind {
        match self {
            McpServer::Http { .. } => TransportKind::Remote,
            McpServer::Stdio { .. } => TransportKind::Local,
        }
    }
}
