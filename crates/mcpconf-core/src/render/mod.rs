//! Config renderers, grouped by syntax family.
//!
//! A client slug maps to exactly one [`ConfigShape`]; each shape names the
//! builder that produces that client's text.

pub mod cli;
pub mod json;
pub mod toml;

use crate::client::ConfigFormat;
use crate::error::TransformError;
use crate::mcp::McpServer;

/// The concrete document or command a client expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigShape {
    /// `mcpServers` map with `url` / `command` leaves
    Standard,
    /// `mcp.servers` with a `type` field per entry
    VsCode,
    /// `mcpServers` with `serverUrl` for remote entries
    ServerUrl,
    /// `mcpServers` with `type: "streamable-http"` for remote entries
    StreamableHttp,
    /// `mcpServers` with `httpUrl` for remote entries
    HttpUrl,
    Zed,
    Augment,
    OpenCode,
    VisualStudio,
    Warp,
    Perplexity,
    ClaudeCodeCli,
    AmpCli,
    FactoryCli,
    RovoDevCli,
    CodexToml,
}

impl ConfigShape {
    /// Look up the shape for a client slug.
    pub fn for_slug(slug: &str) -> Option<Self> {
        let shape = match slug {
            "claude-desktop" | "cursor" | "jetbrains" | "kiro" | "amazon-q" | "lm-studio"
            | "trae" | "boltai" | "crush" => Self::Standard,
            "vs-code" | "copilot-coding-agent" | "copilot-cli" => Self::VsCode,
            "windsurf" | "google-antigravity" => Self::ServerUrl,
            "cline" | "kilo-code" | "roo-code" => Self::StreamableHttp,
            "gemini-cli" | "qwen-coder" => Self::HttpUrl,
            "zed" => Self::Zed,
            "augment-code" => Self::Augment,
            "opencode" => Self::OpenCode,
            "visual-studio" => Self::VisualStudio,
            "warp" => Self::Warp,
            "perplexity-desktop" => Self::Perplexity,
            "claude-code" => Self::ClaudeCodeCli,
            "amp" => Self::AmpCli,
            "factory" => Self::FactoryCli,
            "rovo-dev" => Self::RovoDevCli,
            "openai-codex" => Self::CodexToml,
            _ => return None,
        };
        Some(shape)
    }

    /// Syntax family this shape produces.
    pub fn format(self) -> ConfigFormat {
        match self {
            Self::ClaudeCodeCli | Self::AmpCli | Self::FactoryCli | Self::RovoDevCli => {
                ConfigFormat::Cli
            }
            Self::CodexToml => ConfigFormat::Toml,
            _ => ConfigFormat::Json,
        }
    }

    /// Render the server in this shape.
    pub fn render(self, server: &McpServer) -> Result<String, TransformError> {
        let text = match self {
            Self::Standard => json::standard(server)?,
            Self::VsCode => json::vscode(server)?,
            Self::ServerUrl => json::server_url(server)?,
            Self::StreamableHttp => json::streamable_http(server)?,
            Self::HttpUrl => json::http_url(server)?,
            Self::Zed => json::zed(server)?,
            Self::Augment => json::augment(server)?,
            Self::OpenCode => json::opencode(server)?,
            Self::VisualStudio => json::visual_studio(server)?,
            Self::Warp => json::warp(server)?,
            Self::Perplexity => json::perplexity(server)?,
            Self::ClaudeCodeCli => cli::claude_code(server),
            Self::AmpCli => cli::amp(server),
            Self::FactoryCli => cli::factory(server),
            Self::RovoDevCli => cli::rovo_dev(server),
            Self::CodexToml => self::toml::codex(server),
        };
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::list_clients;

    #[test]
    fn test_every_client_has_a_shape() {
        for client in list_clients() {
            assert!(
                ConfigShape::for_slug(client.slug).is_some(),
                "{} has no shape",
                client.slug
            );
        }
    }

    #[test]
    fn test_shape_family_matches_registry() {
        for client in list_clients() {
            let shape = ConfigShape::for_slug(client.slug).expect("shape exists");
            assert_eq!(shape.format(), client.format, "{}", client.slug);
        }
    }

    #[test]
    fn test_unknown_slug_has_no_shape() {
        assert_eq!(ConfigShape::for_slug("nonexistent"), None);
        assert_eq!(ConfigShape::for_slug("VS-Code"), None);
    }

    #[test]
    fn test_shared_shapes() {
        assert_eq!(ConfigShape::for_slug("cursor"), Some(ConfigShape::Standard));
        assert_eq!(ConfigShape::for_slug("copilot-cli"), Some(ConfigShape::VsCode));
        assert_eq!(
            ConfigShape::for_slug("google-antigravity"),
            Some(ConfigShape::ServerUrl)
        );
        assert_eq!(
            ConfigShape::for_slug("roo-code"),
            Some(ConfigShape::StreamableHttp)
        );
        assert_eq!(ConfigShape::for_slug("qwen-coder"), Some(ConfigShape::HttpUrl));
    }
}
