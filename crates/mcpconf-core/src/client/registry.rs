//! Client registry: the fixed table of known clients.
//!
//! The registry is a `static` slice built at compile time. Lookups never
//! fail; an unknown slug is simply `None`.

use crate::mcp::TransportKind;

use super::ConfigFormat::{Cli, Json, Toml};
use super::{ClientDescriptor, ConfigFormat};

const fn client(
    slug: &'static str,
    display_name: &'static str,
    format: ConfigFormat,
    supports_remote: bool,
    supports_local: bool,
    docs_url: Option<&'static str>,
) -> ClientDescriptor {
    ClientDescriptor {
        slug,
        display_name,
        format,
        supports_remote,
        supports_local,
        docs_url,
    }
}

static CLIENTS: &[ClientDescriptor] = &[
    // JSON
    client(
        "claude-desktop",
        "Claude Desktop",
        Json,
        true,
        true,
        Some("https://modelcontextprotocol.io/quickstart/user"),
    ),
    client(
        "cursor",
        "Cursor",
        Json,
        true,
        true,
        Some("https://docs.cursor.com/context/model-context-protocol"),
    ),
    client(
        "windsurf",
        "Windsurf",
        Json,
        true,
        true,
        Some("https://docs.windsurf.com/windsurf/mcp"),
    ),
    client(
        "vs-code",
        "VS Code",
        Json,
        true,
        true,
        Some("https://code.visualstudio.com/docs/copilot/chat/mcp-servers"),
    ),
    client(
        "cline",
        "Cline",
        Json,
        true,
        true,
        Some("https://docs.cline.bot/mcp-servers/configuring-mcp-servers"),
    ),
    client(
        "zed",
        "Zed",
        Json,
        false,
        true,
        Some("https://zed.dev/docs/assistant/context-servers"),
    ),
    client("jetbrains", "JetBrains IDEs", Json, true, true, None),
    client("amazon-q", "Amazon Q", Json, true, true, None),
    client("lm-studio", "LM Studio", Json, true, true, None),
    client("kilo-code", "Kilo Code", Json, true, true, None),
    client("roo-code", "Roo Code", Json, true, true, None),
    client("gemini-cli", "Gemini CLI", Json, true, true, None),
    client("qwen-coder", "Qwen Coder", Json, true, true, None),
    client("augment-code", "Augment Code", Json, false, true, None),
    client("opencode", "OpenCode", Json, true, true, None),
    client("visual-studio", "Visual Studio", Json, true, true, None),
    client("warp", "Warp", Json, false, true, None),
    client("perplexity-desktop", "Perplexity Desktop", Json, false, true, None),
    client("copilot-coding-agent", "Copilot Coding Agent", Json, true, true, None),
    client("copilot-cli", "Copilot CLI", Json, true, true, None),
    client("google-antigravity", "Google Antigravity", Json, true, true, None),
    client("kiro", "Kiro", Json, true, true, None),
    client("trae", "Trae", Json, true, true, None),
    client("boltai", "BoltAI", Json, true, true, None),
    client("crush", "Crush", Json, true, true, None),
    // CLI
    client(
        "claude-code",
        "Claude Code",
        Cli,
        true,
        true,
        Some("https://docs.anthropic.com/en/docs/claude-code/mcp"),
    ),
    client("amp", "Amp", Cli, true, true, None),
    client("factory", "Factory (Droid)", Cli, true, true, None),
    client("rovo-dev", "Rovo Dev", Cli, false, true, None),
    // TOML
    client("openai-codex", "OpenAI Codex CLI", Toml, true, true, None),
];

/// Get all registered clients, in registry order.
pub fn list_clients() -> &'static [ClientDescriptor] {
    CLIENTS
}

/// Get a client by slug (exact, case-sensitive match).
pub fn find_client(slug: &str) -> Option<&'static ClientDescriptor> {
    CLIENTS.iter().find(|c| c.slug == slug)
}

/// Get clients that accept servers over the given transport.
pub fn clients_supporting(transport: TransportKind) -> Vec<&'static ClientDescriptor> {
    CLIENTS.iter().filter(|c| c.supports(transport)).collect()
}

/// List all client slugs.
pub fn client_slugs() -> Vec<&'static str> {
    CLIENTS.iter().map(|c| c.slug).collect()
}
