//! TOML renderer for the Codex CLI `config.toml`.

use std::fmt::Write;

use crate::mcp::McpServer;

const STARTUP_TIMEOUT_MS: &str = "20_000";

/// Render a `[mcp_servers.<name>]` table.
pub fn codex(server: &McpServer) -> String {
    let mut lines = vec![format!("[mcp_servers.{}]", table_key(server.name()))];

    match server {
        McpServer::Http { url, headers, .. } => {
            lines.push(format!("url = {}", basic_string(url)));
            if !headers.is_empty() {
                let pairs: Vec<String> = headers
                    .iter()
                    .map(|(k, v)| format!("{} = {}", basic_string(k), basic_string(v)))
                    .collect();
                lines.push(format!("http_headers = {{ {} }}", pairs.join(", ")));
            }
        }
        McpServer::Stdio { command, args, .. } => {
            lines.push(format!("command = {}", basic_string(command)));
            let args: Vec<String> = args.iter().map(|a| basic_string(a)).collect();
            lines.push(format!("args = [{}]", args.join(", ")));
            lines.push(format!("startup_timeout_ms = {STARTUP_TIMEOUT_MS}"));
        }
    }

    lines.join("\n")
}

/// Quote a value as a TOML basic string.
pub fn basic_string(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\u{8}' => out.push_str("\\b"),
            '\t' => out.push_str("\\t"),
            '\n' => out.push_str("\\n"),
            '\u{c}' => out.push_str("\\f"),
            '\r' => out.push_str("\\r"),
            c if c.is_control() => {
                let _ = write!(out, "\\u{:04X}", c as u32);
            }
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

/// Bare key when possible, quoted otherwise.
fn table_key(key: &str) -> String {
    let bare = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
    if bare {
        key.to_string()
    } else {
        basic_string(key)
    }
}
