//! JSON-family renderers.
//!
//! Every renderer builds a `serde_json::Map` in the exact key order the
//! client's schema documents and pretty-prints it with two-space indentation.

use serde_json::{Map, Value, json};

use crate::mcp::McpServer;

/// `{ "mcpServers": { name: entry } }` (Claude Desktop, Cursor, JetBrains, ...)
pub fn standard(server: &McpServer) -> serde_json::Result<String> {
    let doc = keyed("mcpServers", keyed(server.name(), server_entry(server)));
    serde_json::to_string_pretty(&doc)
}

/// `{ "mcp": { "servers": { name: { type, ...entry } } } }` (VS Code, Copilot)
pub fn vscode(server: &McpServer) -> serde_json::Result<String> {
    let kind = match server {
        McpServer::Http { .. } => "http",
        McpServer::Stdio { .. } => "stdio",
    };
    let entry = with_type(kind, server_entry(server));
    let doc = keyed("mcp", keyed("servers", keyed(server.name(), entry)));
    serde_json::to_string_pretty(&doc)
}

/// Standard wrapper, remote entries keyed `serverUrl` (Windsurf, Antigravity)
pub fn server_url(server: &McpServer) -> serde_json::Result<String> {
    let entry = match server {
        McpServer::Http { url, headers, .. } => {
            let mut obj = Map::new();
            obj.insert("serverUrl".to_string(), json!(url));
            if !headers.is_empty() {
                obj.insert("headers".to_string(), json!(headers));
            }
            Value::Object(obj)
        }
        McpServer::Stdio { .. } => server_entry(server),
    };
    let doc = keyed("mcpServers", keyed(server.name(), entry));
    serde_json::to_string_pretty(&doc)
}

/// Standard wrapper, remote entries tagged `streamable-http` (Cline, Kilo Code, Roo Code)
pub fn streamable_http(server: &McpServer) -> serde_json::Result<String> {
    let entry = match server {
        McpServer::Http { .. } => with_type("streamable-http", server_entry(server)),
        McpServer::Stdio { .. } => server_entry(server),
    };
    let doc = keyed("mcpServers", keyed(server.name(), entry));
    serde_json::to_string_pretty(&doc)
}

/// Standard wrapper, remote entries keyed `httpUrl` (Gemini CLI, Qwen Coder)
pub fn http_url(server: &McpServer) -> serde_json::Result<String> {
    let entry = match server {
        McpServer::Http { url, headers, .. } => {
            let mut obj = Map::new();
            // Gemini CLI uses "httpUrl" for streamable HTTP transport
            obj.insert("httpUrl".to_string(), json!(url));
            if !headers.is_empty() {
                obj.insert("headers".to_string(), json!(headers));
            }
            Value::Object(obj)
        }
        McpServer::Stdio { .. } => server_entry(server),
    };
    let doc = keyed("mcpServers", keyed(server.name(), entry));
    serde_json::to_string_pretty(&doc)
}

/// `{ "context_servers": { Name: { source, command, args } } }`
pub fn zed(server: &McpServer) -> serde_json::Result<String> {
    let (command, args, _) = local_launch(server);
    let entry = json!({
        "source": "custom",
        "command": command,
        "args": args,
    });
    let doc = keyed("context_servers", keyed(&capitalize(server.name()), entry));
    serde_json::to_string_pretty(&doc)
}

/// `{ "augment.advanced": { "mcpServers": [ { name, command, args } ] } }`
pub fn augment(server: &McpServer) -> serde_json::Result<String> {
    let (command, args, _) = local_launch(server);
    let doc = json!({
        "augment.advanced": {
            "mcpServers": [{
                "name": server.name(),
                "command": command,
                "args": args,
            }]
        }
    });
    serde_json::to_string_pretty(&doc)
}

/// `{ "mcp": { name: entry } }` with `type: remote|local` and `enabled: true`
pub fn opencode(server: &McpServer) -> serde_json::Result<String> {
    // OpenCode format:
    // - local: { "type": "local", "command": [executable, ...args], "enabled": true }
    // - remote: { "type": "remote", "url": "...", "enabled": true, "headers": {...} }
    let entry = match server {
        McpServer::Http { url, headers, .. } => {
            let mut obj = Map::new();
            obj.insert("type".to_string(), json!("remote"));
            obj.insert("url".to_string(), json!(url));
            obj.insert("enabled".to_string(), json!(true));
            if !headers.is_empty() {
                obj.insert("headers".to_string(), json!(headers));
            }
            Value::Object(obj)
        }
        McpServer::Stdio { command, args, .. } => {
            let mut argv = vec![command.clone()];
            argv.extend(args.iter().cloned());

            let mut obj = Map::new();
            obj.insert("type".to_string(), json!("local"));
            obj.insert("command".to_string(), json!(argv));
            obj.insert("enabled".to_string(), json!(true));
            Value::Object(obj)
        }
    };
    let doc = keyed("mcp", keyed(server.name(), entry));
    serde_json::to_string_pretty(&doc)
}

/// `{ "inputs": [], "servers": { name: entry } }`, remote entries tagged `http`
pub fn visual_studio(server: &McpServer) -> serde_json::Result<String> {
    let entry = match server {
        McpServer::Http { .. } => with_type("http", server_entry(server)),
        McpServer::Stdio { .. } => server_entry(server),
    };
    let mut doc = Map::new();
    doc.insert("inputs".to_string(), json!([]));
    doc.insert("servers".to_string(), keyed(server.name(), entry));
    serde_json::to_string_pretty(&Value::Object(doc))
}

/// `{ Name: { command, args, env, working_directory, start_on_launch } }`
pub fn warp(server: &McpServer) -> serde_json::Result<String> {
    let (command, args, env) = local_launch(server);
    let entry = json!({
        "command": command,
        "args": args,
        "env": env,
        "working_directory": null,
        "start_on_launch": true,
    });
    let doc = keyed(&capitalize(server.name()), entry);
    serde_json::to_string_pretty(&doc)
}

/// Bare `{ args, command, env }` object
pub fn perplexity(server: &McpServer) -> serde_json::Result<String> {
    let (command, args, env) = local_launch(server);
    let doc = json!({
        "args": args,
        "command": command,
        "env": env,
    });
    serde_json::to_string_pretty(&doc)
}

/// Entry shared by most shapes: `{ url, headers? }` or `{ command, args, env? }`.
fn server_entry(server: &McpServer) -> Value {
    match server {
        McpServer::Http { url, headers, .. } => {
            let mut obj = Map::new();
            obj.insert("url".to_string(), json!(url));
            if !headers.is_empty() {
                obj.insert("headers".to_string(), json!(headers));
            }
            Value::Object(obj)
        }
        McpServer::Stdio {
            command, args, env, ..
        } => {
            let mut obj = Map::new();
            obj.insert("command".to_string(), json!(command));
            obj.insert("args".to_string(), json!(args));
            if !env.is_empty() {
                obj.insert("env".to_string(), json!(env));
            }
            Value::Object(obj)
        }
    }
}

/// Command, args and env for shapes that only describe local launches.
///
/// Remote servers degrade to a bare `npx`; the transport gate keeps them out
/// of these shapes.
fn local_launch(server: &McpServer) -> (Value, Value, Value) {
    match server {
        McpServer::Stdio {
            command, args, env, ..
        } => (json!(command), json!(args), json!(env)),
        McpServer::Http { .. } => (json!("npx"), json!([]), json!({})),
    }
}

/// Prefix an entry object with a `type` key.
fn with_type(kind: &str, entry: Value) -> Value {
    let mut obj = Map::new();
    obj.insert("type".to_string(), json!(kind));
    if let Value::Object(fields) = entry {
        obj.extend(fields);
    }
    Value::Object(obj)
}

fn keyed(key: &str, value: Value) -> Value {
    let mut map = Map::new();
    map.insert(key.to_string(), value);
    Value::Object(map)
}

/// Uppercase the first character, leave the rest untouched.
pub(crate) fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
