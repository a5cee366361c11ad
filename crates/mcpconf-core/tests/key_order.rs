//! Headers and env vars render in the order they were given.

use indexmap::IndexMap;
use mcpconf_core::prelude::*;
use serde_json::Value;

fn unsorted_http() -> McpServer {
    serde_json::from_str(
        r#"{
            "type": "http",
            "name": "s",
            "url": "https://x",
            "headers": { "X-Trace": "1", "Authorization": "Bearer t" }
        }"#,
    )
    .expect("server parses")
}

fn unsorted_stdio() -> McpServer {
    let mut env = IndexMap::new();
    env.insert("ZED_KEY".to_string(), "z".to_string());
    env.insert("API_KEY".to_string(), "a".to_string());
    McpServer::stdio("s", "npx", vec!["-y".to_string()], env)
}

fn object_keys(value: &Value) -> Vec<&str> {
    value
        .as_object()
        .expect("object")
        .keys()
        .map(String::as_str)
        .collect()
}

fn config(server: &McpServer, slug: &str) -> String {
    transform(server, slug).expect("transform").config
}

#[test]
fn deserialized_headers_keep_input_order() {
    match unsorted_http() {
        McpServer::Http { headers, .. } => {
            let keys: Vec<_> = headers.keys().map(String::as_str).collect();
            assert_eq!(keys, vec!["X-Trace", "Authorization"]);
        }
        other => panic!("expected http server, got {other:?}"),
    }
}

#[test]
fn cli_header_flags_keep_input_order() {
    let server = unsorted_http();
    assert_eq!(
        config(&server, "claude-code"),
        "claude mcp add --transport http s https://x \
         --header \"X-Trace: 1\" --header \"Authorization: Bearer t\""
    );
    assert_eq!(
        config(&server, "amp"),
        "amp mcp add s https://x --header \"X-Trace=1\" --header \"Authorization=Bearer t\""
    );
    assert_eq!(
        config(&server, "factory"),
        "droid mcp add s https://x --type http \
         --header \"X-Trace: 1\" --header \"Authorization: Bearer t\""
    );
}

#[test]
fn factory_env_flags_keep_input_order() {
    assert_eq!(
        config(&unsorted_stdio(), "factory"),
        "droid mcp add s \"npx -y\" --env ZED_KEY=z --env API_KEY=a"
    );
}

#[test]
fn json_headers_keep_input_order() {
    let parsed: Value =
        serde_json::from_str(&config(&unsorted_http(), "claude-desktop")).expect("valid JSON");
    assert_eq!(
        object_keys(&parsed["mcpServers"]["s"]["headers"]),
        vec!["X-Trace", "Authorization"]
    );
}

#[test]
fn json_env_keeps_input_order() {
    let server = unsorted_stdio();

    let parsed: Value = serde_json::from_str(&config(&server, "cursor")).expect("valid JSON");
    assert_eq!(
        object_keys(&parsed["mcpServers"]["s"]["env"]),
        vec!["ZED_KEY", "API_KEY"]
    );

    let parsed: Value = serde_json::from_str(&config(&server, "warp")).expect("valid JSON");
    assert_eq!(object_keys(&parsed["S"]["env"]), vec!["ZED_KEY", "API_KEY"]);
}

#[test]
fn codex_http_headers_keep_input_order() {
    assert_eq!(
        config(&unsorted_http(), "openai-codex"),
        "[mcp_servers.s]\n\
         url = \"https://x\"\n\
         http_headers = { \"X-Trace\" = \"1\", \"Authorization\" = \"Bearer t\" }"
    );
}
