//! Shared server fixtures for integration tests.

#![allow(dead_code)]

use indexmap::IndexMap;

use mcpconf_core::mcp::McpServer;

pub fn http_server() -> McpServer {
    let mut headers = IndexMap::new();
    headers.insert("Authorization".to_string(), "Bearer token123".to_string());
    McpServer::http("my-server", "https://api.example.com/mcp", headers)
}

pub fn stdio_server() -> McpServer {
    let mut env = IndexMap::new();
    env.insert("API_KEY".to_string(), "secret".to_string());
    McpServer::stdio(
        "local-server",
        "npx",
        vec!["-y".to_string(), "@example/mcp-server".to_string()],
        env,
    )
}
