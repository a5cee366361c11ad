//! MCP (Model Context Protocol) server descriptions

pub mod server;

pub use server::{McpServer, TransportKind};
