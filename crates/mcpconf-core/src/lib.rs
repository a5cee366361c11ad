//! mcpconf core library
//!
//! Turns one MCP server description into the configuration text each
//! supported client application expects: JSON documents, shell commands,
//! or TOML fragments.
//!
//! ```
//! use indexmap::IndexMap;
//! use mcpconf_core::prelude::*;
//!
//! let server = McpServer::http("docs", "https://example.com/mcp", IndexMap::new());
//! let result = transform(&server, "claude-code").unwrap();
//! assert_eq!(result.config, "claude mcp add --transport http docs https://example.com/mcp");
//! ```

pub mod client;
pub mod error;
pub mod mcp;
pub mod render;
pub mod transform;

pub use error::TransformError;
pub use transform::{TransformOptions, TransformResult, transform, transform_all};

/// Re-exports of commonly used types
pub mod prelude {
    // Model
    pub use crate::mcp::{McpServer, TransportKind};

    // Clients
    pub use crate::client::{
        ClientDescriptor, ConfigFormat, client_slugs, clients_supporting, find_client,
        list_clients,
    };

    // Rendering
    pub use crate::error::TransformError;
    pub use crate::render::ConfigShape;
    pub use crate::transform::{TransformOptions, TransformResult, transform, transform_all};
}
