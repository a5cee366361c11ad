//! Transform dispatcher: server + client slug in, client config out.

use serde::{Deserialize, Serialize};

use crate::client::{ClientDescriptor, ConfigFormat, find_client, list_clients};
use crate::error::TransformError;
use crate::mcp::McpServer;
use crate::render::ConfigShape;

/// Rendered configuration for one client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransformResult {
    /// Text to paste into the client's config (or run, for CLI clients)
    pub config: String,
    pub format: ConfigFormat,
    pub client: ClientDescriptor,
}

/// A whole transform request as a single document.
///
/// ```json
/// { "server": { "type": "http", "name": "docs", "url": "..." }, "client": "cursor" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransformOptions {
    pub server: McpServer,
    pub client: String,
}

impl TransformOptions {
    pub fn transform(&self) -> Result<TransformResult, TransformError> {
        transform(&self.server, &self.client)
    }
}

/// Render `server` in the shape the client identified by `slug` expects.
///
/// Fails if the slug is unknown or the client does not accept the
/// server's transport. No partial output is produced on failure.
pub fn transform(server: &McpServer, slug: &str) -> Result<TransformResult, TransformError> {
    let client = find_client(slug).ok_or_else(|| TransformError::unknown_client(slug))?;
    render_for(server, client)
}

/// Render `server` for every registered client, in registry order.
///
/// Clients that reject the server's transport yield an error entry
/// instead of stopping the run.
pub fn transform_all(
    server: &McpServer,
) -> Vec<(&'static ClientDescriptor, Result<TransformResult, TransformError>)> {
    list_clients()
        .iter()
        .map(|client| (client, render_for(server, client)))
        .collect()
}

fn render_for(
    server: &McpServer,
    client: &ClientDescriptor,
) -> Result<TransformResult, TransformError> {
    let transport = server.transport();
    if !client.supports(transport) {
        return Err(TransformError::unsupported_transport(
            client.display_name,
            transport,
        ));
    }

    let shape = ConfigShape::for_slug(client.slug).unwrap_or_else(|| {
        tracing::warn!(
            "No config shape registered for client '{}', using standard",
            client.slug
        );
        ConfigShape::Standard
    });

    tracing::debug!(
        client = client.slug,
        transport = %transport,
        shape = ?shape,
        "Rendering server '{}'",
        server.name()
    );

    Ok(TransformResult {
        config: shape.render(server)?,
        format: client.format,
        client: *client,
    })
}
