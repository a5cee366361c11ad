//! Errors returned by [`crate::transform`].

use thiserror::Error;

use crate::mcp::TransportKind;

/// Errors that can occur while transforming a server for a client.
#[derive(Error, Debug)]
pub enum TransformError {
    /// The slug is not in the client registry.
    #[error("Unknown client: {slug}")]
    UnknownClient { slug: String },

    /// The client does not accept the server's transport.
    #[error("Client {client} does not support {} servers", .transport.label())]
    UnsupportedTransport {
        client: String,
        transport: TransportKind,
    },

    /// JSON serialization failed while rendering.
    #[error("Render error: {0}")]
    Render(#[from] serde_json::Error),
}

impl TransformError {
    pub fn unknown_client(slug: impl Into<String>) -> Self {
        Self::UnknownClient { slug: slug.into() }
    }

    pub fn unsupported_transport(client: impl Into<String>, transport: TransportKind) -> Self {
        Self::UnsupportedTransport {
            client: client.into(),
            transport,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            TransformError::unknown_client("nonexistent").to_string(),
            "Unknown client: nonexistent"
        );
        assert_eq!(
            TransformError::unsupported_transport("Zed", TransportKind::Remote).to_string(),
            "Client Zed does not support remote (HTTP) servers"
        );
        assert_eq!(
            TransformError::unsupported_transport("Zed", TransportKind::Local).to_string(),
            "Client Zed does not support local (stdio) servers"
        );
    }
}
