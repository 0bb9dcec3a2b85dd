//! STDIO transport implementation.

use rmcp::ServiceExt;
use tracing::info;

use super::{TransportError, TransportResult};
use crate::core::SatPromptServer;

/// STDIO transport handler.
pub struct StdioTransport;

impl StdioTransport {
    /// Serve `server` on stdin/stdout until the client disconnects.
    ///
    /// Fails if the MCP handshake does not complete.
    pub async fn run(server: SatPromptServer) -> TransportResult<()> {
        let name = server.name().to_string();

        let running = server
            .serve(rmcp::transport::stdio())
            .await
            .map_err(|e| TransportError::init(e.to_string()))?;
        info!("{} ready on stdio", name);

        let reason = running
            .waiting()
            .await
            .map_err(|e| TransportError::service(e.to_string()))?;

        info!("{} stdio session ended: {:?}", name, reason);
        Ok(())
    }
}
