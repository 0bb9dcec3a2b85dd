//! Transport layer for the MCP server.
//!
//! Prompts are served over standard input/output, the default MCP
//! transport. Stdout carries protocol messages only; logs go to stderr.

mod error;
pub mod stdio;

pub use error::{TransportError, TransportResult};
pub use stdio::StdioTransport;
