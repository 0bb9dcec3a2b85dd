//! Core module containing shared infrastructure components.
//!
//! This module provides the foundational building blocks for the server:
//! error handling, configuration, the MCP handler and the transport layer.

pub mod config;
pub mod error;
pub mod server;
pub mod transport;

pub use config::Config;
pub use error::{Error, Result};
pub use server::SatPromptServer;
pub use transport::{StdioTransport, TransportError};
