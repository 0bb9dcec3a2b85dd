//! SAT Prompt Server Library
//!
//! This crate holds the SAT practice-question prompt catalog and serves it to
//! LLM clients over the Model Context Protocol (MCP).
//!
//! # Architecture
//!
//! - **core**: Configuration, error handling, the MCP handler and transport
//! - **domains**: Business logic organized by bounded contexts
//!   - **prompts**: Prompt records, loaders, the registry and rendering
//!
//! # Example
//!
//! ```rust,no_run
//! use sat_prompt_server::domains::prompts::{Difficulty, PromptRegistry};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let registry = PromptRegistry::builtin();
//!     if let Some(template) = registry
//!         .get_prompt("Words in Context", "Craft and Structure", Difficulty::Easy)
//!         .await?
//!     {
//!         println!("{template}");
//!     }
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, Result, SatPromptServer};
