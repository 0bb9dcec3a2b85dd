//! Prompts domain module.
//!
//! This module holds the SAT question-generation catalog: templates indexed
//! by (skill, domain, difficulty) and the registry that loads and caches them.
//!
//! ## Architecture
//!
//! - `definitions/` - Compiled-in SAT domains (one file per domain)
//! - `loader.rs` - Domain loaders and the loader table
//! - `registry.rs` - Lazily initialized, cached prompt lookup
//! - `service.rs` - MCP-facing prompt service
//! - `templates.rs` - Template rendering engine
//!
//! ## Adding a New Domain
//!
//! 1. Create a new file in `definitions/` (e.g., `my_domain.rs`)
//! 2. Implement the `DomainDefinition` trait
//! 3. Export in `definitions/mod.rs`
//! 4. Register in `LoaderTable::builtin()`
//!
//! Domains can also be supplied at runtime as JSON files, see
//! [`LoaderTable::with_directory`].

pub mod definitions;
mod error;
mod key;
mod loader;
mod record;
mod registry;
mod service;
pub mod templates;

pub use definitions::DomainDefinition;
pub use error::PromptError;
pub use key::{RegistryKey, normalize_component};
pub use loader::{DomainLoader, JsonFileLoader, LoaderTable, StaticDomainLoader};
pub use record::{Difficulty, PromptRecord};
pub use registry::{PromptRegistry, PromptStats, RegistryOptions};
pub use service::{PromptService, SAT_QUESTION_PROMPT};
pub use templates::PromptTemplate;
