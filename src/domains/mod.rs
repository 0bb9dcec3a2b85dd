//! Domains module containing business logic organized by bounded contexts.
//!
//! The server currently has a single bounded context, the SAT prompt
//! catalog.

pub mod prompts;
