//! # Utilities Module
//!
//! Cross-cutting concerns shared across the crate.
//!
//! Error types live here to avoid circular dependencies between the
//! `core` and `platform` modules.

pub mod errors;

pub use errors::SetupError;
