//! Core types and trait definitions for the revisor comparison engine.
//!
//! This crate is deliberately free of runtime and I/O dependencies.
//! All other crates depend on it; it depends on nothing proprietary.

pub mod attachment;
pub mod attribute;
pub mod cache;
pub mod error;
pub mod instance;
pub mod person;
pub mod revision;
pub mod source;

pub use error::{Error, Result};

/// Identifier of a revision record.
pub type RevisionId = u64;
/// Identifier of a person profile.
pub type PersonId = u64;
/// Identifier of a custom-attribute definition.
pub type AttributeId = u64;
