//! Revision comparison pipeline for revisor.
//!
//! Turns two revision ids into a classified, two-pane diff: cache-first
//! fetching, instance materialization, batched access-control and attachment
//! resolution, stable-key attribute pairing, and presentation-agnostic
//! rendering. Works against any [`revisor_core::source`] backend.

pub mod acl;
pub mod attachments;
pub mod compare;
pub mod diff;
pub mod error;
pub mod fetch;
pub mod panes;
pub mod render;

pub use compare::{Comparer, Comparison, PreparedRevision};
pub use diff::{DiffStatus, PairedAttribute};
pub use error::{Error, Result};
