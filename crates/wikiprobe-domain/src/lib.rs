//! Wikiprobe Domain Layer
//!
//! Core types shared by every other wikiprobe crate. The only external
//! dependency is `serde`, because command records are written to and read from
//! JSON reports.
//!
//! ## Key Concepts
//!
//! - **CommandRecord**: one protocol command recovered from a knowledge source
//!   answer (name, handling module, critical logic)
//! - **QueryProvider**: the boundary to the knowledge source that answers
//!   natural-language questions about a repository
//!
//! ## Architecture
//!
//! - Pure data and trait definitions only
//! - Provider implementations live in `wikiprobe-query`
//! - Extraction logic lives in `wikiprobe-extractor`

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod record;
pub mod traits;

// Re-exports for convenience
pub use record::CommandRecord;
pub use traits::QueryProvider;
