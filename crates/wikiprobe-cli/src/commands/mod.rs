//! Command implementations.

pub mod analyze;
pub mod extract;

pub use self::analyze::execute_analyze;
pub use self::extract::execute_extract;
