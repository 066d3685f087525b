//! Trait definitions for external interactions
//!
//! These traits define the boundaries between extraction logic and the
//! knowledge source. Implementations live in other crates.

/// Trait for asking questions about a repository
///
/// Implemented by the infrastructure layer (wikiprobe-query). A provider may
/// block for as long as the knowledge source takes to answer; callers issue
/// one question at a time.
pub trait QueryProvider {
    /// Error type for query operations
    type Error;

    /// Ask a natural-language question about `topic` (an `owner/repo` name)
    /// and return the raw text answer
    fn ask(&self, topic: &str, question: &str) -> Result<String, Self::Error>;

    /// Read the documentation structure for `topic`
    ///
    /// Providers without a structure lookup answer with an empty string.
    fn read_structure(&self, topic: &str) -> Result<String, Self::Error> {
        let _ = topic;
        Ok(String::new())
    }
}
