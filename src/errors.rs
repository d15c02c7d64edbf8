//! Error taxonomy for dig-rust
//!
//! Only three things can fail a query: an unresolvable record type, the
//! external tool itself, and output that does not decode in the configured
//! encoding. Everything at the parsing level degrades the result silently
//! instead of erroring.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("unknown query type '{0}'")]
    UnknownQueryType(String),

    #[error("failed to execute '{executable}': {reason}")]
    ExecutionFailure { executable: String, reason: String },

    #[error("tool output is not valid {encoding}")]
    DecodeError { encoding: &'static str },
}
