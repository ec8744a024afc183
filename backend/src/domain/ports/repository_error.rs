//! Error shared by every persistence port.
//!
//! All entity repositories live behind the same store, so they fail in the
//! same two ways: the store is unreachable, or a statement went wrong.

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by repository adapters.
    pub enum RepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } => "repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "repository query failed: {message}",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn connection_message_is_prefixed() {
        let err = RepositoryError::connection("pool timed out");
        assert_eq!(
            err.to_string(),
            "repository connection failed: pool timed out"
        );
    }

    #[test]
    fn query_message_is_prefixed() {
        let err = RepositoryError::query("syntax error");
        assert_eq!(err.to_string(), "repository query failed: syntax error");
    }
}
