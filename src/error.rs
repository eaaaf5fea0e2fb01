use thiserror::Error;

pub type Result<T> = std::result::Result<T, StreamError>;

/// Justification attached to every operation refused on a dead stream.
pub const CLOSED: &str = "closed";

/// Justification attached to writes refused by a read-only stream.
pub const READ_ONLY: &str = "read-only";

/// Operation refused by a stream.
///
/// `Unusable` is the specialization raised once a stream has been closed or
/// detached; its justification is always [`CLOSED`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StreamError {
    #[error("You cannot call `{operation}' on this stream because it's {justification}.")]
    IllegalOperation {
        operation: &'static str,
        justification: &'static str,
    },
    #[error("You cannot call `{operation}' on this stream because it's closed.")]
    Unusable { operation: &'static str },
}

impl StreamError {
    pub fn illegal(operation: &'static str, justification: &'static str) -> Self {
        Self::IllegalOperation {
            operation,
            justification,
        }
    }

    pub fn unusable(operation: &'static str) -> Self {
        Self::Unusable { operation }
    }

    /// The operation, such as "write", that was refused.
    pub fn operation(&self) -> &'static str {
        match self {
            Self::IllegalOperation { operation, .. } => operation,
            Self::Unusable { operation } => operation,
        }
    }

    /// Completes the sentence "this stream is ...".
    pub fn justification(&self) -> &'static str {
        match self {
            Self::IllegalOperation { justification, .. } => justification,
            Self::Unusable { .. } => CLOSED,
        }
    }

    #[inline(always)]
    pub fn is_unusable(&self) -> bool {
        matches!(self, Self::Unusable { .. })
    }

    /// Status code reported across the C ABI.
    pub fn code(&self) -> i32 {
        match self {
            Self::IllegalOperation { .. } => 1,
            Self::Unusable { .. } => 2,
        }
    }
}
