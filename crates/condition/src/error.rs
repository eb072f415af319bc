/// Error type for condition conversions.
///
/// Matching itself never fails; only moving a condition across a
/// serialization boundary can.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConditionError {
    /// The condition holds a function and cannot be represented as data.
    #[error("condition at `{path}` is not serializable: {reason}")]
    NotSerializable { path: String, reason: String },

    /// Failed to read a serializable condition from JSON.
    #[error("deserialization failed: {error}")]
    DeserializationError { error: String },

    /// Failed to write a serializable condition as JSON.
    #[error("serialization failed: {error}")]
    SerializationError { error: String },
}

impl ConditionError {
    pub(crate) fn not_serializable(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::NotSerializable {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Broad error category for grouping in logs.
    #[must_use]
    pub fn category(&self) -> &str {
        match self {
            Self::NotSerializable { .. } => "conversion",
            Self::DeserializationError { .. } => "serialization",
            Self::SerializationError { .. } => "serialization",
        }
    }

    /// Machine-readable error code for programmatic handling.
    #[must_use]
    pub fn code(&self) -> &str {
        match self {
            Self::NotSerializable { .. } => "CONDITION_NOT_SERIALIZABLE",
            Self::DeserializationError { .. } => "CONDITION_DESER",
            Self::SerializationError { .. } => "CONDITION_SER",
        }
    }

    /// Whether the operation might succeed if retried with the same input.
    ///
    /// Conversions are deterministic, so this is `false` for every variant.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        false
    }
}
