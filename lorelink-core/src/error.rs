use thiserror::Error;

/// Reasons a mention target record is rejected at construction time.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TargetError {
    #[error("target id must not be empty")]
    EmptyId,

    #[error("target `{id}` has an empty name")]
    EmptyName { id: String },

    #[error("unknown target kind `{0}`")]
    UnknownKind(String),
}
