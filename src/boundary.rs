use std::fmt;

/// Warnings raised while scanning tags for the current version.
/// These are advisory: the scan moves on to the next tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoundaryWarning {
    /// Tag does not start with the configured prefix
    MissingPrefix { tag: String, prefix: String },
    /// Tag has the prefix but the rest is not a semantic version
    UnparsableTag { tag: String, reason: String },
}

impl BoundaryWarning {
    /// The tag this warning is about
    pub fn tag(&self) -> &str {
        match self {
            BoundaryWarning::MissingPrefix { tag, .. } => tag,
            BoundaryWarning::UnparsableTag { tag, .. } => tag,
        }
    }
}

impl fmt::Display for BoundaryWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundaryWarning::MissingPrefix { tag, prefix } => {
                write!(f, "skipping {:?}: missing {:?} prefix", tag, prefix)
            }
            BoundaryWarning::UnparsableTag { tag, reason } => {
                write!(f, "skipping {:?}: {}", tag, reason)
            }
        }
    }
}
