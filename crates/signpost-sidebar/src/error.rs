//! Validation errors raised while declaring or compiling a sidebar.

use std::fmt;

/// Result alias for sidebar operations.
pub type Result<T> = std::result::Result<T, SidebarError>;

/// Errors that can occur when declaring or compiling a sidebar.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SidebarError {
    #[error("Invalid group key '{0}', it should start with `/` and have no empty segments")]
    InvalidKey(String),

    #[error("Duplicate group key: {0}")]
    DuplicateKey(String),

    #[error("Parent group is not found or wrong order: {0}")]
    ParentNotFound(String),

    #[error("{kind} '{key}' is not found")]
    OverrideTargetMissing { kind: TargetKind, key: String },

    #[error("Order index overflow: too many declarations after the initial order")]
    OrderOverflow,

    #[error("Duplicate locale: {0}")]
    DuplicateLocale(String),
}

/// What an override was aimed at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetKind {
    Group,
    Item,
}

impl fmt::Display for TargetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TargetKind::Group => f.write_str("Group"),
            TargetKind::Item => f.write_str("Item"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn override_message_names_target() {
        let err = SidebarError::OverrideTargetMissing {
            kind: TargetKind::Item,
            key: "/intro".to_string(),
        };

        assert_eq!(err.to_string(), "Item '/intro' is not found");
    }

    #[test]
    fn parent_message_matches_build_failure() {
        let err = SidebarError::ParentNotFound("/loop/mapped-types".to_string());

        assert!(err
            .to_string()
            .starts_with("Parent group is not found or wrong order"));
    }
}
