//! Error types for keymap construction and context registration.
//!
//! Lookup misses (an unknown context, a binding that is not part of a keymap)
//! are not errors: they degrade to no-ops or safe defaults. The variants here
//! cover the misconfigurations that should be caught when a keymap or registry
//! is being assembled, before anything is rendered.

use thiserror::Error;

/// Errors raised while building keymaps or registering contexts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The full help grid needs at least one column.
    #[error("invalid column count {0}: the full help grid needs at least one column")]
    InvalidColumnCount(usize),

    /// A binding with the same label is already part of the keymap.
    #[error("a binding labelled {label:?} is already registered in this keymap")]
    DuplicateBinding {
        /// The conflicting label.
        label: String,
    },

    /// A context with the same identifier is already registered.
    #[error("context {0} is already registered")]
    DuplicateContext(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_offending_value() {
        assert!(Error::InvalidColumnCount(0).to_string().contains('0'));
        let dup = Error::DuplicateBinding {
            label: "esc".to_string(),
        };
        assert!(dup.to_string().contains("\"esc\""));
        assert!(Error::DuplicateContext("start".into())
            .to_string()
            .contains("start"));
    }
}
