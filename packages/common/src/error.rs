use thiserror::Error;

/// Programmer errors raised while generating class names.
///
/// These are never transient. They are raised at the call that detects them.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClassNameError {
    #[error("Invalid component identifier: {message}")]
    InvalidComponentIdentifier { message: String },

    #[error("Expected to resolve a non-empty component name. After trimming whitespace, found '{found}'")]
    EmptyComponentName { found: String },

    #[error("Expected to generate class names for a named sub element, got '{name}'")]
    InvalidElementName { name: String },

    #[error("The class name generator expects an object of props to select class names for a component's CSS API")]
    MissingProps,
}

impl ClassNameError {
    pub fn invalid_identifier(message: impl Into<String>) -> Self {
        ClassNameError::InvalidComponentIdentifier {
            message: message.into(),
        }
    }
}
