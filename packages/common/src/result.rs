use crate::error::ClassNameError;

/// Result type alias for class name generation
pub type ClassNameResult<T> = Result<T, ClassNameError>;
