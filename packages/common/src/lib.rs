pub mod diagnostic;
pub mod error;
pub mod result;

pub use diagnostic::*;
pub use error::*;
pub use result::*;
