pub mod common;
pub mod element;
pub mod root;

pub use element::{element, ElementArgs};
pub use root::{root, RootArgs};
