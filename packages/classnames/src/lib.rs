pub mod bem;
pub mod bem_modifiers;
pub mod component_name;
pub mod convention;
pub mod css_api;
pub mod generator;
pub mod modifiers;
pub mod props;
pub mod unique;

#[cfg(test)]
mod tests_generator;

pub use bem::Bem;
pub use bem_modifiers::bem_modifier_classnames;
pub use component_name::{resolve_component_name, ComponentIdentifier};
pub use convention::NamingConvention;
pub use css_api::{css_api_classnames, css_api_key, CssApi};
pub use generator::{ClassNameFactory, ClassNameGenerator};
pub use modifiers::Modifiers;
pub use props::Props;
pub use unique::{unique_classnames, ClassArg};

// Re-export the error and diagnostic types callers need to handle results
pub use bemkit_common::{
    ClassNameError, ClassNameResult, CollectingSink, Diagnostic, DiagnosticLevel,
    DiagnosticSink, NoopSink, TracingSink,
};
