use serde::{Deserialize, Serialize};

pub const DEFAULT_ELEMENT_SEPARATOR: &str = "__";
pub const DEFAULT_MODIFIER_SEPARATOR: &str = "--";

/// Separators used to render BEM tokens
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NamingConvention {
    /// Placed between block and element: `block__element`
    #[serde(default = "default_element_separator")]
    pub element_separator: String,

    /// Placed before a modifier: `block--modifier`
    #[serde(default = "default_modifier_separator")]
    pub modifier_separator: String,
}

fn default_element_separator() -> String {
    DEFAULT_ELEMENT_SEPARATOR.to_string()
}

fn default_modifier_separator() -> String {
    DEFAULT_MODIFIER_SEPARATOR.to_string()
}

impl Default for NamingConvention {
    fn default() -> Self {
        Self {
            element_separator: default_element_separator(),
            modifier_separator: default_modifier_separator(),
        }
    }
}
