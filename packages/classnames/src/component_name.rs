use bemkit_common::{ClassNameError, ClassNameResult};

/// How a component is identified when generating its block name
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComponentIdentifier {
    /// An explicit name chosen by the caller
    Name(String),
    /// A component value exposing an optional display name and intrinsic name
    Named {
        display_name: Option<String>,
        name: Option<String>,
    },
}

impl ComponentIdentifier {
    pub fn named(display_name: Option<&str>, name: Option<&str>) -> Self {
        ComponentIdentifier::Named {
            display_name: display_name.map(str::to_string),
            name: name.map(str::to_string),
        }
    }

    /// Identify a component by its Rust type
    ///
    /// Module path and generic arguments are dropped, so `ui::Button<T>`
    /// yields `Button`. Closures and other anonymous types have no name.
    pub fn of<T: ?Sized>() -> Self {
        let full = std::any::type_name::<T>();
        let without_generics = full.split('<').next().unwrap_or(full);
        let short = without_generics
            .rsplit("::")
            .next()
            .unwrap_or(without_generics);
        let name = if short.is_empty() || short.contains('{') {
            None
        } else {
            Some(short.to_string())
        };
        ComponentIdentifier::Named {
            display_name: None,
            name,
        }
    }
}

impl From<&str> for ComponentIdentifier {
    fn from(name: &str) -> Self {
        ComponentIdentifier::Name(name.to_string())
    }
}

impl From<String> for ComponentIdentifier {
    fn from(name: String) -> Self {
        ComponentIdentifier::Name(name)
    }
}

impl From<&String> for ComponentIdentifier {
    fn from(name: &String) -> Self {
        ComponentIdentifier::Name(name.clone())
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// Resolve the name used as a component's BEM block
pub fn resolve_component_name(identifier: &ComponentIdentifier) -> ClassNameResult<String> {
    let raw = match identifier {
        ComponentIdentifier::Name(name) => {
            if name.is_empty() {
                return Err(ClassNameError::invalid_identifier(
                    "A component name must be supplied as a non-empty string or as a named component with a display name or name",
                ));
            }
            name.as_str()
        }
        ComponentIdentifier::Named { display_name, name } => non_empty(display_name)
            .or_else(|| non_empty(name))
            .ok_or_else(|| {
                ClassNameError::invalid_identifier(
                    "When supplying a component, it must have either a display name or a name",
                )
            })?,
    };

    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ClassNameError::EmptyComponentName {
            found: trimmed.to_string(),
        });
    }
    Ok(trimmed.to_string())
}
