use crate::css_api::CssApi;
use bemkit_common::{ClassNameError, ClassNameResult};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The parts of a component's props that feed class name generation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Props {
    /// Extra class names applied to the component root
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,

    /// The component's CSS API
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub classes: Option<CssApi>,
}

impl Props {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    pub fn with_classes(mut self, classes: impl Into<CssApi>) -> Self {
        self.classes = Some(classes.into());
        self
    }

    /// Read props from an arbitrary JSON value
    ///
    /// Anything other than an object fails with `MissingProps`. A `classes`
    /// entry that is not an object is dropped, and a non-string `className`
    /// is ignored.
    pub fn from_value(value: &Value) -> ClassNameResult<Self> {
        let object = value.as_object().ok_or(ClassNameError::MissingProps)?;

        let class_name = object
            .get("className")
            .and_then(Value::as_str)
            .map(str::to_string);
        let classes = object
            .get("classes")
            .and_then(Value::as_object)
            .map(|classes| CssApi::from(classes.clone()));

        Ok(Self {
            class_name,
            classes,
        })
    }

    /// The CSS API class name registered at `key`
    pub fn class(&self, key: &str) -> Option<&str> {
        self.classes.as_ref().and_then(|classes| classes.class(key))
    }
}
