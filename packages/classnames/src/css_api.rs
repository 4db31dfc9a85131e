use crate::modifiers::Modifiers;
use crate::props::Props;
use crate::unique::{unique_classnames, ClassArg};
use bemkit_common::{Diagnostic, DiagnosticSink, MISSING_MODIFIER_CLASS};
use heck::ToLowerCamelCase;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A component's CSS API: semantic keys mapped to externally generated
/// class names, typically produced by a styling system.
///
/// Values are kept as raw JSON so that malformed entries can be reported.
/// Only string values are usable class names.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CssApi(IndexMap<String, Value>);

impl CssApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        self.0.insert(key.into(), value.into());
        self
    }

    /// The class name registered at `key`, if it is a string
    pub fn class(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Human-readable listing of the keys, used in diagnostics
    pub fn describe_keys(&self) -> String {
        if self.0.is_empty() {
            "No CSS API keys are defined.".to_string()
        } else {
            let keys: Vec<&str> = self.keys().collect();
            format!("Known CSS API keys: {}", keys.join(", "))
        }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for CssApi {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(key, class)| (key.into(), Value::String(class.into())))
                .collect(),
        )
    }
}

impl<K: Into<String>, V: Into<String>, const N: usize> From<[(K, V); N]> for CssApi {
    fn from(entries: [(K, V); N]) -> Self {
        entries.into_iter().collect()
    }
}

impl From<serde_json::Map<String, Value>> for CssApi {
    fn from(map: serde_json::Map<String, Value>) -> Self {
        Self(map.into_iter().collect())
    }
}

/// Insert a space wherever a letter meets a digit, so `is2xl` reads as
/// the words `is 2 xl`
fn split_digit_boundaries(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    let mut prev: Option<char> = None;
    for ch in name.chars() {
        if let Some(p) = prev {
            let boundary = (p.is_alphabetic() && ch.is_ascii_digit())
                || (p.is_ascii_digit() && ch.is_alphabetic());
            if boundary {
                out.push(' ');
            }
        }
        out.push(ch);
        prev = Some(ch);
    }
    out
}

/// Key under which a modifier's class is looked up in the CSS API
///
/// Element modifiers use the camel case join of element and modifier, so
/// `subElement` + `isFoo` becomes `subElementIsFoo`. Digits start a new
/// word: `col` + `is2xl` becomes `colIs2Xl`.
pub fn css_api_key(element: Option<&str>, modifier: &str) -> String {
    match element {
        Some(element) if !element.is_empty() => {
            split_digit_boundaries(&format!("{} {}", element, modifier)).to_lower_camel_case()
        }
        _ => modifier.to_string(),
    }
}

/// Select the CSS API class names matching the active modifiers
///
/// When props were supplied, every modifier without a string entry in
/// `props.classes` is reported to `sink`. Reports never change the result.
pub fn css_api_classnames(
    props: Option<&Props>,
    modifiers: &Modifiers,
    element: Option<&str>,
    sink: &dyn DiagnosticSink,
) -> Vec<String> {
    let empty = CssApi::default();
    let classes = props.and_then(|p| p.classes.as_ref()).unwrap_or(&empty);

    // Keyed by class name: first insertion fixes the position, last write wins
    let mut selected: IndexMap<String, bool> = IndexMap::new();
    for (modifier, active) in modifiers.iter() {
        let key = css_api_key(element, modifier);
        match classes.class(&key) {
            Some(class) => {
                selected.insert(class.to_string(), active);
            }
            None if props.is_some() => {
                sink.notify(Diagnostic::warning(
                    MISSING_MODIFIER_CLASS,
                    format!(
                        "Expected props.classes to have a property '{}' for the modifier of the same name. Are you applying modifiers that aren't a part of your CSS API? {}",
                        key,
                        classes.describe_keys()
                    ),
                ));
            }
            None => {}
        }
    }

    unique_classnames([ClassArg::Conditional(selected)])
}
