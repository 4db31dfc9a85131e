//! Class name generation for a component's root and sub elements.
//!
//! A [`ClassNameFactory`] is bound to a component name. It can generate
//! plain BEM names on its own, or be bound to a component's props with
//! [`ClassNameFactory::with_props`] to produce a [`ClassNameGenerator`] that
//! also applies `className` and the component's CSS API.

use crate::bem::Bem;
use crate::bem_modifiers::bem_modifier_classnames;
use crate::component_name::{resolve_component_name, ComponentIdentifier};
use crate::convention::NamingConvention;
use crate::css_api::css_api_classnames;
use crate::modifiers::Modifiers;
use crate::props::Props;
use crate::unique::{unique_classnames, ClassArg};
use bemkit_common::{
    ClassNameError, ClassNameResult, Diagnostic, DiagnosticSink, TracingSink,
    MISSING_CLASSES, MISSING_ELEMENT_CLASS,
};
use serde_json::Value;
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// Generates class names for one component, optionally bound to its props
#[derive(Clone)]
pub struct ClassNameGenerator {
    component_name: String,
    props: Option<Props>,
    convention: NamingConvention,
    sink: Arc<dyn DiagnosticSink>,
}

impl ClassNameGenerator {
    /// Bind a component to its props
    ///
    /// Diagnostics go to `tracing`. Use [`ClassNameFactory`] to pick another
    /// sink or naming convention.
    pub fn new(identifier: impl Into<ComponentIdentifier>, props: Props) -> ClassNameResult<Self> {
        Ok(ClassNameFactory::new(identifier)?.with_props(props))
    }

    pub fn component_name(&self) -> &str {
        &self.component_name
    }

    pub fn props(&self) -> Option<&Props> {
        self.props.as_ref()
    }

    fn block(&self) -> Bem {
        Bem::with_convention(self.component_name.as_str(), self.convention.clone())
    }

    /// Class names for the component root
    ///
    /// Combines, in order: the block, active BEM modifiers, `props.className`,
    /// `props.classes.root`, and the CSS API classes of active modifiers.
    pub fn root(&self, modifiers: &Modifiers) -> String {
        let bem_modifiers = bem_modifier_classnames(|| self.block(), modifiers);
        let css_api_modifiers =
            css_api_classnames(self.props.as_ref(), modifiers, None, self.sink.as_ref());

        let props = self.props.as_ref();
        let class_name = unique_classnames([
            ClassArg::from(self.block().base()),
            ClassArg::from(bem_modifiers),
            ClassArg::from(props.and_then(|p| p.class_name.as_ref())),
            ClassArg::from(props.and_then(|p| p.class("root"))),
            ClassArg::from(css_api_modifiers),
        ])
        .join(" ");

        debug!(component = %self.component_name, %class_name, "Generated root class names");
        class_name
    }

    /// Class names for a named sub element
    ///
    /// Combines, in order: `block__element`, active BEM modifiers of the
    /// element, `props.classes[element]`, and the element's CSS API modifier
    /// classes.
    ///
    /// Fails with `InvalidElementName` when `element_name` is empty or only
    /// whitespace.
    pub fn element(&self, element_name: &str, modifiers: &Modifiers) -> ClassNameResult<String> {
        if element_name.trim().is_empty() {
            return Err(ClassNameError::InvalidElementName {
                name: element_name.to_string(),
            });
        }

        let bem_modifiers =
            bem_modifier_classnames(|| self.block().element(element_name), modifiers);
        let css_api_modifiers = css_api_classnames(
            self.props.as_ref(),
            modifiers,
            Some(element_name),
            self.sink.as_ref(),
        );

        let element_class = self.props.as_ref().and_then(|p| p.class(element_name));
        if self.props.is_some() && element_class.is_none() {
            self.sink.notify(Diagnostic::warning(
                MISSING_ELEMENT_CLASS,
                format!(
                    "Expected props.classes to have property '{}' to represent the sub element of the same name. Are you identifying elements that aren't a part of your CSS API?",
                    element_name
                ),
            ));
        }

        let class_name = unique_classnames([
            ClassArg::from(self.block().element(element_name).base()),
            ClassArg::from(bem_modifiers),
            ClassArg::from(element_class),
            ClassArg::from(css_api_modifiers),
        ])
        .join(" ");

        debug!(
            component = %self.component_name,
            element = %element_name,
            %class_name,
            "Generated element class names"
        );
        Ok(class_name)
    }
}

impl fmt::Debug for ClassNameGenerator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClassNameGenerator")
            .field("component_name", &self.component_name)
            .field("props", &self.props)
            .field("convention", &self.convention)
            .finish()
    }
}

/// A component's class name generator awaiting its props
///
/// The factory generates BEM names without any CSS API until it is bound
/// with [`with_props`](Self::with_props).
#[derive(Clone, Debug)]
pub struct ClassNameFactory {
    unbound: ClassNameGenerator,
}

impl ClassNameFactory {
    pub fn new(identifier: impl Into<ComponentIdentifier>) -> ClassNameResult<Self> {
        let component_name = resolve_component_name(&identifier.into())?;
        Ok(Self {
            unbound: ClassNameGenerator {
                component_name,
                props: None,
                convention: NamingConvention::default(),
                sink: Arc::new(TracingSink),
            },
        })
    }

    /// Send diagnostics to `sink` instead of `tracing`
    pub fn with_sink(mut self, sink: Arc<dyn DiagnosticSink>) -> Self {
        self.unbound.sink = sink;
        self
    }

    pub fn with_convention(mut self, convention: NamingConvention) -> Self {
        self.unbound.convention = convention;
        self
    }

    pub fn component_name(&self) -> &str {
        self.unbound.component_name()
    }

    /// Bind props, reporting props that carry no `classes` object
    pub fn with_props(&self, props: Props) -> ClassNameGenerator {
        if props.classes.is_none() {
            self.unbound.sink.notify(
                Diagnostic::warning(
                    MISSING_CLASSES,
                    format!(
                        "When props are provided to '{}', the class name generator expects an object of 'classes' on props to select the component's CSS API",
                        self.unbound.component_name
                    ),
                )
                .with_suggestion("Pass the class names produced by your styling system as props.classes"),
            );
        }

        ClassNameGenerator {
            props: Some(props),
            ..self.unbound.clone()
        }
    }

    /// Bind props given as untyped JSON
    ///
    /// Fails with `MissingProps` unless `value` is an object.
    pub fn with_props_value(&self, value: &Value) -> ClassNameResult<ClassNameGenerator> {
        Ok(self.with_props(Props::from_value(value)?))
    }

    /// Class names for the component root without any props
    pub fn root(&self, modifiers: &Modifiers) -> String {
        self.unbound.root(modifiers)
    }

    /// Class names for a sub element without any props
    pub fn element(&self, element_name: &str, modifiers: &Modifiers) -> ClassNameResult<String> {
        self.unbound.element(element_name, modifiers)
    }
}
