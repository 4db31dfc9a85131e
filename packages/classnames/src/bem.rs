use crate::convention::NamingConvention;
use std::fmt;

/// Builder for BEM class names scoped to a block or a block element
///
/// Rendering always emits the unmodified base token followed by one
/// `base--modifier` token per active modifier, so two builders that share a
/// scope both render the base token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bem {
    block: String,
    element: Option<String>,
    modifiers: Vec<String>,
    convention: NamingConvention,
}

impl Bem {
    pub fn block(block: impl Into<String>) -> Self {
        Self::with_convention(block, NamingConvention::default())
    }

    pub fn with_convention(block: impl Into<String>, convention: NamingConvention) -> Self {
        Self {
            block: block.into(),
            element: None,
            modifiers: Vec::new(),
            convention,
        }
    }

    /// Scope the builder to a sub element of the block
    pub fn element(mut self, element: impl Into<String>) -> Self {
        self.element = Some(element.into());
        self
    }

    /// Apply `modifier` when `active` is true
    pub fn is(mut self, modifier: impl Into<String>, active: bool) -> Self {
        let modifier = modifier.into();
        if active && !modifier.is_empty() && !self.modifiers.contains(&modifier) {
            self.modifiers.push(modifier);
        }
        self
    }

    /// The unmodified token for this scope: `block` or `block__element`
    pub fn base(&self) -> String {
        match &self.element {
            Some(element) => format!(
                "{}{}{}",
                self.block, self.convention.element_separator, element
            ),
            None => self.block.clone(),
        }
    }
}

impl fmt::Display for Bem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let base = self.base();
        write!(f, "{}", base)?;
        for modifier in &self.modifiers {
            write!(
                f,
                " {}{}{}",
                base, self.convention.modifier_separator, modifier
            )?;
        }
        Ok(())
    }
}
