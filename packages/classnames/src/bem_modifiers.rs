use crate::bem::Bem;
use crate::modifiers::Modifiers;
use crate::unique::unique_classnames;

/// Reduce conditional modifiers into BEM modifier class names
///
/// `factory` must return a freshly scoped builder on every call. Each
/// rendered builder repeats the scope's base token, and the joiner removes
/// those repeats.
pub fn bem_modifier_classnames<F>(factory: F, modifiers: &Modifiers) -> Vec<String>
where
    F: Fn() -> Bem,
{
    let mut names: Vec<String> = Vec::new();
    for (modifier, active) in modifiers.iter() {
        let rendered = factory().is(modifier, active).to_string();
        names.extend(rendered.split(' ').map(str::to_string));
    }
    unique_classnames([names])
}
