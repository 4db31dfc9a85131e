use indexmap::{IndexMap, IndexSet};

/// One argument to [`unique_classnames`]
///
/// Mirrors the argument shapes accepted by a `classnames`-style joiner:
/// space separated strings, nested lists, and conditional maps.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ClassArg {
    /// Contributes nothing
    #[default]
    None,
    /// Space separated class names
    Str(String),
    /// Nested arguments, flattened in order
    List(Vec<ClassArg>),
    /// Candidate class names included when their flag is true
    Conditional(IndexMap<String, bool>),
}

impl ClassArg {
    fn collect_into(&self, tokens: &mut IndexSet<String>) {
        match self {
            ClassArg::None => {}
            ClassArg::Str(names) => push_tokens(names, tokens),
            ClassArg::List(args) => {
                for arg in args {
                    arg.collect_into(tokens);
                }
            }
            ClassArg::Conditional(candidates) => {
                for (names, active) in candidates {
                    if *active {
                        push_tokens(names, tokens);
                    }
                }
            }
        }
    }
}

fn push_tokens(names: &str, tokens: &mut IndexSet<String>) {
    for token in names.split_whitespace() {
        if !tokens.contains(token) {
            tokens.insert(token.to_string());
        }
    }
}

impl From<&str> for ClassArg {
    fn from(names: &str) -> Self {
        ClassArg::Str(names.to_string())
    }
}

impl From<String> for ClassArg {
    fn from(names: String) -> Self {
        ClassArg::Str(names)
    }
}

impl From<&String> for ClassArg {
    fn from(names: &String) -> Self {
        ClassArg::Str(names.clone())
    }
}

impl<T: Into<ClassArg>> From<Option<T>> for ClassArg {
    fn from(arg: Option<T>) -> Self {
        arg.map(Into::into).unwrap_or_default()
    }
}

impl<T: Into<ClassArg>> From<Vec<T>> for ClassArg {
    fn from(args: Vec<T>) -> Self {
        ClassArg::List(args.into_iter().map(Into::into).collect())
    }
}

impl From<IndexMap<String, bool>> for ClassArg {
    fn from(candidates: IndexMap<String, bool>) -> Self {
        ClassArg::Conditional(candidates)
    }
}

impl<const N: usize> From<[(&str, bool); N]> for ClassArg {
    fn from(candidates: [(&str, bool); N]) -> Self {
        ClassArg::Conditional(
            candidates
                .into_iter()
                .map(|(name, active)| (name.to_string(), active))
                .collect(),
        )
    }
}

/// Join class name arguments into a list of unique tokens
///
/// Falsy conditionals and empty inputs contribute nothing. A token that shows
/// up more than once is kept at its first position.
pub fn unique_classnames<I>(args: I) -> Vec<String>
where
    I: IntoIterator,
    I::Item: Into<ClassArg>,
{
    let mut tokens = IndexSet::new();
    for arg in args {
        arg.into().collect_into(&mut tokens);
    }
    tokens.into_iter().collect()
}
