use crate::config::Config;
use anyhow::{anyhow, Result};
use bemkit_classnames::{
    ClassNameFactory, ClassNameGenerator, ClassNameResult, CollectingSink, Diagnostic,
    DiagnosticLevel, Modifiers,
};
use clap::{Args, ValueEnum};
use colored::Colorize;
use serde::Serialize;
use std::path::PathBuf;
use std::sync::Arc;

/// Options shared by every generating command
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// JSON file holding the component props (`className`, `classes`)
    #[arg(short, long)]
    pub props: Option<PathBuf>,

    /// Modifier to apply, as NAME or NAME=true|false (repeatable)
    #[arg(short = 'm', long = "modifier", value_parser = parse_modifier)]
    pub modifiers: Vec<(String, bool)>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Do not print CSS API diagnostics
    #[arg(short, long)]
    pub quiet: bool,

    /// Fail when CSS API diagnostics are reported (overrides config)
    #[arg(long)]
    pub strict: bool,
}

/// How generated class names are printed
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// The class string, with diagnostics on stderr
    Text,
    /// Class string, tokens and diagnostics as one JSON object
    Json,
}

/// Parse `NAME` or `NAME=BOOL` into a modifier flag
pub fn parse_modifier(raw: &str) -> Result<(String, bool), String> {
    let (name, value) = match raw.split_once('=') {
        Some((name, value)) => (name.trim(), Some(value.trim())),
        None => (raw.trim(), None),
    };

    if name.is_empty() {
        return Err(format!("modifier name is empty in '{}'", raw));
    }

    let active = match value {
        None => true,
        Some("true") => true,
        Some("false") => false,
        Some(other) => {
            return Err(format!(
                "invalid value '{}' for modifier '{}', expected true or false",
                other, name
            ))
        }
    };

    Ok((name.to_string(), active))
}

/// A factory on its own or bound to props read from disk
pub enum Target {
    Unbound(ClassNameFactory),
    Bound(ClassNameGenerator),
}

impl Target {
    pub fn root(&self, modifiers: &Modifiers) -> String {
        match self {
            Target::Unbound(factory) => factory.root(modifiers),
            Target::Bound(generator) => generator.root(modifiers),
        }
    }

    pub fn element(&self, element_name: &str, modifiers: &Modifiers) -> ClassNameResult<String> {
        match self {
            Target::Unbound(factory) => factory.element(element_name, modifiers),
            Target::Bound(generator) => generator.element(element_name, modifiers),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Output<'a> {
    class_name: &'a str,
    tokens: Vec<&'a str>,
    diagnostics: &'a [Diagnostic],
}

/// Build the target for `component`, run `render` against it and print
/// the class names along with any diagnostics.
pub fn generate<F>(component: &str, args: &GenerateArgs, cwd: &str, render: F) -> Result<()>
where
    F: FnOnce(&Target, &Modifiers) -> Result<String>,
{
    let config = Config::load(cwd)?;
    let sink = Arc::new(CollectingSink::new());

    let factory = ClassNameFactory::new(component)?
        .with_convention(config.convention.clone())
        .with_sink(sink.clone());

    let target = match &args.props {
        Some(path) => {
            let content = std::fs::read_to_string(path)
                .map_err(|e| anyhow!("Failed to read props file {}: {}", path.display(), e))?;
            let value: serde_json::Value = serde_json::from_str(&content)?;
            Target::Bound(factory.with_props_value(&value)?)
        }
        None => Target::Unbound(factory),
    };

    let modifiers: Modifiers = args.modifiers.iter().cloned().collect();
    let class_name = render(&target, &modifiers)?;
    let diagnostics = sink.take();

    if args.format == OutputFormat::Json {
        let output = Output {
            class_name: &class_name,
            tokens: class_name.split(' ').filter(|t| !t.is_empty()).collect(),
            diagnostics: &diagnostics,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{}", class_name);
        if !args.quiet {
            print_diagnostics(&diagnostics);
        }
    }

    if (args.strict || config.strict) && !diagnostics.is_empty() {
        return Err(anyhow!(
            "{} CSS API diagnostic(s) reported in strict mode",
            diagnostics.len()
        ));
    }

    Ok(())
}

fn print_diagnostics(diagnostics: &[Diagnostic]) {
    for diagnostic in diagnostics {
        let level_str = match diagnostic.level {
            DiagnosticLevel::Warning => "warning".yellow().bold(),
        };

        eprintln!("{} [{}] {}", level_str, diagnostic.rule, diagnostic.message);

        if let Some(suggestion) = &diagnostic.suggestion {
            eprintln!("    {} {}", "hint:".dimmed(), suggestion.dimmed());
        }
    }
}
