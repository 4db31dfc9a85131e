use super::common::{generate, GenerateArgs};
use anyhow::Result;
use clap::Args;

#[derive(Args, Debug)]
pub struct ElementArgs {
    /// Component name used as the BEM block
    pub component: String,

    /// Name of the sub element
    pub element: String,

    #[command(flatten)]
    pub generate: GenerateArgs,
}

pub fn element(args: ElementArgs, cwd: &str) -> Result<()> {
    generate(&args.component, &args.generate, cwd, |target, modifiers| {
        Ok(target.element(&args.element, modifiers)?)
    })
}
