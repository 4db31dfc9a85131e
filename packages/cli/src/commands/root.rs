use super::common::{generate, GenerateArgs};
use anyhow::Result;
use clap::Args;

#[derive(Args, Debug)]
pub struct RootArgs {
    /// Component name used as the BEM block
    pub component: String,

    #[command(flatten)]
    pub generate: GenerateArgs,
}

pub fn root(args: RootArgs, cwd: &str) -> Result<()> {
    generate(&args.component, &args.generate, cwd, |target, modifiers| {
        Ok(target.root(modifiers))
    })
}
