mod commands;
mod config;

use clap::{Parser, Subcommand};
use colored::Colorize;
use commands::{element, root, ElementArgs, RootArgs};
use tracing_subscriber::EnvFilter;

/// Bemkit CLI - BEM class names for components and their CSS API
#[derive(Parser, Debug)]
#[command(name = "bemkit")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate class names for a component root
    Root(RootArgs),

    /// Generate class names for a component's sub element
    Element(ElementArgs),
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    let cwd = std::env::current_dir()
        .expect("Cannot get current directory")
        .display()
        .to_string();

    let result = match cli.command {
        Command::Root(args) => root(args, &cwd),
        Command::Element(args) => element(args, &cwd),
    };

    if let Err(err) = result {
        eprintln!();
        eprintln!("{} {}", "Error:".red().bold(), err);
        eprintln!();
        std::process::exit(1);
    }
}
