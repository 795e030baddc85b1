//! Pathstone CLI - Command-line front end for the asset resolver

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{list, resolve, root};

#[derive(Parser)]
#[command(name = "pathstone")]
#[command(about = "Resolve dotted asset keys against a manifest", long_about = None)]
#[command(version)]
struct Cli {
    /// Manifest locator (file path or http(s) URL)
    #[arg(long, global = true, default_value = "static_src.json")]
    manifest: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve a dotted key to a path
    Resolve {
        /// Dotted lookup key (e.g. "images.logo")
        key: String,

        /// Exit with an error if the key does not resolve
        #[arg(long)]
        strict: bool,
    },

    /// List every manifest key with its resolved path
    List,

    /// Print the manifest's root directory
    Root,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Resolve { key, strict } => resolve::run(&cli.manifest, &key, strict),
        Commands::List => list::run(&cli.manifest),
        Commands::Root => root::run(&cli.manifest),
    }
}
