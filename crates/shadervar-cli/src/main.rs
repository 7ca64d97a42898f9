//! Command-line interface for shadervar.

mod commands;
mod report;
mod utils;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "shadervar")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every variable kind
    #[command(visible_alias = "ls")]
    List,

    /// Describe one variable kind
    Show {
        /// Name of the kind, e.g. Texture2D
        kind: String,
    },

    /// Find the kinds a GLSL type name corresponds to
    #[command(name = "match", visible_alias = "m")]
    Match {
        /// GLSL type name, e.g. sampler2DShadow
        glsl: String,

        /// The declaration carries an array size
        #[arg(long)]
        array: bool,
    },

    /// Validate a material manifest
    Check {
        /// Path to the manifest; searched upwards from the current directory if omitted
        path: Option<PathBuf>,
    },

    /// Create a material manifest in the current directory
    Init {
        /// Name of the material
        name: String,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::List => commands::list::execute(),
        Commands::Show { kind } => commands::show::execute(&kind),
        Commands::Match { glsl, array } => commands::match_type::execute(&glsl, array),
        Commands::Check { path } => commands::check::execute(path.as_deref()),
        Commands::Init { name } => commands::init::execute(&name),
    }
}
