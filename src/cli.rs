use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "depcat")]
#[command(about = "Dependency-ordered text bundler")]
#[command(version = "0.1.0")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the files in dependency order, one per line
    Order {
        /// Root directory to scan
        root: PathBuf,
        /// Print as a JSON array
        #[arg(long)]
        json: bool,
    },

    /// Print the dependency-ordered concatenation of all files
    Cat {
        /// Root directory to scan
        root: PathBuf,
    },

    /// Show every file with its declared dependencies
    Deps {
        /// Root directory to scan
        root: PathBuf,
        /// Print the full report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Scan and resolve without printing the bundle, to validate the tree
    Check {
        /// Root directory to scan
        root: PathBuf,
    },
}
