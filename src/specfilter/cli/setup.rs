use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "specfilter", bin_name = "specfilter", version)]
#[command(
    about = "Filter a product catalog with composable specifications",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Read items from this JSON catalog instead of the configured one
    #[arg(long, global = true, value_name = "FILE", help_heading = "Options")]
    pub catalog: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true, help_heading = "Options")]
    pub json: bool,

    /// Verbose output
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List every item in the catalog
    #[command(alias = "ls")]
    List,

    /// Keep the items matching a query, e.g. `color=green & !size=large`
    #[command(alias = "f")]
    Filter {
        /// Query words, joined with spaces (an empty query matches everything)
        query: Vec<String>,
    },

    /// Show the attributes a query can use
    Attrs,

    /// Run the green / large / green-and-large walkthrough
    Demo,

    /// Get or set configuration
    Config {
        /// Configuration key (catalog, color)
        key: Option<String>,

        /// Value to set
        value: Option<String>,
    },

    /// Write the demo catalog to the data directory and use it
    Init,
}
