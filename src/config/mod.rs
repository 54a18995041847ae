pub mod toml_config;

pub use toml_config::LessonConfig;

#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};
#[cfg(feature = "cli")]
use std::path::PathBuf;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "chai-lessons")]
#[command(about = "Runnable lessons on values and collections, plus two small exercises")]
pub struct CliConfig {
    /// Optional TOML settings file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Run the lessons in order
    Run {
        /// Run only these lessons (comma-separated)
        #[arg(long, value_delimiter = ',')]
        only: Vec<String>,

        /// Skip these lessons (comma-separated)
        #[arg(long, value_delimiter = ',')]
        skip: Vec<String>,

        /// Print a JSON run summary after the lessons
        #[arg(long)]
        summary: bool,

        /// Show which lessons would run without running them
        #[arg(long)]
        dry_run: bool,
    },

    /// List lesson names and titles
    List,

    /// Decide the delivery fee for an order amount
    DeliveryFee {
        /// Order amount; read from stdin when omitted
        #[arg(long, allow_hyphen_values = true)]
        amount: Option<String>,
    },

    /// Classify a thermostat reading
    Thermostat {
        /// Device status: active or offline
        #[arg(long)]
        status: Option<String>,

        /// Temperature reading
        #[arg(long, allow_hyphen_values = true)]
        temperature: Option<f64>,
    },
}
