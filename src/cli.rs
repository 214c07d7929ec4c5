use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

pub mod commands;

use commands::{chart_config, snippet};

#[derive(Parser)]
#[command(name = "stockroom")]
#[command(about = "Tooling for the inventory page's chart and enhancer")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the Chart.js configuration the inventory chart uses
    ChartConfig {
        /// Path to a JSON array of `{"name": ..., "current_stock": ...}` records
        #[arg(short, long)]
        input: PathBuf,

        /// Pretty-print the configuration
        #[arg(long)]
        pretty: bool,
    },
    /// Print the inline script a page template embeds to draw the chart
    ///
    /// The script imports the wasm frontend module, initializes it and calls
    /// `createInventoryChart` with the inventory labels and stock values.
    Snippet {
        /// Path to a JSON array of `{"name": ..., "current_stock": ...}` records
        #[arg(short, long)]
        input: PathBuf,

        /// Id of the canvas element the chart mounts into
        #[arg(short, long, env = "STOCKROOM_MOUNT_ID", default_value = "inventoryChart")]
        mount: String,

        /// URL of the wasm-bindgen JS module
        #[arg(long, env = "STOCKROOM_MODULE_URL", default_value = "/static/pkg/frontend.js")]
        module_url: String,
    },
}

impl Cli {
    pub fn run(self) -> Result<String> {
        match self.command {
            Commands::ChartConfig { input, pretty } => chart_config(&input, pretty),
            Commands::Snippet {
                input,
                mount,
                module_url,
            } => snippet(&input, &mount, &module_url),
        }
    }
}
