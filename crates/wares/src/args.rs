use clap::{Parser, Subcommand};
use std::path::PathBuf;
use waresapp::model::Category;

#[derive(Parser, Debug)]
#[command(name = "wares")]
#[command(about = "Interactive product inventory table", long_about = None)]
pub struct Cli {
    /// JSON seed file loaded before the session starts
    #[arg(short, long)]
    pub data: Option<PathBuf>,

    /// Explicit config file (default: ./wares.toml, then the user config dir)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

/// One line of session input, parsed with clap so every command gets
/// `--help` and proper error messages for free.
#[derive(Parser, Debug)]
#[command(name = "wares", no_binary_name = true, disable_version_flag = true)]
pub struct SessionLine {
    #[command(subcommand)]
    pub command: SessionCommand,
}

#[derive(Subcommand, Debug)]
pub enum SessionCommand {
    /// Show the table under the active filters
    #[command(alias = "ls")]
    List,

    /// Set the global keyword search (no argument clears it)
    Search {
        text: Option<String>,
    },

    /// Set per-column filters
    Filter {
        /// Title prefix
        #[arg(long)]
        title: Option<String>,

        /// Category prefix (e.g. "smart")
        #[arg(long)]
        category: Option<String>,

        /// Accepted brand; repeat for several
        #[arg(long = "brand")]
        brands: Vec<String>,
    },

    /// Clear every filter
    Clear,

    /// Create a product
    Add {
        #[arg(long)]
        title: String,

        #[arg(long, default_value = "")]
        description: String,

        #[arg(long)]
        category: Option<Category>,

        #[arg(long, default_value_t = 0.0)]
        price: f64,

        #[arg(long, default_value_t = 0)]
        stock: u32,
    },

    /// Edit fields of an existing product (whole-record replace underneath)
    Edit {
        id: String,

        #[arg(long)]
        title: Option<String>,

        #[arg(long)]
        description: Option<String>,

        #[arg(long)]
        category: Option<Category>,

        #[arg(long)]
        price: Option<f64>,

        #[arg(long)]
        stock: Option<u32>,
    },

    /// Replace the row selection (no ids clears it)
    Select {
        ids: Vec<String>,
    },

    /// Delete products by id, or the current selection when no ids given
    #[command(alias = "rm")]
    Delete {
        ids: Vec<String>,
    },

    /// Write the filtered view to a CSV file
    Export {
        path: Option<PathBuf>,
    },

    /// Leave the session
    #[command(alias = "q")]
    Quit,
}
