//! Command line definition.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "loja")]
#[command(version)]
#[command(about = "Product registration for a small store", long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Flags accepted by every subcommand. They override `LOJA_*` variables.
#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Database file (overrides LOJA_DB_PATH)
    #[arg(long, global = true, value_name = "PATH")]
    pub db: Option<PathBuf>,

    /// Keep data in memory only
    #[arg(long, global = true, conflicts_with = "db")]
    pub memory: bool,

    /// Report storage failures instead of absorbing them
    #[arg(long, global = true)]
    pub strict: bool,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Prepare storage (seed default categories)
    Init,

    /// Register a product
    Register(RegisterArgs),

    /// List products
    Products {
        /// Only products in this category
        #[arg(long, short)]
        categoria: Option<String>,
    },

    /// Show one product by exact name
    Show {
        nome: String,
    },

    /// List categories
    Categories,

    /// Remove every product with this exact name
    Remove {
        nome: String,
    },

    /// Record a sale given as a JSON object
    Sell {
        /// e.g. '{"total": 19.99, "itens": ["Arroz"]}'
        payload: String,
    },

    /// List sales
    Sales,

    /// Delete products, categories and sales
    Reset {
        /// Confirm deletion
        #[arg(long)]
        yes: bool,
    },

    /// Show the effective configuration
    Config,
}

/// Registration form fields, taken exactly as typed.
#[derive(Debug, Args)]
pub struct RegisterArgs {
    #[arg(long, default_value = "")]
    pub nome: String,

    #[arg(long, default_value = "")]
    pub descricao: String,

    #[arg(long, default_value = "", allow_hyphen_values = true)]
    pub preco: String,

    #[arg(long, default_value = "")]
    pub categoria: String,
}
