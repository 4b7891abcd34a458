//! # Loja Command Line Entry Point
//!
//! ## Startup Sequence
//! 1. Parse arguments
//! 2. Initialize tracing (logging, on stderr)
//! 3. Load configuration (environment, then flags)
//! 4. Open the store
//! 5. Run one command and print its result

use clap::Parser;
use std::process::ExitCode;

use loja_cli::cli::Cli;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let json = cli.global.json;

    match loja_cli::run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if json {
                match serde_json::to_string(&e) {
                    Ok(body) => eprintln!("{body}"),
                    Err(_) => eprintln!("{e}"),
                }
            } else {
                eprintln!("Erro: {}", e.message);
            }
            ExitCode::FAILURE
        }
    }
}
