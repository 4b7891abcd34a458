//! # Loja CLI Library
//!
//! The registration front-end: opens the store, runs one command and
//! prints its result.
//!
//! ## Module Organization
//! ```text
//! loja_cli/
//! ├── lib.rs          ◄─── You are here (startup & dispatch)
//! ├── cli.rs          ◄─── Command line definition (clap)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── store.rs    ◄─── Storage wrapper
//! │   ├── form.rs     ◄─── Registration form state
//! │   └── config.rs   ◄─── Configuration state
//! ├── commands/
//! │   ├── product.rs  ◄─── Register / list / find / remove
//! │   ├── category.rs ◄─── Category picker
//! │   ├── sale.rs     ◄─── Record / list sales
//! │   ├── storage.rs  ◄─── Bootstrap / reset
//! │   └── config.rs   ◄─── Effective configuration
//! └── error.rs        ◄─── API error type for commands
//! ```

pub mod cli;
pub mod commands;
pub mod error;
pub mod state;

use directories::ProjectDirs;
use serde::Serialize;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Command};
use error::ApiError;
use state::{ConfigState, FormField, FormState, StoreState};

/// Runs one command.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Application Startup                               │
/// │                                                                         │
/// │  1. Initialize Logging ───────────────────────────────────────────────► │
/// │     • tracing-subscriber with env filter, on stderr                     │
/// │     • Default: info,loja=debug,sqlx=warn; RUST_LOG overrides            │
/// │                                                                         │
/// │  2. Load Configuration ───────────────────────────────────────────────► │
/// │     • LOJA_* environment variables, then --db / --memory / --strict     │
/// │                                                                         │
/// │  3. Open Store ───────────────────────────────────────────────────────► │
/// │     • SQLite file (WAL, migrations) or in-memory                        │
/// │                                                                         │
/// │  4. Dispatch ─────────────────────────────────────────────────────────► │
/// │     • One command, result printed as text or JSON                       │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub async fn run(cli: Cli) -> Result<(), ApiError> {
    init_tracing();

    let Some(command) = cli.command else {
        println!("Use --help para ver os comandos disponíveis");
        return Ok(());
    };

    let config = ConfigState::from_env().with_overrides(
        cli.global.db,
        cli.global.memory,
        cli.global.strict,
    );
    let output = Output { json: cli.global.json };

    if let Command::Config = command {
        return print_config(output, &config);
    }

    let store = StoreState::open(&config, get_database_path).await?;
    info!(store = %config.store_name, "Store ready");

    dispatch(command, &store, &config, output).await
}

async fn dispatch(
    command: Command,
    store: &StoreState,
    config: &ConfigState,
    output: Output,
) -> Result<(), ApiError> {
    use commands::{category, product, sale, storage};

    match command {
        Command::Init => {
            let report = storage::initialize_storage(store).await?;
            output.print(&report, |r| {
                if r.categories_seeded {
                    println!("Categorias padrão gravadas");
                } else {
                    println!("Armazenamento já inicializado");
                }
                if r.products_empty {
                    println!("Nenhum produto cadastrado");
                }
            })
        }
        Command::Register(args) => {
            // Every launch starts from the defaults before the form is shown.
            storage::initialize_storage(store).await?;

            let form = FormState::new();
            form.set(FormField::Nome, args.nome);
            form.set(FormField::Descricao, args.descricao);
            form.set(FormField::Preco, args.preco);
            form.set(FormField::Categoria, args.categoria);

            let response = product::register_product(store, &form).await?;
            output.print(&response, |r| {
                println!("{}", r.message);
                if let Some(p) = &r.product {
                    println!("#{} {} ({}) {}", p.id, p.name, p.category, p.price_display);
                }
                println!("→ {}", r.navigate_to.route());
            })
        }
        Command::Products { categoria } => {
            let products = product::list_products(store, categoria.as_deref()).await?;
            output.print(&products, |list| {
                if list.is_empty() {
                    println!("Nenhum produto cadastrado em {}", config.store_name);
                }
                for p in list {
                    println!("#{:<4} {:<24} {:<12} {:>12}  {}", p.id, p.name, p.category, p.price_display, p.description);
                }
            })
        }
        Command::Show { nome } => {
            let p = product::find_product(store, &nome).await?;
            output.print(&p, |p| {
                println!("#{} {}", p.id, p.name);
                println!("  {}", p.description);
                println!("  {} · {}", p.category, p.price_display);
            })
        }
        Command::Categories => {
            let categories = category::list_categories(store).await?;
            output.print(&categories, |list| {
                for c in list {
                    println!("{c}");
                }
            })
        }
        Command::Remove { nome } => {
            let removed = product::remove_product(store, &nome).await?;
            output.print(&removed, |n| println!("{n} produto(s) removido(s)"))
        }
        Command::Sell { payload } => {
            let response = sale::save_sale(store, &payload).await?;
            output.print(&response, |r| match &r.sale {
                Some(s) => println!("Venda #{} registrada", s.id),
                None => println!("Venda registrada"),
            })
        }
        Command::Sales => {
            let sales = sale::list_sales(store).await?;
            output.print(&sales, |list| {
                for s in list {
                    let fields = serde_json::Value::Object(s.fields.clone());
                    println!("#{:<4} {}", s.id, fields);
                }
            })
        }
        Command::Reset { yes } => {
            if !yes {
                return Err(ApiError::validation(
                    "Isto apaga produtos, categorias e vendas. Repita com --yes para confirmar.",
                ));
            }
            let removed = storage::reset_storage(store).await?;
            output.print(&removed, |n| println!("{n} coleção(ões) apagada(s)"))
        }
        Command::Config => print_config(output, config),
    }
}

fn print_config(output: Output, config: &ConfigState) -> Result<(), ApiError> {
    output.print(&commands::config::get_config(config), |c| {
        println!("Loja:     {}", c.store_name);
        match (&c.db_path, c.in_memory) {
            (_, true) => println!("Dados:    memória"),
            (Some(path), false) => println!("Dados:    {}", path.display()),
            (None, false) => println!("Dados:    (diretório padrão)"),
        }
        println!("Política: {}", c.failure_policy);
    })
}

/// Prints a command result as JSON or as text.
#[derive(Debug, Clone, Copy)]
struct Output {
    json: bool,
}

impl Output {
    fn print<T: Serialize>(self, value: &T, text: impl FnOnce(&T)) -> Result<(), ApiError> {
        if self.json {
            let body = serde_json::to_string_pretty(value)
                .map_err(|e| ApiError::internal(format!("Falha ao gerar JSON: {e}")))?;
            println!("{body}");
        } else {
            text(value);
        }
        Ok(())
    }
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=loja=trace` - Show trace for loja crates only
/// - Default: `info,loja=debug,sqlx=warn`
///
/// Logs go to stderr so that stdout carries only command output.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,loja=debug,sqlx=warn"));

    // A second initialization (tests) is not an error.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Determines the database file path based on the platform.
///
/// ## Platform-Specific Paths
/// - **macOS**: `~/Library/Application Support/br.loja.cadastro/loja.db`
/// - **Windows**: `%APPDATA%\loja\cadastro\data\loja.db`
/// - **Linux**: `~/.local/share/cadastro/loja.db`
///
/// `LOJA_DB_PATH` and `--db` take precedence; see [`ConfigState`].
pub fn get_database_path() -> Result<PathBuf, ApiError> {
    let proj_dirs = ProjectDirs::from("br", "loja", "cadastro")
        .ok_or_else(|| ApiError::config("Não foi possível determinar o diretório de dados"))?;

    Ok(proj_dirs.data_dir().join("loja.db"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("loja").chain(args.iter().copied())).unwrap()
    }

    #[tokio::test]
    async fn test_run_against_a_file_store() {
        let dir = tempfile::tempdir().unwrap();
        let db = dir.path().join("loja.db");
        let db = db.to_str().unwrap();

        run(cli(&["--db", db, "init"])).await.unwrap();
        run(cli(&[
            "--db", db, "register", "--nome", "Arroz", "--descricao", "Tipo 1", "--preco", "19.99",
            "--categoria", "Alimentos",
        ]))
        .await
        .unwrap();

        let err = run(cli(&[
            "--db", db, "register", "--nome", "Arroz", "--descricao", "x", "--preco", "1",
            "--categoria", "Alimentos",
        ]))
        .await
        .unwrap_err();
        assert!(err.is_duplicate());

        run(cli(&["--db", db, "--json", "products"])).await.unwrap();
        run(cli(&["--db", db, "sell", r#"{"total": 19.99}"#])).await.unwrap();

        let store = StoreState::open(
            &ConfigState::default().with_overrides(Some(db.into()), false, true),
            get_database_path,
        )
        .await
        .unwrap();
        assert_eq!(store.inner().products().list_products().await.unwrap().into_value().len(), 1);
        assert_eq!(store.inner().sales().list_sales().await.unwrap().into_value().len(), 1);
    }

    #[tokio::test]
    async fn test_reset_requires_confirmation() {
        let err = run(cli(&["--memory", "reset"])).await.unwrap_err();
        assert_eq!(err.code, error::ErrorCode::ValidationError);
        run(cli(&["--memory", "reset", "--yes"])).await.unwrap();
    }

    #[tokio::test]
    async fn test_no_command_is_ok() {
        run(cli(&[])).await.unwrap();
    }
}
