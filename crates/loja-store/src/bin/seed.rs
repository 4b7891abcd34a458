//! # Seed Data Generator
//!
//! Populates a database with sample products for development.
//!
//! ## Usage
//! ```bash
//! # Seed every sample product (default)
//! cargo run -p loja-store --bin seed
//!
//! # Only the first N
//! cargo run -p loja-store --bin seed -- --count 10
//!
//! # Specify database path
//! cargo run -p loja-store --bin seed -- --db ./data/loja.db
//! ```
//!
//! Products go through `ProductRepository::add_product`, so they receive
//! ids 1..N and respect the name uniqueness rule. Runs under the strict
//! policy: a failed write stops the seed instead of being skipped silently.

use std::env;
use loja_core::{Money, NewProduct};
use loja_store::{FailurePolicy, SqliteConfig, SqliteStore, Storage};
use std::sync::Arc;

/// Sample products per default category: (name, description, price in cents).
const SAMPLES: &[(&str, &[(&str, &str, i128)])] = &[
    (
        "Alimentos",
        &[
            ("Arroz", "Tipo 1, pacote 5kg", 2499),
            ("Feijão Carioca", "Pacote 1kg", 899),
            ("Macarrão Espaguete", "Pacote 500g", 549),
            ("Café Torrado", "Pacote 500g", 1899),
            ("Açúcar Refinado", "Pacote 1kg", 479),
            ("Óleo de Soja", "Garrafa 900ml", 799),
            ("Farinha de Trigo", "Pacote 1kg", 569),
            ("Sal Refinado", "Pacote 1kg", 299),
        ],
    ),
    (
        "Bebidas",
        &[
            ("Água Mineral", "Garrafa 500ml", 250),
            ("Refrigerante Cola", "Garrafa 2L", 999),
            ("Suco de Laranja", "Caixa 1L", 799),
            ("Cerveja Lata", "Lata 350ml", 449),
            ("Chá Gelado", "Garrafa 1,5L", 699),
        ],
    ),
    (
        "Limpeza",
        &[
            ("Detergente", "Frasco 500ml", 289),
            ("Sabão em Pó", "Caixa 1kg", 1399),
            ("Água Sanitária", "Frasco 1L", 449),
            ("Desinfetante", "Frasco 2L", 1099),
            ("Esponja", "Pacote com 3", 599),
        ],
    ),
];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command line arguments
    let args: Vec<String> = env::args().collect();

    let mut count: usize = usize::MAX;
    let mut db_path = String::from("./loja_dev.db");

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--count" | "-c" => {
                let value = args.get(i + 1).map(String::as_str).unwrap_or("");
                count = match parse_count(value) {
                    Ok(n) => n,
                    Err(e) => {
                        eprintln!("error: {}", e);
                        std::process::exit(2);
                    }
                };
                i += 1;
            }
            "--db" | "-d" => {
                if i + 1 < args.len() {
                    db_path = args[i + 1].clone();
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("Loja Seed Data Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -c, --count <N>    Number of products to register (default: all samples)");
                println!("  -d, --db <PATH>    Database file path (default: ./loja_dev.db)");
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    println!("🌱 Loja Seed Data Generator");
    println!("===========================");
    println!("Database: {}", db_path);
    println!();

    let sqlite = Arc::new(SqliteStore::connect(SqliteConfig::new(&db_path)).await?);
    let storage = Storage::with_policy(sqlite.clone(), FailurePolicy::Strict);
    println!("✓ Connected to database");

    let report = storage.initialize().await?.into_value();
    if report.categories_seeded {
        println!("✓ Default categories written");
    }

    if !report.products_empty {
        let existing = storage.products().list_products().await?.into_value().len();
        println!("⚠ Database already has {} products", existing);
        println!("  Skipping seed to avoid duplicates.");
        println!("  Run `loja reset` or delete the database file to regenerate.");
        sqlite.close().await;
        return Ok(());
    }

    println!();
    println!("Registering products...");

    let products = storage.products();
    let mut registered = 0;

    'categories: for (categoria, items) in SAMPLES {
        for (nome, descricao, cents) in items.iter() {
            if registered >= count {
                break 'categories;
            }

            let candidate = NewProduct::new(*nome, *descricao, Money::from_cents(*cents), *categoria);
            match products.add_product(candidate).await {
                Ok(outcome) => {
                    if let Some(product) = outcome.into_value() {
                        println!("  #{:<3} {:<22} {}", product.id, product.name, product.price);
                        registered += 1;
                    }
                }
                Err(e) if e.is_duplicate() => {
                    eprintln!("  Skipping {}: {}", nome, e);
                }
                Err(e) => return Err(e.into()),
            }
        }
    }

    println!();
    println!("✓ Registered {} products", registered);

    for (categoria, _) in SAMPLES {
        let in_category = products.list_by_category(categoria).await?.into_value();
        println!("  {}: {}", categoria, in_category.len());
    }

    sqlite.close().await;

    println!();
    println!("✓ Seed complete!");

    Ok(())
}

/// Parses the `--count` value: a non-negative integer.
fn parse_count(value: &str) -> Result<usize, String> {
    value
        .parse()
        .map_err(|_| format!("--count expects a whole number, got {:?}", value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_count() {
        assert_eq!(parse_count("10"), Ok(10));
        assert_eq!(parse_count("0"), Ok(0));
        assert!(parse_count("").is_err());
        assert!(parse_count("ten").is_err());
        assert!(parse_count("-3").is_err());
        assert!(parse_count("10 ").is_err());
    }
}
