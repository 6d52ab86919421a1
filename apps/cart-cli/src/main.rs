//! # GoMarket Cart CLI
//!
//! Runs one Cart Store operation against the device-local SQLite cart.
//!
//! ## Usage
//! ```bash
//! # Show the persisted cart
//! cargo run -p gomarket-cart-cli -- show
//!
//! # Add one unit of a product
//! cargo run -p gomarket-cart-cli -- add 1 "Apple" https://img/1.png 10.0
//!
//! # Adjust quantities
//! cargo run -p gomarket-cart-cli -- inc 1
//! cargo run -p gomarket-cart-cli -- dec 1
//!
//! # Use a specific database file
//! cargo run -p gomarket-cart-cli -- --db ./data/cart.db show
//! ```
//!
//! Logging follows `RUST_LOG`; every persist is logged at debug level.

use std::env;
use std::path::PathBuf;

use tracing::{info, Level};
use tracing_subscriber::EnvFilter;

use gomarket_cart::{CartConfig, CartContext, CartProvider};
use gomarket_core::NewCartItem;
use gomarket_db::{Database, DbConfig, KeyValueStore};

const USAGE: &str = "\
GoMarket Cart

Usage: gomarket-cart [OPTIONS] <COMMAND>

Commands:
  show                                   Print the cart
  add <ID> <TITLE> <IMAGE_URL> <PRICE>   Add one unit of a product
  inc <ID>                               Add one unit to a line
  dec <ID>                               Remove one unit from a line
  reset                                  Delete the persisted cart

Options:
  -d, --db <PATH>        Database file path (default: platform data dir)
  -c, --config <PATH>    Config file path (default: platform config dir)
  -h, --help             Show this help message";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command line arguments
    let args: Vec<String> = env::args().collect();

    let mut db_path: Option<PathBuf> = None;
    let mut config_path: Option<PathBuf> = None;
    let mut command: Vec<String> = Vec::new();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--db" | "-d" => {
                if i + 1 < args.len() {
                    db_path = Some(PathBuf::from(&args[i + 1]));
                    i += 1;
                }
            }
            "--config" | "-c" => {
                if i + 1 < args.len() {
                    config_path = Some(PathBuf::from(&args[i + 1]));
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("{USAGE}");
                return Ok(());
            }
            other => command.push(other.to_string()),
        }
        i += 1;
    }

    init_tracing();

    let mut config = CartConfig::load_or_default(config_path);
    if let Some(path) = db_path {
        config.storage.database_path = Some(path);
    }

    let db_path = config
        .database_path()
        .ok_or("could not determine a database path; pass --db")?;
    if let Some(parent) = db_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    info!(?db_path, key = %config.storage_key(), "Opening cart storage");
    let db = Database::new(DbConfig::new(db_path).max_connections(config.storage.max_connections))
        .await?;

    let args: Vec<&str> = command.iter().map(String::as_str).collect();

    if let ["reset"] = args.as_slice() {
        db.remove_item(config.storage_key()).await?;
        println!("Cart cleared");
        db.close().await;
        return Ok(());
    }

    let provider = CartProvider::mount(db.clone(), &config).await;
    let cart = provider.context();

    match args.as_slice() {
        [] | ["show"] => {}
        ["add", id, title, image_url, price] => {
            let price: f64 = price
                .parse()
                .map_err(|_| format!("invalid price '{price}'"))?;
            cart.add_to_cart(NewCartItem::new(*id, *title, *image_url, price))
                .await?;
        }
        ["inc", id] => cart.increment(id).await?,
        ["dec", id] => cart.decrement(id).await?,
        _ => {
            eprintln!("{USAGE}");
            return Err(format!("unrecognized command: {}", command.join(" ")).into());
        }
    }

    print_cart(&cart);

    drop(cart);
    provider.unmount();
    db.close().await;

    Ok(())
}

/// Prints one line per product plus totals.
fn print_cart<S: KeyValueStore>(cart: &CartContext<S>) {
    let products = cart.products();
    if products.is_empty() {
        println!("Cart is empty");
        return;
    }

    for item in &products {
        println!(
            "{:>4} x {:<32} {:>10.2}  [{}]",
            item.quantity, item.title, item.price, item.id
        );
    }
    println!(
        "{} line(s), {} unit(s)",
        cart.item_count(),
        cart.total_quantity()
    );
}

/// Initializes the tracing subscriber for logging.
///
/// Log level can be controlled via RUST_LOG environment variable:
/// - `RUST_LOG=debug` for verbose output
/// - `RUST_LOG=gomarket=trace` for trace-level cart logs
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,gomarket=debug,sqlx=warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_max_level(Level::TRACE)
        .with_writer(std::io::stderr)
        .init();
}
