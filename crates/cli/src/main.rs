//! PUGIL CLI - catalog, cart and admin tools over local data.
//!
//! # Usage
//!
//! ```bash
//! # Browse the catalog
//! pugil catalog list --category luvas
//!
//! # Fill the cart and check out
//! pugil cart add 1 --size 12oz --quantity 2
//! PUGIL_USER_NAME="Ana Silva" pugil cart checkout --first-name Ana --last-name Silva
//!
//! # Manage products and orders
//! PUGIL_USER_USERNAME=admin pugil admin products list
//! PUGIL_USER_USERNAME=admin pugil admin orders verify <order-id> 123456
//! ```
//!
//! # Commands
//!
//! - `catalog list` - List catalog products
//! - `cart show|add|set|remove|clear|checkout` - Manage the cart
//! - `admin products list|add|edit|delete` - Manage admin products
//! - `admin orders list|status|verify` - Manage orders
//! - `admin options` - List selectable colors and sizes
//! - `admin reset` - Restore the default admin data

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Args, Parser, Subcommand};
use pugil_core::{CatalogProductId, OrderId, OrderStatus, ProductId};
use rust_decimal::Decimal;
use sentry::integrations::tracing as sentry_tracing;
use tracing_subscriber::{Layer, layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;

use commands::CommandError;
use commands::cart::CheckoutArgs;
use commands::products::ProductFields;
use config::{CliConfig, LogFormat};

#[derive(Parser)]
#[command(name = "pugil")]
#[command(author, version, about = "PUGIL store tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse the product catalog
    Catalog {
        #[command(subcommand)]
        action: CatalogAction,
    },
    /// Manage the shopping cart
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },
    /// Admin panel (requires an admin identity)
    Admin {
        #[command(subcommand)]
        action: AdminAction,
    },
}

#[derive(Subcommand)]
enum CatalogAction {
    /// List products
    List {
        /// Only show this category
        #[arg(short, long)]
        category: Option<String>,
    },
}

#[derive(Subcommand)]
enum CartAction {
    /// Show cart contents and total
    Show,
    /// Add a catalog product
    Add {
        /// Catalog product id
        id: CatalogProductId,

        /// Size (defaults to the product's)
        #[arg(short, long)]
        size: Option<String>,

        /// Color (defaults to the product's)
        #[arg(short, long)]
        color: Option<String>,

        #[arg(short, long, default_value_t = 1)]
        quantity: u32,
    },
    /// Set the quantity of a line (zero or less removes it)
    Set {
        id: CatalogProductId,
        #[arg(short, long)]
        size: String,
        #[arg(short, long)]
        color: Option<String>,
        #[arg(short, long, allow_negative_numbers = true)]
        quantity: i64,
    },
    /// Remove a line
    Remove {
        id: CatalogProductId,
        #[arg(short, long)]
        size: String,
        #[arg(short, long)]
        color: Option<String>,
    },
    /// Empty the cart
    Clear,
    /// Place an order for the cart contents
    Checkout {
        #[arg(long, default_value = "card")]
        payment_method: String,
        #[arg(long)]
        first_name: Option<String>,
        #[arg(long)]
        last_name: Option<String>,
        #[arg(long)]
        phone: Option<String>,
    },
}

#[derive(Subcommand)]
enum AdminAction {
    /// Manage products
    Products {
        #[command(subcommand)]
        action: ProductAction,
    },
    /// Manage orders
    Orders {
        #[command(subcommand)]
        action: OrderAction,
    },
    /// List selectable colors and sizes
    Options,
    /// Clear local admin data and restore the defaults
    Reset,
}

#[derive(Subcommand)]
enum ProductAction {
    /// List products
    List,
    /// Add a product
    Add(ProductArgs),
    /// Edit a product; unset fields are kept
    Edit {
        id: ProductId,
        #[command(flatten)]
        fields: ProductArgs,
    },
    /// Delete a product
    Delete { id: ProductId },
}

#[derive(Args)]
struct ProductArgs {
    #[arg(long)]
    name: Option<String>,
    #[arg(long)]
    description: Option<String>,
    #[arg(long)]
    price: Option<Decimal>,
    #[arg(long)]
    original_price: Option<Decimal>,
    #[arg(long)]
    category: Option<String>,
    #[arg(long)]
    image_url: Option<String>,
    /// Toggle a color (repeatable)
    #[arg(long = "color")]
    colors: Vec<String>,
    /// Toggle a size (repeatable)
    #[arg(long = "size")]
    sizes: Vec<String>,
}

impl From<ProductArgs> for ProductFields {
    fn from(args: ProductArgs) -> Self {
        Self {
            name: args.name,
            description: args.description,
            price: args.price,
            original_price: args.original_price,
            category: args.category,
            image_url: args.image_url,
            colors: args.colors,
            sizes: args.sizes,
        }
    }
}

#[derive(Subcommand)]
enum OrderAction {
    /// List orders
    List,
    /// Overwrite an order's status
    Status { id: OrderId, status: OrderStatus },
    /// Complete an order with its delivery code
    Verify { id: OrderId, code: String },
}

/// Initialize Sentry error tracking and return guard that must be kept alive.
fn init_sentry(config: &CliConfig) -> Option<sentry::ClientInitGuard> {
    let dsn = config.sentry_dsn.as_ref()?;

    let guard = sentry::init((
        dsn.as_str(),
        sentry::ClientOptions {
            release: sentry::release_name!(),
            environment: config
                .sentry_environment
                .clone()
                .map(std::borrow::Cow::Owned),
            attach_stacktrace: true,
            ..Default::default()
        },
    ));

    tracing::info!("Sentry initialized");
    Some(guard)
}

/// Filter tracing events to Sentry event types.
fn sentry_event_filter(metadata: &tracing::Metadata<'_>) -> sentry_tracing::EventFilter {
    match *metadata.level() {
        tracing::Level::ERROR | tracing::Level::WARN => sentry_tracing::EventFilter::Event,
        tracing::Level::INFO | tracing::Level::DEBUG => sentry_tracing::EventFilter::Breadcrumb,
        _ => sentry_tracing::EventFilter::Ignore,
    }
}

fn init_tracing(config: &CliConfig) {
    // Defaults to info level for our crates if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "pugil=info".into());

    let fmt_layer = match config.log_format {
        LogFormat::Pretty => tracing_subscriber::fmt::layer().without_time().boxed(),
        LogFormat::Json => tracing_subscriber::fmt::layer().json().boxed(),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .with(
            config
                .sentry_dsn
                .is_some()
                .then(|| sentry_tracing::layer().event_filter(sentry_event_filter)),
        )
        .init();
}

fn main() {
    let config = match CliConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            // No subscriber yet; fall back to a plain one so the error is seen
            tracing_subscriber::fmt::init();
            tracing::error!("Failed to load configuration: {e}");
            std::process::exit(2);
        }
    };

    // Initialize Sentry (must be done before tracing subscriber)
    let _sentry_guard = init_sentry(&config);
    init_tracing(&config);

    let cli = Cli::parse();

    if let Err(e) = run(cli, &config) {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli, config: &CliConfig) -> Result<(), CommandError> {
    match cli.command {
        Commands::Catalog { action } => match action {
            CatalogAction::List { category } => commands::catalog::list(category.as_deref())?,
        },
        Commands::Cart { action } => match action {
            CartAction::Show => commands::cart::show(config)?,
            CartAction::Add {
                id,
                size,
                color,
                quantity,
            } => commands::cart::add(config, id, size, color, quantity)?,
            CartAction::Set {
                id,
                size,
                color,
                quantity,
            } => commands::cart::set(config, id, &size, color.as_deref(), quantity)?,
            CartAction::Remove { id, size, color } => {
                commands::cart::remove(config, id, &size, color.as_deref())?;
            }
            CartAction::Clear => commands::cart::clear(config)?,
            CartAction::Checkout {
                payment_method,
                first_name,
                last_name,
                phone,
            } => commands::cart::checkout(
                config,
                CheckoutArgs {
                    payment_method,
                    first_name,
                    last_name,
                    phone,
                },
            )?,
        },
        Commands::Admin { action } => match action {
            AdminAction::Products { action } => match action {
                ProductAction::List => commands::products::list(config)?,
                ProductAction::Add(args) => commands::products::add(config, args.into())?,
                ProductAction::Edit { id, fields } => {
                    commands::products::edit(config, &id, fields.into())?;
                }
                ProductAction::Delete { id } => commands::products::delete(config, &id)?,
            },
            AdminAction::Orders { action } => match action {
                OrderAction::List => commands::orders::list(config)?,
                OrderAction::Status { id, status } => {
                    commands::orders::status(config, &id, status)?;
                }
                OrderAction::Verify { id, code } => commands::orders::verify(config, &id, &code)?,
            },
            AdminAction::Options => commands::data::options(config)?,
            AdminAction::Reset => commands::data::reset(config)?,
        },
    }
    Ok(())
}
