pub mod commands;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use noctis_core::config::{AppConfig, ConfigOverrides, LoadOptions};

#[derive(Debug, Parser)]
#[command(
    name = "noctis",
    about = "Noctis storefront CLI",
    long_about = "Browse the gothic electronics catalog, manage the cart, price and place orders, and inspect order history.",
    after_help = "Examples:\n  noctis browse --category laptops --sort price-low\n  noctis cart add 1 --qty 2 --size 15-inch\n  noctis cart total --coupon SHADOW15\n  noctis orders --status shipping"
)]
pub struct Cli {
    #[command(subcommand)]
    command: Command,

    #[arg(long, global = true, help = "Path to a noctis.toml config file")]
    config: Option<PathBuf>,

    #[arg(long, global = true, help = "Override the data file path")]
    data_path: Option<PathBuf>,

    #[arg(long, global = true, help = "Override the log level")]
    log_level: Option<String>,
}

#[derive(Debug, Subcommand)]
enum Command {
    #[command(about = "List catalog products matching the given filters")]
    Browse(commands::browse::BrowseArgs),
    #[command(about = "Show the detail view for one product")]
    Show {
        #[arg(help = "Product id")]
        product_id: u32,
    },
    #[command(subcommand, about = "Inspect and mutate the cart")]
    Cart(commands::cart::CartAction),
    #[command(about = "Validate the checkout form and place the order")]
    Checkout(commands::checkout::CheckoutArgs),
    #[command(about = "List historical orders, grouped and searchable")]
    Orders(commands::orders::OrdersArgs),
    #[command(about = "Sign in with mock credentials")]
    Login(commands::auth::LoginArgs),
    #[command(about = "Create a mock account and sign in")]
    Register(commands::auth::RegisterArgs),
    #[command(about = "Sign out and clear the persisted session")]
    Logout,
    #[command(about = "Show the signed-in profile, if any")]
    Whoami,
    #[command(about = "Inspect effective configuration values")]
    Config,
}

fn init_logging(config: &AppConfig) {
    use noctis_core::config::LogFormat::*;
    use tracing::Level;

    let log_level = config.logging.level.parse::<Level>().unwrap_or(Level::INFO);

    match config.logging.format {
        Compact => {
            tracing_subscriber::fmt().with_target(false).with_max_level(log_level).compact().init();
        }
        Pretty => {
            tracing_subscriber::fmt().with_target(false).with_max_level(log_level).pretty().init();
        }
        Json => {
            tracing_subscriber::fmt().with_target(false).with_max_level(log_level).json().init();
        }
    }
}

pub fn run() -> ExitCode {
    let cli = Cli::parse();

    let options = LoadOptions {
        config_path: cli.config.clone(),
        require_file: cli.config.is_some(),
        overrides: ConfigOverrides { data_path: cli.data_path, log_level: cli.log_level },
    };
    let config = match AppConfig::load(options) {
        Ok(config) => config,
        Err(error) => {
            let result = commands::CommandResult::failure(
                "config",
                "config_validation",
                format!("configuration issue: {error}"),
                2,
            );
            println!("{}", result.output);
            return ExitCode::from(result.exit_code);
        }
    };
    init_logging(&config);

    let result = match cli.command {
        Command::Browse(args) => commands::browse::run(&config, args),
        Command::Show { product_id } => commands::browse::show(&config, product_id),
        Command::Cart(action) => commands::cart::run(&config, action),
        Command::Checkout(args) => commands::checkout::run(&config, args),
        Command::Orders(args) => commands::orders::run(&config, args),
        Command::Login(args) => commands::auth::login(&config, args),
        Command::Register(args) => commands::auth::register(&config, args),
        Command::Logout => commands::auth::logout(&config),
        Command::Whoami => commands::auth::whoami(&config),
        Command::Config => commands::config::run(&config),
    };

    println!("{}", result.output);
    ExitCode::from(result.exit_code)
}
