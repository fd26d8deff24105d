use std::path::PathBuf;
use std::process::exit;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use itam_client::api::ApiError;
use itam_client::config::{load_config, schema_json, DEFAULT_CONFIG_PATH};
use itam_client::navigation::LOGIN_PATH;
use itam_client::startup::build_context;
use itam_client::state::{AppContext, AppError};
use itam_client::utils::logger::init_logging;
use tracing::error;

/// Command-line client for the ITAM API.
#[derive(Parser, Debug)]
#[command(name = "itam-client", version)]
struct Cli {
    /// YAML config file; `ITAM_` environment variables override it
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
enum Command {
    /// List the navigable pages
    Routes,
    /// Load a page and print it as JSON, e.g. `open /assets`
    Open { path: String },
    /// Store a bearer token for later calls
    Login { token: String },
    /// Forget the stored token
    Logout,
    /// Show whether a token is stored
    Status,
    /// Print the JSON schema of the config file
    Schema,
}

async fn run(ctx: &AppContext, command: Command) -> Result<(), AppError> {
    match command {
        Command::Routes => {
            for route in ctx.routes.iter() {
                let loading = if route.is_lazy() { "lazy" } else { "eager" };
                println!(
                    "{:<14} {:<12} {:<16} {}",
                    route.path,
                    route.name,
                    route.component().name(),
                    loading
                );
            }
        }
        Command::Open { path } => match ctx.open(&path).await {
            Ok(page) => {
                let json = serde_json::to_string_pretty(&page).map_err(ApiError::Encode)?;
                println!("{}", json);
            }
            Err(AppError::Api(e)) if e.is_unauthorized() => {
                eprintln!(
                    "Session rejected by the server; now at {}. Run `itam-client login <token>`.",
                    ctx.navigator.current_path()
                );
                return Err(AppError::Api(e));
            }
            Err(e) => return Err(e),
        },
        Command::Login { token } => {
            ctx.auth.set_token(token)?;
            println!("Token stored.");
        }
        Command::Logout => {
            ctx.auth.logout()?;
            println!("Logged out.");
        }
        Command::Status => {
            if ctx.auth.is_authenticated() {
                println!("Authenticated (token stored).");
            } else {
                println!("Not authenticated; navigate to {} to sign in.", LOGIN_PATH);
            }
        }
        Command::Schema => {
            let schema = schema_json().map_err(ApiError::Encode)?;
            println!("{}", schema);
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // No config or context needed
    if cli.command == Command::Schema {
        match schema_json() {
            Ok(schema) => println!("{}", schema),
            Err(e) => {
                eprintln!("Error printing schema: {}", e);
                exit(1);
            }
        }
        return;
    }

    let config = match load_config(&cli.config) {
        Ok(config) => Arc::new(config),
        Err(e) => {
            eprintln!("{}", e);
            exit(1);
        }
    };

    if let Err(e) = init_logging(&config.logging) {
        eprintln!("{}", e);
        exit(1);
    }

    let ctx = match build_context(config) {
        Ok(ctx) => ctx,
        Err(e) => {
            error!("Startup failed: {}", e);
            exit(1);
        }
    };

    if let Err(e) = run(&ctx, cli.command).await {
        error!("Command failed: {}", e);
        eprintln!("error: {}", e);
        exit(1);
    }
}
