//! Even server entry point.

use clap::{Parser, Subcommand};
use tracing::error;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use even_server::api;
use even_server::config::Config;
use even_server::error::ServerError;

/// Demo HTTP server with an alternating `/info` payload.
#[derive(Parser, Debug)]
#[command(name = "even-server")]
#[command(about = "Serves a greeting on / and an alternating JSON record on /info")]
#[command(version)]
struct Args {
    /// Enable verbose logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    /// HTTP server port (overrides PORT).
    #[arg(short, long, global = true)]
    port: Option<u16>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the HTTP server (default).
    Serve {
        /// Initial counter value (overrides COUNTER_START).
        #[arg(long, allow_negative_numbers = true)]
        counter_start: Option<i64>,
    },

    /// Check configuration validity.
    CheckConfig,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Config is loaded before logging so LOG_JSON/RUST_LOG apply from the start
    let config = Config::load();
    init_logging(args.verbose, config.as_ref().ok());

    let mut config = config.map_err(|e| {
        error!("Failed to load configuration: {}", e);
        ServerError::from(e)
    })?;
    apply_overrides(&mut config, &args);

    match args.command {
        Some(Command::CheckConfig) => cmd_check_config(config),
        Some(Command::Serve { .. }) | None => Ok(api::serve(config).await?),
    }
}

/// Apply CLI flags on top of the environment configuration.
fn apply_overrides(config: &mut Config, args: &Args) {
    if let Some(port) = args.port {
        config.port = port;
    }
    if let Some(Command::Serve {
        counter_start: Some(start),
    }) = &args.command
    {
        config.counter_start = *start;
    }
}

fn init_logging(verbose: bool, config: Option<&Config>) {
    let filter = if verbose {
        EnvFilter::new("even_server=debug,info")
    } else {
        match config {
            Some(config) => config.log_filter(),
            None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        }
    };

    let json = config.is_some_and(|c| c.log_json);
    let registry = tracing_subscriber::registry().with(filter);
    if json {
        registry.with(fmt::layer().json()).init();
    } else {
        registry.with(fmt::layer()).init();
    }
}

/// Check configuration validity.
fn cmd_check_config(config: Config) -> anyhow::Result<()> {
    println!("======================================================================");
    println!("EVEN SERVER - CONFIGURATION CHECK");
    println!("======================================================================");

    print!("Validating configuration... ");
    match config.validate() {
        Ok(()) => println!("OK"),
        Err(e) => {
            println!("FAILED");
            println!("  Error: {}", e);
            return Err(ServerError::InvalidConfig(e).into());
        }
    }

    println!("----------------------------------------------------------------------");
    println!("Configuration Summary:");
    println!("  Port: {}", config.port);
    println!("  Server Name: {}", config.server_name);
    println!("  Greeting: {}", config.greeting());
    println!("  Counter Start: {}", config.counter_start);
    match config.metrics_port {
        Some(port) => println!("  Metrics: enabled on port {}", port),
        None => println!("  Metrics: disabled"),
    }
    println!("  Log Format: {}", if config.log_json { "json" } else { "text" });
    println!("======================================================================");
    println!("CONFIGURATION CHECK PASSED");
    println!("======================================================================");

    Ok(())
}
