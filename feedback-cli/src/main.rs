mod server;
mod tracing_setup;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::server::{CheckDbArgs, ServeArgs};
use crate::tracing_setup::TracingConfig;

/// Collect and list rated feedback over HTTP
#[derive(Parser, Debug)]
#[command(name = "feedback", version, about)]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    /// Export traces over OTLP (requires the telemetry feature)
    #[arg(long, global = true)]
    otel: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP server
    Serve(ServeArgs),
    /// Verify the database is reachable and the feedback table readable
    CheckDb(CheckDbArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env is normal outside development
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    tracing_setup::init(&TracingConfig {
        debug: cli.debug,
        otel: cli.otel,
    })
    .ok();

    let result = match cli.command {
        Commands::Serve(args) => server::run_serve(args).await,
        Commands::CheckDb(args) => server::run_check_db(args).await,
    };

    tracing_setup::shutdown_otel();
    result
}
