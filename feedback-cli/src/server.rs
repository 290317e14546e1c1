use anyhow::{Context, Result};
use clap::Parser;
use feedback_server::config::{DEFAULT_MAX_CONNECTIONS, DEFAULT_TIMEOUT_SECS};
use feedback_server::db::schema::ensure_schema;
use feedback_server::{AppState, DatabaseConfig, FeedbackStore, PgFeedbackStore, ServerConfig};
use std::time::Duration;

/// Connection flags shared by every command that talks to PostgreSQL
#[derive(Parser, Debug)]
pub struct DatabaseArgs {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    pub database_url: Option<String>,

    /// Maximum pooled connections
    #[arg(long, default_value_t = DEFAULT_MAX_CONNECTIONS)]
    pub max_connections: u32,
}

impl DatabaseArgs {
    fn connect(self) -> Result<PgFeedbackStore> {
        let config =
            DatabaseConfig::new(self.database_url)?.with_max_connections(self.max_connections)?;
        PgFeedbackStore::connect_lazy(&config).context("could not configure database pool")
    }
}

#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Bind address
    #[arg(short, long, default_value = "127.0.0.1")]
    pub bind: String,

    /// Port to listen on
    #[arg(short, long, default_value_t = 3030)]
    pub port: u16,

    #[command(flatten)]
    pub database: DatabaseArgs,

    /// Request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout: u64,

    /// Allow any CORS origin instead of localhost only
    #[arg(long)]
    pub cors_permissive: bool,

    /// Create the feedback table if it does not exist before serving
    #[arg(long)]
    pub init_schema: bool,
}

#[derive(Parser, Debug)]
pub struct CheckDbArgs {
    #[command(flatten)]
    pub database: DatabaseArgs,
}

pub async fn run_serve(args: ServeArgs) -> Result<()> {
    // Configuration errors surface before any socket is opened
    let store = args.database.connect()?;
    let mut config = ServerConfig::new(&args.bind, args.port)?
        .with_request_timeout(Duration::from_secs(args.timeout))?;
    config.cors_permissive = args.cors_permissive;

    if args.init_schema {
        ensure_schema(store.pool())
            .await
            .context("could not create feedback table")?;
    }

    tracing::info!("Starting feedback server on http://{}", config.bind_addr);
    feedback_server::run_server(AppState::new(store), config).await?;
    Ok(())
}

pub async fn run_check_db(args: CheckDbArgs) -> Result<()> {
    let store = args.database.connect()?;

    let now = store
        .server_time()
        .await
        .context("database connection failed")?;
    let count = store
        .count_feedback()
        .await
        .context("feedback table is not readable")?;

    println!("Database connection successful");
    println!("  server time:    {}", now.to_rfc3339());
    println!("  feedback rows:  {}", count);
    Ok(())
}
