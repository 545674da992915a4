use std::path::PathBuf;

use anyhow::Context;
use clap::{Args as ClapArgs, Parser, Subcommand};
use tracing::info;
use videx_config::{Config, ConfigLoad, ConfigLoader};
use videx_core::search::rebuild_index;
use videx_server::{
    create_app,
    infra::startup::{
        build_state, connect_database, init_tracing, log_config, open_search_index,
        open_store, shutdown_signal,
    },
};

/// CLI entry point
#[derive(Parser, Debug)]
#[command(name = "videx-server")]
#[command(about = "Conference video index with search and a read-only JSON API")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    #[command(flatten)]
    serve: ServeArgs,
}

#[derive(ClapArgs, Debug, Clone)]
struct ServeArgs {
    /// Server port (overrides config)
    #[arg(short, long, env = "SERVER_PORT")]
    port: Option<u16>,

    /// Server host (overrides config)
    #[arg(long, env = "SERVER_HOST")]
    host: Option<String>,

    /// Path to a videx.toml file
    #[arg(short, long, env = "VIDEX_CONFIG")]
    config: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
enum Command {
    #[command(subcommand)]
    Db(DbCommand),
    #[command(subcommand)]
    Index(IndexCommand),
}

#[derive(Debug, Subcommand)]
enum DbCommand {
    /// Apply database migrations and exit
    Migrate,
}

#[derive(Debug, Subcommand)]
enum IndexCommand {
    /// Rebuild the search index from the catalog and exit
    Rebuild,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = load_runtime_config(&cli.serve)?;

    match cli.command {
        Some(Command::Db(DbCommand::Migrate)) => run_db_migrate(&config).await,
        Some(Command::Index(IndexCommand::Rebuild)) => run_index_rebuild(&config).await,
        None => run_server(config).await,
    }
}

fn load_runtime_config(args: &ServeArgs) -> anyhow::Result<Config> {
    let loader = match &args.config {
        Some(path) => ConfigLoader::new().with_config_path(path),
        None => ConfigLoader::new(),
    };
    let ConfigLoad {
        mut config,
        warnings,
    } = loader.load().context("failed to load configuration")?;
    config.apply_overrides(args.host.clone(), args.port);

    init_tracing();
    log_config(&config, &warnings);
    Ok(config)
}

async fn run_db_migrate(config: &Config) -> anyhow::Result<()> {
    let database = connect_database(config).await?;
    database
        .initialize_schema()
        .await
        .context("database migration failed")?;
    info!("Database migrations applied successfully");
    Ok(())
}

async fn run_index_rebuild(config: &Config) -> anyhow::Result<()> {
    let store = open_store(config).await?;
    let index = open_search_index(config)?;
    let indexed = rebuild_index(&store, index.as_ref())
        .await
        .context("search index rebuild failed")?;
    info!(
        documents = indexed,
        path = %config.search.index_path.display(),
        "search index rebuilt"
    );
    Ok(())
}

async fn run_server(config: Config) -> anyhow::Result<()> {
    let addr = config.server.bind_address();
    let state = build_state(config).await?;
    let app = create_app(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!("Videx listening on http://{addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("server stopped");
    Ok(())
}
