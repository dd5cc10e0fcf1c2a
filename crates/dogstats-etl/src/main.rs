//! dogstats - dog breed ETL and statistics tool

use anyhow::Result;
use clap::{Parser, Subcommand};
use dogstats_common::logging::{init_logging, LogConfig, LogLevel};
use dogstats_etl::aggregate::Aggregator;
use dogstats_etl::config::Config;
use dogstats_etl::fetch::BreedApiClient;
use dogstats_etl::loader::Loader;
use dogstats_etl::{report, schema, seed, store};
use sqlx::SqlitePool;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "dogstats")]
#[command(author, version, about = "Dog breed ETL and statistics tool")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// SQLite database URL
    #[arg(long, env = "DOGSTATS_DATABASE_URL")]
    database_url: Option<String>,

    /// Breed API base URL
    #[arg(long, env = "DOGSTATS_API_URL")]
    api_url: Option<String>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Create the database schema (idempotent)
    Setup,

    /// Create the schema, seed sample data, and print the reports
    Seed,

    /// Fetch breed records from the API and load them
    Ingest,

    /// Print ownership and average-lifespan reports
    Report,

    /// Print the lifespan-extremes bar chart
    Chart,

    /// Full pipeline: schema, fetch, load, report
    Run,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let log_level = if cli.verbose {
        LogLevel::Debug
    } else {
        LogLevel::Info
    };

    // Environment variables take precedence over the verbose flag
    let log_config = LogConfig::with_level(log_level).from_env()?;
    init_logging(&log_config)?;

    let mut config = Config::from_env();
    if let Some(url) = cli.database_url {
        config.database_url = url;
    }
    if let Some(url) = cli.api_url {
        config.api_base_url = url;
    }

    let pool = store::connect(&config.database_url).await?;

    match cli.command {
        Command::Setup => {
            schema::create_tables(&pool).await?;
        },
        Command::Seed => {
            schema::create_tables(&pool).await?;
            seed::seed_sample_data(&Loader::new(pool.clone())).await?;
            print_reports(&pool).await?;
        },
        Command::Ingest => {
            schema::create_tables(&pool).await?;
            ingest(&config, &pool).await?;
        },
        Command::Report => {
            print_reports(&pool).await?;
        },
        Command::Chart => {
            let aggregator = Aggregator::new(pool.clone());
            let averages = aggregator.average_lifespan_by_breed().await?;
            let extremes = report::lifespan_extremes(&averages);
            println!("{}", report::render_extremes(&extremes));
        },
        Command::Run => {
            schema::create_tables(&pool).await?;
            ingest(&config, &pool).await?;
            print_reports(&pool).await?;
        },
    }

    Ok(())
}

async fn ingest(config: &Config, pool: &SqlitePool) -> Result<()> {
    let client = BreedApiClient::from_config(config)?;
    let records = client.fetch_breeds().await?;

    let loader = Loader::new(pool.clone());
    let stats = loader.load_breed_records(&records).await?;
    info!(
        breeds = stats.breeds_inserted,
        skipped = stats.lifespans_skipped,
        "ingest finished"
    );
    Ok(())
}

async fn print_reports(pool: &SqlitePool) -> Result<()> {
    let aggregator = Aggregator::new(pool.clone());

    println!("Dog Ownership Statistics:");
    println!("{}", report::render_ownership(&aggregator.dog_count_by_owner().await?));

    println!();
    println!("Average Lifespan by Breed:");
    println!(
        "{}",
        report::render_average_lifespans(&aggregator.average_lifespan_by_breed().await?)
    );

    Ok(())
}
