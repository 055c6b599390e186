use color_eyre::eyre::Result;
use dotenv::dotenv;
use salonbook_api::config::ApiConfig;
use salonbook_db::{create_pool, schema::initialize_database, seed::seed_defaults};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    // Load environment variables
    dotenv().ok();

    // Load configuration
    let config = ApiConfig::from_env()?;

    // Create database connection pool
    let db_pool = create_pool(&config.database_url).await?;

    // Initialize database schema
    initialize_database(&db_pool).await?;

    // Seed default services and schedules on a fresh database
    if let Err(error) = seed_defaults(&db_pool).await {
        eprintln!("Seed skipped: {error}");
    }

    // Start API server
    salonbook_api::start_server(config, db_pool).await?;

    Ok(())
}
