use playercards::config::DatabaseConfig;
use playercards::domain::repositories::PlayerCardRepository;
use playercards::infrastructure::repositories::PostgresPlayerCardRepository;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // Load environment variables
    dotenv::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = DatabaseConfig::from_env().expect("Invalid database configuration");

    // Connect to database
    tracing::info!("Connecting to database...");
    let pool = config
        .connect()
        .await
        .expect("Failed to connect to database");

    tracing::info!("Database connected successfully");

    let repo = PostgresPlayerCardRepository::new(pool);
    match repo.list_player_cards().await {
        Ok(cards) => {
            tracing::info!(count = cards.len(), "Loaded player cards");
            let json = serde_json::to_string_pretty(&cards).expect("Failed to serialize cards");
            println!("{}", json);
        }
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    }
}
