use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use customer_service::{
    api::{create_router, AppState},
    config::Config,
    db::{create_pool, CustomerRepository, InMemoryCustomerRepository, PgCustomerRepository},
    services::HttpMovieClient,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("customer_service=info,tower_http=info")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;

    let repository: Arc<dyn CustomerRepository> = match &config.database_url {
        Some(database_url) => {
            let pool = create_pool(database_url, config.database_max_connections).await?;
            Arc::new(PgCustomerRepository::new(pool))
        }
        None => {
            tracing::warn!("DATABASE_URL not set, using seeded in-memory customer store");
            Arc::new(InMemoryCustomerRepository::seeded())
        }
    };

    let movie_client = HttpMovieClient::new(
        config.movie_service_url.clone(),
        config.movie_service_timeout(),
    )?;

    let state = AppState::new(repository, Arc::new(movie_client));
    let app = create_router(state);

    let address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&address).await?;
    tracing::info!(
        address = %address,
        movie_service_url = %config.movie_service_url,
        "Customer service listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
    }
    tracing::info!("Shutdown signal received");
}
