use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use darkroom::server::{config::Config, model::app::AppState, router, startup};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    let user_api = startup::build_api_client(&config);
    let session_key = startup::session_key(&config).unwrap();
    let listener = startup::bind_listener(&config).await.unwrap();

    tracing::info!("Starting server on port {}", config.port);

    let router = router::routes().with_state(AppState {
        user_api,
        session_key,
    });

    axum::serve(listener, router).await.unwrap();
}
