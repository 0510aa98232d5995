use std::sync::Arc;

use roster_mock::{Config, MockState};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "roster_mock=info,tower_http=info".into()),
        )
        .with_target(false)
        .init();

    let config = Config::from_env();
    let state = if config.seed {
        MockState::seeded()
    } else {
        MockState::new()
    };

    let listener = TcpListener::bind(("0.0.0.0", config.port)).await?;
    roster_mock::serve(listener, Arc::new(state)).await?;
    Ok(())
}
