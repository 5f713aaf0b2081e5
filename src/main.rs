use habit_app::{resolve_store_url, router, AppState, HabitStore, HabitsContainer};
use std::{env, net::SocketAddr};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let store_url = resolve_store_url();
    info!("habit store at {store_url}");

    let container = HabitsContainer::new(HabitStore::new(store_url));
    // First load; a failure just sets the error and the UI offers a retry.
    container.load().await;

    let app = router(AppState::new(container));

    let port = env::var("PORT")
        .ok()
        .and_then(|value| value.parse::<u16>().ok())
        .unwrap_or(8080);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));

    info!("listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
