use chore_tracker::{AppData, AppState, resolve_data_dir, router, storage};
use std::{env, net::SocketAddr};
use tokio::fs;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let data_dir = resolve_data_dir();
    fs::create_dir_all(&data_dir).await?;

    let chores = storage::load_chores(&data_dir).await;
    let members = storage::load_members(&data_dir).await;
    let completions = storage::load_completions(&data_dir).await;
    for (name, seeded) in [
        ("chores", chores.was_seeded()),
        ("members", members.was_seeded()),
        ("completions", completions.was_seeded()),
    ] {
        if seeded {
            warn!("{name} record missing or unreadable, using defaults");
        }
    }

    let data = AppData {
        chores: chores.into_inner(),
        members: members.into_inner(),
        completions: completions.into_inner(),
        current_user: storage::load_session(&data_dir).await,
    };

    let state = AppState::new(data_dir, data);
    let app = router(state);

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
