use anyhow::anyhow;
use dotenvy::dotenv;
use tracing::info;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use campus_api::modules::auth::service::AuthService;
use campus_api::router::init_router;
use campus_api::state::init_app_state;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                // axum logs rejections from built-in extractors with the `axum::rejection`
                // target, at `TRACE` level. `axum::rejection=trace` enables showing those events
                format!(
                    "{}=debug,tower_http=debug,axum::rejection=trace",
                    env!("CARGO_CRATE_NAME")
                )
                .into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let state = init_app_state().await?;

    let seeded = AuthService::seed_demo_users(&state.store)
        .await
        .map_err(|e| anyhow!("Demo account seeding failed: {}", e.error))?;
    if seeded > 0 {
        info!(accounts = seeded, "Seeded demo accounts");
    }

    let app = init_router(state);

    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(5000);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;
    info!("Campus API running on http://localhost:{port}");
    info!("API docs available at http://localhost:{port}/scalar");
    axum::serve(listener, app).await?;

    Ok(())
}
