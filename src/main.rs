mod model;
mod server;

use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing_subscriber::EnvFilter;

use crate::server::{
    config::Config, error::AppError, scheduler, service::admin::code::AdminCodeService, startup,
    state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let session = startup::connect_to_session(&db, &config).await?;
    let http_client = startup::setup_reqwest_client()?;

    let admin_code_service = AdminCodeService::new();

    // Generate a one-time admin registration link if no railway admin exists yet
    startup::check_for_admin(&db, &config, &admin_code_service).await?;

    let scheduler_db = db.clone();
    tokio::spawn(async move {
        if let Err(e) = scheduler::sweeps::start_scheduler(scheduler_db).await {
            tracing::error!("Scheduler error: {}", e);
        }
    });

    let state = AppState::new(
        db,
        http_client,
        admin_code_service,
        config.app_url.clone(),
        config.upload.clone(),
    );

    let app = server::router::router()?
        .with_state(state)
        .layer(session)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(&config.bind_address).await?;
    tracing::info!("Listening on {}", config.bind_address);

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<std::net::SocketAddr>(),
    )
    .await?;

    Ok(())
}
