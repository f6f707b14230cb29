use actix_web::{web, HttpServer};
use portfolio_site::{
    build_app, graceful_shutdown::shutdown_signal, settings::AppConfig, telemetry::init_tracing,
    AppState,
};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let config = match AppConfig::new() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };
    init_tracing(&config);
    tracing::info!("Loaded configuration: {:?}", config);

    let app_state = web::Data::new(AppState::new(&config)?);
    let cors_origins = config.cors_origins();
    let server_addr = format!("{}:{}", config.host, config.port);

    tracing::info!(
        "Starting {} v{} on {}",
        config.name,
        env!("CARGO_PKG_VERSION"),
        server_addr
    );

    let server = HttpServer::new(move || build_app(app_state.clone(), &cors_origins))
        .workers(config.worker_count.max(1))
        .bind(&server_addr)?
        .run();

    tokio::spawn(shutdown_signal(server.handle()));
    server.await?;

    tracing::info!("Server stopped");
    Ok(())
}
