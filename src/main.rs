use anyhow::Result;
use dotenvy::dotenv;
use std::net::SocketAddr;
use tokio::signal;
use tracing::{error, info, warn};

use cab_booking_backend::config::environment::EnvironmentConfig;
use cab_booking_backend::database;
use cab_booking_backend::routes::create_app;
use cab_booking_backend::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    info!("🚖 Cab Booking Backend - Lead Capture & Admin API");
    info!("=================================================");

    let config = EnvironmentConfig::from_env();

    // Seleccionar el backend de almacenamiento
    let state = match config.database_url.clone() {
        Some(url) => {
            let pool = match database::create_pool(&url).await {
                Ok(pool) => pool,
                Err(e) => {
                    error!("❌ Error conectando a la base de datos: {}", e);
                    return Err(anyhow::anyhow!("Error de base de datos: {}", e));
                }
            };
            info!("✅ PostgreSQL conectado exitosamente");
            AppState::with_postgres(pool, config.clone())
        }
        None => {
            warn!("⚠️ DATABASE_URL no configurada: almacenamiento en memoria con el catálogo por defecto");
            AppState::in_memory(config.clone())
        }
    };

    let app = create_app(state);

    let addr: SocketAddr = config.server_url().parse()?;

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET  /health - Health check");
    info!("📋 Endpoints públicos:");
    info!("   POST /api/leads - Crear lead de reserva");
    info!("   GET  /api/routes - Tarifas por destino");
    info!("   GET  /api/cars - Flota disponible");
    info!("   GET  /api/tour-packages - Paquetes turísticos");
    info!("   GET  /api/tour-packages/:id - Detalle de paquete");
    info!("🔐 Endpoints de administración:");
    info!("   POST /api/admin/login - Login del panel");
    info!("   GET  /api/admin/leads - Listar leads (más recientes primero)");
    info!("   PATCH /api/admin/leads/:id - Cambiar estado de lead");
    info!("   GET/POST /api/admin/routes - CRUD de tarifas");
    info!("   PUT/DELETE /api/admin/routes/:id");
    info!("   GET/POST /api/admin/cars - CRUD de flota");
    info!("   PUT/DELETE /api/admin/cars/:id");
    info!("   GET/POST /api/admin/tour-packages - CRUD de paquetes");
    info!("   PUT/DELETE /api/admin/tour-packages/:id");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("👋 Servidor terminado");
    Ok(())
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Señal Ctrl+C recibida, apagando servidor...");
        },
        _ = terminate => {
            info!("🛑 Señal de terminación recibida, apagando servidor...");
        },
    }
}
