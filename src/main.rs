use std::net::SocketAddr;

use anyhow::{Context, Result};
use dotenvy::dotenv;
use tokio::signal;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use geosense_api::config::EnvironmentConfig;
use geosense_api::database::DatabaseConnection;
use geosense_api::repositories::Repositories;
use geosense_api::{create_router, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("geosense_api=debug,tower_http=info")),
        )
        .init();

    info!("🏍️ GeoSense API - Gestión de patios de motos");
    info!("================================================");

    let config = EnvironmentConfig::from_env().context("Configuración inválida")?;
    if config.api_key.is_none() {
        warn!("⚠️ API_KEY no configurada: todas las rutas protegidas responderán 403");
    }
    if config.is_production() && config.cors_origins.iter().any(|o| o == "*") {
        warn!("⚠️ CORS permite cualquier origen en producción; configurar CORS_ORIGINS");
    }

    // Inicializar base de datos
    let db_connection = match DatabaseConnection::new(&config.database).await {
        Ok(conn) => conn,
        Err(e) => {
            error!("❌ Error conectando a la base de datos: {}", e);
            return Err(anyhow::anyhow!("Error de base de datos: {}", e));
        }
    };

    if config.run_migrations {
        db_connection
            .run_migrations()
            .await
            .context("Error aplicando migraciones")?;
    }

    let addr: SocketAddr = config
        .server_url()
        .parse()
        .with_context(|| format!("Dirección inválida: {}", config.server_url()))?;

    let repositories = Repositories::postgres(db_connection.pool().clone());
    let app = create_router(AppState::new(config, repositories));

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles (también bajo /api sin versión):");
    info!("   GET|POST /api/v1/moto · GET|PUT|DELETE /api/v1/moto/:id");
    info!("   GET|POST /api/v1/vaga · GET|PUT|DELETE /api/v1/vaga/:id");
    info!("   GET|POST /api/v1/patio · GET|PUT|DELETE /api/v1/patio/:id");
    info!("   GET|POST /api/v1/usuario · GET|PUT|DELETE /api/v1/usuario/:id");
    info!("   GET  /api/v1/dashboard - Indicadores de ocupación");
    info!("   GET  /health - Health check");
    info!("   GET  /swagger/v1/swagger.json - Documento OpenAPI");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| {
            error!("❌ Error del servidor: {}", e);
            e
        })?;

    info!("👋 Servidor terminado");
    Ok(())
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("❌ No se pudo escuchar Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!("❌ No se pudo escuchar SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
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
