use std::{
    future::{Future, IntoFuture},
    net::SocketAddr,
    time::Duration,
};

use axum::Router;
use configs::AppConfig;
use sea_orm::DatabaseConnection;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing::{error, info, warn};

use crate::{routes, state::ServerState};

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

fn load_bind_addr(cfg: &AppConfig) -> anyhow::Result<SocketAddr> {
    Ok(cfg.server.bind_addr().parse()?)
}

/// Open storage (creating the schema if absent) and build the router on top of it.
/// The returned connection is the same handle the router uses.
pub async fn prepare(cfg: &AppConfig) -> anyhow::Result<(Router, DatabaseConnection)> {
    common::env::ensure_data_dir(cfg.database.sqlite_file().as_deref()).await?;
    let db = models::db::connect_and_migrate(&cfg.database).await?;
    info!(database = %cfg.database.url, "database ready");

    let state = ServerState::new(db.clone());
    let app = routes::build_router(state, build_cors(), cfg.server.body_limit_bytes);
    Ok((app, db))
}

/// Serve until `shutdown` resolves, then close the storage handle.
///
/// Open connections get at most `grace` to finish after the signal. Whatever
/// is still in flight then is abandoned; nothing is rolled back.
pub async fn serve<F>(
    listener: TcpListener,
    app: Router,
    db: DatabaseConnection,
    shutdown: F,
    grace: Duration,
) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let (fired_tx, fired_rx) = tokio::sync::oneshot::channel::<()>();
    let signal = async move {
        shutdown.await;
        let _ = fired_tx.send(());
    };
    let server = axum::serve(listener, app).with_graceful_shutdown(signal).into_future();
    let deadline = async move {
        // sender dropped without firing: the server itself has returned
        if fired_rx.await.is_err() {
            std::future::pending::<()>().await;
        }
        tokio::time::sleep(grace).await;
    };

    let served = tokio::select! {
        res = server => res,
        _ = deadline => {
            warn!(
                event = "drain_timeout",
                grace_ms = grace.as_millis() as u64,
                "connections still open after grace period; abandoning them"
            );
            Ok(())
        }
    };

    if let Err(e) = db.close().await {
        error!(error = %e, "failed to close database");
    } else {
        info!(event = "db_closed", "database handle closed");
    }
    served?;
    Ok(())
}

/// Resolves on Ctrl+C or, on unix, SIGTERM.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!(error = %e, "cannot listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                error!(error = %e, "cannot listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };
    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
    info!(event = "shutdown_signal", "shutdown signal received");
}

/// Public entry: build the app and run the HTTP server until a shutdown signal.
pub async fn run(cfg: AppConfig) -> anyhow::Result<()> {
    let (app, db) = prepare(&cfg).await?;

    let addr = load_bind_addr(&cfg)?;
    let listener = TcpListener::bind(addr).await?;
    info!(%addr, "server listening");

    serve(listener, app, db, shutdown_signal(), cfg.server.shutdown_grace()).await
}
