//! Process wiring: opens the store, starts the gRPC and REST listeners side by
//! side and tears everything down on Ctrl+C / SIGTERM.

use crate::config::Config;
use crate::grpc::QuestionSearchGrpc;
use crate::search::engine::SearchService;
use crate::search::handlers::router;
use crate::storage::open_store;

use anyhow::Result;
use std::future::Future;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tokio::signal;
use tokio::sync::watch;

pub async fn run(config: Config) -> Result<()> {
    tracing::info!("Opening question store...");
    let store = open_store(
        &config.mongo_uri,
        &config.mongo_database,
        &config.mongo_collection,
    )
    .await?;

    let service = SearchService::new(store.clone());

    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    tokio::spawn(async move {
        shutdown_signal().await;
        let _ = shutdown_tx.send(true);
    });

    let result = tokio::try_join!(
        serve_grpc(
            service.clone(),
            config.grpc_addr,
            stopped(shutdown_rx.clone())
        ),
        serve_rest(service, config.rest_addr, stopped(shutdown_rx)),
    );

    store.close().await;
    tracing::info!("Server shut down");

    result.map(|_| ())
}

pub async fn serve_rest(
    service: SearchService,
    addr: SocketAddr,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> Result<()> {
    let listener = TcpListener::bind(addr).await?;
    tracing::info!("REST API listening on {}", listener.local_addr()?);

    axum::serve(listener, router(service))
        .with_graceful_shutdown(shutdown)
        .await?;

    Ok(())
}

pub async fn serve_grpc(
    service: SearchService,
    addr: SocketAddr,
    shutdown: impl Future<Output = ()>,
) -> Result<()> {
    tracing::info!("gRPC server listening on {}", addr);

    tonic::transport::Server::builder()
        .add_service(QuestionSearchGrpc::new(service).into_server())
        .serve_with_shutdown(addr, shutdown)
        .await?;

    Ok(())
}

async fn stopped(mut rx: watch::Receiver<bool>) {
    let _ = rx.wait_for(|stop| *stop).await;
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }

        tracing::info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                tracing::info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                tracing::error!("Failed to install terminate handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
