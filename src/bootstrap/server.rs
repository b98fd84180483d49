use anyhow::Result;

pub async fn bind(addr: &str) -> Result<tokio::net::TcpListener> {
    tokio::net::TcpListener::bind(addr).await.map_err(|e| {
        if e.kind() == std::io::ErrorKind::AddrInUse {
            let port = addr.rsplit(':').next().unwrap_or("unknown");
            tracing::error!("Port {} is already in use", port);
            tracing::error!("Stop the other application or change [server].port in the config file");
            #[cfg(target_os = "windows")]
            tracing::error!("Find the process with: netstat -ano | findstr :{}", port);
            #[cfg(not(target_os = "windows"))]
            tracing::error!("Find the process with: lsof -i :{}", port);
        } else {
            tracing::error!("Failed to bind server on {}: {}", addr, e);
        }
        anyhow::anyhow!("Failed to bind server: {}", e)
    })
}

/// Resolves on Ctrl+C
pub async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for Ctrl+C: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received, initiating graceful shutdown...");
}
