//! chunjun-site-web - Web frontend for the ChunJun website using Leptos + Axum

#![recursion_limit = "1024"]

pub mod app;
pub mod components;
pub mod pages;
#[cfg(feature = "ssr")]
pub mod router;
pub mod state;

pub use app::App;
#[cfg(feature = "ssr")]
pub use router::create_router;

#[cfg(feature = "ssr")]
pub use server::run;

#[cfg(feature = "ssr")]
mod server {
    use anyhow::{Context, Result};
    use chunjun_site_types::NavConfig;
    use std::net::SocketAddr;
    use std::path::PathBuf;
    use std::sync::Arc;
    use tokio::net::TcpListener;
    use tracing::{info, warn};

    use crate::router::create_router;

    /// Run the web server until Ctrl-C
    pub async fn run(nav: Arc<NavConfig>, dist: Option<PathBuf>, port: u16) -> Result<()> {
        let router = create_router(nav, dist);

        let addr = SocketAddr::from(([127, 0, 0, 1], port));
        let listener = TcpListener::bind(addr)
            .await
            .with_context(|| format!("Failed to bind {}", addr))?;

        info!("Web server listening on http://{}", addr);
        println!("Web server listening on http://{}", addr);

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .context("Web server failed")?;

        Ok(())
    }

    async fn shutdown_signal() {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "Failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
        info!("Shutting down web server");
    }
}
