mod bootstrap;

use motdcard_api::AppState;
use motdcard_events::{AppEvent, EventBus};
use motdcard_ping::{SlpClient, StatusClient};
use crate::bootstrap::{config, fonts, logging, router, server};
use anyhow::Result;
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<()> {
    logging::initialize();

    let events = EventBus::new(false);
    events.emit(AppEvent::Starting);

    let config_path = std::env::var("MOTDCARD_CONFIG").unwrap_or_else(|_| "config.toml".to_string());
    let config = config::load(&config_path, &events).await?;

    let fonts = fonts::load(&config.render.fonts, &events);
    let client: Arc<dyn StatusClient> = Arc::new(SlpClient::from_settings(&config.query));

    let app_state = AppState::new(client, fonts, config.render.clone());
    let app = router::build(&config, app_state);
    let addr = format!("{}:{}", config.server.host, config.server.port);

    let listener = server::bind(&addr).await?;

    events.emit(AppEvent::Ready {
        addr: addr.to_string(),
    });

    axum::serve(listener, app.into_make_service())
        .tcp_nodelay(config.server.tcp_nodelay)
        .with_graceful_shutdown(server::shutdown_signal())
        .await?;

    events.emit(AppEvent::Shutdown);
    Ok(())
}
