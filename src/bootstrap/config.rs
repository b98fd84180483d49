use motdcard_events::{AppEvent, EventBus};
use motdcard_config::Config;
use anyhow::Result;
use std::sync::Arc;

pub async fn load(config_path: &str, events: &Arc<EventBus>) -> Result<Config> {
    let abs_config_path = std::path::absolute(config_path)
        .map(|p| p.display().to_string())
        .unwrap_or_else(|_| config_path.to_string());

    events.emit(AppEvent::ConfigLoading {
        path: abs_config_path.clone(),
    });

    let config_exists = std::path::Path::new(config_path).exists();
    let config = match Config::from_file_with_events(config_path, Some(events)).await {
        Ok(config) => config,
        Err(e) => {
            events.emit(load_error(&abs_config_path, &e));
            return Err(e);
        }
    };

    if !config_exists {
        events.emit(AppEvent::ConfigCreated {
            path: abs_config_path,
        });
    }

    events.emit(AppEvent::ConfigLoaded {
        card: config.render.card.as_str().to_string(),
        show_motd: config.render.motd_enabled(),
    });

    Ok(config)
}

fn load_error(path: &str, error: &anyhow::Error) -> AppEvent {
    AppEvent::Error {
        context: format!("Failed to load configuration {}", path),
        error: format!("{:#}", error),
    }
}
