use super::models::AppState;
use motdcard_config::RenderSettings;
use motdcard_ping::StatusClient;
use motdcard_render::FontSet;
use std::sync::Arc;

impl AppState {
    pub fn new(client: Arc<dyn StatusClient>, fonts: FontSet, render: RenderSettings) -> Self {
        Self {
            client,
            fonts: Arc::new(fonts),
            render: Arc::new(render),
        }
    }
}
