use motdcard_config::RenderSettings;
use motdcard_ping::StatusClient;
use motdcard_render::FontSet;
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub(super) client: Arc<dyn StatusClient>,
    pub(super) fonts: Arc<FontSet>,
    pub(super) render: Arc<RenderSettings>,
}
