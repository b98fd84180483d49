use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum AppEvent {
    // Application lifecycle
    Starting,
    Ready { addr: String },
    Shutdown,

    // Configuration
    ConfigLoading { path: String },
    ConfigLoaded { card: String, show_motd: bool },
    ConfigCreated { path: String },
    ConfigMigrated { added_fields: Vec<String> },

    // Fonts
    FontsLoaded { labels: String, motd: String },
    FontFallback { role: String, error: String },

    // Errors
    Error { context: String, error: String },
}

pub struct EventBus {
    pub(super) silent_mode: bool,
}
