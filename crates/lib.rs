// Re-export all public APIs from the workspace crates

pub use motdcard_models::*;
pub use motdcard_events::*;
pub use motdcard_config::*;
pub use motdcard_ping::*;
pub use motdcard_motd::*;
pub use motdcard_render::*;
pub use motdcard_api::*;

/// Prelude module for convenient imports
pub mod prelude {
    // Core models
    pub use motdcard_models::{Rgb, ServerStatusRecord, StatusResponse, StyledLine, StyledSegment};

    // Events
    pub use motdcard_events::{AppEvent, EventBus};

    // Configuration
    pub use motdcard_config::Config;

    // Status queries
    pub use motdcard_ping::{query, ServerAddress, SlpClient, StatusClient};

    // MOTD parsing
    pub use motdcard_motd::{parse, strip_codes};

    // Rendering
    pub use motdcard_render::{render, CardGeometry, CardVariant, FontSet};
}
