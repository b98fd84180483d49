use motdcard_config::FontPaths;
use motdcard_events::{AppEvent, EventBus};
use motdcard_render::FontSet;
use std::sync::Arc;

/// Loads the card fonts, reporting every fallback. Never fails.
pub fn load(paths: &FontPaths, events: &Arc<EventBus>) -> FontSet {
    let (fonts, failures) = FontSet::load(paths);

    for (role, error) in failures {
        events.emit(AppEvent::FontFallback {
            role: role.to_string(),
            error: error.to_string(),
        });
    }

    events.emit(AppEvent::FontsLoaded {
        labels: fonts.label.name().to_string(),
        motd: fonts.motd.name().to_string(),
    });

    fonts
}
