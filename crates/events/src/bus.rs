use super::models::{AppEvent, EventBus};
use std::sync::Arc;
use colored::Colorize;

impl EventBus {
    pub fn new(silent_mode: bool) -> Arc<Self> {
        Arc::new(Self { silent_mode })
    }

    pub fn emit(&self, event: AppEvent) {
        if self.silent_mode {
            tracing::debug!("{:?}", event);
            return;
        }

        match event {
            // Application lifecycle
            AppEvent::Starting => {
                println!("\n{}", "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━".bright_black());
                println!("  {}", "motdcard - Minecraft Status Cards".white().bold());
                println!("  {} {}", "Version".dimmed(), env!("CARGO_PKG_VERSION").cyan());
                println!("{}\n", "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━".bright_black());
            }
            AppEvent::Ready { addr } => {
                println!("{}", "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━".green());
                println!("  {} {}", "Server".white(), addr.cyan());
                println!("  {} {}", "Usage ".white(), format!("http://{}/<host[:port]>?img&size=100", addr).blue());
                println!("{}\n", "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━".green());
            }
            AppEvent::Shutdown => {
                println!("\n{}", "Server shutting down".red());
            }

            // Configuration
            AppEvent::ConfigLoading { path } => {
                println!("  {} {}", "Loading config".dimmed(), path.cyan());
            }
            AppEvent::ConfigLoaded { card, show_motd } => {
                let motd = if show_motd { "with MOTD" } else { "without MOTD" };
                println!("  {} {} card ({})", "✓".green(), card.cyan(), motd.dimmed());
            }
            AppEvent::ConfigCreated { path } => {
                tracing::warn!("Configuration file not found");
                tracing::info!("Created default configuration at: {}", path);
            }
            AppEvent::ConfigMigrated { added_fields } => {
                if !added_fields.is_empty() {
                    println!("  {} Config updated: added {}",
                        "↻".blue(),
                        added_fields.join(", ").dimmed()
                    );
                }
            }

            // Fonts
            AppEvent::FontsLoaded { labels, motd } => {
                println!("  {} Fonts: labels {}, motd {}", "✓".green(), labels.cyan(), motd.cyan());
            }
            AppEvent::FontFallback { role, error } => {
                println!("  {} Font for {} unavailable, using built-in font", "⚠".yellow(), role.cyan());
                tracing::warn!("Font fallback for {}: {}", role, error);
            }

            // Errors
            AppEvent::Error { context, error } => {
                tracing::error!("{}: {}", context, error);
            }
        }
    }
}
