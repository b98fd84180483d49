use crate::{ServerAddress, StatusClient};
use motdcard_models::{OnlineStatus, ServerStatusRecord};
use motdcard_motd::strip_codes;

/// Queries `address` and folds any failure into an offline record.
///
/// Never returns an error: resolution, connection, timeout and protocol
/// failures all become `online = false` with the failure's message.
pub async fn query(client: &dyn StatusClient, address: &ServerAddress) -> ServerStatusRecord {
    match client.status(address).await {
        Ok(raw) => {
            tracing::debug!(
                "{} answered in {}ms ({} / {} players)",
                address,
                raw.latency.as_millis(),
                raw.players_online,
                raw.players_max
            );

            let motd_plain = strip_codes(&raw.description);
            ServerStatusRecord::online(
                address.host.clone(),
                address.port,
                OnlineStatus {
                    latency_ms: raw.latency.as_millis() as u64,
                    version_name: raw.version_name,
                    protocol_version: raw.protocol_version,
                    players_online: raw.players_online,
                    players_max: raw.players_max,
                    motd_raw: raw.description,
                    motd_plain,
                    favicon: raw.favicon,
                },
            )
        }
        Err(e) => {
            tracing::warn!("Status query for {} failed: {}", address, e);
            ServerStatusRecord::offline(address.host.clone(), address.port, e.to_string())
        }
    }
}
