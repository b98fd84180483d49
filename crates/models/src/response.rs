use super::{Availability, ServerStatusRecord};
use serde::{Deserialize, Serialize};

/// JSON body returned by the status endpoint when no image is requested
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StatusResponse {
    Online(OnlineResponse),
    Offline(OfflineResponse),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OnlineResponse {
    pub hostname: String,
    pub port: u16,
    pub ping: u64,
    pub version: String,
    pub protocol: i32,
    pub players: PlayersResponse,
    pub description: DescriptionResponse,
    pub description_raw: RawDescription,
    pub favicon: Option<String>,
    pub modinfo: ModInfo,
    pub online: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OfflineResponse {
    pub hostname: String,
    pub port: u16,
    pub online: bool,
    pub error: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayersResponse {
    pub max: i64,
    pub online: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DescriptionResponse {
    pub html: String,
    pub text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawDescription {
    pub extra: Vec<TextComponent>,
    pub text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextComponent {
    pub text: String,
}

// Always serialized as an empty object
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ModInfo {}

impl From<&ServerStatusRecord> for StatusResponse {
    fn from(record: &ServerStatusRecord) -> Self {
        match &record.availability {
            Availability::Online(status) => StatusResponse::Online(OnlineResponse {
                hostname: record.hostname.clone(),
                port: record.port,
                ping: status.latency_ms,
                version: status.version_name.clone(),
                protocol: status.protocol_version,
                players: PlayersResponse {
                    max: status.players_max,
                    online: status.players_online,
                },
                description: DescriptionResponse {
                    html: status.motd_raw.clone(),
                    text: status.motd_plain.clone(),
                },
                description_raw: RawDescription {
                    extra: vec![TextComponent {
                        text: status.motd_plain.clone(),
                    }],
                    text: String::new(),
                },
                favicon: status.favicon.clone(),
                modinfo: ModInfo::default(),
                online: true,
            }),
            Availability::Offline { error } => StatusResponse::Offline(OfflineResponse {
                hostname: record.hostname.clone(),
                port: record.port,
                online: false,
                error: error.clone(),
            }),
        }
    }
}

impl From<ServerStatusRecord> for StatusResponse {
    fn from(record: ServerStatusRecord) -> Self {
        StatusResponse::from(&record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::OnlineStatus;

    #[test]
    fn test_offline_shape() {
        let record = ServerStatusRecord::offline("mc.invalid", None, "timed out");
        let json = serde_json::to_value(StatusResponse::from(&record)).unwrap();

        assert_eq!(json["hostname"], "mc.invalid");
        assert_eq!(json["port"], 25565);
        assert_eq!(json["online"], false);
        assert_eq!(json["error"], "timed out");
        assert!(json.get("players").is_none());
        assert!(json.get("version").is_none());
        assert!(json.get("ping").is_none());
    }

    #[test]
    fn test_online_shape() {
        let record = ServerStatusRecord::online(
            "play.example.com",
            None,
            OnlineStatus {
                latency_ms: 42,
                version_name: "1.20.1".to_string(),
                protocol_version: 763,
                players_online: 5,
                players_max: 20,
                motd_raw: "§aWelcome!".to_string(),
                motd_plain: "Welcome!".to_string(),
                favicon: None,
            },
        );
        let json = serde_json::to_value(StatusResponse::from(&record)).unwrap();

        assert_eq!(json["online"], true);
        assert_eq!(json["ping"], 42);
        assert_eq!(json["version"], "1.20.1");
        assert_eq!(json["protocol"], 763);
        assert_eq!(json["players"]["online"], 5);
        assert_eq!(json["players"]["max"], 20);
        assert_eq!(json["description"]["html"], "§aWelcome!");
        assert_eq!(json["description"]["text"], "Welcome!");
        assert_eq!(json["description_raw"]["extra"][0]["text"], "Welcome!");
        assert_eq!(json["description_raw"]["text"], "");
        assert!(json["favicon"].is_null());
        assert_eq!(json["modinfo"], serde_json::json!({}));
        assert!(json.get("error").is_none());
    }
}
