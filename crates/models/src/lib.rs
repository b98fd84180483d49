mod response;

pub use response::*;

use serde::{Deserialize, Serialize};

/// Port used for display when the caller did not specify one
pub const DEFAULT_PORT: u16 = 25565;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const WHITE: Rgb = Rgb(255, 255, 255);

    pub const fn to_rgba(self) -> [u8; 4] {
        [self.0, self.1, self.2, 255]
    }
}

/// A run of text sharing one color inside one MOTD line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyledSegment {
    pub line_index: usize,
    pub text: String,
    pub color: Rgb,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyledLine {
    pub index: usize,
    pub segments: Vec<StyledSegment>,
}

impl StyledLine {
    /// Line text with every formatting code removed
    pub fn plain_text(&self) -> String {
        self.segments.iter().map(|s| s.text.as_str()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

/// Gameplay data of a server that answered the status query
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OnlineStatus {
    pub latency_ms: u64,
    pub version_name: String,
    pub protocol_version: i32,
    pub players_online: i64,
    pub players_max: i64,
    pub motd_raw: String,
    pub motd_plain: String,
    pub favicon: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Availability {
    Online(OnlineStatus),
    Offline { error: String },
}

/// Result of a single status query, built fresh for every request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerStatusRecord {
    pub hostname: String,
    pub port: u16,
    pub availability: Availability,
}

impl ServerStatusRecord {
    pub fn online(hostname: impl Into<String>, port: Option<u16>, status: OnlineStatus) -> Self {
        Self {
            hostname: hostname.into(),
            port: port.unwrap_or(DEFAULT_PORT),
            availability: Availability::Online(status),
        }
    }

    pub fn offline(hostname: impl Into<String>, port: Option<u16>, error: impl Into<String>) -> Self {
        Self {
            hostname: hostname.into(),
            port: port.unwrap_or(DEFAULT_PORT),
            availability: Availability::Offline { error: error.into() },
        }
    }

    pub fn is_online(&self) -> bool {
        matches!(self.availability, Availability::Online(_))
    }

    pub fn status(&self) -> Option<&OnlineStatus> {
        match &self.availability {
            Availability::Online(status) => Some(status),
            Availability::Offline { .. } => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.availability {
            Availability::Online(_) => None,
            Availability::Offline { error } => Some(error),
        }
    }

    pub fn latency_ms(&self) -> Option<u64> {
        self.status().map(|s| s.latency_ms)
    }

    pub fn version_name(&self) -> Option<&str> {
        self.status().map(|s| s.version_name.as_str())
    }

    pub fn protocol_version(&self) -> Option<i32> {
        self.status().map(|s| s.protocol_version)
    }

    pub fn players_online(&self) -> Option<i64> {
        self.status().map(|s| s.players_online)
    }

    pub fn players_max(&self) -> Option<i64> {
        self.status().map(|s| s.players_max)
    }

    pub fn motd_raw(&self) -> Option<&str> {
        self.status().map(|s| s.motd_raw.as_str())
    }

    pub fn motd_plain(&self) -> Option<&str> {
        self.status().map(|s| s.motd_plain.as_str())
    }

    pub fn favicon_data_uri(&self) -> Option<&str> {
        self.status().and_then(|s| s.favicon.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_status() -> OnlineStatus {
        OnlineStatus {
            latency_ms: 42,
            version_name: "1.20.1".to_string(),
            protocol_version: 763,
            players_online: 5,
            players_max: 20,
            motd_raw: "§aWelcome!§r".to_string(),
            motd_plain: "Welcome!".to_string(),
            favicon: None,
        }
    }

    #[test]
    fn test_offline_record_has_no_gameplay_fields() {
        let record = ServerStatusRecord::offline("mc.invalid", None, "connection refused");

        assert!(!record.is_online());
        assert_eq!(record.port, DEFAULT_PORT);
        assert_eq!(record.error_message(), Some("connection refused"));
        assert_eq!(record.latency_ms(), None);
        assert_eq!(record.version_name(), None);
        assert_eq!(record.players_online(), None);
        assert_eq!(record.players_max(), None);
        assert_eq!(record.motd_raw(), None);
    }

    #[test]
    fn test_online_record_has_no_error() {
        let record = ServerStatusRecord::online("play.example.com", Some(25570), sample_status());

        assert!(record.is_online());
        assert_eq!(record.port, 25570);
        assert_eq!(record.error_message(), None);
        assert_eq!(record.latency_ms(), Some(42));
        assert_eq!(record.players_online(), Some(5));
        assert_eq!(record.motd_plain(), Some("Welcome!"));
    }
}
