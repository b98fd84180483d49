use crate::{PingError, ServerAddress};
use std::time::Duration;

/// Status data as reported by the server, before normalization
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawStatus {
    pub latency: Duration,
    pub version_name: String,
    pub protocol_version: i32,
    pub players_online: i64,
    pub players_max: i64,
    /// Description flattened to legacy `§` codes
    pub description: String,
    pub favicon: Option<String>,
}

/// Status lookup abstraction over the Server List Ping exchange
#[async_trait::async_trait]
pub trait StatusClient: Send + Sync {
    /// Connects to `address` and fetches its status
    async fn status(&self, address: &ServerAddress) -> Result<RawStatus, PingError>;
}
