use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub server: ServerSettings,
    #[serde(default = "super::defaults::query_settings")]
    pub query: QuerySettings,
    #[serde(default = "super::defaults::render_settings")]
    pub render: RenderSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    #[serde(default = "super::defaults::tcp_nodelay")]
    pub tcp_nodelay: bool,
    #[serde(default = "super::defaults::timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "super::defaults::allowed_origins")]
    pub allowed_origins: Vec<String>,
    #[serde(default = "super::defaults::max_concurrent_requests")]
    pub max_concurrent_requests: usize,
    #[serde(default = "super::defaults::enable_compression")]
    pub enable_compression: bool,
}

/// Outbound Server List Ping settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct QuerySettings {
    #[serde(default = "super::defaults::connect_timeout_ms")]
    pub connect_timeout_ms: u64,
    #[serde(default = "super::defaults::read_timeout_ms")]
    pub read_timeout_ms: u64,
    #[serde(default = "super::defaults::protocol_version")]
    pub protocol_version: i32,
    #[serde(default = "super::defaults::default_port")]
    pub default_port: u16,
    /// Consult `_minecraft._tcp` SRV records for addresses without a port
    #[serde(default = "super::defaults::srv_lookup")]
    pub srv_lookup: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CardVariant {
    /// 610x430 design, MOTD block shown by default
    Enhanced,
    /// 560x340 design, MOTD block hidden by default
    Basic,
}

impl CardVariant {
    pub fn as_str(&self) -> &'static str {
        match self {
            CardVariant::Enhanced => "enhanced",
            CardVariant::Basic => "basic",
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RenderSettings {
    #[serde(default = "super::defaults::card_variant")]
    pub card: CardVariant,
    /// Overrides the variant's MOTD default when set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_motd: Option<bool>,
    #[serde(default = "super::defaults::max_scale")]
    pub max_scale: f64,
    #[serde(default = "super::defaults::font_paths")]
    pub fonts: FontPaths,
    #[serde(default)]
    pub labels: CardLabels,
}

impl RenderSettings {
    pub fn motd_enabled(&self) -> bool {
        self.show_motd.unwrap_or(self.card == CardVariant::Enhanced)
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FontPaths {
    pub title: String,
    pub subtitle: String,
    pub label: String,
    pub value: String,
    pub motd: String,
}

/// Static text drawn on the card
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct CardLabels {
    pub caption: String,
    pub section: String,
    pub status: String,
    pub online: String,
    pub offline: String,
    pub version: String,
    pub players: String,
    pub latency: String,
    pub motd: String,
}

impl Default for CardLabels {
    fn default() -> Self {
        Self {
            caption: "Minecraft 服务器".to_string(),
            section: "基本信息".to_string(),
            status: "状态".to_string(),
            online: "在线".to_string(),
            offline: "离线".to_string(),
            version: "版本".to_string(),
            players: "玩家数量".to_string(),
            latency: "延迟".to_string(),
            motd: "服务器 MOTD".to_string(),
        }
    }
}
