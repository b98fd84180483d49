/// Default values for configuration fields

pub fn tcp_nodelay() -> bool {
    true
}

pub fn timeout_secs() -> u64 {
    30
}

pub fn max_concurrent_requests() -> usize {
    256
}

pub fn allowed_origins() -> Vec<String> {
    vec!["*".to_string()]
}

pub fn enable_compression() -> bool {
    false  // PNG bodies are already compressed
}

// Query defaults
pub fn connect_timeout_ms() -> u64 {
    5000
}

pub fn read_timeout_ms() -> u64 {
    5000
}

pub fn protocol_version() -> i32 {
    47
}

pub fn default_port() -> u16 {
    25565
}

pub fn srv_lookup() -> bool {
    true
}

pub fn query_settings() -> super::models::QuerySettings {
    super::models::QuerySettings {
        connect_timeout_ms: connect_timeout_ms(),
        read_timeout_ms: read_timeout_ms(),
        protocol_version: protocol_version(),
        default_port: default_port(),
        srv_lookup: srv_lookup(),
    }
}

// Render defaults
pub fn card_variant() -> super::models::CardVariant {
    super::models::CardVariant::Enhanced
}

pub fn max_scale() -> f64 {
    4.0  // 2440x1720 pixels for the enhanced card
}

pub fn font_paths() -> super::models::FontPaths {
    super::models::FontPaths {
        title: "NotoSansSC-Bold.ttf".to_string(),
        subtitle: "NotoSansSC-Regular.ttf".to_string(),
        label: "NotoSansSC-Regular.ttf".to_string(),
        value: "NotoSansSC-Bold.ttf".to_string(),
        motd: "Minecraft.ttf".to_string(),
    }
}

pub fn render_settings() -> super::models::RenderSettings {
    super::models::RenderSettings {
        card: card_variant(),
        show_motd: None,
        max_scale: max_scale(),
        fonts: font_paths(),
        labels: super::models::CardLabels::default(),
    }
}

pub const DEFAULT_CONFIG_TEMPLATE: &str = r#"# ===============================================================================
# motdcard Configuration
# ===============================================================================

[server]
# Network
host = "0.0.0.0"                     # Server bind address (0.0.0.0 = all interfaces)
port = 5000                          # Server port

# Performance
tcp_nodelay = true                   # Disable Nagle's algorithm (lower latency)
timeout_secs = 30                    # Request timeout in seconds
max_concurrent_requests = 256        # Max simultaneous requests
enable_compression = false           # HTTP compression (JSON only benefits)

# CORS
allowed_origins = ["*"]              # "*" = all origins | ["https://example.com"] for production

# ===============================================================================
# SERVER LIST PING
# ===============================================================================
[query]
connect_timeout_ms = 5000            # TCP connect timeout
read_timeout_ms = 5000               # Handshake + status exchange timeout
protocol_version = 47                # Protocol version announced in the handshake
default_port = 25565                 # Port used when the address has none
srv_lookup = true                    # Resolve _minecraft._tcp.<host> when the address has no port

# ===============================================================================
# STATUS CARD
# ===============================================================================
[render]
card = "enhanced"                    # "enhanced" (610x430, MOTD) | "basic" (560x340)
#show_motd = true                    # Force the MOTD block on or off for either card
max_scale = 4.0                      # Upper bound for ?size=<percent> / 100

[render.fonts]
title = "NotoSansSC-Bold.ttf"        # Hostname
subtitle = "NotoSansSC-Regular.ttf"  # Caption above the hostname
label = "NotoSansSC-Regular.ttf"     # Field labels
value = "NotoSansSC-Bold.ttf"        # Field values
motd = "Minecraft.ttf"               # MOTD text

[render.labels]
caption = "Minecraft 服务器"
section = "基本信息"
status = "状态"
online = "在线"
offline = "离线"
version = "版本"
players = "玩家数量"
latency = "延迟"
motd = "服务器 MOTD"
"#;
