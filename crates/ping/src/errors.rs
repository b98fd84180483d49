use thiserror::Error;

/// Failures of a single Server List Ping exchange
#[derive(Error, Debug)]
pub enum PingError {
    #[error("Failed to resolve {host}: {source}")]
    Resolve {
        host: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Host unreachable: {host}: {source}")]
    HostUnreachable {
        host: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Timed out after {timeout_ms}ms while {stage}")]
    Timeout {
        stage: &'static str,
        timeout_ms: u64,
    },

    #[error("Protocol mismatch: expected packet 0x{expected:02x}, got 0x{actual:02x}")]
    ProtocolMismatch { expected: i32, actual: i32 },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Malformed status JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Rejected `host[:port]` strings
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AddressError {
    #[error("Server address is empty")]
    Empty,

    #[error("Invalid port '{0}': not a number")]
    InvalidPort(String),

    #[error("Port {0} is out of range (1-65535)")]
    PortOutOfRange(String),

    #[error("Malformed server address '{0}'")]
    Malformed(String),
}
