use crate::backend::{RawStatus, StatusClient};
use crate::codec::{frame, read_packet, read_string, write_string, write_varint};
use crate::description::flatten_description;
use crate::srv::{DnsSrvResolver, SrvResolver, SrvTarget};
use crate::{PingError, ServerAddress};
use bytes::{BufMut, BytesMut};
use motdcard_config::QuerySettings;
use serde::Deserialize;
use std::net::IpAddr;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::io::{AsyncRead, AsyncWrite, AsyncWriteExt};
use tokio::net::TcpStream;
use tokio::time::timeout;

const HANDSHAKE_PACKET: i32 = 0x00;
const STATUS_REQUEST_PACKET: i32 = 0x00;
const STATUS_RESPONSE_PACKET: i32 = 0x00;
const NEXT_STATE_STATUS: i32 = 1;

/// Java edition Server List Ping client
#[derive(Clone)]
pub struct SlpClient {
    connect_timeout: Duration,
    read_timeout: Duration,
    protocol_version: i32,
    default_port: u16,
    srv: Option<Arc<dyn SrvResolver>>,
}

#[derive(Debug, Deserialize)]
struct StatusPayload {
    version: VersionPayload,
    players: PlayersPayload,
    #[serde(default)]
    description: serde_json::Value,
    #[serde(default)]
    favicon: Option<String>,
}

#[derive(Debug, Deserialize)]
struct VersionPayload {
    name: String,
    protocol: i32,
}

#[derive(Debug, Deserialize)]
struct PlayersPayload {
    max: i64,
    online: i64,
}

impl SlpClient {
    pub fn new(
        connect_timeout: Duration,
        read_timeout: Duration,
        protocol_version: i32,
        default_port: u16,
    ) -> Self {
        Self {
            connect_timeout,
            read_timeout,
            protocol_version,
            default_port,
            srv: None,
        }
    }

    pub fn from_settings(settings: &QuerySettings) -> Self {
        let client = Self::new(
            Duration::from_millis(settings.connect_timeout_ms),
            Duration::from_millis(settings.read_timeout_ms),
            settings.protocol_version,
            settings.default_port,
        );
        if settings.srv_lookup {
            client.with_srv_resolver(Arc::new(DnsSrvResolver::from_system_conf()))
        } else {
            client
        }
    }

    pub fn with_srv_resolver(mut self, resolver: Arc<dyn SrvResolver>) -> Self {
        self.srv = Some(resolver);
        self
    }

    /// Host and port to connect to. Explicit ports win; otherwise the SRV
    /// record, then `default_port`.
    async fn target(&self, address: &ServerAddress) -> SrvTarget {
        let fallback = |port| SrvTarget {
            host: address.host.clone(),
            port,
        };
        if let Some(port) = address.port {
            return fallback(port);
        }

        let resolver = match &self.srv {
            Some(resolver) if address.host.parse::<IpAddr>().is_err() => resolver,
            _ => return fallback(self.default_port),
        };

        match timeout(self.connect_timeout, resolver.lookup(&address.host)).await {
            Ok(Some(target)) => {
                tracing::debug!("{} resolved via SRV to {}:{}", address.host, target.host, target.port);
                target
            }
            Ok(None) => fallback(self.default_port),
            Err(_) => {
                tracing::debug!("SRV lookup for {} timed out", address.host);
                fallback(self.default_port)
            }
        }
    }

    async fn connect(&self, host: &str, port: u16) -> Result<TcpStream, PingError> {
        let candidates = timeout(self.connect_timeout, tokio::net::lookup_host((host, port)))
            .await
            .map_err(|_| PingError::Timeout {
                stage: "resolving host",
                timeout_ms: self.connect_timeout.as_millis() as u64,
            })?
            .map_err(|source| PingError::Resolve {
                host: host.to_string(),
                source,
            })?;

        let mut last_error = None;
        for addr in candidates {
            tracing::debug!("Connecting to {} ({})", host, addr);
            match timeout(self.connect_timeout, TcpStream::connect(addr)).await {
                Ok(Ok(stream)) => return Ok(stream),
                Ok(Err(e)) => last_error = Some(e),
                Err(_) => {
                    return Err(PingError::Timeout {
                        stage: "connecting",
                        timeout_ms: self.connect_timeout.as_millis() as u64,
                    })
                }
            }
        }

        let source = last_error.unwrap_or_else(|| {
            std::io::Error::new(std::io::ErrorKind::NotFound, "no addresses resolved")
        });
        Err(PingError::HostUnreachable {
            host: host.to_string(),
            source,
        })
    }

    fn handshake(&self, host: &str, port: u16) -> bytes::Bytes {
        let mut body = BytesMut::new();
        write_varint(&mut body, self.protocol_version);
        write_string(&mut body, host);
        body.put_u16(port);
        write_varint(&mut body, NEXT_STATE_STATUS);
        frame(HANDSHAKE_PACKET, &body)
    }

    async fn exchange<S>(&self, stream: &mut S, host: &str, port: u16) -> Result<RawStatus, PingError>
    where
        S: AsyncRead + AsyncWrite + Unpin,
    {
        stream.write_all(&self.handshake(host, port)).await?;

        let started = Instant::now();
        stream.write_all(&frame(STATUS_REQUEST_PACKET, &[])).await?;
        stream.flush().await?;

        let (packet_id, mut body) = read_packet(stream).await?;
        let latency = started.elapsed();

        if packet_id != STATUS_RESPONSE_PACKET {
            return Err(PingError::ProtocolMismatch {
                expected: STATUS_RESPONSE_PACKET,
                actual: packet_id,
            });
        }

        let json = read_string(&mut body)?;
        let payload: StatusPayload = serde_json::from_str(&json)?;

        Ok(RawStatus {
            latency,
            version_name: payload.version.name,
            protocol_version: payload.version.protocol,
            players_online: payload.players.online,
            players_max: payload.players.max,
            description: flatten_description(&payload.description),
            favicon: payload.favicon,
        })
    }
}

#[async_trait::async_trait]
impl StatusClient for SlpClient {
    async fn status(&self, address: &ServerAddress) -> Result<RawStatus, PingError> {
        let target = self.target(address).await;
        let mut stream = self.connect(&target.host, target.port).await?;
        if let Err(e) = stream.set_nodelay(true) {
            tracing::debug!("Failed to set TCP_NODELAY: {}", e);
        }

        // The handshake names the host the player typed, not the SRV target
        timeout(self.read_timeout, self.exchange(&mut stream, &address.host, target.port))
            .await
            .map_err(|_| PingError::Timeout {
                stage: "reading status",
                timeout_ms: self.read_timeout.as_millis() as u64,
            })?
    }
}
