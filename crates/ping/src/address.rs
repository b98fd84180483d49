use crate::AddressError;
use std::fmt;
use std::str::FromStr;

/// A `host`, `host:port` or `[ipv6]:port` target
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerAddress {
    pub host: String,
    pub port: Option<u16>,
}

impl ServerAddress {
    pub fn new(host: impl Into<String>, port: Option<u16>) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }
}

impl FromStr for ServerAddress {
    type Err = AddressError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(AddressError::Empty);
        }

        let (host, port) = if let Some(rest) = raw.strip_prefix('[') {
            let (host, tail) = rest
                .split_once(']')
                .ok_or_else(|| AddressError::Malformed(raw.to_string()))?;
            let port = match tail {
                "" => None,
                _ => {
                    let port = tail
                        .strip_prefix(':')
                        .ok_or_else(|| AddressError::Malformed(raw.to_string()))?;
                    Some(parse_port(port)?)
                }
            };
            (host, port)
        } else {
            match raw.split_once(':') {
                None => (raw, None),
                Some((_, port)) if port.contains(':') => {
                    return Err(AddressError::Malformed(raw.to_string()));
                }
                Some((host, port)) => (host, Some(parse_port(port)?)),
            }
        };

        if host.is_empty() {
            return Err(AddressError::Empty);
        }
        if host.chars().any(|c| c.is_whitespace() || c == '/' || c == '\\') {
            return Err(AddressError::Malformed(raw.to_string()));
        }

        Ok(Self::new(host, port))
    }
}

fn parse_port(port: &str) -> Result<u16, AddressError> {
    if port.is_empty() || !port.chars().all(|c| c.is_ascii_digit()) {
        return Err(AddressError::InvalidPort(port.to_string()));
    }
    match port.parse::<u16>() {
        Ok(0) | Err(_) => Err(AddressError::PortOutOfRange(port.to_string())),
        Ok(port) => Ok(port),
    }
}

impl fmt::Display for ServerAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let host = if self.host.contains(':') {
            format!("[{}]", self.host)
        } else {
            self.host.clone()
        };
        match self.port {
            Some(port) => write!(f, "{}:{}", host, port),
            None => write!(f, "{}", host),
        }
    }
}
