//! `_minecraft._tcp` SRV resolution for addresses given without a port.

use hickory_resolver::config::{ResolverConfig, ResolverOpts};
use hickory_resolver::TokioAsyncResolver;
use std::cmp::Reverse;

/// Connection target published by an SRV record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SrvTarget {
    pub host: String,
    pub port: u16,
}

/// Looks up the SRV record of a Minecraft host
#[async_trait::async_trait]
pub trait SrvResolver: Send + Sync {
    /// `None` when the host publishes no usable record
    async fn lookup(&self, host: &str) -> Option<SrvTarget>;
}

pub fn srv_name(host: &str) -> String {
    format!("_minecraft._tcp.{}", host)
}

/// SRV lookups through the system DNS configuration
pub struct DnsSrvResolver {
    resolver: TokioAsyncResolver,
}

impl DnsSrvResolver {
    pub fn from_system_conf() -> Self {
        let resolver = TokioAsyncResolver::tokio_from_system_conf().unwrap_or_else(|e| {
            tracing::debug!("System DNS configuration unavailable ({}), using defaults", e);
            TokioAsyncResolver::tokio(ResolverConfig::default(), ResolverOpts::default())
        });
        Self { resolver }
    }
}

#[async_trait::async_trait]
impl SrvResolver for DnsSrvResolver {
    async fn lookup(&self, host: &str) -> Option<SrvTarget> {
        let name = srv_name(host);
        let records = match self.resolver.srv_lookup(name.as_str()).await {
            Ok(records) => records,
            Err(e) => {
                tracing::debug!("No SRV record for {}: {}", name, e);
                return None;
            }
        };

        records
            .iter()
            .min_by_key(|srv| (srv.priority(), Reverse(srv.weight())))
            .map(|srv| SrvTarget {
                host: srv.target().to_utf8().trim_end_matches('.').to_string(),
                port: srv.port(),
            })
            .filter(|target| !target.host.is_empty() && target.port != 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_srv_name() {
        assert_eq!(srv_name("play.example.com"), "_minecraft._tcp.play.example.com");
    }
}
