//! Reverse DNS lookups.

use crate::error::{ReconError, ReconResult};
use async_trait::async_trait;
use hickory_resolver::TokioResolver;
use std::net::IpAddr;
use std::time::Duration;
use tracing::debug;

/// Upper bound on a single reverse lookup
pub const DEFAULT_LOOKUP_TIMEOUT: Duration = Duration::from_secs(5);

/// Maps an address back to hostnames
#[async_trait]
pub trait ReverseResolver: Send + Sync {
    /// PTR hostnames for `ip`, in resolver order
    async fn reverse(&self, ip: IpAddr) -> ReconResult<Vec<String>>;
}

/// System-configured DNS resolver
pub struct DnsResolver {
    resolver: TokioResolver,
    timeout: Duration,
}

impl DnsResolver {
    /// Create a resolver from the system configuration
    pub fn new() -> ReconResult<Self> {
        let resolver = TokioResolver::builder_tokio()
            .map_err(|e| ReconError::Dns(format!("failed to create resolver: {e}")))?
            .build();

        Ok(Self {
            resolver,
            timeout: DEFAULT_LOOKUP_TIMEOUT,
        })
    }
}

#[async_trait]
impl ReverseResolver for DnsResolver {
    async fn reverse(&self, ip: IpAddr) -> ReconResult<Vec<String>> {
        debug!(ip = %ip, "reverse DNS lookup");

        let response = tokio::time::timeout(self.timeout, self.resolver.reverse_lookup(ip))
            .await
            .map_err(|_| ReconError::Timeout)?
            .map_err(|e| ReconError::Dns(e.to_string()))?;

        Ok(response.iter().map(ToString::to_string).collect())
    }
}

/// Reverse lookup that degrades every failure to an empty list
pub async fn reverse_lookup<R: ReverseResolver + ?Sized>(resolver: &R, ip: &str) -> Vec<String> {
    let addr: IpAddr = match ip.trim().parse() {
        Ok(addr) => addr,
        Err(_) => {
            debug!(ip, "not an IP address, skipping reverse lookup");
            return Vec::new();
        }
    };

    match resolver.reverse(addr).await {
        Ok(names) => names,
        Err(e) => {
            debug!(ip, error = %e, "no reverse DNS records");
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedResolver(Vec<&'static str>);

    #[async_trait]
    impl ReverseResolver for FixedResolver {
        async fn reverse(&self, _ip: IpAddr) -> ReconResult<Vec<String>> {
            Ok(self.0.iter().map(|s| (*s).to_string()).collect())
        }
    }

    struct FailingResolver;

    #[async_trait]
    impl ReverseResolver for FailingResolver {
        async fn reverse(&self, ip: IpAddr) -> ReconResult<Vec<String>> {
            Err(ReconError::Dns(format!("NXDOMAIN for {ip}")))
        }
    }

    #[tokio::test]
    async fn records_pass_through_in_order() {
        let resolver = FixedResolver(vec!["b.example.", "a.example."]);
        let names = reverse_lookup(&resolver, "203.0.113.7").await;
        assert_eq!(names, ["b.example.", "a.example."]);
    }

    #[tokio::test]
    async fn lookup_errors_become_empty() {
        assert!(reverse_lookup(&FailingResolver, "203.0.113.7").await.is_empty());
    }

    #[tokio::test]
    async fn unparseable_ip_is_never_looked_up() {
        let resolver = FixedResolver(vec!["should.not.appear."]);
        assert!(reverse_lookup(&resolver, "not-an-ip").await.is_empty());
    }

    #[tokio::test]
    async fn works_through_trait_objects() {
        let resolver: Box<dyn ReverseResolver> = Box::new(FixedResolver(vec!["host.example."]));
        assert_eq!(reverse_lookup(resolver.as_ref(), "::1").await, ["host.example."]);
    }
}
