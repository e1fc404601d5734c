// SPDX-License-Identifier: MIT OR Apache-2.0

//! Host resolver implementations.
//!
//! [`SystemResolver`] asks the operating system through `ToSocketAddrs`.
//! [`StaticResolver`] answers from a fixed table and is meant for tests and
//! for pinning names that should never hit DNS.

use crate::ports::HostResolver;
use std::collections::HashMap;
use std::io;
use std::net::{IpAddr, ToSocketAddrs};

/// Resolves host names with the platform resolver.
///
/// The lookup is blocking and uses whatever timeout the platform applies.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemResolver;

impl SystemResolver {
    /// Creates a new system resolver.
    pub fn new() -> Self {
        SystemResolver
    }
}

impl HostResolver for SystemResolver {
    fn name(&self) -> &str {
        "system"
    }

    fn resolve(&self, host: &str) -> io::Result<Vec<IpAddr>> {
        let mut addresses: Vec<IpAddr> = Vec::new();
        for addr in (host, 0).to_socket_addrs()? {
            let ip = addr.ip();
            if !addresses.contains(&ip) {
                addresses.push(ip);
            }
        }
        tracing::trace!(host, count = addresses.len(), "system lookup finished");
        Ok(addresses)
    }
}

/// Resolves host names from an in-memory table.
///
/// Unknown names fail with `io::ErrorKind::NotFound`. A name registered with
/// an empty address list resolves successfully to nothing.
///
/// # Examples
///
/// ```
/// use hexconv::adapters::StaticResolver;
/// use hexconv::ports::HostResolver;
///
/// let resolver = StaticResolver::new()
///     .with_host("db", vec!["10.0.0.5".parse().unwrap()]);
/// assert_eq!(resolver.resolve("db").unwrap().len(), 1);
/// assert!(resolver.resolve("cache").is_err());
/// ```
#[derive(Clone, Debug, Default)]
pub struct StaticResolver {
    hosts: HashMap<String, Vec<IpAddr>>,
}

impl StaticResolver {
    /// Creates a resolver with no known hosts.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces the addresses for `host`.
    pub fn with_host(mut self, host: impl Into<String>, addresses: Vec<IpAddr>) -> Self {
        self.hosts.insert(host.into().to_lowercase(), addresses);
        self
    }
}

impl HostResolver for StaticResolver {
    fn name(&self) -> &str {
        "static"
    }

    fn resolve(&self, host: &str) -> io::Result<Vec<IpAddr>> {
        self.hosts
            .get(&host.to_lowercase())
            .cloned()
            .ok_or_else(|| {
                io::Error::new(io::ErrorKind::NotFound, format!("unknown host '{}'", host))
            })
    }
}
