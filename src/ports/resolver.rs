// SPDX-License-Identifier: MIT OR Apache-2.0

//! Host name resolution trait definition.
//!
//! The host parser never talks to DNS directly; it asks a `HostResolver`. This
//! keeps lookups injectable, so tests can supply fixed answers and callers can
//! put timeouts or caching behind their own implementation.

use std::io;
use std::net::IpAddr;

/// A synchronous host name resolver.
///
/// `resolve` is called at most once per parse and is never retried by the
/// caller. A lookup failure (including a timeout) should be returned as an
/// `io::Error`; the parser reports both failures and empty answers as an
/// unresolved host.
///
/// # Examples
///
/// ```rust
/// use hexconv::ports::HostResolver;
/// use std::io;
/// use std::net::IpAddr;
///
/// struct Loopback;
///
/// impl HostResolver for Loopback {
///     fn name(&self) -> &str {
///         "loopback"
///     }
///
///     fn resolve(&self, _host: &str) -> io::Result<Vec<IpAddr>> {
///         Ok(vec!["127.0.0.1".parse().unwrap()])
///     }
/// }
///
/// let addrs = Loopback.resolve("anything").unwrap();
/// assert_eq!(addrs.len(), 1);
/// ```
pub trait HostResolver: Send + Sync {
    /// Returns the name of this resolver, used in log output.
    fn name(&self) -> &str;

    /// Resolves `host` to zero or more addresses, in resolver order.
    fn resolve(&self, host: &str) -> io::Result<Vec<IpAddr>>;
}
