// SPDX-License-Identifier: MIT OR Apache-2.0

//! Endpoint and host parsers.
//!
//! [`EndpointParser`] accepts address literals only. [`HostParser`] accepts the
//! same inputs and additionally resolves domain names through an injected
//! [`HostResolver`], ordering the answers by the configured
//! [`AddressFamilyPreference`].

use crate::adapters::SystemResolver;
use crate::domain::endpoint::{split_endpoint, EndpointSplit, ENDPOINT_FORMAT, HOST_FORMAT};
use crate::domain::{AddressFamilyPreference, ConvertError, Endpoint, ParserConfig, Result};
use crate::ports::HostResolver;
use std::fmt;
use std::net::IpAddr;
use std::sync::Arc;

/// Parses `ipaddr:port` text into an [`Endpoint`] without any DNS lookup.
///
/// IPv6 literals must be enclosed in brackets when a port follows them, e.g.
/// `[1fbf:0:a88:85a3::ac1f]:8000`.
///
/// # Examples
///
/// ```
/// use hexconv::service::EndpointParser;
///
/// let parser = EndpointParser::with_default_port(8080);
/// assert_eq!(parser.parse("192.168.1.1").unwrap().port(), 8080);
/// assert_eq!(parser.parse("192.168.1.1:8000").unwrap().port(), 8000);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EndpointParser {
    default_port: Option<u16>,
}

impl EndpointParser {
    /// Creates a parser that requires every input to carry a port.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a parser that uses `port` when the input omits one.
    pub fn with_default_port(port: u16) -> Self {
        EndpointParser {
            default_port: Some(port),
        }
    }

    /// Creates a parser from a [`ParserConfig`].
    ///
    /// The address family preference is ignored because literals need no
    /// resolution.
    pub fn from_config(config: &ParserConfig) -> Self {
        EndpointParser {
            default_port: config.default_port,
        }
    }

    /// Returns the configured default port.
    pub fn default_port(&self) -> Option<u16> {
        self.default_port
    }

    /// Parses endpoint text.
    ///
    /// # Errors
    ///
    /// `Empty`, `UnterminatedBracket`, `MissingPort`, `InvalidAddress` or
    /// `InvalidPort`, checked in that order.
    pub fn parse(&self, text: &str) -> Result<Endpoint> {
        let split = split_endpoint(text, self.default_port.is_some(), ENDPOINT_FORMAT)?;
        let address = split
            .literal_address()
            .ok_or_else(|| split.invalid_address())?;
        let port = split.port(self.default_port)?;
        tracing::trace!(input = text, %address, port, "parsed endpoint");
        Ok(Endpoint::new(address, port))
    }
}

/// Parses `ipaddr:port` or `domain:port` text into an [`Endpoint`].
///
/// Literal addresses are handled exactly like [`EndpointParser`]. Anything else
/// in the address position is treated as a host name and passed to the
/// resolver once; the first address after preference ordering is used.
///
/// # Examples
///
/// ```
/// use hexconv::adapters::StaticResolver;
/// use hexconv::domain::AddressFamilyPreference;
/// use hexconv::service::HostParser;
/// use std::sync::Arc;
///
/// let resolver = StaticResolver::new()
///     .with_host("db.internal", vec!["fd00::5".parse().unwrap(), "10.0.0.5".parse().unwrap()]);
/// let parser = HostParser::with_resolver(Arc::new(resolver))
///     .with_preference(AddressFamilyPreference::PreferIpv4);
///
/// let endpoint = parser.parse("db.internal:5432").unwrap();
/// assert_eq!(endpoint.to_string(), "10.0.0.5:5432");
/// ```
#[derive(Clone)]
pub struct HostParser {
    config: ParserConfig,
    resolver: Arc<dyn HostResolver>,
}

impl HostParser {
    /// Creates a parser backed by the system resolver.
    pub fn new() -> Self {
        Self::with_resolver(Arc::new(SystemResolver::new()))
    }

    /// Creates a parser backed by `resolver`.
    pub fn with_resolver(resolver: Arc<dyn HostResolver>) -> Self {
        Self::from_config(ParserConfig::default(), resolver)
    }

    /// Creates a parser from a [`ParserConfig`] and a resolver.
    pub fn from_config(config: ParserConfig, resolver: Arc<dyn HostResolver>) -> Self {
        HostParser { config, resolver }
    }

    /// Sets the port used when the input omits one.
    pub fn with_default_port(mut self, port: u16) -> Self {
        self.config.default_port = Some(port);
        self
    }

    /// Sets the address family preference for resolved names.
    pub fn with_preference(mut self, preference: AddressFamilyPreference) -> Self {
        self.config.preference = preference;
        self
    }

    /// Returns the parser configuration.
    pub fn config(&self) -> ParserConfig {
        self.config
    }

    /// Parses endpoint text, resolving the host name if it is not a literal.
    ///
    /// # Errors
    ///
    /// Everything [`EndpointParser::parse`] reports, plus `UnresolvedHost` when
    /// the resolver fails or returns no addresses. Bracketed text that is not
    /// an address literal, and host names containing `:`, brackets or
    /// whitespace, are `InvalidAddress` and never reach the resolver.
    pub fn parse(&self, text: &str) -> Result<Endpoint> {
        let default_port = self.config.default_port;
        let split = split_endpoint(text, default_port.is_some(), HOST_FORMAT)?;
        let address = match split.literal_address() {
            Some(address) => address,
            None => self.resolve_host(text, &split)?,
        };
        let port = split.port(default_port)?;
        tracing::trace!(input = text, %address, port, "parsed host endpoint");
        Ok(Endpoint::new(address, port))
    }

    fn resolve_host(&self, input: &str, split: &EndpointSplit<'_>) -> Result<IpAddr> {
        let host = split.address_text();
        if !is_host_name(host) {
            return Err(split.invalid_address());
        }

        tracing::debug!(host, resolver = self.resolver.name(), "resolving host name");
        let mut addresses =
            self.resolver
                .resolve(host)
                .map_err(|e| ConvertError::UnresolvedHost {
                    input: input.to_string(),
                    host: host.to_string(),
                    source: Some(e),
                })?;

        self.config.preference.order(&mut addresses);
        let address = addresses
            .first()
            .copied()
            .ok_or_else(|| ConvertError::UnresolvedHost {
                input: input.to_string(),
                host: host.to_string(),
                source: None,
            })?;

        tracing::debug!(
            host,
            %address,
            candidates = addresses.len(),
            preference = %self.config.preference,
            "resolved host name"
        );
        Ok(address)
    }
}

impl Default for HostParser {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for HostParser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HostParser")
            .field("config", &self.config)
            .field("resolver", &self.resolver.name())
            .finish()
    }
}

/// Returns true if `text` could be a host name worth asking the resolver about.
fn is_host_name(text: &str) -> bool {
    !text.is_empty()
        && !text.contains(['[', ']', ':'])
        && !text.chars().any(char::is_whitespace)
}
