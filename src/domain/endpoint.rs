// SPDX-License-Identifier: MIT OR Apache-2.0

//! Network endpoint types and the endpoint splitting grammar.
//!
//! This module provides the [`Endpoint`] value, the [`AddressFamilyPreference`]
//! policy and the [`ParserConfig`] shared by the endpoint and host parsers. It
//! also holds [`split_endpoint`], the bracket-aware routine that separates the
//! address text from the port text.

use crate::domain::errors::{ConvertError, Result};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;

/// Expected format reported by literal endpoint parse failures.
pub const ENDPOINT_FORMAT: &str = "ipaddr:port";

/// Expected format reported by host parse failures.
pub const HOST_FORMAT: &str = "ipaddr:port' or 'domain:port";

/// An immutable network endpoint: an IP address and a port.
///
/// Endpoints are only produced by successful parses, so the address is always
/// a valid IPv4 or IPv6 address and the port is always in range.
///
/// # Examples
///
/// ```
/// use hexconv::domain::Endpoint;
/// use std::net::{IpAddr, Ipv4Addr};
///
/// let endpoint = Endpoint::new(IpAddr::V4(Ipv4Addr::new(192, 168, 1, 1)), 8000);
/// assert_eq!(endpoint.port(), 8000);
/// assert_eq!(endpoint.to_string(), "192.168.1.1:8000");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Endpoint {
    address: IpAddr,
    port: u16,
}

impl Endpoint {
    /// Creates a new endpoint.
    pub fn new(address: IpAddr, port: u16) -> Self {
        Endpoint { address, port }
    }

    /// Returns the endpoint address.
    pub fn address(&self) -> IpAddr {
        self.address
    }

    /// Returns the endpoint port.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Returns the endpoint as a `SocketAddr`.
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.address, self.port)
    }
}

impl From<SocketAddr> for Endpoint {
    fn from(addr: SocketAddr) -> Self {
        Endpoint::new(addr.ip(), addr.port())
    }
}

impl From<Endpoint> for SocketAddr {
    fn from(endpoint: Endpoint) -> Self {
        endpoint.socket_addr()
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // SocketAddr brackets IPv6 addresses, which keeps the output re-parseable
        write!(f, "{}", self.socket_addr())
    }
}

impl FromStr for Endpoint {
    type Err = ConvertError;

    /// Parses an `ipaddr:port` literal with no default port.
    fn from_str(s: &str) -> Result<Self> {
        let split = split_endpoint(s, false, ENDPOINT_FORMAT)?;
        let address = split.literal_address().ok_or_else(|| split.invalid_address())?;
        let port = split.port(None)?;
        Ok(Endpoint::new(address, port))
    }
}

impl Serialize for Endpoint {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Endpoint {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

/// Policy for choosing among several addresses resolved for one host name.
///
/// The ordering is a stable sort: addresses of the preferred family move to the
/// front while each family keeps the order the resolver returned.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AddressFamilyPreference {
    /// Keep the resolver's order.
    #[default]
    None,
    /// Sort IPv4 addresses first.
    PreferIpv4,
    /// Sort IPv6 addresses first.
    PreferIpv6,
}

impl AddressFamilyPreference {
    /// Stable-sorts `addresses` so the preferred family comes first.
    ///
    /// # Examples
    ///
    /// ```
    /// use hexconv::domain::AddressFamilyPreference;
    /// use std::net::IpAddr;
    ///
    /// let mut addrs: Vec<IpAddr> = vec!["::1".parse().unwrap(), "127.0.0.1".parse().unwrap()];
    /// AddressFamilyPreference::PreferIpv4.order(&mut addrs);
    /// assert!(addrs[0].is_ipv4());
    /// ```
    pub fn order(&self, addresses: &mut [IpAddr]) {
        match self {
            AddressFamilyPreference::None => {}
            AddressFamilyPreference::PreferIpv4 => {
                addresses.sort_by_key(|addr| if addr.is_ipv4() { 0 } else { 1 })
            }
            AddressFamilyPreference::PreferIpv6 => {
                addresses.sort_by_key(|addr| if addr.is_ipv6() { 0 } else { 1 })
            }
        }
    }

    /// Returns the canonical name of this preference.
    pub fn as_str(&self) -> &'static str {
        match self {
            AddressFamilyPreference::None => "none",
            AddressFamilyPreference::PreferIpv4 => "prefer_ipv4",
            AddressFamilyPreference::PreferIpv6 => "prefer_ipv6",
        }
    }
}

impl fmt::Display for AddressFamilyPreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AddressFamilyPreference {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "none" => Ok(AddressFamilyPreference::None),
            "prefer_ipv4" | "ipv4" => Ok(AddressFamilyPreference::PreferIpv4),
            "prefer_ipv6" | "ipv6" => Ok(AddressFamilyPreference::PreferIpv6),
            _ => Err(ConvertError::InvalidValue {
                input: s.to_string(),
                target_type: "AddressFamilyPreference",
                source: "expected one of none, prefer_ipv4, prefer_ipv6".into(),
            }),
        }
    }
}

/// Per-parser configuration, immutable once a parser is built from it.
///
/// This type is deserializable so parser settings can live alongside the rest
/// of an application's configuration.
///
/// # Examples
///
/// ```
/// use hexconv::domain::{AddressFamilyPreference, ParserConfig};
///
/// let config = ParserConfig::new()
///     .with_default_port(8080)
///     .with_preference(AddressFamilyPreference::PreferIpv4);
/// assert_eq!(config.default_port, Some(8080));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Port used when the input omits one; `None` makes a missing port an error
    pub default_port: Option<u16>,
    /// Address family ordering applied to resolved host names
    pub preference: AddressFamilyPreference,
}

impl ParserConfig {
    /// Creates a configuration with no default port and no family preference.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the default port.
    pub fn with_default_port(mut self, port: u16) -> Self {
        self.default_port = Some(port);
        self
    }

    /// Sets the address family preference.
    pub fn with_preference(mut self, preference: AddressFamilyPreference) -> Self {
        self.preference = preference;
        self
    }
}

/// The address and port segments of an endpoint string.
///
/// Produced by [`split_endpoint`]; borrows from the input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EndpointSplit<'a> {
    input: &'a str,
    address: &'a str,
    port: Option<&'a str>,
    expected: &'static str,
}

impl<'a> EndpointSplit<'a> {
    /// Returns the raw address segment, brackets included.
    pub fn address_text(&self) -> &'a str {
        self.address
    }

    /// Returns the address segment with one pair of enclosing brackets removed.
    pub fn unbracketed_address(&self) -> &'a str {
        strip_brackets(self.address)
    }

    /// Returns true if the address segment is enclosed in brackets.
    pub fn is_bracketed(&self) -> bool {
        self.address.starts_with('[') && self.address.ends_with(']')
    }

    /// Returns the raw port segment, if the input carried one.
    pub fn port_text(&self) -> Option<&'a str> {
        self.port
    }

    /// Parses the address segment as an IPv4 or IPv6 literal.
    pub fn literal_address(&self) -> Option<IpAddr> {
        self.unbracketed_address().parse().ok()
    }

    /// Resolves the port from the port segment, falling back to `default_port`.
    pub fn port(&self, default_port: Option<u16>) -> Result<u16> {
        match (self.port, default_port) {
            (Some(text), _) => text.parse::<u16>().map_err(|_| ConvertError::InvalidPort {
                input: self.input.to_string(),
                port: text.to_string(),
                expected: self.expected,
            }),
            (None, Some(port)) => Ok(port),
            (None, None) => Err(ConvertError::MissingPort {
                input: self.input.to_string(),
                expected: self.expected,
            }),
        }
    }

    /// Builds the `InvalidAddress` error for this split.
    pub fn invalid_address(&self) -> ConvertError {
        ConvertError::InvalidAddress {
            input: self.input.to_string(),
            address: self.address.to_string(),
            target: "an endpoint",
            expected: self.expected,
        }
    }
}

/// Splits endpoint text into its address and port segments.
///
/// The port separator is the last `:` after the closing `]` of a bracketed
/// IPv6 literal, or the last `:` past index 0 when there are no brackets. When
/// there is no separator the whole input is the address; that is only allowed
/// when `has_default_port` is true.
///
/// # Errors
///
/// - `Empty` for empty or blank input
/// - `UnterminatedBracket` for a `[` with no `]` after it
/// - `MissingPort` when no separator exists and there is no default port
///
/// # Examples
///
/// ```
/// use hexconv::domain::endpoint::{split_endpoint, ENDPOINT_FORMAT};
///
/// let split = split_endpoint("[::1]:8000", false, ENDPOINT_FORMAT).unwrap();
/// assert_eq!(split.address_text(), "[::1]");
/// assert_eq!(split.port_text(), Some("8000"));
/// ```
pub fn split_endpoint<'a>(
    input: &'a str,
    has_default_port: bool,
    expected: &'static str,
) -> Result<EndpointSplit<'a>> {
    if input.trim().is_empty() {
        return Err(ConvertError::Empty {
            input: input.to_string(),
            target: "an endpoint",
            expected,
        });
    }

    // IPv6 literals contain colons too, so only look for the separator past ']'
    let separator = match input.find('[') {
        Some(open) => {
            let close = match input[open + 1..].find(']') {
                Some(idx) => open + 1 + idx,
                None => {
                    return Err(ConvertError::UnterminatedBracket {
                        input: input.to_string(),
                        expected,
                    })
                }
            };
            input[close + 1..].rfind(':').map(|idx| idx + close + 1)
        }
        // an empty address is never valid, so a leading ':' is not a separator
        None => input.rfind(':').filter(|&idx| idx > 0),
    };

    match separator {
        Some(idx) => Ok(EndpointSplit {
            input,
            address: &input[..idx],
            port: Some(&input[idx + 1..]),
            expected,
        }),
        None if has_default_port => Ok(EndpointSplit {
            input,
            address: input,
            port: None,
            expected,
        }),
        None => Err(ConvertError::MissingPort {
            input: input.to_string(),
            expected,
        }),
    }
}

/// Removes one pair of enclosing brackets, as around an IPv6 literal.
///
/// Text that is not fully enclosed is returned unchanged.
///
/// # Examples
///
/// ```
/// use hexconv::domain::endpoint::strip_brackets;
///
/// assert_eq!(strip_brackets("[::1]"), "::1");
/// assert_eq!(strip_brackets("[::1"), "[::1");
/// ```
pub fn strip_brackets(text: &str) -> &str {
    text.strip_prefix('[')
        .and_then(|s| s.strip_suffix(']'))
        .unwrap_or(text)
}
