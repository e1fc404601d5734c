// SPDX-License-Identifier: MIT OR Apache-2.0

//! Property-based tests using proptest.
//!
//! These tests check that the parsers accept every well-formed endpoint and
//! duration, and never panic on arbitrary input.

use chrono::TimeDelta;
use hexconv::domain::duration::{format_duration, parse_duration};
use hexconv::domain::Endpoint;
use hexconv::service::EndpointParser;
use proptest::prelude::*;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

// Any IPv4 address and port survive a trip through text
proptest! {
    #[test]
    fn test_ipv4_endpoint_roundtrip(octets in any::<[u8; 4]>(), port in any::<u16>()) {
        let address = IpAddr::V4(Ipv4Addr::from(octets));
        let text = format!("{}:{}", address, port);
        let endpoint = EndpointParser::new().parse(&text).unwrap();
        prop_assert_eq!(endpoint, Endpoint::new(address, port));
    }
}

// Bracketed IPv6 literals parse to the same address as the bare literal
proptest! {
    #[test]
    fn test_ipv6_endpoint_roundtrip(segments in any::<[u16; 8]>(), port in any::<u16>()) {
        let address = IpAddr::V6(Ipv6Addr::from(segments));
        let text = format!("[{}]:{}", address, port);
        let endpoint = EndpointParser::new().parse(&text).unwrap();
        prop_assert_eq!(endpoint.address(), address);
        prop_assert_eq!(endpoint.port(), port);
        prop_assert_eq!(endpoint.to_string(), text);
    }
}

// The default port only fills in a missing port
proptest! {
    #[test]
    fn test_default_port_never_overrides(
        octets in any::<[u8; 4]>(),
        port in any::<u16>(),
        default_port in any::<u16>()
    ) {
        let address = Ipv4Addr::from(octets);
        let parser = EndpointParser::with_default_port(default_port);
        prop_assert_eq!(parser.parse(&format!("{}:{}", address, port)).unwrap().port(), port);
        prop_assert_eq!(parser.parse(&address.to_string()).unwrap().port(), default_port);
    }
}

// Ports outside u16 are rejected
proptest! {
    #[test]
    fn test_out_of_range_port_rejected(port in 65_536u32..10_000_000u32) {
        let text = format!("10.0.0.1:{}", port);
        prop_assert!(EndpointParser::new().parse(&text).is_err());
    }
}

// Arbitrary input yields Ok or Err, never a panic
proptest! {
    #[test]
    fn test_parsers_do_not_panic(s in "\\PC*") {
        let _ = EndpointParser::new().parse(&s);
        let _ = EndpointParser::with_default_port(80).parse(&s);
        let _ = parse_duration(&s);
    }
}

// Bare integers are whole seconds
proptest! {
    #[test]
    fn test_bare_seconds(n in -1_000_000_000i64..1_000_000_000i64) {
        prop_assert_eq!(parse_duration(&n.to_string()).unwrap(), TimeDelta::seconds(n));
    }
}

// Every suffix scales the same integer consistently
proptest! {
    #[test]
    fn test_suffixes(n in -100_000i64..100_000i64) {
        prop_assert_eq!(parse_duration(&format!("{}ms", n)).unwrap(), TimeDelta::milliseconds(n));
        prop_assert_eq!(parse_duration(&format!("{}s", n)).unwrap(), TimeDelta::seconds(n));
        prop_assert_eq!(parse_duration(&format!("{}m", n)).unwrap(), TimeDelta::minutes(n));
        prop_assert_eq!(parse_duration(&format!("{}h", n)).unwrap(), TimeDelta::hours(n));
        prop_assert_eq!(parse_duration(&format!("{}d", n)).unwrap(), TimeDelta::days(n));
    }
}

// Formatted durations parse back to the same value
proptest! {
    #[test]
    fn test_format_then_parse(
        secs in -10_000_000i64..10_000_000i64,
        nanos in 0u32..1_000_000_000u32
    ) {
        let duration = TimeDelta::new(secs, nanos).unwrap();
        prop_assert_eq!(parse_duration(&format_duration(duration)).unwrap(), duration);
    }
}
