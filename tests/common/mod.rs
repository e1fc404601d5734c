// SPDX-License-Identifier: MIT OR Apache-2.0

//! Shared fixtures for integration tests.

use hexconv::adapters::StaticResolver;
use std::net::IpAddr;
use std::sync::Arc;

/// Installs a test-writer tracing subscriber once per test binary.
#[allow(dead_code)]
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::TRACE)
        .try_init();
}

/// Parses an address literal.
#[allow(dead_code)]
pub fn ip(text: &str) -> IpAddr {
    text.parse().unwrap()
}

/// A resolver with a few dual-stack and single-stack names.
#[allow(dead_code)]
pub fn fixed_resolver() -> Arc<StaticResolver> {
    Arc::new(
        StaticResolver::new()
            .with_host("localhost", vec![ip("::1"), ip("127.0.0.1")])
            .with_host("dual.example", vec![ip("192.0.2.10"), ip("2001:db8::10")])
            .with_host("v6only.example", vec![ip("2001:db8::20")])
            .with_host("v4only.example", vec![ip("192.0.2.30")])
            .with_host("blackhole.example", vec![]),
    )
}
