// SPDX-License-Identifier: MIT OR Apache-2.0

//! Converter registry.
//!
//! The registry answers one question: which converter governs a given slot?
//! Resolution follows a fixed precedence:
//!
//! 1. an explicit converter override attached to the slot
//! 2. the converter reported by a self-describing live value in the slot
//! 3. the default converter registered for the slot's declared type
//!
//! Builtin defaults and builtin converter types live in process-wide tables
//! that are built once on first use and never modified. A registry built with
//! [`ConverterRegistry::builder`] layers its own entries over those tables.

use crate::adapters::{
    BoolConverter, DirectoryPathConverter, DurationConverter, EndpointConverter,
    FilePathConverter, FromStrConverter, HostConverter, IpAddressConverter,
};
use crate::domain::{
    ConvertError, DirectoryPath, Endpoint, FilePath, Result, SlotDescriptor, ValueType,
};
use crate::ports::Converter;
use chrono::TimeDelta;
use once_cell::sync::Lazy;
use std::any::Any;
use std::collections::HashMap;
use std::fmt;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr};
use std::sync::Arc;

/// Creates a fresh converter instance for a named converter type.
pub type ConverterFactory = Arc<dyn Fn() -> Arc<dyn Converter> + Send + Sync>;

/// What to do when a slot override names a converter type that cannot be
/// instantiated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum OverridePolicy {
    /// Log a warning and continue with the live value and type default.
    #[default]
    FallThrough,
    /// Fail resolution with `UnknownConverterType`.
    Strict,
}

static BUILTIN_DEFAULTS: Lazy<HashMap<ValueType, Arc<dyn Converter>>> =
    Lazy::new(builtin_defaults);

static BUILTIN_CONVERTER_TYPES: Lazy<HashMap<&'static str, ConverterFactory>> =
    Lazy::new(builtin_converter_types);

static GLOBAL_REGISTRY: Lazy<ConverterRegistry> = Lazy::new(ConverterRegistry::new);

fn insert_default<T: Any>(
    map: &mut HashMap<ValueType, Arc<dyn Converter>>,
    converter: Arc<dyn Converter>,
) {
    map.insert(ValueType::of::<T>(), converter);
}

fn builtin_defaults() -> HashMap<ValueType, Arc<dyn Converter>> {
    let mut map = HashMap::new();

    insert_default::<bool>(&mut map, Arc::new(BoolConverter));
    insert_default::<char>(&mut map, Arc::new(FromStrConverter::<char>::new()));
    insert_default::<String>(&mut map, Arc::new(FromStrConverter::<String>::new()));
    insert_default::<i8>(&mut map, Arc::new(FromStrConverter::<i8>::new()));
    insert_default::<i16>(&mut map, Arc::new(FromStrConverter::<i16>::new()));
    insert_default::<i32>(&mut map, Arc::new(FromStrConverter::<i32>::new()));
    insert_default::<i64>(&mut map, Arc::new(FromStrConverter::<i64>::new()));
    insert_default::<i128>(&mut map, Arc::new(FromStrConverter::<i128>::new()));
    insert_default::<isize>(&mut map, Arc::new(FromStrConverter::<isize>::new()));
    insert_default::<u8>(&mut map, Arc::new(FromStrConverter::<u8>::new()));
    insert_default::<u16>(&mut map, Arc::new(FromStrConverter::<u16>::new()));
    insert_default::<u32>(&mut map, Arc::new(FromStrConverter::<u32>::new()));
    insert_default::<u64>(&mut map, Arc::new(FromStrConverter::<u64>::new()));
    insert_default::<u128>(&mut map, Arc::new(FromStrConverter::<u128>::new()));
    insert_default::<usize>(&mut map, Arc::new(FromStrConverter::<usize>::new()));
    insert_default::<f32>(&mut map, Arc::new(FromStrConverter::<f32>::new()));
    insert_default::<f64>(&mut map, Arc::new(FromStrConverter::<f64>::new()));
    insert_default::<Ipv4Addr>(&mut map, Arc::new(FromStrConverter::<Ipv4Addr>::new()));
    insert_default::<Ipv6Addr>(&mut map, Arc::new(FromStrConverter::<Ipv6Addr>::new()));
    insert_default::<SocketAddr>(&mut map, Arc::new(FromStrConverter::<SocketAddr>::new()));
    insert_default::<IpAddr>(&mut map, Arc::new(IpAddressConverter));
    insert_default::<Endpoint>(&mut map, Arc::new(EndpointConverter::new()));
    insert_default::<TimeDelta>(&mut map, Arc::new(DurationConverter));
    insert_default::<FilePath>(&mut map, Arc::new(FilePathConverter));
    insert_default::<DirectoryPath>(&mut map, Arc::new(DirectoryPathConverter));
    #[cfg(feature = "regex")]
    insert_default::<regex::Regex>(&mut map, Arc::new(crate::adapters::RegexConverter::new()));

    map
}

fn factory<C, F>(make: F) -> ConverterFactory
where
    C: Converter + 'static,
    F: Fn() -> C + Send + Sync + 'static,
{
    Arc::new(move || Arc::new(make()) as Arc<dyn Converter>)
}

fn builtin_converter_types() -> HashMap<&'static str, ConverterFactory> {
    let mut map = HashMap::new();

    map.insert("BoolConverter", factory(|| BoolConverter));
    map.insert("IpAddressConverter", factory(|| IpAddressConverter));
    map.insert("EndpointConverter", factory(EndpointConverter::new));
    map.insert("HostConverter", factory(HostConverter::new));
    map.insert("HostConverterPreferIpv4", factory(HostConverter::prefer_ipv4));
    map.insert("HostConverterPreferIpv6", factory(HostConverter::prefer_ipv6));
    map.insert("DurationConverter", factory(|| DurationConverter));
    map.insert("FilePathConverter", factory(|| FilePathConverter));
    map.insert("DirectoryPathConverter", factory(|| DirectoryPathConverter));
    #[cfg(feature = "regex")]
    map.insert("RegexConverter", factory(crate::adapters::RegexConverter::new));

    map
}

/// Chooses the converter that governs a slot.
///
/// A registry is immutable once built and can be shared freely between
/// threads. [`ConverterRegistry::global`] returns a shared registry holding
/// only the builtin tables.
///
/// # Examples
///
/// ```
/// use hexconv::domain::SlotDescriptor;
/// use hexconv::service::ConverterRegistry;
/// use std::net::IpAddr;
///
/// let registry = ConverterRegistry::global();
/// let slot = SlotDescriptor::new::<IpAddr>("destination");
/// let converter = registry.resolve(&slot).unwrap();
///
/// let addr: IpAddr = converter.convert("1fbf:0:a88:85a3::ac1f").unwrap();
/// assert!(addr.is_ipv6());
/// ```
pub struct ConverterRegistry {
    defaults: HashMap<ValueType, Arc<dyn Converter>>,
    converter_types: HashMap<String, ConverterFactory>,
    policy: OverridePolicy,
}

impl ConverterRegistry {
    /// Creates a registry with only the builtin tables.
    pub fn new() -> Self {
        ConverterRegistry {
            defaults: HashMap::new(),
            converter_types: HashMap::new(),
            policy: OverridePolicy::default(),
        }
    }

    /// Returns the shared registry with only the builtin tables.
    pub fn global() -> &'static ConverterRegistry {
        &GLOBAL_REGISTRY
    }

    /// Returns a builder for a registry with custom entries.
    pub fn builder() -> ConverterRegistryBuilder {
        ConverterRegistryBuilder::new()
    }

    /// Returns the override policy.
    pub fn override_policy(&self) -> OverridePolicy {
        self.policy
    }

    /// Instantiates the converter type registered under `name`.
    ///
    /// Custom converter types shadow builtin ones with the same name.
    ///
    /// # Errors
    ///
    /// Returns `UnknownConverterType` if no converter type has that name.
    pub fn instantiate(&self, name: &str) -> Result<Arc<dyn Converter>> {
        self.converter_types
            .get(name)
            .or_else(|| BUILTIN_CONVERTER_TYPES.get(name))
            .map(|factory| factory())
            .ok_or_else(|| ConvertError::UnknownConverterType {
                name: name.to_string(),
            })
    }

    /// Returns the default converter for `value_type`, if one is registered.
    ///
    /// Custom defaults shadow builtin ones for the same type.
    pub fn default_for(&self, value_type: ValueType) -> Option<Arc<dyn Converter>> {
        self.defaults
            .get(&value_type)
            .or_else(|| BUILTIN_DEFAULTS.get(&value_type))
            .cloned()
    }

    /// Returns the default converter for `T`.
    ///
    /// # Errors
    ///
    /// Returns `NoConverter` if no default is registered for `T`.
    pub fn converter_for<T: Any>(&self) -> Result<Arc<dyn Converter>> {
        let value_type = ValueType::of::<T>();
        self.default_for(value_type)
            .ok_or(ConvertError::NoConverter {
                value_type: value_type.name(),
            })
    }

    /// Resolves the converter for `slot`.
    ///
    /// # Errors
    ///
    /// - `UnknownConverterType` if the override cannot be instantiated and the
    ///   policy is [`OverridePolicy::Strict`]
    /// - `NoConverter` if nothing matched and the declared type has no default
    pub fn resolve(&self, slot: &SlotDescriptor<'_>) -> Result<Arc<dyn Converter>> {
        if let Some(name) = slot.converter_override() {
            match self.instantiate(name) {
                Ok(converter) => {
                    tracing::debug!(
                        slot = slot.name(),
                        converter = converter.name(),
                        "resolved converter from slot override"
                    );
                    return Ok(converter);
                }
                Err(e) if self.policy == OverridePolicy::Strict => return Err(e),
                Err(e) => {
                    tracing::warn!(
                        slot = slot.name(),
                        "Ignoring converter override for slot '{}': {}",
                        slot.name(),
                        e
                    );
                }
            }
        }

        if let Some(value) = slot.live_value().and_then(|live| live.as_self_describing()) {
            let converter = value.converter();
            tracing::debug!(
                slot = slot.name(),
                converter = converter.name(),
                "resolved converter from live value"
            );
            return Ok(converter);
        }

        let value_type = slot.value_type();
        let converter = self
            .default_for(value_type)
            .ok_or(ConvertError::NoConverter {
                value_type: value_type.name(),
            })?;
        tracing::debug!(
            slot = slot.name(),
            converter = converter.name(),
            value_type = value_type.name(),
            "resolved default converter for declared type"
        );
        Ok(converter)
    }
}

impl Default for ConverterRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ConverterRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut types: Vec<&str> = self.converter_types.keys().map(String::as_str).collect();
        types.sort_unstable();
        f.debug_struct("ConverterRegistry")
            .field("defaults", &self.defaults.len())
            .field("converter_types", &types)
            .field("policy", &self.policy)
            .finish()
    }
}

/// Builder for constructing a [`ConverterRegistry`].
///
/// # Examples
///
/// ```
/// use hexconv::adapters::EndpointConverter;
/// use hexconv::domain::{Endpoint, SlotDescriptor};
/// use hexconv::service::{ConverterRegistry, OverridePolicy};
/// use std::sync::Arc;
///
/// let registry = ConverterRegistry::builder()
///     .with_converter_type("HttpEndpoint", || EndpointConverter::with_default_port(80))
///     .override_policy(OverridePolicy::Strict)
///     .build();
///
/// let slot = SlotDescriptor::new::<Endpoint>("upstream").with_override("HttpEndpoint");
/// let endpoint: Endpoint = registry.resolve(&slot).unwrap().convert("10.0.0.1").unwrap();
/// assert_eq!(endpoint.port(), 80);
/// ```
pub struct ConverterRegistryBuilder {
    defaults: HashMap<ValueType, Arc<dyn Converter>>,
    converter_types: HashMap<String, ConverterFactory>,
    policy: OverridePolicy,
}

impl ConverterRegistryBuilder {
    /// Creates a new builder.
    pub fn new() -> Self {
        ConverterRegistryBuilder {
            defaults: HashMap::new(),
            converter_types: HashMap::new(),
            policy: OverridePolicy::default(),
        }
    }

    /// Registers `converter` as the default for slots declared as `T`.
    pub fn with_default<T: Any>(mut self, converter: Arc<dyn Converter>) -> Self {
        self.defaults.insert(ValueType::of::<T>(), converter);
        self
    }

    /// Registers `converter` as the default for its own target type.
    pub fn with_converter(mut self, converter: Arc<dyn Converter>) -> Self {
        self.defaults.insert(converter.target_type(), converter);
        self
    }

    /// Registers a named converter type usable as a slot override.
    ///
    /// `make` is called each time an override resolves to this name.
    pub fn with_converter_type<C, F>(mut self, name: impl Into<String>, make: F) -> Self
    where
        C: Converter + 'static,
        F: Fn() -> C + Send + Sync + 'static,
    {
        self.converter_types.insert(name.into(), factory(make));
        self
    }

    /// Sets the override policy.
    pub fn override_policy(mut self, policy: OverridePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Builds the registry.
    pub fn build(self) -> ConverterRegistry {
        ConverterRegistry {
            defaults: self.defaults,
            converter_types: self.converter_types,
            policy: self.policy,
        }
    }
}

impl Default for ConverterRegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ConvertedValue, ErrorKind, LiveValue};
    use crate::ports::SelfDescribing;

    struct CustomIntConverter;

    impl Converter for CustomIntConverter {
        fn name(&self) -> &'static str {
            "CustomIntConverter"
        }

        fn target_type(&self) -> ValueType {
            ValueType::of::<i32>()
        }

        fn convert_from_str(&self, text: &str) -> Result<ConvertedValue> {
            let n: i32 = text
                .parse()
                .map_err(|e| ConvertError::invalid_value(text, "i32", e))?;
            Ok(ConvertedValue::new(n + 10))
        }

        fn convert_to_string(&self, value: &dyn Any) -> Result<String> {
            value
                .downcast_ref::<i32>()
                .map(|n| (n - 10).to_string())
                .ok_or(ConvertError::UnsupportedValue {
                    converter: "CustomIntConverter",
                    expected: "i32",
                })
        }
    }

    struct Counter(i32);

    impl SelfDescribing for Counter {
        fn converter(&self) -> Arc<dyn Converter> {
            Arc::new(CustomIntConverter)
        }
    }

    #[test]
    fn test_builtin_default_for_primitive() {
        let registry = ConverterRegistry::new();
        let converter = registry.resolve(&SlotDescriptor::new::<i32>("count")).unwrap();
        assert_eq!(converter.convert::<i32>("5").unwrap(), 5);
    }

    #[test]
    fn test_builtin_defaults_cover_converter_variants() {
        let registry = ConverterRegistry::global();
        assert_eq!(
            registry.converter_for::<IpAddr>().unwrap().name(),
            "IpAddressConverter"
        );
        assert_eq!(
            registry.converter_for::<Endpoint>().unwrap().name(),
            "EndpointConverter"
        );
        assert_eq!(
            registry.converter_for::<TimeDelta>().unwrap().name(),
            "DurationConverter"
        );
        assert_eq!(
            registry.converter_for::<FilePath>().unwrap().name(),
            "FilePathConverter"
        );
        assert_eq!(
            registry.converter_for::<DirectoryPath>().unwrap().name(),
            "DirectoryPathConverter"
        );
        assert_eq!(registry.converter_for::<bool>().unwrap().name(), "BoolConverter");
    }

    #[test]
    fn test_override_wins() {
        let registry = ConverterRegistry::builder()
            .with_converter_type("CustomIntConverter", || CustomIntConverter)
            .build();
        let slot = SlotDescriptor::new::<i32>("count").with_override("CustomIntConverter");
        let converter = registry.resolve(&slot).unwrap();
        assert_eq!(converter.convert::<i32>("5").unwrap(), 15);
    }

    #[test]
    fn test_live_value_wins_over_default() {
        let value = Counter(1);
        let slot = SlotDescriptor::new::<Counter>("counter").with_self_describing(&value);
        let converter = ConverterRegistry::new().resolve(&slot).unwrap();
        assert_eq!(converter.name(), "CustomIntConverter");
        assert_eq!(value.0, 1);
    }

    #[test]
    fn test_plain_live_value_falls_back_to_default() {
        let value = 3i32;
        let slot = SlotDescriptor::new::<i32>("count").with_live_value(LiveValue::Plain(&value));
        let converter = ConverterRegistry::new().resolve(&slot).unwrap();
        assert_eq!(converter.convert::<i32>("5").unwrap(), 5);
    }

    #[test]
    fn test_unknown_override_falls_through_by_default() {
        let registry = ConverterRegistry::new();
        assert_eq!(registry.override_policy(), OverridePolicy::FallThrough);

        let slot = SlotDescriptor::new::<i32>("count").with_override("NoSuchConverter");
        let converter = registry.resolve(&slot).unwrap();
        assert_eq!(converter.convert::<i32>("5").unwrap(), 5);
    }

    #[test]
    fn test_unknown_override_fails_when_strict() {
        let registry = ConverterRegistry::builder()
            .override_policy(OverridePolicy::Strict)
            .build();
        let slot = SlotDescriptor::new::<i32>("count").with_override("NoSuchConverter");
        let err = registry.resolve(&slot).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownConverterType);
    }

    #[test]
    fn test_no_converter_for_unregistered_type() {
        struct Opaque;
        let slot = SlotDescriptor::new::<Opaque>("opaque");
        let err = ConverterRegistry::new().resolve(&slot).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NoConverter);
    }

    #[test]
    fn test_custom_default_shadows_builtin() {
        let registry = ConverterRegistry::builder()
            .with_default::<i32>(Arc::new(CustomIntConverter))
            .build();
        let converter = registry.resolve(&SlotDescriptor::new::<i32>("count")).unwrap();
        assert_eq!(converter.convert::<i32>("1").unwrap(), 11);

        // the builtin table itself is untouched
        let converter = ConverterRegistry::global().converter_for::<i32>().unwrap();
        assert_eq!(converter.convert::<i32>("1").unwrap(), 1);
    }

    #[test]
    fn test_with_converter_uses_target_type() {
        let registry = ConverterRegistry::builder()
            .with_converter(Arc::new(CustomIntConverter))
            .build();
        assert_eq!(
            registry.converter_for::<i32>().unwrap().name(),
            "CustomIntConverter"
        );
    }

    #[test]
    fn test_instantiate_builtin_converter_types() {
        let registry = ConverterRegistry::global();
        for name in [
            "BoolConverter",
            "IpAddressConverter",
            "EndpointConverter",
            "HostConverter",
            "HostConverterPreferIpv4",
            "HostConverterPreferIpv6",
            "DurationConverter",
            "FilePathConverter",
            "DirectoryPathConverter",
        ] {
            let converter = registry.instantiate(name).unwrap();
            assert_eq!(converter.name(), name);
        }
        assert!(registry.instantiate("Nope").is_err());
    }

    #[test]
    #[cfg(feature = "regex")]
    fn test_instantiate_regex_converter_type() {
        let converter = ConverterRegistry::global()
            .instantiate("RegexConverter")
            .unwrap();
        assert_eq!(converter.name(), "RegexConverter");
        assert!(converter.target_type().is::<regex::Regex>());
    }

    #[test]
    fn test_every_builtin_factory_reports_its_own_name() {
        for (name, factory) in BUILTIN_CONVERTER_TYPES.iter() {
            assert_eq!(factory().name(), *name);
        }
    }

    #[test]
    fn test_registry_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ConverterRegistry>();
    }

    #[test]
    fn test_registry_debug_lists_custom_types() {
        let registry = ConverterRegistry::builder()
            .with_converter_type("B", || CustomIntConverter)
            .with_converter_type("A", || CustomIntConverter)
            .build();
        let debug = format!("{:?}", registry);
        assert!(debug.contains("[\"A\", \"B\"]"));
    }
}
