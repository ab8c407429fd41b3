use super::{standard, ConvertFn, RawType, TypeConverter};
use crate::value::Type;
use crate::{Error, Result};
use indexmap::IndexMap;

/// Type converters keyed by `(raw type, declared type)`.
///
/// Lookups are exact: a converter registered for `(EpochMillis, I64)` is never
/// used for an `I32` or `U64` attribute.
#[derive(Debug, Clone, Default)]
pub struct ConverterRegistry {
    converters: IndexMap<(RawType, Type), TypeConverter>,
}

impl ConverterRegistry {
    /// Creates a registry with no converters.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates a registry holding the built-in converters.
    ///
    /// | raw           | declared types                      |
    /// |---------------|-------------------------------------|
    /// | `Uuid`        | `String`, `Uuid`, `Bytes`           |
    /// | `Timestamp`   | `Timestamp`, `Zoned`, `I64` (millis)|
    /// | `EpochMillis` | `I64`, `U64`, `Timestamp`           |
    pub fn standard() -> Self {
        let mut registry = Self::empty();
        standard::register(&mut registry);
        registry
    }

    /// Registers a converter for the exact `(raw, declared)` pair, replacing
    /// any converter previously registered for it.
    pub fn register(&mut self, raw: RawType, declared: Type, convert: ConvertFn) -> &mut Self {
        let converter = TypeConverter::new(raw, declared, convert);

        if self.converters.insert((raw, declared), converter).is_some() {
            tracing::debug!(?raw, ?declared, "replaced type converter");
        }

        self
    }

    /// Resolves the converter for `(raw, declared)`.
    pub fn resolve(&self, raw: RawType, declared: Type) -> Result<TypeConverter> {
        self.converters
            .get(&(raw, declared))
            .copied()
            .ok_or_else(|| Error::converter_not_found(raw, declared))
    }

    pub fn contains(&self, raw: RawType, declared: Type) -> bool {
        self.converters.contains_key(&(raw, declared))
    }

    /// Declared types reachable from `raw`, in registration order.
    pub fn targets(&self, raw: RawType) -> impl Iterator<Item = Type> + '_ {
        self.converters
            .keys()
            .filter(move |(r, _)| *r == raw)
            .map(|(_, declared)| *declared)
    }

    pub fn len(&self) -> usize {
        self.converters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.converters.is_empty()
    }
}
