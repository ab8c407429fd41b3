use super::{Generate, GenerateStrategy};
use crate::convert::{ConverterRegistry, RawType, RawValue, TypeConverter};
use crate::value::{Type, Value};
use crate::Result;

/// Assigns the current wall-clock instant.
///
/// With [`GenerateStrategy::Create`] the attribute records when the item was
/// created; with [`GenerateStrategy::Always`] (the default) it records the
/// last write.
///
/// The standard registry supports three declared types: [`Type::Timestamp`],
/// [`Type::Zoned`] (UTC) and [`Type::I64`] (milliseconds since the Unix
/// epoch).
#[derive(Debug, Clone)]
pub struct TimestampGenerator {
    converter: TypeConverter,
    strategy: GenerateStrategy,
}

impl TimestampGenerator {
    pub const DEFAULT_STRATEGY: GenerateStrategy = GenerateStrategy::Always;

    pub fn new(
        declared: Type,
        strategy: GenerateStrategy,
        registry: &ConverterRegistry,
    ) -> Result<Self> {
        Ok(Self {
            converter: registry.resolve(RawType::Timestamp, declared)?,
            strategy,
        })
    }

    pub fn with_default_strategy(declared: Type, registry: &ConverterRegistry) -> Result<Self> {
        Self::new(declared, Self::DEFAULT_STRATEGY, registry)
    }

    pub fn declared(&self) -> Type {
        self.converter.declared()
    }
}

impl Generate for TimestampGenerator {
    fn strategy(&self) -> GenerateStrategy {
        self.strategy
    }

    fn generate(&self, _current: &Value) -> Result<Value> {
        self.converter.convert(RawValue::Timestamp(jiff::Timestamp::now()))
    }
}
