use super::{Generate, GenerateStrategy};
use crate::convert::{ConverterRegistry, RawType, RawValue, TypeConverter};
use crate::value::{Type, Value};
use crate::{Error, Result};

/// Draws allowed before a converter that keeps yielding the current value is
/// treated as a conversion failure.
const MAX_DRAWS: usize = 3;

/// Assigns a random v4 UUID.
///
/// The strategy is always [`GenerateStrategy::Create`]: once an identifier is
/// set it is never replaced by later updates.
#[derive(Debug, Clone)]
pub struct IdentifierGenerator {
    converter: TypeConverter,
}

impl IdentifierGenerator {
    /// Creates a generator for an attribute of type `declared`.
    ///
    /// Fails if `registry` has no converter from [`RawType::Uuid`] to
    /// `declared`.
    pub fn new(declared: Type, registry: &ConverterRegistry) -> Result<Self> {
        Ok(Self {
            converter: registry.resolve(RawType::Uuid, declared)?,
        })
    }

    pub fn declared(&self) -> Type {
        self.converter.declared()
    }
}

impl Generate for IdentifierGenerator {
    fn strategy(&self) -> GenerateStrategy {
        GenerateStrategy::Create
    }

    fn generate(&self, current: &Value) -> Result<Value> {
        let mut value = Value::Null;

        for _ in 0..MAX_DRAWS {
            value = self.converter.convert(RawValue::Uuid(uuid::Uuid::new_v4()))?;

            if value != *current {
                return Ok(value);
            }
        }

        Err(Error::type_conversion(value, self.declared().name()))
    }
}
