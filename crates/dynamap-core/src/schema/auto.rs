use crate::convert::ConverterRegistry;
use crate::generate::{Generate, GenerateStrategy, IdentifierGenerator, TimestampGenerator};
use crate::value::Type;
use crate::Result;
use std::sync::Arc;

/// How an attribute's value is generated.
#[derive(Debug, Clone)]
pub enum AutoConfig {
    /// A random identifier, assigned once.
    Key,

    /// The current time, with the given strategy.
    Timestamp(GenerateStrategy),

    /// An application-defined generator.
    Custom(Arc<dyn Generate>),
}

impl AutoConfig {
    /// A timestamp refreshed on every write.
    pub fn timestamp() -> Self {
        Self::Timestamp(TimestampGenerator::DEFAULT_STRATEGY)
    }

    pub fn custom(generator: impl Generate) -> Self {
        Self::Custom(Arc::new(generator))
    }

    /// Builds the generator for an attribute of type `declared`, resolving its
    /// converter from `registry`.
    pub(crate) fn build(
        &self,
        declared: Type,
        registry: &ConverterRegistry,
    ) -> Result<Arc<dyn Generate>> {
        Ok(match self {
            Self::Key => Arc::new(IdentifierGenerator::new(declared, registry)?),
            Self::Timestamp(strategy) => {
                Arc::new(TimestampGenerator::new(declared, *strategy, registry)?)
            }
            Self::Custom(generator) => generator.clone(),
        })
    }
}
