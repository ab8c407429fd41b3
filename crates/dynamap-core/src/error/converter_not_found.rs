use super::Error;
use crate::convert::RawType;
use crate::value::Type;

/// Error when no type converter is registered for a `(raw, declared)` pair.
///
/// This is a configuration error. It is raised while a record schema is being
/// built, before any write reaches the generator.
#[derive(Debug)]
pub(super) struct ConverterNotFound {
    raw: RawType,
    declared: Type,
}

impl std::error::Error for ConverterNotFound {}

impl core::fmt::Display for ConverterNotFound {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "no type converter registered from {:?} to {:?}",
            self.raw, self.declared
        )
    }
}

impl Error {
    /// Creates a converter-not-found error.
    pub fn converter_not_found(raw: RawType, declared: Type) -> Error {
        Error::from(super::ErrorKind::ConverterNotFound(ConverterNotFound {
            raw,
            declared,
        }))
    }

    /// Returns `true` if this error is a converter-not-found error.
    pub fn is_converter_not_found(&self) -> bool {
        matches!(self.root_kind(), super::ErrorKind::ConverterNotFound(_))
    }
}
