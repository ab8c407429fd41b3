use super::{RawType, RawValue};
use crate::value::{Type, Value};
use crate::{Error, Result};
use std::fmt;

/// Converts a raw generated value into a value of the declared type.
pub type ConvertFn = fn(RawValue) -> Result<Value>;

/// A resolved conversion from one [`RawType`] to one declared [`Type`].
///
/// Converters are plain function pointers and are `Copy`. A generator keeps
/// the converter it resolved at construction for its whole lifetime.
#[derive(Clone, Copy)]
pub struct TypeConverter {
    raw: RawType,
    declared: Type,
    convert: ConvertFn,
}

impl TypeConverter {
    pub fn new(raw: RawType, declared: Type, convert: ConvertFn) -> Self {
        Self {
            raw,
            declared,
            convert,
        }
    }

    pub fn raw(&self) -> RawType {
        self.raw
    }

    pub fn declared(&self) -> Type {
        self.declared
    }

    /// Converts `raw` to the declared type.
    ///
    /// Fails with a type conversion error when `raw` is not of the converter's
    /// raw type, when the conversion function fails, or when the function
    /// returns a value of some other type.
    pub fn convert(&self, raw: RawValue) -> Result<Value> {
        if raw.ty() != self.raw {
            return Err(Error::type_conversion(raw.into_value(), self.declared.name()));
        }

        let value = (self.convert)(raw)?;

        if value.is_null() || !value.is_a(&self.declared) {
            return Err(Error::type_conversion(value, self.declared.name()));
        }

        Ok(value)
    }
}

impl fmt::Debug for TypeConverter {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt.debug_struct("TypeConverter")
            .field("raw", &self.raw)
            .field("declared", &self.declared)
            .finish()
    }
}
