//! Attribute types and values as seen by the generation layer.

mod record;
pub use record::ValueRecord;

mod ty;
pub use ty::Type;

use crate::Result;

#[derive(Debug, Default, Clone, PartialEq)]
pub enum Value {
    /// Boolean value
    Bool(bool),

    /// Signed 32-bit integer
    I32(i32),

    /// Signed 64-bit integer
    I64(i64),

    /// Unsigned 64-bit integer
    U64(u64),

    /// String value
    String(String),

    /// Raw bytes
    Bytes(Vec<u8>),

    /// 128-bit universally unique identifier
    Uuid(uuid::Uuid),

    /// An instant in time
    Timestamp(jiff::Timestamp),

    /// An instant in time attached to a time zone
    Zoned(jiff::Zoned),

    /// Absent or unset value
    #[default]
    Null,
}

impl Value {
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns the type of the value. `Null` infers to [`Type::Null`].
    pub fn infer_ty(&self) -> Type {
        match self {
            Self::Bool(_) => Type::Bool,
            Self::I32(_) => Type::I32,
            Self::I64(_) => Type::I64,
            Self::U64(_) => Type::U64,
            Self::String(_) => Type::String,
            Self::Bytes(_) => Type::Bytes,
            Self::Uuid(_) => Type::Uuid,
            Self::Timestamp(_) => Type::Timestamp,
            Self::Zoned(_) => Type::Zoned,
            Self::Null => Type::Null,
        }
    }

    /// Returns `true` if the value can be stored in an attribute of type `ty`.
    /// `Null` fits every type.
    pub fn is_a(&self, ty: &Type) -> bool {
        self.is_null() || self.infer_ty() == *ty
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match *self {
            Self::I64(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_timestamp(&self) -> Option<jiff::Timestamp> {
        match self {
            Self::Timestamp(v) => Some(*v),
            Self::Zoned(v) => Some(v.timestamp()),
            _ => None,
        }
    }

    pub fn to_string(self) -> Result<String> {
        match self {
            Self::String(v) => Ok(v),
            value => Err(crate::Error::type_conversion(value, "String")),
        }
    }

    pub fn to_option_string(self) -> Result<Option<String>> {
        match self {
            Self::Null => Ok(None),
            value => value.to_string().map(Some),
        }
    }

    pub fn to_i64(self) -> Result<i64> {
        match self {
            Self::I64(v) => Ok(v),
            value => Err(crate::Error::type_conversion(value, "I64")),
        }
    }

    pub fn to_option_i64(self) -> Result<Option<i64>> {
        match self {
            Self::Null => Ok(None),
            value => value.to_i64().map(Some),
        }
    }
}

impl From<bool> for Value {
    fn from(src: bool) -> Self {
        Self::Bool(src)
    }
}

impl From<i32> for Value {
    fn from(src: i32) -> Self {
        Self::I32(src)
    }
}

impl From<i64> for Value {
    fn from(src: i64) -> Self {
        Self::I64(src)
    }
}

impl From<u64> for Value {
    fn from(src: u64) -> Self {
        Self::U64(src)
    }
}

impl From<String> for Value {
    fn from(src: String) -> Self {
        Self::String(src)
    }
}

impl From<&String> for Value {
    fn from(src: &String) -> Self {
        Self::String(src.clone())
    }
}

impl From<&str> for Value {
    fn from(src: &str) -> Self {
        Self::String(src.to_string())
    }
}

impl From<Vec<u8>> for Value {
    fn from(src: Vec<u8>) -> Self {
        Self::Bytes(src)
    }
}

impl From<uuid::Uuid> for Value {
    fn from(src: uuid::Uuid) -> Self {
        Self::Uuid(src)
    }
}

impl From<jiff::Timestamp> for Value {
    fn from(src: jiff::Timestamp) -> Self {
        Self::Timestamp(src)
    }
}

impl From<jiff::Zoned> for Value {
    fn from(src: jiff::Zoned) -> Self {
        Self::Zoned(src)
    }
}

impl<T> From<Option<T>> for Value
where
    Self: From<T>,
{
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::from(value),
            None => Self::Null,
        }
    }
}
