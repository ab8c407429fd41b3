use crate::value::Value;

/// The representation a generator produces before type adaptation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RawType {
    /// A random 128-bit identifier
    Uuid,

    /// An instant on the UTC timeline
    Timestamp,

    /// Milliseconds since the Unix epoch. No built-in generator draws this;
    /// it is the source type for application-defined generators.
    EpochMillis,
}

/// A generated value before it is converted to the declared type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RawValue {
    Uuid(uuid::Uuid),
    Timestamp(jiff::Timestamp),
    EpochMillis(i64),
}

impl RawValue {
    pub fn ty(&self) -> RawType {
        match self {
            Self::Uuid(_) => RawType::Uuid,
            Self::Timestamp(_) => RawType::Timestamp,
            Self::EpochMillis(_) => RawType::EpochMillis,
        }
    }

    /// Returns the raw value as an attribute value without any adaptation.
    pub fn into_value(self) -> Value {
        match self {
            Self::Uuid(v) => Value::Uuid(v),
            Self::Timestamp(v) => Value::Timestamp(v),
            Self::EpochMillis(v) => Value::I64(v),
        }
    }
}
