/// The declared type of a mapped attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Type {
    /// Boolean value
    Bool,

    /// Signed 32-bit integer
    I32,

    /// Signed 64-bit integer
    I64,

    /// Unsigned 64-bit integer
    U64,

    /// String type
    String,

    /// Raw bytes
    Bytes,

    /// 128-bit universally unique identifier
    Uuid,

    /// Instant-like: a point on the UTC timeline
    Timestamp,

    /// Calendar-like: an instant with an attached time zone
    Zoned,

    /// The type of an absent value
    Null,
}

impl Type {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Bool => "Bool",
            Self::I32 => "I32",
            Self::I64 => "I64",
            Self::U64 => "U64",
            Self::String => "String",
            Self::Bytes => "Bytes",
            Self::Uuid => "Uuid",
            Self::Timestamp => "Timestamp",
            Self::Zoned => "Zoned",
            Self::Null => "Null",
        }
    }
}
