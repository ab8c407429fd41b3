use super::Error;

/// Error when a key attribute has neither a value nor a generator on a
/// creating write.
#[derive(Debug)]
pub(super) struct MissingKey {
    record: Box<str>,
    attribute: Box<str>,
}

impl std::error::Error for MissingKey {}

impl core::fmt::Display for MissingKey {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "missing key: attribute `{}` of `{}` has no value and no generator",
            self.attribute, self.record
        )
    }
}

impl Error {
    /// Creates a missing key error.
    pub fn missing_key(record: impl Into<String>, attribute: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::MissingKey(MissingKey {
            record: record.into().into(),
            attribute: attribute.into().into(),
        }))
    }

    /// Returns `true` if this error is a missing key error.
    pub fn is_missing_key(&self) -> bool {
        matches!(self.root_kind(), super::ErrorKind::MissingKey(_))
    }
}
