use super::Error;

/// Error when a record schema definition is invalid.
///
/// This occurs when:
/// - A record or attribute name is empty
/// - Two attributes share a name
/// - A record declares no partition key
/// - A record declares more than one partition key or sort key
/// - A partition or sort key is bound to an `ALWAYS` generator
///
/// These errors are caught during schema construction.
#[derive(Debug)]
pub(super) struct InvalidSchema {
    message: Box<str>,
}

impl std::error::Error for InvalidSchema {}

impl core::fmt::Display for InvalidSchema {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid schema: {}", self.message)
    }
}

impl Error {
    /// Creates an invalid schema error.
    pub fn invalid_schema(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidSchema(InvalidSchema {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is an invalid schema error.
    pub fn is_invalid_schema(&self) -> bool {
        matches!(self.root_kind(), super::ErrorKind::InvalidSchema(_))
    }
}
