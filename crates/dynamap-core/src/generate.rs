//! Attribute value generators.

mod identifier;
pub use identifier::IdentifierGenerator;

mod strategy;
pub use strategy::GenerateStrategy;

mod timestamp;
pub use timestamp::TimestampGenerator;

use crate::value::Value;
use crate::Result;
use std::fmt;

/// Produces a value for an attribute without caller input.
///
/// A generator is bound to one attribute's declared type when the record
/// schema is built and is shared by every write to that record type, possibly
/// from many threads at once. Implementations must not keep mutable state.
///
/// Application-defined generators implement this trait and are bound with
/// [`AutoConfig::Custom`](crate::schema::AutoConfig::Custom).
pub trait Generate: fmt::Debug + Send + Sync + 'static {
    /// When the generator fires relative to the kind of write.
    fn strategy(&self) -> GenerateStrategy;

    /// Returns a new value of the attribute's declared type.
    ///
    /// `current` is the value held by the record before the write; it may be
    /// [`Value::Null`].
    fn generate(&self, current: &Value) -> Result<Value>;
}
