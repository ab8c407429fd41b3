use crate::schema::Builder;
use crate::value::ValueRecord;
use crate::Result;

/// An application record type that maps to store items.
///
/// Implementations describe their attributes once; the schema is built and
/// cached by a [`Catalog`](crate::Catalog).
pub trait Model: Sized + 'static {
    /// Name of the record type
    const NAME: &'static str;

    /// Declares the record's attributes, in the order used by
    /// [`to_record`](Model::to_record) and [`load`](Model::load).
    fn describe(builder: &mut Builder);

    /// Returns the record's current attribute values.
    fn to_record(&self) -> ValueRecord;

    /// Load an instance of the model, populating fields using the given record.
    fn load(record: ValueRecord) -> Result<Self>;
}
