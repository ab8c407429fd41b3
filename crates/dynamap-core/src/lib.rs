pub mod convert;
pub use convert::{ConverterRegistry, TypeConverter};

mod decide;
pub use decide::{apply, should_generate};

mod error;
pub use error::{Error, IntoError};

pub mod generate;
pub use generate::{Generate, GenerateStrategy};

mod model;
pub use model::Model;

pub mod schema;
pub use schema::{Catalog, RecordSchema};

pub mod value;

mod write;
pub use write::WriteKind;

/// A Result type alias that uses Dynamap's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;
