//! Record schemas: which attributes a record type has, which of them take
//! part in the key, and which are generated.

mod attribute;
pub use attribute::MappedAttribute;

mod auto;
pub use auto::AutoConfig;

mod builder;
pub use builder::{AttributeBuilder, Builder};

mod catalog;
pub use catalog::Catalog;

mod key_role;
pub use key_role::KeyRole;

mod record;
pub use record::RecordSchema;

mod verify;
