use super::KeyRole;
use crate::generate::{Generate, GenerateStrategy};
use crate::value::{Type, Value};
use crate::Result;
use std::sync::Arc;

/// One attribute of a record type.
///
/// Attributes are created by [`Builder`](super::Builder) and owned by their
/// [`RecordSchema`](super::RecordSchema). They do not change once the schema
/// is built.
#[derive(Debug, Clone)]
pub struct MappedAttribute {
    /// Name of the record type the attribute belongs to
    pub record: Arc<str>,

    /// Position of the attribute within the record
    pub index: usize,

    /// The attribute name, unique within the record type
    pub name: String,

    /// The declared type
    pub ty: Type,

    /// True if the attribute is part of the table or an index key
    pub key_role: KeyRole,

    /// Set if the attribute's value is generated
    pub generator: Option<Arc<dyn Generate>>,
}

impl MappedAttribute {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn ty(&self) -> Type {
        self.ty
    }

    pub fn key_role(&self) -> KeyRole {
        self.key_role
    }

    pub fn is_key(&self) -> bool {
        self.key_role.is_key()
    }

    pub fn generator(&self) -> Option<&dyn Generate> {
        self.generator.as_deref()
    }

    pub fn is_generated(&self) -> bool {
        self.generator.is_some()
    }

    /// The bound generator's strategy, if any.
    pub fn strategy(&self) -> Option<GenerateStrategy> {
        self.generator().map(|generator| generator.strategy())
    }

    /// Returns `<record>.<attribute>`.
    pub fn full_name(&self) -> String {
        format!("{}.{}", self.record, self.name)
    }

    pub(crate) fn check_value(&self, value: &Value) -> Result<()> {
        if value.is_null() || !value.is_a(&self.ty) {
            return Err(crate::Error::type_conversion(value.clone(), self.ty.name())
                .context(crate::err!("generated value for `{}`", self.full_name())));
        }
        Ok(())
    }
}
