use super::{Builder, KeyRole, MappedAttribute};
use crate::value::ValueRecord;
use crate::{decide, Result, WriteKind};
use indexmap::IndexMap;
use std::sync::Arc;

/// The immutable schema of one record type.
#[derive(Debug)]
pub struct RecordSchema {
    pub(super) name: Arc<str>,
    pub(super) attributes: Vec<MappedAttribute>,

    /// Attribute name to position
    pub(super) lookup: IndexMap<String, usize>,

    /// Position of the partition key
    pub(super) partition_key: usize,
}

impl RecordSchema {
    pub fn builder(name: impl Into<String>) -> Builder {
        Builder::new(name)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Attributes in declaration order.
    pub fn attributes(&self) -> &[MappedAttribute] {
        &self.attributes
    }

    pub fn attribute(&self, name: &str) -> Option<&MappedAttribute> {
        self.lookup.get(name).map(|index| &self.attributes[*index])
    }

    pub fn partition_key(&self) -> &MappedAttribute {
        &self.attributes[self.partition_key]
    }

    pub fn sort_key(&self) -> Option<&MappedAttribute> {
        self.attributes
            .iter()
            .find(|attr| attr.key_role == KeyRole::SortKey)
    }

    /// Attributes bound to a generator.
    pub fn generated(&self) -> impl Iterator<Item = &MappedAttribute> + '_ {
        self.attributes.iter().filter(|attr| attr.is_generated())
    }

    /// Runs generation for every attribute of `record` ahead of a write of
    /// `kind`.
    ///
    /// Key checks run for all attributes before anything is generated, and
    /// generated values are only written back once every attribute succeeded.
    /// On error `record` is left as it was.
    pub fn apply(&self, record: &mut ValueRecord, kind: WriteKind) -> Result<()> {
        if record.len() != self.attributes.len() {
            crate::bail!(
                "record for `{}` has {} values; schema has {} attributes",
                self.name,
                record.len(),
                self.attributes.len()
            );
        }

        let mut pending = Vec::with_capacity(self.attributes.len());

        for attr in &self.attributes {
            if decide::should_generate(attr, &record[attr.index], kind)? {
                pending.push(attr);
            }
        }

        let mut generated = Vec::with_capacity(pending.len());

        for attr in pending {
            generated.push((attr.index, decide::generate(attr, &record[attr.index])?));
        }

        for (index, value) in generated {
            record[index] = value;
        }

        Ok(())
    }
}
