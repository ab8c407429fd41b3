use super::{verify, AutoConfig, KeyRole, MappedAttribute, RecordSchema};
use crate::convert::{self, ConverterRegistry};
use crate::value::Type;
use crate::Result;
use indexmap::IndexMap;
use std::sync::Arc;

/// Collects the attributes of a record type and builds its
/// [`RecordSchema`].
///
/// ```
/// use dynamap_core::generate::GenerateStrategy;
/// use dynamap_core::schema::{AutoConfig, Builder};
/// use dynamap_core::value::Type;
///
/// let mut builder = Builder::new("Order");
/// builder
///     .attribute("id", Type::String)
///     .partition_key()
///     .auto(AutoConfig::Key);
/// builder
///     .attribute("created_at", Type::Timestamp)
///     .auto(AutoConfig::Timestamp(GenerateStrategy::Create));
/// builder.attribute("note", Type::String);
///
/// let schema = builder.build().unwrap();
/// assert_eq!(schema.attributes().len(), 3);
/// ```
#[derive(Debug)]
pub struct Builder {
    name: String,
    attributes: Vec<AttributeBuilder>,
}

/// A single attribute being declared on a [`Builder`].
#[derive(Debug)]
pub struct AttributeBuilder {
    name: String,
    ty: Type,
    key_role: KeyRole,
    auto: Option<AutoConfig>,
}

impl Builder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: vec![],
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declares an attribute. Attributes keep their declaration order.
    pub fn attribute(&mut self, name: impl Into<String>, ty: Type) -> &mut AttributeBuilder {
        self.attributes.push(AttributeBuilder {
            name: name.into(),
            ty,
            key_role: KeyRole::None,
            auto: None,
        });
        let last = self.attributes.len() - 1;
        &mut self.attributes[last]
    }

    /// Builds the schema, resolving converters from the process-wide
    /// registry.
    pub fn build(&self) -> Result<RecordSchema> {
        self.build_with(convert::global())
    }

    /// Builds the schema, resolving converters from `registry`.
    ///
    /// Every generator is constructed here, so a missing converter fails the
    /// build rather than a later write.
    pub fn build_with(&self, registry: &ConverterRegistry) -> Result<RecordSchema> {
        verify::record_name(&self.name)?;

        let record: Arc<str> = Arc::from(self.name.as_str());
        let mut attributes = Vec::with_capacity(self.attributes.len());
        let mut lookup = IndexMap::with_capacity(self.attributes.len());

        for (index, def) in self.attributes.iter().enumerate() {
            verify::attribute_name(&record, &def.name)?;

            if lookup.insert(def.name.clone(), index).is_some() {
                return Err(crate::Error::invalid_schema(format!(
                    "duplicate attribute `{}` in `{}`",
                    def.name, record
                )));
            }

            let generator = match &def.auto {
                Some(auto) => Some(auto.build(def.ty, registry).map_err(|err| {
                    err.context(crate::err!("attribute `{}.{}`", record, def.name))
                })?),
                None => None,
            };

            attributes.push(MappedAttribute {
                record: record.clone(),
                index,
                name: def.name.clone(),
                ty: def.ty,
                key_role: def.key_role,
                generator,
            });
        }

        let partition_key = verify::keys(&record, &attributes)?;

        tracing::debug!(
            record = %record,
            attributes = attributes.len(),
            generated = attributes.iter().filter(|attr| attr.is_generated()).count(),
            "built record schema"
        );

        Ok(RecordSchema {
            name: record,
            attributes,
            lookup,
            partition_key,
        })
    }
}

impl AttributeBuilder {
    pub fn key_role(&mut self, key_role: KeyRole) -> &mut Self {
        self.key_role = key_role;
        self
    }

    pub fn partition_key(&mut self) -> &mut Self {
        self.key_role(KeyRole::PartitionKey)
    }

    pub fn sort_key(&mut self) -> &mut Self {
        self.key_role(KeyRole::SortKey)
    }

    pub fn index_key(&mut self) -> &mut Self {
        self.key_role(KeyRole::IndexKey)
    }

    /// Binds a generator. A later call replaces an earlier one.
    pub fn auto(&mut self, auto: AutoConfig) -> &mut Self {
        self.auto = Some(auto);
        self
    }
}
