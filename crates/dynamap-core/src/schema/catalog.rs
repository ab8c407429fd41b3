use super::{Builder, RecordSchema};
use crate::convert::{self, ConverterRegistry};
use crate::{Model, Result, WriteKind};
use indexmap::IndexMap;
use std::any::TypeId;
use std::sync::{Arc, PoisonError, RwLock};

/// Record schemas keyed by record type, built on first use.
#[derive(Debug)]
pub struct Catalog {
    /// Uses the process-wide registry when unset
    registry: Option<ConverterRegistry>,

    schemas: RwLock<IndexMap<TypeId, Arc<RecordSchema>>>,
}

impl Catalog {
    /// Creates a catalog resolving converters from the process-wide registry.
    pub fn new() -> Self {
        Self {
            registry: None,
            schemas: RwLock::new(IndexMap::new()),
        }
    }

    /// Creates a catalog with its own converter registry.
    pub fn with_registry(registry: ConverterRegistry) -> Self {
        Self {
            registry: Some(registry),
            schemas: RwLock::new(IndexMap::new()),
        }
    }

    pub fn registry(&self) -> &ConverterRegistry {
        match &self.registry {
            Some(registry) => registry,
            None => convert::global(),
        }
    }

    /// Returns the schema for `M`, building it on first use.
    ///
    /// A failed build is not cached; the next call tries again.
    pub fn schema<M: Model>(&self) -> Result<Arc<RecordSchema>> {
        let id = TypeId::of::<M>();

        if let Some(schema) = self
            .schemas
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&id)
        {
            return Ok(schema.clone());
        }

        let mut builder = Builder::new(M::NAME);
        M::describe(&mut builder);
        let schema = Arc::new(builder.build_with(self.registry())?);

        // Another thread may have built it meanwhile; keep the first.
        let mut schemas = self.schemas.write().unwrap_or_else(PoisonError::into_inner);
        Ok(schemas.entry(id).or_insert(schema).clone())
    }

    /// Populates generated attributes of `model` ahead of a write of `kind`.
    ///
    /// On error `model` is left unchanged.
    pub fn prepare<M: Model>(&self, model: &mut M, kind: WriteKind) -> Result<()> {
        let schema = self.schema::<M>()?;
        let mut record = model.to_record();
        schema.apply(&mut record, kind)?;
        *model = M::load(record)?;
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.schemas
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}
