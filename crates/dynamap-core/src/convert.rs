//! Conversion from generated raw values to declared attribute types.
//!
//! Generators produce a [`RawValue`] (a UUID, an instant, or an epoch
//! number). A [`TypeConverter`], looked up once per attribute from a
//! [`ConverterRegistry`], adapts that raw value to the attribute's declared
//! [`Type`](crate::value::Type).
//!
//! A process-wide registry is available through [`global`]. Applications that
//! need extra converters build a registry at startup and hand it to
//! [`install`] before any schema is built.

mod converter;
pub use converter::{ConvertFn, TypeConverter};

mod raw;
pub use raw::{RawType, RawValue};

mod registry;
pub use registry::ConverterRegistry;

mod standard;

use crate::{Error, Result};
use std::sync::OnceLock;

static GLOBAL: OnceLock<ConverterRegistry> = OnceLock::new();

/// Installs `registry` as the process-wide converter registry.
///
/// Fails if a registry was already installed, or if [`global`] was called
/// first (which installs the standard registry).
pub fn install(registry: ConverterRegistry) -> Result<()> {
    let len = registry.len();
    GLOBAL
        .set(registry)
        .map_err(|_| Error::registry_installed())?;

    tracing::debug!(converters = len, "installed type converter registry");
    Ok(())
}

/// Returns the process-wide converter registry, installing
/// [`ConverterRegistry::standard`] on first use if none was installed.
pub fn global() -> &'static ConverterRegistry {
    GLOBAL.get_or_init(|| {
        tracing::debug!("installing standard type converter registry");
        ConverterRegistry::standard()
    })
}
