use crate::schema::MappedAttribute;
use crate::value::Value;
use crate::{Error, Result, WriteKind};

/// Decides whether `attribute` gets a generated value on a write of `kind`.
///
/// | strategy | creating write   | updating write       |
/// |----------|------------------|----------------------|
/// | `Create` | generate         | generate if unset    |
/// | `Always` | generate         | generate             |
///
/// Attributes without a generator are never generated. A key attribute
/// without a generator and without a value on a creating write is a
/// missing-key error.
pub fn should_generate(
    attribute: &MappedAttribute,
    current: &Value,
    kind: WriteKind,
) -> Result<bool> {
    let Some(generator) = attribute.generator() else {
        if attribute.is_key() && current.is_null() && kind.is_creation() {
            return Err(Error::missing_key(&*attribute.record, &attribute.name));
        }
        return Ok(false);
    };

    let generate = generator.strategy().is_always() || kind.is_creation() || current.is_null();

    tracing::trace!(
        attribute = %attribute.full_name(),
        strategy = ?generator.strategy(),
        ?kind,
        unset = current.is_null(),
        generate,
        "generation decision"
    );

    Ok(generate)
}

/// Returns the value to write for `attribute`: a freshly generated value when
/// [`should_generate`] says so, otherwise `current` unchanged.
pub fn apply(attribute: &MappedAttribute, current: Value, kind: WriteKind) -> Result<Value> {
    if !should_generate(attribute, &current, kind)? {
        return Ok(current);
    }

    generate(attribute, &current)
}

pub(crate) fn generate(attribute: &MappedAttribute, current: &Value) -> Result<Value> {
    let Some(generator) = attribute.generator() else {
        return Ok(current.clone());
    };

    let value = generator
        .generate(current)
        .map_err(|err| err.context(crate::err!("generating `{}`", attribute.full_name())))?;

    attribute.check_value(&value)?;
    Ok(value)
}
