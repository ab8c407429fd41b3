use super::{KeyRole, MappedAttribute};
use crate::{Error, Result};

pub(super) fn record_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(Error::invalid_schema("record name must not be empty"));
    }
    Ok(())
}

pub(super) fn attribute_name(record: &str, name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(Error::invalid_schema(format!(
            "attribute name in `{record}` must not be empty"
        )));
    }
    Ok(())
}

/// Checks key roles: exactly one partition key, at most one sort key, and no
/// primary key attribute regenerated on every write. Returns the position of
/// the partition key.
pub(super) fn keys(record: &str, attributes: &[MappedAttribute]) -> Result<usize> {
    let positions = |role: KeyRole| -> Vec<usize> {
        attributes
            .iter()
            .filter(|attr| attr.key_role == role)
            .map(|attr| attr.index)
            .collect()
    };

    let partition_keys = positions(KeyRole::PartitionKey);
    let partition_key = match partition_keys[..] {
        [index] => index,
        [] => {
            return Err(Error::invalid_schema(format!(
                "`{record}` has no partition key"
            )))
        }
        ref many => {
            return Err(Error::invalid_schema(format!(
                "`{record}` has {} partition keys; expected one",
                many.len()
            )))
        }
    };

    let sort_keys = positions(KeyRole::SortKey).len();
    if sort_keys > 1 {
        return Err(Error::invalid_schema(format!(
            "`{record}` has {sort_keys} sort keys; expected at most one"
        )));
    }

    // Regenerating a primary key on update would address a different item.
    for attr in attributes {
        if attr.key_role.is_primary_key() && attr.strategy().is_some_and(|s| s.is_always()) {
            return Err(Error::invalid_schema(format!(
                "key attribute `{}` cannot use an ALWAYS generator",
                attr.full_name()
            )));
        }
    }

    Ok(partition_key)
}
