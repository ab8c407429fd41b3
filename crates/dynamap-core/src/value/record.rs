use super::Value;
use std::ops;

/// A positional record of attribute values.
///
/// Values are stored in the same order as the attributes of the record schema
/// they were produced from.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ValueRecord {
    pub fields: Vec<Value>,
}

impl ValueRecord {
    pub fn from_vec(fields: Vec<Value>) -> Self {
        Self { fields }
    }

    /// Creates a record of `len` null values.
    pub fn nulls(len: usize) -> Self {
        Self {
            fields: vec![Value::Null; len],
        }
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = &Value> + '_ {
        self.fields.iter()
    }
}

impl ops::Index<usize> for ValueRecord {
    type Output = Value;

    fn index(&self, index: usize) -> &Value {
        &self.fields[index]
    }
}

impl ops::IndexMut<usize> for ValueRecord {
    fn index_mut(&mut self, index: usize) -> &mut Value {
        &mut self.fields[index]
    }
}

impl From<Vec<Value>> for ValueRecord {
    fn from(fields: Vec<Value>) -> Self {
        Self::from_vec(fields)
    }
}

impl IntoIterator for ValueRecord {
    type Item = Value;
    type IntoIter = std::vec::IntoIter<Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.into_iter()
    }
}
