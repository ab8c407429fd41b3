/// How an attribute takes part in identifying an item.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyRole {
    /// Ordinary attribute
    #[default]
    None,

    /// Hash key of the table
    PartitionKey,

    /// Range key of the table
    SortKey,

    /// Key of a secondary index
    IndexKey,
}

impl KeyRole {
    /// Returns `true` for any key role.
    pub fn is_key(self) -> bool {
        !matches!(self, Self::None)
    }

    /// Returns `true` if the attribute is part of the table's primary key.
    pub fn is_primary_key(self) -> bool {
        matches!(self, Self::PartitionKey | Self::SortKey)
    }
}
