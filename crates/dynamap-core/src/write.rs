/// The kind of write an attribute value is being prepared for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WriteKind {
    /// Writes a whole new item. Any existing item with the same key is
    /// replaced.
    Put,

    /// Replaces the item, clearing attributes the record does not carry.
    Clobber,

    /// Modifies an existing item. Unset attributes are removed.
    Update,

    /// Modifies an existing item. Unset attributes are left untouched.
    UpdateSkipNulls,

    /// Like [`UpdateSkipNulls`], but set-valued attributes are appended to.
    ///
    /// [`UpdateSkipNulls`]: WriteKind::UpdateSkipNulls
    AppendSet,
}

impl WriteKind {
    /// Returns `true` for writes that make no assumption that the item
    /// already exists.
    pub fn is_creation(self) -> bool {
        matches!(self, Self::Put | Self::Clobber)
    }

    /// Returns `true` for writes that modify an existing item.
    pub fn is_update(self) -> bool {
        !self.is_creation()
    }
}
