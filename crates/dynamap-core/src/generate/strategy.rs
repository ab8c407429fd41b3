/// When a generator fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GenerateStrategy {
    /// Generate on creating writes, and on updates only while the attribute is
    /// still unset.
    Create,

    /// Generate on every write.
    Always,
}

impl GenerateStrategy {
    /// Returns `true` if the strategy is [`Create`].
    ///
    /// [`Create`]: GenerateStrategy::Create
    #[must_use]
    pub fn is_create(self) -> bool {
        matches!(self, Self::Create)
    }

    /// Returns `true` if the strategy is [`Always`].
    ///
    /// [`Always`]: GenerateStrategy::Always
    #[must_use]
    pub fn is_always(self) -> bool {
        matches!(self, Self::Always)
    }
}
