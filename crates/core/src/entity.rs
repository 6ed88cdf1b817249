//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// Implementors hold their identifier by composition and never hand out a
/// mutable reference to it.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;

    /// Two entities are the same entity when their identifiers match,
    /// regardless of their attribute values.
    fn same_identity(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}
