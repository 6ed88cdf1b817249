//! Strongly-typed identifiers used across the domain.

use core::str::FromStr;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{DomainError, DomainResult};

/// Identifier of an entity.
///
/// Always a non-nil UUID: every constructor that accepts outside input rejects
/// `Uuid::nil()`, including deserialization.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "Uuid", into = "Uuid")]
pub struct EntityId(Uuid);

impl EntityId {
    /// Create a new identifier.
    ///
    /// Uses UUIDv7 (time-ordered). Prefer passing IDs explicitly in tests
    /// for determinism.
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    pub fn try_from_uuid(uuid: Uuid) -> DomainResult<Self> {
        if uuid.is_nil() {
            return Err(DomainError::invalid_id("EntityId: nil uuid"));
        }
        Ok(Self(uuid))
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for EntityId {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Display for EntityId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl TryFrom<Uuid> for EntityId {
    type Error = DomainError;

    fn try_from(value: Uuid) -> Result<Self, Self::Error> {
        Self::try_from_uuid(value)
    }
}

impl From<EntityId> for Uuid {
    fn from(value: EntityId) -> Self {
        value.0
    }
}

impl FromStr for EntityId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let uuid =
            Uuid::from_str(s).map_err(|e| DomainError::invalid_id(format!("EntityId: {e}")))?;
        Self::try_from_uuid(uuid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_ids_are_never_nil_and_distinct() {
        let a = EntityId::new();
        let b = EntityId::new();
        assert!(!a.as_uuid().is_nil());
        assert_ne!(a, b);
    }

    #[test]
    fn nil_uuid_is_rejected() {
        let err = EntityId::try_from_uuid(Uuid::nil()).unwrap_err();
        assert!(matches!(err, DomainError::InvalidId(_)));

        let err = EntityId::try_from(Uuid::nil()).unwrap_err();
        assert!(matches!(err, DomainError::InvalidId(_)));
    }

    #[test]
    fn parse_rejects_garbage_and_nil() {
        match "not-a-uuid".parse::<EntityId>() {
            Err(DomainError::InvalidId(msg)) => assert!(msg.starts_with("EntityId:")),
            other => panic!("Expected InvalidId, got {other:?}"),
        }

        let nil = "00000000-0000-0000-0000-000000000000".parse::<EntityId>();
        assert!(nil.is_err());
    }

    #[test]
    fn display_matches_uuid_and_parses_back() {
        let id = EntityId::try_from_uuid(Uuid::from_u128(42)).unwrap();
        let text = id.to_string();
        assert_eq!(text, "00000000-0000-0000-0000-00000000002a");
        assert_eq!(text.parse::<EntityId>().unwrap(), id);
    }

    #[test]
    fn serializes_transparently_and_rejects_nil_on_deserialize() {
        let id = EntityId::try_from_uuid(Uuid::from_u128(7)).unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"00000000-0000-0000-0000-000000000007\"");

        let back: EntityId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);

        let nil = serde_json::from_str::<EntityId>("\"00000000-0000-0000-0000-000000000000\"");
        assert!(nil.is_err());
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: any non-nil uuid is accepted and kept verbatim.
            #[test]
            fn non_nil_uuid_is_preserved(raw in 1u128..=u128::MAX) {
                let uuid = Uuid::from_u128(raw);
                let id = EntityId::try_from_uuid(uuid).unwrap();
                prop_assert_eq!(*id.as_uuid(), uuid);
                prop_assert_eq!(Uuid::from(id), uuid);
            }
        }
    }
}
