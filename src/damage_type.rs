//! Damage type identifier module.
//!
//! Provides the `DamageTypeId` type, an interned string identity for
//! damage categories, and the `DamageTypeNames` lookup used when
//! rendering descriptions. The registry of damage types itself lives
//! outside this crate.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Identity of a damage category such as `"bash"` or `"heat"`.
///
/// Two ids are the same damage type exactly when their identifiers match.
/// The empty identifier is the null damage type: keys of stats that are not
/// damage-related always carry it, and a damage-related bonus is rejected
/// at load time if it would.
///
/// Ids order by identifier, so the null damage type sorts before all
/// others. In configuration they appear as plain strings.
///
/// # Examples
///
/// ```rust
/// use zzbonus::DamageTypeId;
///
/// let heat = DamageTypeId::from_str("heat");
/// assert_eq!(heat, DamageTypeId::from("heat".to_string()));
/// assert!(!heat.is_null());
/// assert!(DamageTypeId::null() < heat);
/// ```
#[derive(Debug, Clone, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct DamageTypeId(Arc<str>);

impl DamageTypeId {
    /// Identify the damage type named `id` in the host's registry.
    pub fn from_str(id: &str) -> Self {
        Self(Arc::from(id))
    }

    /// The null damage type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use zzbonus::DamageTypeId;
    ///
    /// assert_eq!(DamageTypeId::null(), DamageTypeId::default());
    /// assert_eq!(DamageTypeId::null().as_str(), "");
    /// ```
    pub fn null() -> Self {
        Self::from_str("")
    }

    /// True for the null damage type only.
    pub fn is_null(&self) -> bool {
        self.0.is_empty()
    }

    /// Registry identifier, empty for the null damage type.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for DamageTypeId {
    fn default() -> Self {
        Self::null()
    }
}

impl From<&str> for DamageTypeId {
    fn from(id: &str) -> Self {
        Self::from_str(id)
    }
}

impl From<String> for DamageTypeId {
    fn from(id: String) -> Self {
        Self(Arc::from(id))
    }
}

impl From<DamageTypeId> for String {
    fn from(id: DamageTypeId) -> Self {
        id.as_str().to_owned()
    }
}

impl fmt::Display for DamageTypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Display names for damage types.
///
/// Implemented by whatever owns the damage type registry. Names are
/// expected to be already localized.
pub trait DamageTypeNames {
    /// Get the display name for a non-null damage type.
    fn name(&self, id: &DamageTypeId) -> String;
}

/// Uses the identifier itself as the display name.
///
/// This is what `BonusContainer::get_description` uses when no registry
/// is supplied.
#[derive(Debug, Clone, Copy, Default)]
pub struct RawDamageTypeNames;

impl DamageTypeNames for RawDamageTypeNames {
    fn name(&self, id: &DamageTypeId) -> String {
        id.as_str().to_string()
    }
}

/// A map-based damage type name table.
///
/// Falls back to the identifier for damage types not in the table.
///
/// # Examples
///
/// ```rust
/// use zzbonus::damage_type::{DamageTypeNames, DamageTypeTable};
/// use zzbonus::DamageTypeId;
///
/// let mut table = DamageTypeTable::empty();
/// table.insert(DamageTypeId::from_str("bash"), "bash");
/// table.insert(DamageTypeId::from_str("heat"), "fire");
///
/// assert_eq!(table.name(&DamageTypeId::from_str("heat")), "fire");
/// assert_eq!(table.name(&DamageTypeId::from_str("cold")), "cold");
/// ```
#[derive(Debug, Clone, Default)]
pub struct DamageTypeTable {
    names: HashMap<DamageTypeId, String>,
}

impl DamageTypeTable {
    /// Wrap display names already collected from a registry.
    pub fn new(names: HashMap<DamageTypeId, String>) -> Self {
        Self { names }
    }

    /// A table that names every damage type by its identifier.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Set the display name of `id`, replacing any earlier one.
    pub fn insert(&mut self, id: DamageTypeId, name: impl Into<String>) {
        self.names.insert(id, name.into());
    }
}

impl DamageTypeNames for DamageTypeTable {
    fn name(&self, id: &DamageTypeId) -> String {
        self.names
            .get(id)
            .cloned()
            .unwrap_or_else(|| id.as_str().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_damage_type_creation() {
        let id1 = DamageTypeId::from_str("cut");
        let id2 = DamageTypeId::from_str("cut");
        assert_eq!(id1, id2);
        assert_eq!(id1.as_str(), "cut");
    }

    #[test]
    fn test_null_sorts_first() {
        let null = DamageTypeId::null();
        let acid = DamageTypeId::from_str("acid");
        assert!(null < acid);
    }

    #[test]
    fn test_deserialize() {
        let id: DamageTypeId = serde_json::from_str("\"stab\"").unwrap();
        assert_eq!(id, DamageTypeId::from_str("stab"));

        let empty: DamageTypeId = serde_json::from_str("\"\"").unwrap();
        assert!(empty.is_null());
    }

    #[test]
    fn test_serialize_as_plain_string() {
        let json = serde_json::to_string(&DamageTypeId::from_str("acid")).unwrap();
        assert_eq!(json, "\"acid\"");
    }

    #[test]
    fn test_raw_names() {
        let names = RawDamageTypeNames;
        assert_eq!(names.name(&DamageTypeId::from_str("electric")), "electric");
    }
}
