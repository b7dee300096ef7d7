//! Character attributes module.
//!
//! Bonuses read a character's four base attributes when they scale.
//! The attribute system itself belongs to the host game; this crate only
//! needs read access through the `Character` trait.

use crate::scaling::ScalingStat;
use serde::{Deserialize, Serialize};

/// Read-only view of a character's base attributes.
///
/// Reads are assumed to always succeed and to have no side effects.
///
/// # Examples
///
/// ```rust
/// use zzbonus::{BaseAttributes, Character, ScalingStat};
///
/// let hero = BaseAttributes::new(10, 12, 8, 9);
/// assert_eq!(hero.dexterity(), 12);
/// assert_eq!(hero.attribute(ScalingStat::Perception), Some(9));
/// assert_eq!(hero.attribute(ScalingStat::Null), None);
/// ```
pub trait Character {
    fn strength(&self) -> i32;

    fn dexterity(&self) -> i32;

    fn intelligence(&self) -> i32;

    fn perception(&self) -> i32;

    /// Read the attribute named by `stat`.
    ///
    /// Returns `None` for `ScalingStat::Null`.
    fn attribute(&self, stat: ScalingStat) -> Option<i32> {
        match stat {
            ScalingStat::Strength => Some(self.strength()),
            ScalingStat::Dexterity => Some(self.dexterity()),
            ScalingStat::Intelligence => Some(self.intelligence()),
            ScalingStat::Perception => Some(self.perception()),
            ScalingStat::Null => None,
        }
    }
}

/// A plain set of base attributes.
///
/// The simplest `Character`: four fixed numbers. Handy for tests, tools
/// and previews where no full character exists.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseAttributes {
    pub strength: i32,
    pub dexterity: i32,
    pub intelligence: i32,
    pub perception: i32,
}

impl BaseAttributes {
    /// Create attributes in str/dex/int/per order.
    pub fn new(strength: i32, dexterity: i32, intelligence: i32, perception: i32) -> Self {
        Self {
            strength,
            dexterity,
            intelligence,
            perception,
        }
    }
}

impl Character for BaseAttributes {
    fn strength(&self) -> i32 {
        self.strength
    }

    fn dexterity(&self) -> i32 {
        self.dexterity
    }

    fn intelligence(&self) -> i32 {
        self.intelligence
    }

    fn perception(&self) -> i32 {
        self.perception
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attribute_dispatch() {
        let c = BaseAttributes::new(1, 2, 3, 4);
        assert_eq!(c.attribute(ScalingStat::Strength), Some(1));
        assert_eq!(c.attribute(ScalingStat::Dexterity), Some(2));
        assert_eq!(c.attribute(ScalingStat::Intelligence), Some(3));
        assert_eq!(c.attribute(ScalingStat::Perception), Some(4));
        assert_eq!(c.attribute(ScalingStat::Null), None);
    }

    #[test]
    fn test_deserialize_attributes() {
        let c: BaseAttributes = serde_json::from_str(
            r#"{"strength": 8, "dexterity": 14, "intelligence": 10, "perception": 12}"#,
        )
        .unwrap();
        assert_eq!(c, BaseAttributes::new(8, 14, 10, 12));
    }
}
