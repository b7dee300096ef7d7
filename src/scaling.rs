//! Effect scaling module.
//!
//! An `EffectScaling` is one bonus term: a scale factor, optionally
//! multiplied by one of the character's base attributes.

use crate::character::Character;
use std::fmt;
use std::str::FromStr;

/// Base attribute a bonus term scales with.
///
/// `Null` means the term does not scale and its raw scale value is used.
#[derive(Debug, Clone, Copy, Default, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum ScalingStat {
    #[default]
    Null,
    Strength,
    Dexterity,
    Intelligence,
    Perception,
}

const SCALING_STAT_NAMES: [(&str, ScalingStat); 4] = [
    ("str", ScalingStat::Strength),
    ("dex", ScalingStat::Dexterity),
    ("int", ScalingStat::Intelligence),
    ("per", ScalingStat::Perception),
];

const SCALING_STAT_LABELS: [(ScalingStat, &str); 4] = [
    (ScalingStat::Strength, "strength"),
    (ScalingStat::Dexterity, "dexterity"),
    (ScalingStat::Intelligence, "intelligence"),
    (ScalingStat::Perception, "perception"),
];

impl ScalingStat {
    /// Map a configuration string to an attribute, `Null` if unrecognized.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use zzbonus::ScalingStat;
    ///
    /// assert_eq!(ScalingStat::from_config_str("dex"), ScalingStat::Dexterity);
    /// assert_eq!(ScalingStat::from_config_str("luck"), ScalingStat::Null);
    /// ```
    pub fn from_config_str(s: &str) -> Self {
        SCALING_STAT_NAMES
            .iter()
            .find(|(name, _)| *name == s)
            .map(|(_, stat)| *stat)
            .unwrap_or(ScalingStat::Null)
    }

    /// The configuration name, or `"null"`.
    pub fn config_name(self) -> &'static str {
        SCALING_STAT_NAMES
            .iter()
            .find(|(_, stat)| *stat == self)
            .map(|(name, _)| *name)
            .unwrap_or("null")
    }

    /// The untranslated attribute name, empty for `Null`.
    pub fn label(self) -> &'static str {
        SCALING_STAT_LABELS
            .iter()
            .find(|(stat, _)| *stat == self)
            .map(|(_, label)| *label)
            .unwrap_or("")
    }

    pub fn is_null(self) -> bool {
        self == ScalingStat::Null
    }
}

impl FromStr for ScalingStat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match ScalingStat::from_config_str(s) {
            ScalingStat::Null => Err(format!("unknown scaling stat: {}", s)),
            stat => Ok(stat),
        }
    }
}

impl fmt::Display for ScalingStat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.config_name())
    }
}

/// A single bonus term.
///
/// # Examples
///
/// ```rust
/// use zzbonus::{BaseAttributes, EffectScaling, ScalingStat};
///
/// let hero = BaseAttributes::new(10, 12, 8, 9);
///
/// let flat = EffectScaling::new(ScalingStat::Null, 10.0);
/// assert_eq!(flat.evaluate(&hero), 10.0);
///
/// let scaled = EffectScaling::new(ScalingStat::Dexterity, 0.5);
/// assert_eq!(scaled.evaluate(&hero), 6.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EffectScaling {
    /// Attribute the term scales with.
    pub stat: ScalingStat,
    /// Raw value, or factor applied to the attribute.
    pub scale: f64,
}

impl EffectScaling {
    pub fn new(stat: ScalingStat, scale: f64) -> Self {
        Self { stat, scale }
    }

    /// Evaluate the term against a character.
    pub fn evaluate<C: Character + ?Sized>(&self, character: &C) -> f64 {
        match character.attribute(self.stat) {
            Some(value) => self.scale * f64::from(value),
            None => self.scale,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::BaseAttributes;

    #[test]
    fn test_scaling_names() {
        for (name, stat) in SCALING_STAT_NAMES {
            assert_eq!(ScalingStat::from_config_str(name), stat);
            assert_eq!(stat.to_string(), name);
            assert!(!stat.label().is_empty());
        }
        assert_eq!(ScalingStat::Null.to_string(), "null");
        assert!("STR".parse::<ScalingStat>().is_err());
    }

    #[test]
    fn test_evaluate_each_attribute() {
        let c = BaseAttributes::new(8, 10, 12, 14);
        assert_eq!(EffectScaling::new(ScalingStat::Strength, 0.5).evaluate(&c), 4.0);
        assert_eq!(EffectScaling::new(ScalingStat::Dexterity, 0.5).evaluate(&c), 5.0);
        assert_eq!(EffectScaling::new(ScalingStat::Intelligence, 0.5).evaluate(&c), 6.0);
        assert_eq!(EffectScaling::new(ScalingStat::Perception, 0.5).evaluate(&c), 7.0);
    }

    #[test]
    fn test_null_ignores_character() {
        let term = EffectScaling::new(ScalingStat::Null, -2.5);
        assert_eq!(term.evaluate(&BaseAttributes::new(1, 1, 1, 1)), -2.5);
        assert_eq!(term.evaluate(&BaseAttributes::new(20, 20, 20, 20)), -2.5);
    }

    #[test]
    fn test_evaluate_through_trait_object() {
        let c = BaseAttributes::new(10, 0, 0, 0);
        let dyn_c: &dyn Character = &c;
        assert_eq!(EffectScaling::new(ScalingStat::Strength, 1.5).evaluate(dyn_c), 15.0);
    }
}
