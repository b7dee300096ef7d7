//! Affected stats and bonus keys.
//!
//! An `AffectedStat` names a game quantity a bonus can modify. An
//! `AffectedType` pairs it with a damage type, which only matters for
//! damage, armor and armor penetration.

use crate::damage_type::DamageTypeId;
use std::fmt;
use std::str::FromStr;

/// A game quantity that bonuses can modify.
///
/// `None` is never stored in a container. It is what unrecognized
/// configuration strings map to.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum AffectedStat {
    None,
    Hit,
    CriticalHitChance,
    Dodge,
    Block,
    BlockEffectiveness,
    Speed,
    MoveCost,
    Damage,
    Armor,
    ArmorPenetration,
    TargetArmorMultiplier,
}

/// Configuration names of every real affected stat.
const AFFECTED_STAT_NAMES: [(&str, AffectedStat); 11] = [
    ("hit", AffectedStat::Hit),
    ("crit_chance", AffectedStat::CriticalHitChance),
    ("dodge", AffectedStat::Dodge),
    ("block", AffectedStat::Block),
    ("block_effectiveness", AffectedStat::BlockEffectiveness),
    ("speed", AffectedStat::Speed),
    ("movecost", AffectedStat::MoveCost),
    ("damage", AffectedStat::Damage),
    ("armor", AffectedStat::Armor),
    ("arpen", AffectedStat::ArmorPenetration),
    ("target_armor_multiplier", AffectedStat::TargetArmorMultiplier),
];

/// Translation markers for description output.
const AFFECTED_STAT_LABELS: [(AffectedStat, &str); 11] = [
    (AffectedStat::Hit, "Accuracy"),
    (AffectedStat::CriticalHitChance, "Critical Hit Chance"),
    (AffectedStat::Dodge, "Dodge"),
    (AffectedStat::Block, "Block"),
    (AffectedStat::BlockEffectiveness, "Block effectiveness"),
    (AffectedStat::Speed, "Speed"),
    (AffectedStat::MoveCost, "Move cost"),
    (AffectedStat::Damage, "damage"),
    (AffectedStat::Armor, "Armor"),
    (AffectedStat::ArmorPenetration, "Armor penetration"),
    (AffectedStat::TargetArmorMultiplier, "Target armor multiplier"),
];

impl AffectedStat {
    /// Map a configuration string to a stat.
    ///
    /// Returns `AffectedStat::None` for anything not in the table.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use zzbonus::AffectedStat;
    ///
    /// assert_eq!(AffectedStat::from_config_str("arpen"), AffectedStat::ArmorPenetration);
    /// assert_eq!(AffectedStat::from_config_str("bogus"), AffectedStat::None);
    /// ```
    pub fn from_config_str(s: &str) -> Self {
        AFFECTED_STAT_NAMES
            .iter()
            .find(|(name, _)| *name == s)
            .map(|(_, stat)| *stat)
            .unwrap_or(AffectedStat::None)
    }

    /// The configuration name, or `"none"` for the sentinel.
    pub fn config_name(self) -> &'static str {
        AFFECTED_STAT_NAMES
            .iter()
            .find(|(_, stat)| *stat == self)
            .map(|(name, _)| *name)
            .unwrap_or("none")
    }

    /// The untranslated display label, empty for the sentinel.
    pub fn label(self) -> &'static str {
        AFFECTED_STAT_LABELS
            .iter()
            .find(|(stat, _)| *stat == self)
            .map(|(_, label)| *label)
            .unwrap_or("")
    }

    /// Whether bonuses to this stat are qualified by a damage type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use zzbonus::AffectedStat;
    ///
    /// assert!(AffectedStat::Damage.needs_damage_type());
    /// assert!(!AffectedStat::Speed.needs_damage_type());
    /// ```
    pub fn needs_damage_type(self) -> bool {
        matches!(
            self,
            AffectedStat::Damage | AffectedStat::Armor | AffectedStat::ArmorPenetration
        )
    }
}

impl FromStr for AffectedStat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match AffectedStat::from_config_str(s) {
            AffectedStat::None => Err(format!("unknown affected stat: {}", s)),
            stat => Ok(stat),
        }
    }
}

impl fmt::Display for AffectedStat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.config_name())
    }
}

/// Key of a bonus mapping: a stat plus the damage type it applies to.
///
/// The damage type is forced to the null identity for stats that do not
/// need one, so keys that differ only in an ignored damage type are equal.
/// Keys order by stat first, then by damage type.
///
/// # Examples
///
/// ```rust
/// use zzbonus::{AffectedStat, AffectedType, DamageTypeId};
///
/// let heat = DamageTypeId::from_str("heat");
///
/// // Ignored for speed
/// assert_eq!(
///     AffectedType::new(AffectedStat::Speed, &heat),
///     AffectedType::from(AffectedStat::Speed),
/// );
///
/// // Significant for damage
/// assert_ne!(
///     AffectedType::new(AffectedStat::Damage, &heat),
///     AffectedType::from(AffectedStat::Damage),
/// );
/// ```
#[derive(Debug, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct AffectedType {
    stat: AffectedStat,
    damage_type: DamageTypeId,
}

impl AffectedType {
    /// Create a key, discarding the damage type if `stat` ignores it.
    pub fn new(stat: AffectedStat, damage_type: &DamageTypeId) -> Self {
        let damage_type = if stat.needs_damage_type() {
            damage_type.clone()
        } else {
            DamageTypeId::null()
        };
        Self { stat, damage_type }
    }

    pub fn stat(&self) -> AffectedStat {
        self.stat
    }

    pub fn damage_type(&self) -> &DamageTypeId {
        &self.damage_type
    }
}

impl From<AffectedStat> for AffectedType {
    fn from(stat: AffectedStat) -> Self {
        Self {
            stat,
            damage_type: DamageTypeId::null(),
        }
    }
}
