//! Configuration record types.
//!
//! These mirror the JSON shape of bonus definitions as they appear inside
//! larger technique or trait records:
//!
//! ```json
//! {
//!   "flat_bonuses": [
//!     { "stat": "damage", "type": "bash", "scaling-stat": "str", "scale": 0.5 }
//!   ],
//!   "mult_bonuses": [
//!     { "stat": "movecost", "scale": 0.8 }
//!   ]
//! }
//! ```
//!
//! Only structural problems are rejected during deserialization. Stat
//! names and damage types are validated by `BonusContainer::load`.

use crate::damage_type::DamageTypeId;
use crate::scaling::{EffectScaling, ScalingStat};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A record holding both bonus lists. Either list may be absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BonusRecord {
    #[serde(default)]
    pub flat_bonuses: Vec<BonusEntry>,
    #[serde(default)]
    pub mult_bonuses: Vec<BonusEntry>,
}

/// One bonus rule.
///
/// `stat`, `type` and `scaling-stat` are kept as raw JSON values so that a
/// field of the wrong JSON type reaches validation instead of failing the
/// whole record. A non-string `type` is as good as absent, and a
/// non-string `scaling-stat` means no scaling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BonusEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stat: Option<Value>,

    /// Only read for damage, armor and arpen.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub damage_type: Option<Value>,

    #[serde(
        rename = "scaling-stat",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub scaling_stat: Option<Value>,

    pub scale: f64,
}

impl BonusEntry {
    /// The `stat` field, if it is a string.
    pub fn stat_name(&self) -> Option<&str> {
        self.stat.as_ref().and_then(Value::as_str)
    }

    /// The `type` field as a damage type, if it is a string.
    pub fn damage_type_id(&self) -> Option<DamageTypeId> {
        self.damage_type
            .as_ref()
            .and_then(Value::as_str)
            .map(DamageTypeId::from_str)
    }

    /// The `scaling-stat` field, if it is a string.
    pub fn scaling_stat_name(&self) -> Option<&str> {
        self.scaling_stat.as_ref().and_then(Value::as_str)
    }

    /// Build the bonus term this entry describes.
    ///
    /// An unrecognized or non-string `scaling-stat` yields an unscaled term.
    pub fn effect_scaling(&self) -> EffectScaling {
        let stat = self
            .scaling_stat_name()
            .map(ScalingStat::from_config_str)
            .unwrap_or(ScalingStat::Null);
        EffectScaling::new(stat, self.scale)
    }
}
