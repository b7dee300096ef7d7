//! Bonus container module.
//!
//! Provides the `BonusContainer` type, which owns the flat and
//! multiplicative bonus rules of a technique or trait, evaluates them
//! against a character, and renders them as text.

use crate::affected::{AffectedStat, AffectedType};
use crate::character::Character;
use crate::damage_type::{DamageTypeId, DamageTypeNames, RawDamageTypeNames};
use crate::error::{BonusError, Result};
use crate::i18n::{string_format, FormatArg, Localizer, Untranslated};
use crate::record::{BonusEntry, BonusRecord};
use crate::scaling::{EffectScaling, ScalingStat};
use serde::Deserialize;
use std::collections::BTreeMap;
use tracing::{debug, warn};

/// How the terms under one key combine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BonusKind {
    /// Terms are summed; identity 0.0.
    Flat,
    /// Terms are multiplied; identity 1.0, result floored at 0.0.
    Mult,
}

impl BonusKind {
    /// Name of the record list holding this kind of bonus.
    pub fn list_name(self) -> &'static str {
        match self {
            BonusKind::Flat => "flat_bonuses",
            BonusKind::Mult => "mult_bonuses",
        }
    }
}

/// Ordered mapping from bonus keys to their stacked terms.
///
/// Keys iterate in `AffectedType` order. Terms under a key keep the
/// order they were loaded in.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BonusMap {
    entries: BTreeMap<AffectedType, Vec<EffectScaling>>,
}

impl BonusMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a term under `key`.
    pub fn push(&mut self, key: AffectedType, term: EffectScaling) {
        self.entries.entry(key).or_default().push(term);
    }

    /// Terms stored under `key`, if any.
    pub fn get(&self, key: &AffectedType) -> Option<&[EffectScaling]> {
        self.entries.get(key).map(Vec::as_slice)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&AffectedType, &[EffectScaling])> {
        self.entries.iter().map(|(key, terms)| (key, terms.as_slice()))
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of terms across all keys.
    pub fn term_count(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }

    /// Fold the terms under `key` evaluated against `character`.
    ///
    /// Returns `identity` when the key has no terms.
    fn aggregate<C, F>(&self, character: &C, key: &AffectedType, identity: f64, combine: F) -> f64
    where
        C: Character + ?Sized,
        F: Fn(f64, f64) -> f64,
    {
        match self.entries.get(key) {
            Some(terms) => terms
                .iter()
                .fold(identity, |acc, term| combine(acc, term.evaluate(character))),
            None => identity,
        }
    }
}

/// Flat and multiplicative bonus rules of a single owner.
///
/// A container is filled once with `load` and only queried afterwards.
///
/// # Examples
///
/// ```rust
/// use zzbonus::{AffectedStat, BaseAttributes, BonusContainer};
///
/// let bonuses = BonusContainer::from_json_str(r#"{
///     "flat_bonuses": [
///         { "stat": "speed", "scale": 10 },
///         { "stat": "speed", "scaling-stat": "dex", "scale": 0.5 }
///     ],
///     "mult_bonuses": [
///         { "stat": "hit", "scale": 1.5 },
///         { "stat": "hit", "scale": 2.0 }
///     ]
/// }"#).unwrap();
///
/// let hero = BaseAttributes::new(10, 12, 8, 8);
/// assert_eq!(bonuses.get_flat(&hero, AffectedStat::Speed), 16.0);
/// assert_eq!(bonuses.get_mult(&hero, AffectedStat::Hit), 3.0);
///
/// // Unconfigured stats yield identity values
/// assert_eq!(bonuses.get_flat(&hero, AffectedStat::Dodge), 0.0);
/// assert_eq!(bonuses.get_mult(&hero, AffectedStat::Dodge), 1.0);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BonusContainer {
    bonuses_flat: BonusMap,
    bonuses_mult: BonusMap,
}

impl BonusContainer {
    /// Create an empty container.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a container from the JSON text of a bonus record.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let mut container = Self::new();
        container.load_json_str(json)?;
        Ok(container)
    }

    /// Load both bonus lists of a record.
    ///
    /// Terms are appended to what is already loaded; loading the same
    /// record twice doubles every stack. Flat bonuses are loaded before
    /// multiplicative ones, and entries loaded before an error are kept.
    ///
    /// # Errors
    ///
    /// - `BonusError::InvalidAffectedStat` if an entry has a missing or
    ///   unknown `stat`
    /// - `BonusError::InvalidDamageType` if a damage, armor or arpen entry
    ///   has no `type`
    pub fn load(&mut self, record: &BonusRecord) -> Result<()> {
        self.load_entries(&record.flat_bonuses, BonusKind::Flat)?;
        self.load_entries(&record.mult_bonuses, BonusKind::Mult)?;
        debug!(
            flat_terms = self.bonuses_flat.term_count(),
            mult_terms = self.bonuses_mult.term_count(),
            "bonus record loaded"
        );
        Ok(())
    }

    /// Load a record from an already parsed JSON value.
    ///
    /// Structural problems are reported as `BonusError::MalformedRecord`.
    pub fn load_value(&mut self, value: &serde_json::Value) -> Result<()> {
        let record = BonusRecord::deserialize(value)?;
        self.load(&record)
    }

    /// Load a record from JSON text.
    pub fn load_json_str(&mut self, json: &str) -> Result<()> {
        let record: BonusRecord = serde_json::from_str(json)?;
        self.load(&record)
    }

    /// Load one bonus list into the mapping selected by `kind`.
    pub(crate) fn load_entries(&mut self, entries: &[BonusEntry], kind: BonusKind) -> Result<()> {
        for (index, entry) in entries.iter().enumerate() {
            let stat = entry
                .stat_name()
                .map(AffectedStat::from_config_str)
                .unwrap_or(AffectedStat::None);
            if stat == AffectedStat::None {
                let value = match (&entry.stat, entry.stat_name()) {
                    (_, Some(name)) => name.to_string(),
                    (Some(raw), None) => raw.to_string(),
                    (None, None) => String::new(),
                };
                return Err(BonusError::InvalidAffectedStat {
                    list: kind.list_name(),
                    index,
                    value,
                });
            }

            // `type` is not looked at for stats that ignore it
            let damage_type = if stat.needs_damage_type() {
                match entry.damage_type_id() {
                    Some(dt) if !dt.is_null() => dt,
                    _ => {
                        return Err(BonusError::InvalidDamageType {
                            list: kind.list_name(),
                            index,
                            stat,
                        })
                    }
                }
            } else {
                DamageTypeId::null()
            };

            let term = entry.effect_scaling();
            if let Some(raw) = &entry.scaling_stat {
                if term.stat.is_null() {
                    warn!(
                        list = kind.list_name(),
                        index,
                        scaling_stat = %raw,
                        "unknown scaling stat, bonus will not scale"
                    );
                }
            }

            debug!(
                list = kind.list_name(),
                %stat,
                damage_type = %damage_type,
                scaling_stat = %term.stat,
                scale = term.scale,
                "bonus term loaded"
            );
            self.push(kind, AffectedType::new(stat, &damage_type), term);
        }
        Ok(())
    }

    /// Append a single term without going through a record.
    ///
    /// No validation happens here: unlike `load`, this accepts
    /// `AffectedStat::None` and damage-related keys with a null damage
    /// type. Such terms are still queried and described like any other.
    pub fn push(&mut self, kind: BonusKind, key: AffectedType, term: EffectScaling) {
        self.map_mut(kind).push(key, term);
    }

    fn map_mut(&mut self, kind: BonusKind) -> &mut BonusMap {
        match kind {
            BonusKind::Flat => &mut self.bonuses_flat,
            BonusKind::Mult => &mut self.bonuses_mult,
        }
    }

    pub fn flat_bonuses(&self) -> &BonusMap {
        &self.bonuses_flat
    }

    pub fn mult_bonuses(&self) -> &BonusMap {
        &self.bonuses_mult
    }

    pub fn is_empty(&self) -> bool {
        self.bonuses_flat.is_empty() && self.bonuses_mult.is_empty()
    }

    /// Sum of the flat bonuses to an unqualified stat.
    pub fn get_flat<C: Character + ?Sized>(&self, character: &C, stat: AffectedStat) -> f64 {
        self.get_flat_for(character, stat, &DamageTypeId::null())
    }

    /// Sum of the flat bonuses to `stat` for `damage_type`.
    ///
    /// `damage_type` is ignored for stats that are not damage-related.
    pub fn get_flat_for<C: Character + ?Sized>(
        &self,
        character: &C,
        stat: AffectedStat,
        damage_type: &DamageTypeId,
    ) -> f64 {
        let key = AffectedType::new(stat, damage_type);
        self.bonuses_flat
            .aggregate(character, &key, 0.0, |acc, value| acc + value)
    }

    /// Product of the multiplicative bonuses to an unqualified stat.
    pub fn get_mult<C: Character + ?Sized>(&self, character: &C, stat: AffectedStat) -> f64 {
        self.get_mult_for(character, stat, &DamageTypeId::null())
    }

    /// Product of the multiplicative bonuses to `stat` for `damage_type`.
    ///
    /// The product is clamped to be non-negative.
    pub fn get_mult_for<C: Character + ?Sized>(
        &self,
        character: &C,
        stat: AffectedStat,
        damage_type: &DamageTypeId,
    ) -> f64 {
        let key = AffectedType::new(stat, damage_type);
        let product = self
            .bonuses_mult
            .aggregate(character, &key, 1.0, |acc, value| acc * value);
        product.max(0.0)
    }

    /// Describe every bonus, untranslated, naming damage types by id.
    pub fn get_description(&self) -> String {
        self.describe(&Untranslated, &RawDamageTypeNames)
    }

    /// Describe every bonus, one line each.
    ///
    /// Multiplicative bonuses come first, then flat ones. Within each
    /// group lines follow key order, then load order.
    pub fn describe<L, D>(&self, localizer: &L, damage_types: &D) -> String
    where
        L: Localizer + ?Sized,
        D: DamageTypeNames + ?Sized,
    {
        let mut dump = String::new();
        for kind in [BonusKind::Mult, BonusKind::Flat] {
            let map = match kind {
                BonusKind::Flat => &self.bonuses_flat,
                BonusKind::Mult => &self.bonuses_mult,
            };
            for (key, terms) in map.iter() {
                let label = bonus_label(key, localizer, damage_types);
                for term in terms {
                    dump += &describe_term(kind, &label, term, localizer);
                    dump.push('\n');
                }
            }
        }
        dump
    }
}

/// Display name of a key, prefixed with its damage type when relevant.
fn bonus_label<L, D>(key: &AffectedType, localizer: &L, damage_types: &D) -> String
where
    L: Localizer + ?Sized,
    D: DamageTypeNames + ?Sized,
{
    let name = localizer.gettext(key.stat().label());
    if !key.stat().needs_damage_type() {
        return name;
    }

    let damage_type = key.damage_type();
    let damage_name = if damage_type.is_null() {
        localizer.gettext("none")
    } else {
        damage_types.name(damage_type)
    };
    string_format(
        &localizer.pgettext("type of damage", "%1$s %2$s"),
        &[FormatArg::from(damage_name), FormatArg::from(name)],
    )
}

fn describe_term<L>(kind: BonusKind, label: &str, term: &EffectScaling, localizer: &L) -> String
where
    L: Localizer + ?Sized,
{
    // Truncation toward zero
    let percent = (term.scale * 100.0) as i64;

    let (template, args) = match (kind, term.stat) {
        (BonusKind::Mult, ScalingStat::Null) => (
            "* %1$s: %2$d%%",
            vec![FormatArg::from(label), FormatArg::from(percent)],
        ),
        (BonusKind::Flat, ScalingStat::Null) => (
            "* %1$s: %2$+d",
            vec![FormatArg::from(label), FormatArg::from(term.scale as i64)],
        ),
        (BonusKind::Mult, stat) => (
            "* %1$s: %2$d%% of %3$s",
            vec![
                FormatArg::from(label),
                FormatArg::from(percent),
                FormatArg::from(localizer.gettext(stat.label())),
            ],
        ),
        (BonusKind::Flat, stat) => (
            "* %1$s: %2$+d%% of %3$s",
            vec![
                FormatArg::from(label),
                FormatArg::from(percent),
                FormatArg::from(localizer.gettext(stat.label())),
            ],
        ),
    };

    string_format(&localizer.pgettext("martial art bonus", template), &args)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::BaseAttributes;
    use serde_json::json;

    fn load(value: serde_json::Value) -> BonusContainer {
        let mut container = BonusContainer::new();
        container.load_value(&value).unwrap();
        container
    }

    #[test]
    fn test_container_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<BonusContainer>();
    }

    #[test]
    fn test_empty_container() {
        let container = BonusContainer::new();
        let c = BaseAttributes::default();
        assert!(container.is_empty());
        assert_eq!(container.get_flat(&c, AffectedStat::Hit), 0.0);
        assert_eq!(container.get_mult(&c, AffectedStat::Hit), 1.0);
        assert_eq!(container.get_description(), "");
    }

    #[test]
    fn test_terms_keep_load_order() {
        let container = load(json!({
            "flat_bonuses": [
                { "stat": "block", "scale": 1 },
                { "stat": "block", "scaling-stat": "str", "scale": 0.2 },
                { "stat": "block", "scale": 3 }
            ]
        }));
        let terms = container
            .flat_bonuses()
            .get(&AffectedType::from(AffectedStat::Block))
            .unwrap();
        assert_eq!(
            terms,
            &[
                EffectScaling::new(ScalingStat::Null, 1.0),
                EffectScaling::new(ScalingStat::Strength, 0.2),
                EffectScaling::new(ScalingStat::Null, 3.0),
            ]
        );
        assert_eq!(container.flat_bonuses().term_count(), 3);
        assert!(container.mult_bonuses().is_empty());
    }

    #[test]
    fn test_load_appends() {
        let record = json!({ "flat_bonuses": [{ "stat": "dodge", "scale": 2 }] });
        let mut container = BonusContainer::new();
        container.load_value(&record).unwrap();
        container.load_value(&record).unwrap();

        let c = BaseAttributes::default();
        assert_eq!(container.get_flat(&c, AffectedStat::Dodge), 4.0);
    }

    #[test]
    fn test_failed_load_keeps_earlier_entries() {
        let mut container = BonusContainer::new();
        let err = container
            .load_value(&json!({
                "flat_bonuses": [{ "stat": "speed", "scale": 5 }],
                "mult_bonuses": [{ "stat": "nope", "scale": 1 }]
            }))
            .unwrap_err();

        assert_eq!(
            err,
            BonusError::InvalidAffectedStat {
                list: "mult_bonuses",
                index: 0,
                value: "nope".to_string(),
            }
        );
        let c = BaseAttributes::default();
        assert_eq!(container.get_flat(&c, AffectedStat::Speed), 5.0);
    }

    #[test]
    fn test_missing_stat_is_invalid() {
        let mut container = BonusContainer::new();
        let err = container
            .load_value(&json!({ "flat_bonuses": [{ "scale": 1 }] }))
            .unwrap_err();
        assert!(matches!(err, BonusError::InvalidAffectedStat { index: 0, .. }));
    }

    #[test]
    fn test_empty_damage_type_is_invalid() {
        let mut container = BonusContainer::new();
        let err = container
            .load_value(&json!({
                "flat_bonuses": [
                    { "stat": "damage", "type": "bash", "scale": 1 },
                    { "stat": "damage", "type": "", "scale": 1 }
                ]
            }))
            .unwrap_err();
        assert_eq!(
            err,
            BonusError::InvalidDamageType {
                list: "flat_bonuses",
                index: 1,
                stat: AffectedStat::Damage,
            }
        );
    }

    #[test]
    fn test_missing_scale_is_malformed() {
        let mut container = BonusContainer::new();
        let err = container
            .load_value(&json!({ "flat_bonuses": [{ "stat": "hit" }] }))
            .unwrap_err();
        assert!(matches!(err, BonusError::MalformedRecord(_)));
        assert!(container.is_empty());
    }

    #[test]
    fn test_mult_clamp_applies_to_product_only() {
        let container = load(json!({
            "mult_bonuses": [
                { "stat": "speed", "scale": -2 },
                { "stat": "speed", "scale": -2 },
                { "stat": "dodge", "scale": -0.5 },
                { "stat": "dodge", "scale": 2 }
            ]
        }));
        let c = BaseAttributes::default();
        assert_eq!(container.get_mult(&c, AffectedStat::Speed), 4.0);
        assert_eq!(container.get_mult(&c, AffectedStat::Dodge), 0.0);
    }

    #[test]
    fn test_flat_negative_not_clamped() {
        let container = load(json!({
            "flat_bonuses": [{ "stat": "movecost", "scale": -10 }]
        }));
        let c = BaseAttributes::default();
        assert_eq!(container.get_flat(&c, AffectedStat::MoveCost), -10.0);
    }

    #[test]
    fn test_push_skips_validation() {
        let mut container = BonusContainer::new();
        container.push(
            BonusKind::Flat,
            AffectedType::from(AffectedStat::None),
            EffectScaling::new(ScalingStat::Null, 2.0),
        );
        container.push(
            BonusKind::Flat,
            AffectedType::from(AffectedStat::Damage),
            EffectScaling::new(ScalingStat::Null, 3.0),
        );

        let c = BaseAttributes::default();
        assert_eq!(container.get_flat(&c, AffectedStat::None), 2.0);
        assert_eq!(container.get_flat(&c, AffectedStat::Damage), 3.0);
    }

    #[test]
    fn test_bonus_kind_list_names() {
        assert_eq!(BonusKind::Flat.list_name(), "flat_bonuses");
        assert_eq!(BonusKind::Mult.list_name(), "mult_bonuses");
    }
}
