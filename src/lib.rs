//! # zzbonus - Data-Driven Stat Bonus Evaluator
//!
//! Evaluates the flat and multiplicative stat bonuses that techniques,
//! styles and traits grant a character. Bonuses are plain data loaded from
//! configuration records:
//! - **Flat** bonuses are summed (identity `0.0`)
//! - **Multiplicative** bonuses are multiplied (identity `1.0`, never negative)
//! - Any bonus term may **scale** with one of four base attributes
//! - Damage, armor and armor penetration bonuses are **qualified** by damage type
//!
//! ## Core Concepts
//!
//! ```text
//! [BonusRecord] → load → [BonusContainer] → get_flat / get_mult(character)
//! ```
//!
//! 1. **Records** are deserialized from JSON with serde
//! 2. **Loading** validates stat names and damage types, then appends each
//!    entry as an `EffectScaling` term under its `AffectedType` key
//! 3. **Queries** fold the terms under one key against a `Character`
//!
//! ## Example
//!
//! ```rust
//! use zzbonus::*;
//!
//! let bonuses = BonusContainer::from_json_str(r#"{
//!     "flat_bonuses": [
//!         { "stat": "damage", "type": "bash", "scaling-stat": "str", "scale": 0.5 }
//!     ],
//!     "mult_bonuses": [
//!         { "stat": "movecost", "scale": 0.8 }
//!     ]
//! }"#).unwrap();
//!
//! let hero = BaseAttributes::new(12, 10, 8, 8);
//! let bash = DamageTypeId::from_str("bash");
//!
//! assert_eq!(bonuses.get_flat_for(&hero, AffectedStat::Damage, &bash), 6.0);
//! assert_eq!(bonuses.get_mult(&hero, AffectedStat::MoveCost), 0.8);
//!
//! assert_eq!(
//!     bonuses.get_description(),
//!     "* Move cost: 80%\n* bash damage: +50% of strength\n",
//! );
//! ```
//!
//! ## Modules
//!
//! - [`container`] - Bonus container: loading, queries, descriptions
//! - [`scaling`] - Single bonus terms and attribute scaling
//! - [`affected`] - Affected stats and bonus keys
//! - [`character`] - Character attribute access
//! - [`damage_type`] - Damage type identity and names
//! - [`record`] - Configuration record types
//! - [`i18n`] - Localization and positional formatting
//! - [`error`] - Error types

pub mod affected;
pub mod character;
pub mod container;
pub mod damage_type;
pub mod error;
pub mod i18n;
pub mod record;
pub mod scaling;

// Re-export main types for convenience
pub use affected::{AffectedStat, AffectedType};
pub use character::{BaseAttributes, Character};
pub use container::{BonusContainer, BonusKind, BonusMap};
pub use damage_type::{DamageTypeId, DamageTypeNames};
pub use error::BonusError;
pub use i18n::{Localizer, Untranslated};
pub use record::{BonusEntry, BonusRecord};
pub use scaling::{EffectScaling, ScalingStat};
