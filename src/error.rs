//! Error types for bonus loading.
//!
//! All errors that can occur while loading bonus records are represented
//! by the `BonusError` enum. Queries never fail.

use crate::affected::AffectedStat;
use thiserror::Error;

/// Errors that can occur while loading a bonus container.
///
/// Every error aborts the `load` call that raised it. Entries inserted
/// before the failing one are kept.
///
/// # Examples
///
/// ```rust
/// use zzbonus::BonusError;
///
/// let err = BonusError::InvalidAffectedStat {
///     list: "flat_bonuses",
///     index: 0,
///     value: "bogus".to_string(),
/// };
/// assert_eq!(err.to_string(), "Invalid affected stat at flat_bonuses[0].stat: \"bogus\"");
/// ```
#[derive(Debug, Error, Clone, PartialEq)]
pub enum BonusError {
    /// The `stat` field is missing or not one of the recognized names.
    #[error("Invalid affected stat at {list}[{index}].stat: {value:?}")]
    InvalidAffectedStat {
        list: &'static str,
        index: usize,
        value: String,
    },

    /// A damage-related stat has no usable `type` field.
    #[error("Invalid damage type at {list}[{index}].type for stat {stat}")]
    InvalidDamageType {
        list: &'static str,
        index: usize,
        stat: AffectedStat,
    },

    /// The record could not be deserialized at all.
    ///
    /// Covers missing `scale` fields and fields of the wrong JSON type.
    #[error("Malformed bonus record: {0}")]
    MalformedRecord(String),
}

impl From<serde_json::Error> for BonusError {
    fn from(err: serde_json::Error) -> Self {
        BonusError::MalformedRecord(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, BonusError>;
