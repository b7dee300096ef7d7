//! Martial art example: loading a style's bonuses and querying them
//!
//! This example demonstrates:
//! - Loading flat and multiplicative bonuses from a JSON style definition
//! - Attribute-scaled bonuses evaluated for different characters
//! - Damage-type qualified bonuses
//! - Rendering a localized description
//!
//! Run with `RUST_LOG=debug` to see each loaded bonus term.

use serde::Deserialize;
use tracing_subscriber::EnvFilter;
use zzbonus::damage_type::DamageTypeTable;
use zzbonus::i18n::Untranslated;
use zzbonus::*;

/// A style record as the host game would define it.
///
/// The bonus lists sit next to fields this crate knows nothing about.
#[derive(Deserialize)]
struct StyleDefinition {
    id: String,
    name: String,
    #[serde(flatten)]
    bonuses: BonusRecord,
}

const CRANE_STYLE: &str = r#"{
    "id": "style_crane",
    "name": "Crane Kung Fu",
    "flat_bonuses": [
        { "stat": "dodge", "scale": 1 },
        { "stat": "dodge", "scaling-stat": "dex", "scale": 0.25 },
        { "stat": "damage", "type": "bash", "scaling-stat": "str", "scale": 0.5 }
    ],
    "mult_bonuses": [
        { "stat": "movecost", "scale": 0.8 },
        { "stat": "armor", "type": "cut", "scale": 0.9 }
    ]
}"#;

fn main() -> Result<(), BonusError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Martial Art Bonus Example ===\n");

    let style: StyleDefinition = serde_json::from_str(CRANE_STYLE)?;
    let mut bonuses = BonusContainer::new();
    bonuses.load(&style.bonuses)?;

    println!("Style: {} ({})", style.name, style.id);

    let mut damage_names = DamageTypeTable::empty();
    damage_names.insert(DamageTypeId::from_str("bash"), "bashing");
    damage_names.insert(DamageTypeId::from_str("cut"), "cutting");

    println!("\nBonuses:");
    print!("{}", bonuses.describe(&Untranslated, &damage_names));

    let bash = DamageTypeId::from_str("bash");
    let cut = DamageTypeId::from_str("cut");

    let characters = [
        ("Nimble", BaseAttributes::new(8, 16, 10, 10)),
        ("Brawny", BaseAttributes::new(16, 8, 8, 10)),
    ];

    for (label, character) in &characters {
        println!("\n--- {} (str {}, dex {}) ---", label, character.strength(), character.dexterity());
        println!(
            "  Dodge: +{:.2}",
            bonuses.get_flat(character, AffectedStat::Dodge)
        );
        println!(
            "  Bash damage: +{:.2}",
            bonuses.get_flat_for(character, AffectedStat::Damage, &bash)
        );
        println!(
            "  Cut damage: +{:.2}",
            bonuses.get_flat_for(character, AffectedStat::Damage, &cut)
        );
        println!(
            "  Move cost: x{:.2}",
            bonuses.get_mult(character, AffectedStat::MoveCost)
        );
        println!(
            "  Cut armor: x{:.2}",
            bonuses.get_mult_for(character, AffectedStat::Armor, &cut)
        );
    }

    Ok(())
}
