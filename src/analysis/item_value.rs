//! Item stat-value annotation.
//!
//! Takes a raw item as served by the static-data API and produces a copy
//! whose stat map carries a gold valuation per stat, merging in stats that
//! only appear as phrases in the description text.

use crate::models::Item;
use regex::Regex;
use std::collections::HashMap;

/// A stat line with its gold valuation attached.
#[derive(Debug, Clone, PartialEq)]
pub struct StatValue {
    pub value: f64,
    /// `stat cost × value`; NaN when the stat has no known cost.
    pub gold_value: f64,
}

/// An [`Item`](crate::models::Item) after annotation. The input is never
/// mutated; everything except `stats` and `notes` is carried over as-is.
#[derive(Debug, Clone)]
pub struct AnnotatedItem {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub gold: crate::models::ItemGold,
    pub stats: HashMap<String, StatValue>,
    pub maps: HashMap<String, bool>,
    pub required_champion: Option<String>,
    pub version: String,
    pub notes: Vec<String>,
}

impl AnnotatedItem {
    /// Sum of the known gold values (NaN entries are skipped).
    pub fn total_stat_gold(&self) -> f64 {
        self.stats
            .values()
            .map(|s| s.gold_value)
            .filter(|g| !g.is_nan())
            .sum()
    }

    /// Stat gold value per gold spent; above 1.0 the raw stats alone
    /// outvalue the price tag.
    pub fn gold_efficiency(&self) -> f64 {
        self.total_stat_gold() / self.gold.total as f64
    }
}

/// Gold cost of one unit of each stat, derived from the cheapest item
/// granting it alone. Percent-style stats are valued per fraction (a 12%
/// stat is stored as 0.12).
///
/// Rebuilt on every call; no hidden state. Memoize at the call site if it
/// ever shows up in a profile.
pub fn stat_gold_values() -> HashMap<String, f64> {
    let armor = 300.0 / 15.0; // Cloth Armor
    let magic_resist = 450.0 / 25.0; // Null-Magic Mantle
    let health = 400.0 / 150.0; // Ruby Crystal
    let attack_damage = 350.0 / 10.0; // Long Sword

    let mut costs = HashMap::new();
    costs.insert("AttackDamage".to_string(), attack_damage);
    costs.insert("AbilityPower".to_string(), 435.0 / 20.0); // Amplifying Tome
    costs.insert("Armor".to_string(), armor);
    costs.insert("MagicResist".to_string(), magic_resist);
    costs.insert("Health".to_string(), health);
    costs.insert("Mana".to_string(), 350.0 / 250.0); // Sapphire Crystal
    costs.insert("AttackSpeed".to_string(), 300.0 / 0.12); // Dagger
    costs.insert("CritChance".to_string(), 600.0 / 0.15); // Cloak of Agility
    costs.insert("MoveSpeed".to_string(), 300.0 / 25.0); // Boots
    costs.insert("LifeSteal".to_string(), (900.0 - 15.0 * attack_damage) / 0.10); // Vampiric Scepter minus its AD
    costs.insert("AbilityHaste".to_string(), 250.0 / 10.0); // Glowing Mote
    costs.insert("BaseManaRegen".to_string(), 250.0 / 0.50); // Faerie Charm
    costs.insert("BaseHealthRegen".to_string(), 300.0 / 1.00); // Rejuvenation Bead
    costs.insert(
        "HealAndShieldPower".to_string(),
        (600.0 - 0.45 * (250.0 / 0.50)) / 0.08, // Forbidden Idol minus its mana regen
    );
    costs.insert("CooldownReduction".to_string(), 800.0 / 0.10); // Kindlegem-era valuation

    // Penetration stats have no value in a vacuum; they are priced against
    // a 100 armor / 100 MR baseline target, where 1 lethality negates 1
    // armor at level 18 and 1% percent pen negates 1 point.
    costs.insert("Lethality".to_string(), armor);
    costs.insert("ArmorPen".to_string(), 100.0 * armor);
    costs.insert("MagicPen".to_string(), magic_resist);
    costs.insert("MagicPenPercent".to_string(), 100.0 * magic_resist);

    costs
}

/// Description phrases that carry stats absent from the structured block.
/// `percent` controls whether the captured number is scaled to a fraction.
struct TextStat {
    key: &'static str,
    pattern: &'static str,
    percent: bool,
}

const TEXT_STATS: &[TextStat] = &[
    TextStat { key: "BaseManaRegen", pattern: r"(\d+(?:\.\d+)?)% Base Mana Regen", percent: true },
    TextStat { key: "Lethality", pattern: r"(\d+(?:\.\d+)?) Lethality", percent: false },
    TextStat { key: "AbilityHaste", pattern: r"(\d+(?:\.\d+)?) Ability Haste", percent: false },
    TextStat { key: "MagicPenPercent", pattern: r"(\d+(?:\.\d+)?)% Magic Penetration", percent: true },
    TextStat { key: "MagicPen", pattern: r"(\d+(?:\.\d+)?) Magic Penetration", percent: false },
    TextStat { key: "CooldownReduction", pattern: r"(\d+(?:\.\d+)?)% Cooldown Reduction", percent: true },
    TextStat { key: "HealAndShieldPower", pattern: r"(\d+(?:\.\d+)?)% Heal and Shield Power", percent: true },
    TextStat { key: "BaseHealthRegen", pattern: r"(\d+(?:\.\d+)?)% Base Health Regen", percent: true },
    TextStat { key: "LifeSteal", pattern: r"(\d+(?:\.\d+)?)% Life Steal", percent: true },
    TextStat { key: "ArmorPen", pattern: r"(\d+(?:\.\d+)?)% Armor Penetration", percent: true },
];

/// Annotate `item` with text-derived stats, per-stat gold values and notes.
///
/// Text-derived stats never overwrite a structured stat of the same name,
/// and only the first occurrence of each phrase counts. Conversion to
/// [`StatValue`] runs last so text-derived stats are valued too.
pub fn annotate_item(item: &Item, stat_costs: &HashMap<String, f64>) -> AnnotatedItem {
    let mut stats = item.stats.clone();
    let mut notes = Vec::new();

    for text_stat in TEXT_STATS {
        let re = Regex::new(text_stat.pattern).expect("static pattern");
        if let Some(caps) = re.captures(&item.description) {
            if let Ok(raw) = caps[1].parse::<f64>() {
                let value = if text_stat.percent { raw / 100.0 } else { raw };
                stats.entry(text_stat.key.to_string()).or_insert(value);
            }
        }
    }

    if item.name.contains("Rabadon") {
        if let Some(note) = rabadons_note(item) {
            notes.push(note);
        }
    }

    if stats.contains_key("ArmorPen") {
        notes.push(
            "Armor Penetration is valued against a 100 armor target; worth more against tankier enemies, less against squishier ones.".to_string(),
        );
    }

    let stats = stats
        .into_iter()
        .map(|(key, value)| {
            let cost = stat_costs.get(&key).copied().unwrap_or(f64::NAN);
            (key, StatValue { value, gold_value: cost * value })
        })
        .collect();

    AnnotatedItem {
        id: item.id,
        name: item.name.clone(),
        description: item.description.clone(),
        gold: item.gold.clone(),
        stats,
        maps: item.maps.clone(),
        required_champion: item.required_champion.clone(),
        version: item.version.clone(),
        notes,
    }
}

/// Effective-AP note for the Deathcap passive. Returns None when the
/// expected percent phrase is missing, rather than erroring.
fn rabadons_note(item: &Item) -> Option<String> {
    let re = Regex::new(r"Increases your total Ability Power by (\d+(?:\.\d+)?)%")
        .expect("static pattern");
    let caps = re.captures(&item.description)?;
    let percent_bonus: f64 = caps[1].parse().ok()?;
    let base_ap = item.stats.get("AbilityPower").copied()?;
    let effective = base_ap * (1.0 + percent_bonus / 100.0);
    Some(format!(
        "Effectively grants {:.0} Ability Power ({:.0} base increased by {}%)",
        effective, base_ap, percent_bonus
    ))
}
