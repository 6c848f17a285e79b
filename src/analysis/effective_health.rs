//! Effective health and gold-efficiency formulas for defensive items.

/// The Cinderhulk enchantment multiplies the holder's total health,
/// item included, by 15%.
pub const CINDERHULK_HEALTH_MULT: f64 = 1.15;

/// Raw damage a unit can absorb given `health` and a single resistance
/// (armor or magic resist, against the matching damage type).
pub fn effective_health(health: f64, resist: f64) -> f64 {
    (1.0 + resist / 100.0) * health
}

/// Gold paid per point of effective health gained by adding an item's
/// health and resistance to the current stats.
///
/// Returns Infinity (or NaN for a zero-gold no-op item) when the item
/// changes nothing; callers display rather than branch on it.
pub fn gold_per_effective_health(
    gold: f64,
    current_health: f64,
    current_resist: f64,
    health_added: f64,
    resist_added: f64,
    with_cinderhulk: bool,
) -> f64 {
    let before = effective_health(current_health, current_resist);

    let mut health_after = current_health + health_added;
    if with_cinderhulk {
        health_after *= CINDERHULK_HEALTH_MULT;
    }
    let after = effective_health(health_after, current_resist + resist_added);

    gold / (after - before)
}
