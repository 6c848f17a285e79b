//! Armor penetration and damage mitigation formulas.
//!
//! All functions are pure; enemy stats come in as plain numbers so call
//! sites extract fields explicitly instead of passing whole entities.

/// Crit deals 75% bonus damage.
const CRIT_DAMAGE_MULT: f64 = 1.75;
/// Infinity Edge multiplies crit damage by 1.35 once combined crit reaches 60%.
const INFINITY_EDGE_CRIT_MULT: f64 = 1.35;
const INFINITY_EDGE_CRIT_THRESHOLD: f64 = 0.6;

/// Lethality effectiveness scales from 60% at level 1 to 100% at level 18.
fn lethality_scale(level: i32) -> f64 {
    0.6 + 0.4 * level as f64 / 18.0
}

/// Fraction of physical damage dealt against `armor`.
///
/// Negative armor amplifies damage on a separate curve that approaches
/// (but never reaches) 2x. Both branches evaluate to 1 at zero armor.
pub fn damage_multiplier(armor: f64) -> f64 {
    if armor >= 0.0 {
        100.0 / (100.0 + armor)
    } else {
        2.0 - 100.0 / (100.0 - armor)
    }
}

/// Total armor removed by flat lethality and percent penetration.
///
/// Lethality is applied first; percent pen then cuts into the remainder.
/// The ordering matters and matches the in-game resolution order.
pub fn armor_negated(armor: f64, lethality: f64, armor_pen_percent: f64, level: i32) -> f64 {
    let mut remaining = armor - lethality * lethality_scale(level);
    remaining *= 1.0 - armor_pen_percent;
    armor - remaining
}

/// Percent increase in physical damage taken once lethality and percent
/// pen are applied, relative to the unpenetrated armor value.
pub fn percent_damage_increase(
    armor: f64,
    lethality: f64,
    armor_pen_percent: f64,
    level: i32,
) -> f64 {
    let reduced = armor - lethality * lethality_scale(level);
    let final_armor = reduced * (1.0 - armor_pen_percent);
    (damage_multiplier(final_armor) / damage_multiplier(armor) - 1.0) * 100.0
}

/// Before/after offensive stats for a single item purchase, evaluated
/// against a fixed enemy armor value.
#[derive(Debug, Clone)]
pub struct DamageIncreaseParams {
    pub base_ad: f64,
    pub ad_increase: f64,
    /// Fraction in 0..1.
    pub base_crit: f64,
    pub crit_increase: f64,
    /// The purchase includes Infinity Edge (or it is already owned).
    pub has_infinity_edge: bool,
    pub base_lethality: f64,
    pub lethality_increase: f64,
    /// Fraction in 0..1.
    pub base_armor_pen_percent: f64,
    pub armor_pen_percent_increase: f64,
    pub enemy_armor: f64,
    pub level: i32,
}

impl Default for DamageIncreaseParams {
    fn default() -> Self {
        DamageIncreaseParams {
            base_ad: 0.0,
            ad_increase: 0.0,
            base_crit: 0.0,
            crit_increase: 0.0,
            has_infinity_edge: false,
            base_lethality: 0.0,
            lethality_increase: 0.0,
            base_armor_pen_percent: 0.0,
            armor_pen_percent_increase: 0.0,
            enemy_armor: 0.0,
            level: 1,
        }
    }
}

/// Armor left after lethality, then percent pen, each cut compounding on
/// the previous one.
fn mitigated_armor(armor: f64, lethality: f64, armor_pen_percent: f64, level: i32) -> f64 {
    (armor - lethality * lethality_scale(level)) * (1.0 - armor_pen_percent)
}

/// Absolute average-physical-damage delta between the before and after
/// item states of `params`.
///
/// The Infinity Edge threshold check uses the *unclamped* combined crit
/// chance; the clamp to 100% happens afterwards. Swapping that order would
/// change behavior for crit totals above 100%.
pub fn damage_increase(params: &DamageIncreaseParams) -> f64 {
    let armor_before = mitigated_armor(
        params.enemy_armor,
        params.base_lethality,
        params.base_armor_pen_percent,
        params.level,
    );
    let armor_after = mitigated_armor(
        params.enemy_armor,
        params.base_lethality + params.lethality_increase,
        params.base_armor_pen_percent + params.armor_pen_percent_increase,
        params.level,
    );

    let combined_crit = params.base_crit + params.crit_increase;
    let ie_active =
        params.has_infinity_edge && combined_crit >= INFINITY_EDGE_CRIT_THRESHOLD;
    let crit_before = params.base_crit.min(1.0);
    let crit_after = combined_crit.min(1.0);

    let crit_mult_after = if ie_active {
        CRIT_DAMAGE_MULT * INFINITY_EDGE_CRIT_MULT
    } else {
        CRIT_DAMAGE_MULT
    };

    let avg_before = params.base_ad
        * (1.0 + crit_before * (CRIT_DAMAGE_MULT - 1.0))
        * damage_multiplier(armor_before);
    let avg_after = (params.base_ad + params.ad_increase)
        * (1.0 + crit_after * (crit_mult_after - 1.0))
        * damage_multiplier(armor_after);

    avg_after - avg_before
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn multiplier_is_one_at_zero_armor() {
        assert!((damage_multiplier(0.0) - 1.0).abs() < EPS);
        // Both branches meet at zero: approach from the negative side.
        assert!((damage_multiplier(-1e-12) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn multiplier_decreases_with_armor() {
        let mut prev = damage_multiplier(0.0);
        for armor in [10.0, 50.0, 100.0, 250.0, 1000.0] {
            let m = damage_multiplier(armor);
            assert!(m < prev, "multiplier must strictly decrease, got {} at {}", m, armor);
            prev = m;
        }
    }

    #[test]
    fn negative_armor_amplifies() {
        assert!(damage_multiplier(-50.0) > 1.0);
        assert!((damage_multiplier(-100.0) - 1.5).abs() < EPS);
        // Approaches 2x but never reaches it.
        assert!(damage_multiplier(-1e9) < 2.0);
    }

    #[test]
    fn full_level_lethality_negates_raw_amount() {
        let negated = armor_negated(100.0, 30.0, 0.0, 18);
        assert!((negated - 30.0).abs() < EPS);
    }

    #[test]
    fn lethality_is_applied_before_percent_pen() {
        // 100 armor, 30 lethality at 18, then 20% pen on the remaining 70:
        // final armor 56, so 44 negated. Pen-first would give 50.
        let negated = armor_negated(100.0, 30.0, 0.2, 18);
        assert!((negated - 44.0).abs() < EPS);
    }

    #[test]
    fn no_penetration_means_no_damage_change() {
        let inc = percent_damage_increase(0.0, 0.0, 0.0, 1);
        assert!(inc.abs() < EPS);
    }

    #[test]
    fn percent_increase_is_positive_against_real_armor() {
        let inc = percent_damage_increase(100.0, 18.0, 0.3, 11);
        assert!(inc > 0.0);
    }

    #[test]
    fn infinity_edge_multiplier_gates_on_unclamped_crit() {
        let base = DamageIncreaseParams {
            base_ad: 200.0,
            base_crit: 0.5,
            crit_increase: 0.15,
            enemy_armor: 100.0,
            level: 13,
            ..Default::default()
        };

        let with_ie = damage_increase(&DamageIncreaseParams {
            has_infinity_edge: true,
            ..base.clone()
        });
        let without_ie = damage_increase(&base);
        assert!(
            with_ie > without_ie,
            "IE at 65% combined crit must add damage: {} vs {}",
            with_ie,
            without_ie
        );
    }

    #[test]
    fn infinity_edge_below_threshold_is_inert() {
        let base = DamageIncreaseParams {
            base_ad: 200.0,
            base_crit: 0.25,
            crit_increase: 0.2,
            enemy_armor: 100.0,
            level: 13,
            ..Default::default()
        };
        let with_flag = damage_increase(&DamageIncreaseParams {
            has_infinity_edge: true,
            ..base.clone()
        });
        let without_flag = damage_increase(&base);
        assert!((with_flag - without_flag).abs() < EPS);
    }

    #[test]
    fn crit_chance_clamps_after_threshold_check() {
        // 90% + 30% crit: threshold sees 1.2, averages use 1.0.
        let params = DamageIncreaseParams {
            base_ad: 100.0,
            base_crit: 0.9,
            crit_increase: 0.3,
            has_infinity_edge: true,
            enemy_armor: 0.0,
            level: 18,
            ..Default::default()
        };
        let delta = damage_increase(&params);
        // after = 100 * (1 + 1.0 * (1.75*1.35 - 1)), before = 100 * (1 + 0.9 * 0.75)
        let expected = 100.0 * (1.0 + (1.75 * 1.35 - 1.0)) - 100.0 * (1.0 + 0.9 * 0.75);
        assert!((delta - expected).abs() < EPS);
    }
}
