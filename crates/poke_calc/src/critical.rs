//! Critical-hit chance and damage-modifier tables.
//!
//! Gen 1 computes crit chance from the species' base Speed in 1/256 units;
//! every later generation uses a stage-indexed table. The Gen 1 functions
//! are kept separate because their inputs have nothing in common with the
//! stage-based ones.

use crate::error::{check_generation, check_range, CalcResult};

/// Crit chance per stage for Generations 2-5.
const CRIT_CHANCES: [f64; 5] = [0.0625, 0.125, 0.25, 0.333, 0.5];

/// Crit chance per stage from Generation 6, where stage 3+ is guaranteed.
const GEN6_CRIT_CHANCES: [f64; 5] = [0.0625, 0.125, 0.5, 1.0, 1.0];

/// Generation 1 critical-hit chance.
///
/// The threshold starts at `floor(base_speed / 2)` in 1/256 units. Focus
/// Energy quarters the threshold instead of boosting it (the well-known
/// cartridge bug), and a high-crit-rate move multiplies it by 8. The
/// threshold caps at 255, so the chance never reaches 1.0.
pub fn gen1_critical_hit_chance(
    base_speed: u32,
    high_rate_move: bool,
    focus_energy: bool,
) -> CalcResult<f64> {
    check_range("base speed", base_speed, 1, 255)?;

    let mut threshold = base_speed / 2;
    if focus_energy {
        threshold /= 4;
    }
    if high_rate_move {
        threshold *= 8;
    }
    Ok(threshold.min(255) as f64 / 256.0)
}

/// Critical-hit chance for Generations 2+ at a given crit stage.
pub fn critical_hit_chance(generation: u8, stage: u8) -> CalcResult<f64> {
    check_generation(generation, 2)?;
    check_range("stage", stage, 0, 4)?;

    let table = if generation >= 6 { &GEN6_CRIT_CHANCES } else { &CRIT_CHANCES };
    Ok(table[stage as usize])
}

/// Generation 1 critical-hit damage multiplier: `(2 * level + 5) / (level + 5)`.
pub fn gen1_critical_hit_modifier(level: u32) -> CalcResult<f64> {
    check_range("level", level, 1, 255)?;
    Ok((2 * level + 5) as f64 / (level + 5) as f64)
}

/// Critical-hit damage multiplier for Generations 2+.
pub fn critical_hit_modifier(generation: u8) -> CalcResult<f64> {
    check_generation(generation, 2)?;
    Ok(if generation >= 6 { 1.5 } else { 2.0 })
}
