//! Moves whose power scales with the user's or target's remaining HP.

use crate::error::{check_generation, check_hp_ratio, CalcResult};

/// Brine doubles from 65 to 130 when the target is at or below half HP.
pub fn brine_power(current_hp: u32, max_hp: u32) -> CalcResult<u32> {
    check_hp_ratio(current_hp, max_hp)?;
    Ok(if current_hp * 2 <= max_hp { 130 } else { 65 })
}

/// Eruption: `max(1, 150 * current / max)`, strongest at full HP.
pub fn eruption_power(current_hp: u32, max_hp: u32) -> CalcResult<u32> {
    check_hp_ratio(current_hp, max_hp)?;
    Ok((150 * current_hp / max_hp).max(1))
}

/// Water Spout shares the Eruption formula.
pub fn water_spout_power(current_hp: u32, max_hp: u32) -> CalcResult<u32> {
    eruption_power(current_hp, max_hp)
}

/// Crush Grip scales with the *target's* remaining HP.
///
/// Gen 4 rounds with `120 * hp / max + 1`; Gen 5 drops the `+ 1` and
/// clamps to a minimum of 1 instead.
pub fn crush_grip_power(current_hp: u32, max_hp: u32, generation: u8) -> CalcResult<u32> {
    check_generation(generation, 4)?;
    check_hp_ratio(current_hp, max_hp)?;
    Ok(if generation < 5 {
        120 * current_hp / max_hp + 1
    } else {
        (120 * current_hp / max_hp).max(1)
    })
}

/// Wring Out shares the Crush Grip formula, generation split included.
pub fn wring_out_power(current_hp: u32, max_hp: u32, generation: u8) -> CalcResult<u32> {
    crush_grip_power(current_hp, max_hp, generation)
}

/// Flail and Reversal bucket `48 * current / max` into six power tiers.
fn pinch_power(current_hp: u32, max_hp: u32) -> CalcResult<u32> {
    check_hp_ratio(current_hp, max_hp)?;
    let p = 48 * current_hp / max_hp;
    Ok(match p {
        0..=1 => 200,   // below ~4% HP
        2..=4 => 150,
        5..=9 => 100,
        10..=16 => 80,
        17..=32 => 40,
        _ => 20,        // above ~69% HP
    })
}

pub fn flail_power(current_hp: u32, max_hp: u32) -> CalcResult<u32> {
    pinch_power(current_hp, max_hp)
}

pub fn reversal_power(current_hp: u32, max_hp: u32) -> CalcResult<u32> {
    pinch_power(current_hp, max_hp)
}
