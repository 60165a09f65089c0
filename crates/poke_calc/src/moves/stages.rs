//! Moves whose power counts the target's positive stat-stage boosts.
//!
//! All three take the seven boostable stages (Attack through Evasion).
//! Only boosts count, so each stage is validated to [0, 6]; callers
//! clamp drops to zero before calling.

use crate::error::{check_range, CalcResult};

fn boost_sum(stages: [i32; 7]) -> CalcResult<i32> {
    const NAMES: [&str; 7] = [
        "attack stage",
        "defense stage",
        "special attack stage",
        "special defense stage",
        "speed stage",
        "accuracy stage",
        "evasion stage",
    ];
    for (stage, name) in stages.iter().zip(NAMES) {
        check_range(name, *stage, 0, 6)?;
    }
    Ok(stages.iter().sum())
}

/// Stored Power: `20 + 20 * total_boosts`, 20 to 300.
#[allow(clippy::too_many_arguments)]
pub fn stored_power_power(
    attack: i32,
    defense: i32,
    special_attack: i32,
    special_defense: i32,
    speed: i32,
    accuracy: i32,
    evasion: i32,
) -> CalcResult<u32> {
    let sum = boost_sum([
        attack, defense, special_attack, special_defense, speed, accuracy, evasion,
    ])?;
    Ok((20 + 20 * sum) as u32)
}

/// Power Trip shares the Stored Power formula.
#[allow(clippy::too_many_arguments)]
pub fn power_trip_power(
    attack: i32,
    defense: i32,
    special_attack: i32,
    special_defense: i32,
    speed: i32,
    accuracy: i32,
    evasion: i32,
) -> CalcResult<u32> {
    stored_power_power(
        attack, defense, special_attack, special_defense, speed, accuracy, evasion,
    )
}

/// Punishment: `60 + 20 * total_boosts`, capped at 200.
#[allow(clippy::too_many_arguments)]
pub fn punishment_power(
    attack: i32,
    defense: i32,
    special_attack: i32,
    special_defense: i32,
    speed: i32,
    accuracy: i32,
    evasion: i32,
) -> CalcResult<u32> {
    let sum = boost_sum([
        attack, defense, special_attack, special_defense, speed, accuracy, evasion,
    ])?;
    Ok(((60 + 20 * sum) as u32).min(200))
}
