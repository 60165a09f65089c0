//! Pokemon size, the Emerald height-variance algorithm.
//!
//! A 16-bit hash mixes the low PID half-word with the low nibbles of
//! the six IVs, then a piecewise-linear table maps the hash onto a
//! scale factor in roughly [0.2, 1.69] of the species' dex height.

use crate::dex::species_entry;
use crate::error::{check_range, CalcResult};

/// Hash breakpoints with the divisor and base scale (permille) applied
/// from each breakpoint on.
const SIZE_TABLE: [(u32, u32, u32); 16] = [
    (0, 1, 280),        // runt band, under 29% of dex height
    (10, 1, 200),
    (110, 2, 300),
    (310, 4, 400),
    (710, 20, 500),
    (2710, 50, 600),
    (7710, 100, 700),
    (17710, 150, 800),
    (32710, 150, 900),
    (47946, 100, 1000),
    (58446, 50, 1100),
    (62646, 20, 1200),
    (64646, 5, 1300),
    (65146, 2, 1400),
    (65346, 1, 1500),
    (65446, 1, 1600),   // giant band, up to 169% of dex height
];

fn size_hash(pid: u32, ivs: [u32; 6]) -> u32 {
    let [hp, attack, defense, speed, special_attack, special_defense] = ivs;
    let p = pid & 0xFFFF;

    let hi = (((attack & 0xF) ^ (defense & 0xF)) * (hp & 0xF)) ^ (p & 0xFF);
    let lo = (((special_attack & 0xF) ^ (special_defense & 0xF)) * (speed & 0xF)) ^ (p >> 8);
    hi * 256 + lo
}

/// Height in meters of an individual, from its PID and IVs.
#[allow(clippy::too_many_arguments)]
pub fn pokemon_size(
    species: &str,
    pid: u32,
    hp_iv: u32,
    attack_iv: u32,
    defense_iv: u32,
    speed_iv: u32,
    special_attack_iv: u32,
    special_defense_iv: u32,
) -> CalcResult<f64> {
    let ivs = [
        ("hp iv", hp_iv),
        ("attack iv", attack_iv),
        ("defense iv", defense_iv),
        ("speed iv", speed_iv),
        ("special attack iv", special_attack_iv),
        ("special defense iv", special_defense_iv),
    ];
    for (name, iv) in ivs {
        check_range(name, iv, 0, 31)?;
    }
    let entry = species_entry(species)?;

    let hash = size_hash(
        pid,
        [hp_iv, attack_iv, defense_iv, speed_iv, special_attack_iv, special_defense_iv],
    );
    let row = SIZE_TABLE
        .iter()
        .rev()
        .find(|(start, _, _)| hash >= *start)
        .unwrap_or(&SIZE_TABLE[0]);
    let (start, divisor, base) = *row;

    let permille = (hash - start) / divisor + base;
    Ok(entry.height_m * permille as f64 / 1000.0)
}
