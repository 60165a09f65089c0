//! Hidden Power: type and base power packed into the IVs.
//!
//! Gen 2 reads 4-bit IVs (type from the low bits of Attack and Defense,
//! power mostly from the high bits); Gen 3 onward reads one bit per
//! 5-bit IV for the type and the next bit up for the power.

use serde::{Deserialize, Serialize};

use crate::error::{check_range, CalcResult};
use crate::types::Type;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HiddenPower {
    pub type_: Type,
    pub base_power: u32,
}

/// The 16 Hidden Power types in index order; Normal and Fairy are
/// unreachable by design.
const HIDDEN_POWER_TYPES: [Type; 16] = [
    Type::Fighting,
    Type::Flying,
    Type::Poison,
    Type::Ground,
    Type::Rock,
    Type::Bug,
    Type::Ghost,
    Type::Steel,
    Type::Fire,
    Type::Water,
    Type::Grass,
    Type::Electric,
    Type::Psychic,
    Type::Ice,
    Type::Dragon,
    Type::Dark,
];

/// Gen 2 Hidden Power from the four 4-bit IVs.
///
/// Type index is the low two bits of Attack over the low two bits of
/// Defense. Power sums the IVs' top bits weighted 8/4/2/1, plus the low
/// two bits of Special: `(5 * msb_sum + (spc & 3)) / 2 + 31`, spanning
/// [31, 70].
pub fn gen2_hidden_power(
    attack_iv: u32,
    defense_iv: u32,
    speed_iv: u32,
    special_iv: u32,
) -> CalcResult<HiddenPower> {
    check_range("attack iv", attack_iv, 0, 15)?;
    check_range("defense iv", defense_iv, 0, 15)?;
    check_range("speed iv", speed_iv, 0, 15)?;
    check_range("special iv", special_iv, 0, 15)?;

    let type_index = ((attack_iv & 3) << 2) | (defense_iv & 3);

    let msb_sum = 8 * (attack_iv >> 3)
        + 4 * (defense_iv >> 3)
        + 2 * (speed_iv >> 3)
        + (special_iv >> 3);
    let base_power = (5 * msb_sum + (special_iv & 3)) / 2 + 31;

    Ok(HiddenPower {
        type_: HIDDEN_POWER_TYPES[type_index as usize],
        base_power,
    })
}

/// Modern Hidden Power from the six 5-bit IVs.
///
/// The least significant bit of each IV contributes 1/2/4/8/16/32 (HP,
/// Attack, Defense, Speed, Sp. Atk, Sp. Def) to the type sum; the
/// second bit contributes the same weights to the power sum. Type is
/// `sum * 15 / 63`, power is `sum * 40 / 63 + 30`, spanning [30, 70].
pub fn modern_hidden_power(
    hp_iv: u32,
    attack_iv: u32,
    defense_iv: u32,
    speed_iv: u32,
    special_attack_iv: u32,
    special_defense_iv: u32,
) -> CalcResult<HiddenPower> {
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

    let mut type_sum = 0;
    let mut power_sum = 0;
    for (bit, (_, iv)) in ivs.iter().enumerate() {
        type_sum += (iv & 1) << bit;
        power_sum += ((iv >> 1) & 1) << bit;
    }

    Ok(HiddenPower {
        type_: HIDDEN_POWER_TYPES[(type_sum * 15 / 63) as usize],
        base_power: power_sum * 40 / 63 + 30,
    })
}
