//! Stat formulas for the Game Boy era and for Generation 3 onward.
//!
//! The two eras disagree about almost everything: IV width (4 vs 5 bits),
//! the EV term (square-rooted stat experience vs a flat quarter), and
//! whether natures exist. Both formulas floor at every integer division.

use serde::{Deserialize, Serialize};

use crate::error::{check_range, CalcError, CalcResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Stat {
    Hp = 0,
    Attack = 1,
    Defense = 2,
    Speed = 3,
    /// The combined Special stat, Gens 1-2 only.
    Special = 4,
    SpecialAttack = 5,
    SpecialDefense = 6,
}

impl Stat {
    pub fn name(self) -> &'static str {
        match self {
            Stat::Hp => "HP",
            Stat::Attack => "Attack",
            Stat::Defense => "Defense",
            Stat::Speed => "Speed",
            Stat::Special => "Special",
            Stat::SpecialAttack => "Special Attack",
            Stat::SpecialDefense => "Special Defense",
        }
    }

    pub fn from_name(name: &str) -> CalcResult<Stat> {
        match name {
            "HP" => Ok(Stat::Hp),
            "Attack" => Ok(Stat::Attack),
            "Defense" => Ok(Stat::Defense),
            "Speed" => Ok(Stat::Speed),
            "Special" => Ok(Stat::Special),
            "Special Attack" => Ok(Stat::SpecialAttack),
            "Special Defense" => Ok(Stat::SpecialDefense),
            _ => Err(CalcError::invalid("stat", name)),
        }
    }
}

/// Stat experience term: `floor(min(255, ceil(sqrt(ev))) / 4)`.
///
/// The byte cap matters: without it the maximal case lands one point high.
fn gb_ev_term(ev: u32) -> u32 {
    let root = (ev as f64).sqrt().ceil() as u32;
    root.min(255) / 4
}

/// Game Boy era (Gens 1-2) stat formula.
///
/// Accepts HP, Attack, Defense, Speed and Special; the split special stats
/// do not exist in this era and are rejected as invalid arguments.
pub fn gb_stat(stat: Stat, base_stat: u32, iv: u32, ev: u32, level: u32) -> CalcResult<u32> {
    if matches!(stat, Stat::SpecialAttack | Stat::SpecialDefense) {
        return Err(CalcError::invalid("stat", stat.name()));
    }
    check_range("base stat", base_stat, 1, 255)?;
    check_range("iv", iv, 0, 15)?;
    check_range("ev", ev, 0, 65535)?;
    check_range("level", level, 1, 255)?;

    let core = ((base_stat + iv) * 2 + gb_ev_term(ev)) * level / 100;
    Ok(match stat {
        Stat::Hp => core + level + 10,
        _ => core + 5,
    })
}

/// Modern (Gen 3+) stat formula with nature multiplier.
///
/// `nature_modifier` must be exactly 0.9, 1.0 or 1.1; anything else is an
/// invalid argument, not a range error, since the legal domain is a set.
/// HP ignores the nature entirely.
pub fn modern_stat(
    stat: Stat,
    base_stat: u32,
    nature_modifier: f64,
    level: u32,
    ev: u32,
    iv: u32,
) -> CalcResult<u32> {
    if stat == Stat::Special {
        return Err(CalcError::invalid("stat", stat.name()));
    }
    if nature_modifier != 0.9 && nature_modifier != 1.0 && nature_modifier != 1.1 {
        return Err(CalcError::invalid("nature modifier", nature_modifier));
    }
    check_range("base stat", base_stat, 1, 255)?;
    check_range("level", level, 1, 255)?;
    check_range("ev", ev, 0, 255)?;
    check_range("iv", iv, 0, 31)?;

    let core = (2 * base_stat + iv + ev / 4) * level / 100;
    Ok(match stat {
        Stat::Hp => core + level + 10,
        _ => ((core + 5) as f64 * nature_modifier) as u32,
    })
}

/// Min/max pair over all legal IV/EV combinations for the GB formula.
pub fn gb_stat_range(stat: Stat, base_stat: u32, level: u32) -> CalcResult<(u32, u32)> {
    let min = gb_stat(stat, base_stat, 0, 0, level)?;
    let max = gb_stat(stat, base_stat, 15, 65535, level)?;
    Ok((min, max))
}

/// Min/max pair over all legal IV/EV/nature combinations for the modern
/// formula. HP takes no nature multiplier in either direction.
pub fn modern_stat_range(stat: Stat, base_stat: u32, level: u32) -> CalcResult<(u32, u32)> {
    let min = modern_stat(stat, base_stat, 0.9, level, 0, 0)?;
    let max = modern_stat(stat, base_stat, 1.1, level, 255, 31)?;
    Ok((min, max))
}
