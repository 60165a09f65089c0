//! Natures: 25 personality-derived variants with a boosted/lowered stat
//! pair. Five of them are neutral (boost and lower the same stat).

use serde::{Deserialize, Serialize};

use crate::error::{CalcError, CalcResult};
use crate::stats::Stat;

/// The 25 natures in PID order: `pid % 25` indexes this enum directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Nature {
    Hardy = 0,
    Lonely = 1,
    Brave = 2,
    Adamant = 3,
    Naughty = 4,
    Bold = 5,
    Docile = 6,
    Relaxed = 7,
    Impish = 8,
    Lax = 9,
    Timid = 10,
    Hasty = 11,
    Serious = 12,
    Jolly = 13,
    Naive = 14,
    Modest = 15,
    Mild = 16,
    Quiet = 17,
    Bashful = 18,
    Rash = 19,
    Calm = 20,
    Gentle = 21,
    Sassy = 22,
    Careful = 23,
    Quirky = 24,
}

const NATURES: [Nature; 25] = [
    Nature::Hardy, Nature::Lonely, Nature::Brave, Nature::Adamant, Nature::Naughty,
    Nature::Bold, Nature::Docile, Nature::Relaxed, Nature::Impish, Nature::Lax,
    Nature::Timid, Nature::Hasty, Nature::Serious, Nature::Jolly, Nature::Naive,
    Nature::Modest, Nature::Mild, Nature::Quiet, Nature::Bashful, Nature::Rash,
    Nature::Calm, Nature::Gentle, Nature::Sassy, Nature::Careful, Nature::Quirky,
];

/// Row/column order of the 5x5 nature grid.
const GRID_STATS: [Stat; 5] = [
    Stat::Attack,
    Stat::Defense,
    Stat::Speed,
    Stat::SpecialAttack,
    Stat::SpecialDefense,
];

impl Nature {
    pub fn name(self) -> &'static str {
        match self {
            Nature::Hardy => "Hardy",
            Nature::Lonely => "Lonely",
            Nature::Brave => "Brave",
            Nature::Adamant => "Adamant",
            Nature::Naughty => "Naughty",
            Nature::Bold => "Bold",
            Nature::Docile => "Docile",
            Nature::Relaxed => "Relaxed",
            Nature::Impish => "Impish",
            Nature::Lax => "Lax",
            Nature::Timid => "Timid",
            Nature::Hasty => "Hasty",
            Nature::Serious => "Serious",
            Nature::Jolly => "Jolly",
            Nature::Naive => "Naive",
            Nature::Modest => "Modest",
            Nature::Mild => "Mild",
            Nature::Quiet => "Quiet",
            Nature::Bashful => "Bashful",
            Nature::Rash => "Rash",
            Nature::Calm => "Calm",
            Nature::Gentle => "Gentle",
            Nature::Sassy => "Sassy",
            Nature::Careful => "Careful",
            Nature::Quirky => "Quirky",
        }
    }

    pub fn from_name(name: &str) -> CalcResult<Nature> {
        NATURES
            .iter()
            .copied()
            .find(|n| n.name() == name)
            .ok_or_else(|| CalcError::invalid("nature", name))
    }

    /// Stat raised by 10%, `None` for the five neutral natures.
    pub fn increased_stat(self) -> Option<Stat> {
        let index = self as usize;
        if index / 5 == index % 5 {
            None
        } else {
            Some(GRID_STATS[index / 5])
        }
    }

    /// Stat lowered by 10%, `None` for the five neutral natures.
    pub fn decreased_stat(self) -> Option<Stat> {
        let index = self as usize;
        if index / 5 == index % 5 {
            None
        } else {
            Some(GRID_STATS[index % 5])
        }
    }

    /// Multiplier this nature applies to `stat`: 1.1, 0.9 or 1.0.
    /// HP is never touched by a nature.
    pub fn modifier(self, stat: Stat) -> f64 {
        if self.increased_stat() == Some(stat) {
            1.1
        } else if self.decreased_stat() == Some(stat) {
            0.9
        } else {
            1.0
        }
    }
}

/// `pid % 25`, the nature every generation since the third derives.
pub fn nature_from_pid(pid: u32) -> Nature {
    NATURES[(pid % 25) as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nature_from_pid() {
        assert_eq!(nature_from_pid(0), Nature::Hardy);
        assert_eq!(nature_from_pid(24), Nature::Quirky);
        assert_eq!(nature_from_pid(25), Nature::Hardy);
        assert_eq!(nature_from_pid(2814471828), Nature::Adamant);
        assert_eq!(nature_from_pid(1559357724), Nature::Quirky);
    }

    #[test]
    fn test_name_round_trip() {
        for nature in NATURES {
            assert_eq!(Nature::from_name(nature.name()), Ok(nature));
        }
        assert!(Nature::from_name("Zesty").is_err());
    }

    #[test]
    fn test_grid_pairs() {
        assert_eq!(Nature::Adamant.increased_stat(), Some(Stat::Attack));
        assert_eq!(Nature::Adamant.decreased_stat(), Some(Stat::SpecialAttack));
        assert_eq!(Nature::Timid.increased_stat(), Some(Stat::Speed));
        assert_eq!(Nature::Timid.decreased_stat(), Some(Stat::Attack));
        assert_eq!(Nature::Modest.increased_stat(), Some(Stat::SpecialAttack));
    }

    #[test]
    fn test_neutral_natures() {
        for nature in [
            Nature::Hardy, Nature::Docile, Nature::Serious, Nature::Bashful, Nature::Quirky,
        ] {
            assert_eq!(nature.increased_stat(), None);
            assert_eq!(nature.decreased_stat(), None);
            assert_eq!(nature.modifier(Stat::Attack), 1.0);
        }
    }

    #[test]
    fn test_modifier_values() {
        assert_eq!(Nature::Adamant.modifier(Stat::Attack), 1.1);
        assert_eq!(Nature::Adamant.modifier(Stat::SpecialAttack), 0.9);
        assert_eq!(Nature::Adamant.modifier(Stat::Speed), 1.0);
        assert_eq!(Nature::Adamant.modifier(Stat::Hp), 1.0);
    }
}
