//! Type chart and generation-aware effectiveness lookup.
//!
//! The Generation VI chart is the canonical table; older generations are
//! expressed as overrides on top of it (Ghost/Psychic immunity in Gen 1,
//! Ghost/Dark vs Steel resistances through Gen 5, and so on). Entries use
//! a quarter scale internally (0 = immune, 2 = 0.5x, 4 = 1x, 8 = 2x) and
//! are converted to a float multiplier at the public boundary.

use serde::{Deserialize, Serialize};

use crate::error::{check_generation, CalcError, CalcResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Type {
    Normal = 0,
    Fighting = 1,
    Flying = 2,
    Poison = 3,
    Ground = 4,
    Rock = 5,
    Bug = 6,
    Ghost = 7,
    Steel = 8,
    Fire = 9,
    Water = 10,
    Grass = 11,
    Electric = 12,
    Psychic = 13,
    Ice = 14,
    Dragon = 15,
    Dark = 16,
    Fairy = 17,
    /// The "???" type, carried by Curse and typeless states in Gens 2-4.
    Question = 18,
}

impl Type {
    pub fn name(self) -> &'static str {
        match self {
            Type::Normal => "Normal",
            Type::Fighting => "Fighting",
            Type::Flying => "Flying",
            Type::Poison => "Poison",
            Type::Ground => "Ground",
            Type::Rock => "Rock",
            Type::Bug => "Bug",
            Type::Ghost => "Ghost",
            Type::Steel => "Steel",
            Type::Fire => "Fire",
            Type::Water => "Water",
            Type::Grass => "Grass",
            Type::Electric => "Electric",
            Type::Psychic => "Psychic",
            Type::Ice => "Ice",
            Type::Dragon => "Dragon",
            Type::Dark => "Dark",
            Type::Fairy => "Fairy",
            Type::Question => "???",
        }
    }

    /// Resolve a type name. Unknown names (including "Shadow", which never
    /// appears in a mainline chart) fail with an invalid-argument error.
    pub fn from_name(name: &str) -> CalcResult<Type> {
        match name {
            "Normal" => Ok(Type::Normal),
            "Fighting" => Ok(Type::Fighting),
            "Flying" => Ok(Type::Flying),
            "Poison" => Ok(Type::Poison),
            "Ground" => Ok(Type::Ground),
            "Rock" => Ok(Type::Rock),
            "Bug" => Ok(Type::Bug),
            "Ghost" => Ok(Type::Ghost),
            "Steel" => Ok(Type::Steel),
            "Fire" => Ok(Type::Fire),
            "Water" => Ok(Type::Water),
            "Grass" => Ok(Type::Grass),
            "Electric" => Ok(Type::Electric),
            "Psychic" => Ok(Type::Psychic),
            "Ice" => Ok(Type::Ice),
            "Dragon" => Ok(Type::Dragon),
            "Dark" => Ok(Type::Dark),
            "Fairy" => Ok(Type::Fairy),
            "???" => Ok(Type::Question),
            _ => Err(CalcError::invalid("type", name)),
        }
    }

    /// First generation in which this type exists.
    pub fn introduced_in(self) -> u8 {
        match self {
            Type::Dark | Type::Steel | Type::Question => 2,
            Type::Fairy => 6,
            _ => 1,
        }
    }
}

/// Generation VI type chart on the quarter scale.
///
/// Rows are the attacking type, columns the defending type, both in
/// discriminant order (Normal..Fairy).
#[rustfmt::skip]
const MODERN_CHART: [[u8; 18]; 18] = [
    //       Nor Fig Fly Poi Gro Roc Bug Gho Ste Fir Wat Gra Ele Psy Ice Dra Dar Fai
    /* Nor */ [4,  4,  4,  4,  4,  2,  4,  0,  2,  4,  4,  4,  4,  4,  4,  4,  4,  4],
    /* Fig */ [8,  4,  2,  2,  4,  8,  2,  0,  8,  4,  4,  4,  4,  2,  8,  4,  8,  2],
    /* Fly */ [4,  8,  4,  4,  4,  2,  8,  4,  2,  4,  4,  8,  2,  4,  4,  4,  4,  4],
    /* Poi */ [4,  4,  4,  2,  2,  2,  4,  2,  0,  4,  4,  8,  4,  4,  4,  4,  4,  8],
    /* Gro */ [4,  4,  0,  8,  4,  8,  2,  4,  8,  8,  4,  2,  8,  4,  4,  4,  4,  4],
    /* Roc */ [4,  2,  8,  4,  2,  4,  8,  4,  2,  8,  4,  4,  4,  4,  8,  4,  4,  4],
    /* Bug */ [4,  2,  2,  2,  4,  4,  4,  2,  2,  2,  4,  8,  4,  8,  4,  4,  8,  2],
    /* Gho */ [0,  4,  4,  4,  4,  4,  4,  8,  4,  4,  4,  4,  4,  8,  4,  4,  2,  4],
    /* Ste */ [4,  4,  4,  4,  4,  8,  4,  4,  2,  2,  2,  4,  2,  4,  8,  4,  4,  8],
    /* Fir */ [4,  4,  4,  4,  4,  2,  8,  4,  8,  2,  2,  8,  4,  4,  8,  2,  4,  4],
    /* Wat */ [4,  4,  4,  4,  8,  8,  4,  4,  4,  8,  2,  2,  4,  4,  4,  2,  4,  4],
    /* Gra */ [4,  4,  2,  2,  8,  8,  2,  4,  2,  2,  8,  2,  4,  4,  4,  2,  4,  4],
    /* Ele */ [4,  4,  8,  4,  0,  4,  4,  4,  4,  4,  8,  2,  2,  4,  4,  2,  4,  4],
    /* Psy */ [4,  8,  4,  8,  4,  4,  4,  4,  2,  4,  4,  4,  4,  2,  4,  4,  0,  4],
    /* Ice */ [4,  4,  8,  4,  8,  4,  4,  4,  2,  2,  2,  8,  4,  4,  2,  8,  4,  4],
    /* Dra */ [4,  4,  4,  4,  4,  4,  4,  4,  2,  4,  4,  4,  4,  4,  4,  8,  4,  0],
    /* Dar */ [4,  2,  4,  4,  4,  4,  4,  8,  4,  4,  4,  4,  4,  8,  4,  4,  2,  2],
    /* Fai */ [4,  8,  4,  2,  4,  4,  4,  4,  2,  2,  4,  4,  4,  4,  4,  8,  8,  4],
];

/// Per-generation entries that differ from the Generation VI chart.
fn chart_override(generation: u8, attacking: Type, defending: Type) -> Option<u8> {
    if generation == 1 {
        match (attacking, defending) {
            // Gen 1 had Bug and Poison super effective against each other.
            (Type::Bug, Type::Poison) => return Some(8),
            (Type::Poison, Type::Bug) => return Some(8),
            // The famous Ghost vs Psychic immunity bug.
            (Type::Ghost, Type::Psychic) => return Some(0),
            (Type::Ice, Type::Fire) => return Some(4),
            _ => {}
        }
    }
    if (2..=5).contains(&generation) {
        // Steel resisted Ghost and Dark until its Gen 6 trim.
        match (attacking, defending) {
            (Type::Ghost, Type::Steel) | (Type::Dark, Type::Steel) => return Some(2),
            _ => {}
        }
    }
    None
}

fn check_type_available(param: &'static str, t: Type, generation: u8) -> CalcResult<()> {
    let available = match t {
        Type::Question => (2..=4).contains(&generation),
        _ => generation >= t.introduced_in(),
    };
    if !available {
        return Err(CalcError::invalid(param, t.name()));
    }
    Ok(())
}

/// Damage multiplier for `attacking` hitting `defending` in `generation`.
///
/// Both types must exist in the generation: Dark and Steel are rejected
/// before Gen 2, Fairy before Gen 6, and "???" outside Gens 2-4. The "???"
/// type is neutral in both directions where it is legal.
pub fn type_damage_modifier(
    generation: u8,
    attacking: Type,
    defending: Type,
) -> CalcResult<f64> {
    check_generation(generation, 1)?;
    check_type_available("attacking type", attacking, generation)?;
    check_type_available("defending type", defending, generation)?;

    if attacking == Type::Question || defending == Type::Question {
        return Ok(1.0);
    }

    let quarter = chart_override(generation, attacking, defending)
        .unwrap_or(MODERN_CHART[attacking as usize][defending as usize]);
    Ok(quarter as f64 / 4.0)
}
