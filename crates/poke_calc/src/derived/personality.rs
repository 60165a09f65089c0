//! Personality-value generation: the one inverse problem in the crate.
//!
//! Given a species and the attributes a PID is supposed to encode, find
//! a 32-bit value that satisfies all of them at once. The low byte is
//! constrained by gender and the ability bit, the whole value modulo 25
//! by the nature, and the half-word XOR against the trainer ID by
//! shininess. The search fixes the low half-word and solves for the
//! high one, so it never scans anywhere near the full 32-bit space.

use crate::dex::{species_entry, GenderRatio};
use crate::derived::gender::{modern_pokemon_gender, Gender};
use crate::derived::nature::{nature_from_pid, Nature};
use crate::derived::shiny::modern_shiny;
use crate::error::{CalcError, CalcResult};

// 2^16 mod 25 = 11, whose inverse mod 25 is 16; solving for the high
// half-word's residue needs that inverse.
const HIGH_HALF_MOD_25_INVERSE: u32 = 16;

fn low_byte_matches_gender(
    low_byte: u32,
    ratio: GenderRatio,
    gender: Gender,
) -> CalcResult<bool> {
    Ok(match (ratio, gender) {
        (GenderRatio::Genderless, Gender::Genderless) => true,
        (GenderRatio::MaleOnly, Gender::Male) => true,
        (GenderRatio::FemaleOnly, Gender::Female) => true,
        (GenderRatio::Genderless, _)
        | (GenderRatio::MaleOnly, _)
        | (GenderRatio::FemaleOnly, _)
        | (_, Gender::Genderless) => {
            return Err(CalcError::invalid("gender", gender.name()));
        }
        (ratio, gender) => {
            let threshold = ratio.modern_threshold().unwrap_or(0) as u32;
            match gender {
                Gender::Female => low_byte < threshold,
                _ => low_byte >= threshold,
            }
        }
    })
}

/// Search for a PID encoding the requested attributes.
///
/// `ability` must be one of the species' ability names; for dual-ability
/// species it pins the PID's lowest bit. Fails with an invalid-argument
/// error when the combination is impossible for the species.
pub fn generate_personality(
    species: &str,
    trainer_id: u32,
    shiny: bool,
    ability: &str,
    gender: Gender,
    nature: Nature,
) -> CalcResult<u32> {
    let entry = species_entry(species)?;

    let ability_index = entry
        .abilities
        .iter()
        .position(|&a| a == ability)
        .ok_or_else(|| CalcError::invalid("ability", ability))?;
    let pin_ability_bit = entry.abilities.len() > 1;

    let tid_xor = (trainer_id >> 16) ^ (trainer_id & 0xFFFF);
    let want = nature as u32;

    for low_half in 0..=0xFFFFu32 {
        let low_byte = low_half & 0xFF;
        if !low_byte_matches_gender(low_byte, entry.gender_ratio, gender)? {
            continue;
        }
        if pin_ability_bit && low_half & 1 != ability_index as u32 {
            continue;
        }

        if shiny {
            // Any high half with pid_xor ^ tid_xor < 8 works; try all 8.
            for offset in 0..8 {
                let high_half = low_half ^ tid_xor ^ offset;
                let pid = (high_half << 16) | low_half;
                if pid % 25 == want {
                    debug_assert!(verify(pid, species, trainer_id, shiny, gender, nature));
                    return Ok(pid);
                }
            }
        } else {
            // Solve high_half mod 25 directly, then step by 25.
            let residue =
                (want + 25 - low_half % 25) % 25 * HIGH_HALF_MOD_25_INVERSE % 25;
            let mut high_half = residue;
            while high_half <= 0xFFFF {
                let pid = (high_half << 16) | low_half;
                if !modern_shiny(pid, trainer_id) {
                    debug_assert!(verify(pid, species, trainer_id, shiny, gender, nature));
                    return Ok(pid);
                }
                high_half += 25;
            }
        }
    }

    Err(CalcError::invalid("nature", nature.name()))
}

fn verify(
    pid: u32,
    species: &str,
    trainer_id: u32,
    shiny: bool,
    gender: Gender,
    nature: Nature,
) -> bool {
    nature_from_pid(pid) == nature
        && modern_shiny(pid, trainer_id) == shiny
        && modern_pokemon_gender(species, pid) == Ok(gender)
}
