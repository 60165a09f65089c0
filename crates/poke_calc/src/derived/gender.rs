//! Gender determination.
//!
//! Gen 2 compares the Attack IV against a per-species threshold; Gen 3
//! onward compares the PID's low byte. Both are strict table lookups
//! with no randomness of their own.

use serde::{Deserialize, Serialize};

use crate::dex::{species_entry, GenderRatio};
use crate::error::{check_range, CalcError, CalcResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
    Genderless,
}

impl Gender {
    pub fn name(self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Genderless => "Genderless",
        }
    }

    pub fn from_name(name: &str) -> CalcResult<Gender> {
        match name {
            "Male" => Ok(Gender::Male),
            "Female" => Ok(Gender::Female),
            "Genderless" => Ok(Gender::Genderless),
            _ => Err(CalcError::invalid("gender", name)),
        }
    }
}

/// Gen 2 gender from the Attack IV: female at or below the threshold.
pub fn gen2_pokemon_gender(species: &str, attack_iv: u32) -> CalcResult<Gender> {
    check_range("attack iv", attack_iv, 0, 15)?;
    let entry = species_entry(species)?;

    Ok(match entry.gender_ratio {
        GenderRatio::Genderless => Gender::Genderless,
        GenderRatio::MaleOnly => Gender::Male,
        GenderRatio::FemaleOnly => Gender::Female,
        ratio => {
            let threshold = ratio.gen2_threshold().unwrap_or(0);
            if attack_iv <= threshold as u32 {
                Gender::Female
            } else {
                Gender::Male
            }
        }
    })
}

/// Modern gender from the PID low byte: female strictly below the
/// threshold.
pub fn modern_pokemon_gender(species: &str, pid: u32) -> CalcResult<Gender> {
    let entry = species_entry(species)?;

    Ok(match entry.gender_ratio {
        GenderRatio::Genderless => Gender::Genderless,
        GenderRatio::MaleOnly => Gender::Male,
        GenderRatio::FemaleOnly => Gender::Female,
        ratio => {
            let threshold = ratio.modern_threshold().unwrap_or(0);
            if (pid & 0xFF) < threshold as u32 {
                Gender::Female
            } else {
                Gender::Male
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CalcError;

    #[test]
    fn test_gen2_threshold_is_inclusive() {
        // Even split: threshold 7, female at or below.
        assert_eq!(gen2_pokemon_gender("Pikachu", 7), Ok(Gender::Female));
        assert_eq!(gen2_pokemon_gender("Pikachu", 8), Ok(Gender::Male));
        // 7/8 male: only Attack IV 0 and 1 are female.
        assert_eq!(gen2_pokemon_gender("Bulbasaur", 1), Ok(Gender::Female));
        assert_eq!(gen2_pokemon_gender("Bulbasaur", 2), Ok(Gender::Male));
    }

    #[test]
    fn test_gen2_fixed_genders() {
        assert_eq!(gen2_pokemon_gender("Magnemite", 0), Ok(Gender::Genderless));
        assert_eq!(gen2_pokemon_gender("Tauros", 0), Ok(Gender::Male));
        assert_eq!(gen2_pokemon_gender("Chansey", 15), Ok(Gender::Female));
    }

    #[test]
    fn test_modern_threshold_is_strict() {
        // Even split: threshold 127, female strictly below.
        assert_eq!(modern_pokemon_gender("Pikachu", 126), Ok(Gender::Female));
        assert_eq!(modern_pokemon_gender("Pikachu", 127), Ok(Gender::Male));
        // Only the low byte matters.
        assert_eq!(modern_pokemon_gender("Pikachu", 0xFFFFFF00), Ok(Gender::Female));
        assert_eq!(modern_pokemon_gender("Pikachu", 2814471828), Ok(Gender::Male));
    }

    #[test]
    fn test_modern_fixed_genders() {
        assert_eq!(modern_pokemon_gender("Ditto", 0), Ok(Gender::Genderless));
        assert_eq!(modern_pokemon_gender("Hitmonlee", 0), Ok(Gender::Male));
        assert_eq!(modern_pokemon_gender("Jynx", u32::MAX), Ok(Gender::Female));
    }

    #[test]
    fn test_domain() {
        assert!(matches!(
            gen2_pokemon_gender("Pikachu", 16),
            Err(CalcError::OutOfRange { .. })
        ));
        assert!(matches!(
            modern_pokemon_gender("Missingno", 0),
            Err(CalcError::InvalidArgument { .. })
        ));
    }

    #[test]
    fn test_name_round_trip() {
        for gender in [Gender::Male, Gender::Female, Gender::Genderless] {
            assert_eq!(Gender::from_name(gender.name()), Ok(gender));
        }
        assert!(Gender::from_name("Unknown").is_err());
    }
}
