//! poke_calc - Generation-aware Pokemon mechanics calculation engine
//!
//! Pure functions over plain numeric and string inputs: move powers,
//! critical hits, damage, type effectiveness, stats, and everything a
//! personality value encodes. No shared state, no I/O; every function
//! validates its domain and returns a [`CalcResult`].

/// Error taxonomy and validation helpers
pub mod error;

/// Type enum and the generation-aware effectiveness chart
pub mod types;

/// Read-only species and item tables
pub mod dex;

/// The general damage formula
pub mod damage;

/// Critical-hit chance and modifier tables
pub mod critical;

/// Game Boy and modern stat formulas
pub mod stats;

/// Variable-power move calculators
pub mod moves;

/// Natural Gift berry lookup
pub mod natural_gift;

/// PID- and IV-derived attributes
pub mod derived;

/// Latest generation the tables cover.
pub const MAX_GENERATION: u8 = 6;

// Re-export the surface most callers want without the module paths.
pub use damage::damage;
pub use derived::{
    gen2_hidden_power, gen2_pokemon_gender, gen2_shiny, gen2_unown_form,
    gen3_unown_form, generate_personality, modern_hidden_power, modern_pokemon_gender,
    modern_shiny, nature_from_pid, pokemon_size, spinda_spot_offset,
    wurmple_becomes_silcoon, Gender, HiddenPower, Nature, SpindaCoords, SpindaSpots,
};
pub use error::{CalcError, CalcResult};
pub use natural_gift::{natural_gift_stats, NaturalGift};
pub use stats::{gb_stat, gb_stat_range, modern_stat, modern_stat_range, Stat};
pub use types::{type_damage_modifier, Type};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crate_surface_is_wired() {
        assert_eq!(Type::from_name("Fire"), Ok(Type::Fire));
        assert_eq!(nature_from_pid(3), Nature::Adamant);
        assert_eq!(moves::brine_power(4, 10), Ok(130));
        assert_eq!(critical::critical_hit_modifier(6), Ok(1.5));
    }

    #[test]
    fn test_generation_ceiling_is_global() {
        assert!(type_damage_modifier(MAX_GENERATION, Type::Fire, Type::Grass).is_ok());
        assert!(type_damage_modifier(MAX_GENERATION + 1, Type::Fire, Type::Grass).is_err());
    }
}
