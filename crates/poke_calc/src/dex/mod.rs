//! Read-only lookup tables consumed by the calculators.

pub mod items;
pub mod species;

pub use items::{BerryData, FLING_POWERS, NATURAL_GIFT_BERRIES};
pub use species::{species_entry, GenderRatio, SpeciesData, SPECIES};
