//! Attributes derived from the personality value and IVs.
//!
//! A personality value (PID) is a 32-bit integer rolled once when a
//! Pokemon is generated; everything here is a pure function of it (plus
//! species data, trainer ID or IVs where the mechanic calls for them).

pub mod form;
pub mod gender;
pub mod hidden_power;
pub mod nature;
pub mod personality;
pub mod shiny;
pub mod size;
pub mod spinda;

pub use form::{gen2_unown_form, gen3_unown_form, wurmple_becomes_silcoon};
pub use gender::{gen2_pokemon_gender, modern_pokemon_gender, Gender};
pub use hidden_power::{gen2_hidden_power, modern_hidden_power, HiddenPower};
pub use nature::{nature_from_pid, Nature};
pub use personality::generate_personality;
pub use shiny::{gen2_shiny, modern_shiny};
pub use size::pokemon_size;
pub use spinda::{spinda_spot_offset, SpindaCoords, SpindaSpots};
