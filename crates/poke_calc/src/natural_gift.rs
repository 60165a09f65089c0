//! Natural Gift: a berry-fueled move whose type and power come from the
//! held berry.
//!
//! The move exists from Gen 4; Gen 6 raised every berry's power by 20.
//! Fairy-type berries did not exist before Gen 6 and are rejected in
//! earlier generations like any other unavailable type.

use serde::{Deserialize, Serialize};

use crate::dex::NATURAL_GIFT_BERRIES;
use crate::error::{check_generation, CalcError, CalcResult};
use crate::types::Type;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NaturalGift {
    pub type_: Type,
    pub base_power: u32,
}

/// Resolve the held berry into the move's type and base power.
pub fn natural_gift_stats(item: &str, generation: u8) -> CalcResult<NaturalGift> {
    check_generation(generation, 4)?;

    let berry = NATURAL_GIFT_BERRIES
        .get(item)
        .ok_or_else(|| CalcError::invalid("item", item))?;
    if generation < berry.min_generation {
        return Err(CalcError::invalid("item", item));
    }

    let base_power = if generation >= 6 {
        berry.tier_power + 20
    } else {
        berry.tier_power
    };
    Ok(NaturalGift { type_: berry.type_, base_power })
}
