//! Item- and counter-driven power calculators.

use crate::dex::FLING_POWERS;
use crate::error::{check_range, CalcError, CalcResult};

/// Fling's power comes from the held item's table entry. Unknown items
/// are invalid arguments rather than a default power, since an item
/// absent from the table cannot be flung at all.
pub fn fling_power(item: &str) -> CalcResult<u32> {
    FLING_POWERS
        .get(item)
        .copied()
        .ok_or_else(|| CalcError::invalid("item", item))
}

/// Frustration: stronger the *less* the user likes you.
/// `max(1, (255 - friendship) * 2 / 5)`.
pub fn frustration_power(friendship: i32) -> CalcResult<u32> {
    check_range("friendship", friendship, 0, 255)?;
    Ok((((255 - friendship) * 2 / 5) as u32).max(1))
}

/// Return mirrors Frustration: `max(1, friendship * 2 / 5)`.
pub fn return_power(friendship: i32) -> CalcResult<u32> {
    check_range("friendship", friendship, 0, 255)?;
    Ok(((friendship * 2 / 5) as u32).max(1))
}

/// Spit Up: 100 power per stored Stockpile. Zero stockpiles means the
/// move fails outright, which callers see as 0 power.
pub fn spit_up_power(stockpile_count: u32) -> CalcResult<u32> {
    check_range("stockpile count", stockpile_count, 0, 3)?;
    Ok(100 * stockpile_count)
}

/// Trump Card rises as the move's remaining PP falls.
pub fn trump_card_power(pp_remaining: u32) -> CalcResult<u32> {
    check_range("pp remaining", pp_remaining, 0, 8)?;
    Ok(match pp_remaining {
        0 => 200,   // last-gasp use via PP-draining effects
        1 => 80,
        2 => 60,
        3 => 50,
        _ => 40,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fling_lookup() {
        assert_eq!(fling_power("Iron Ball"), Ok(130));
        assert_eq!(fling_power("Sharp Beak"), Ok(50));
        assert!(matches!(
            fling_power("Leftovers"),
            Err(CalcError::InvalidArgument { .. })
        ));
    }

    #[test]
    fn test_frustration_extremes() {
        assert_eq!(frustration_power(0), Ok(102));
        assert_eq!(frustration_power(255), Ok(1));
        assert_eq!(frustration_power(128), Ok(50));
        assert!(frustration_power(-1).is_err());
        assert!(frustration_power(256).is_err());
    }

    #[test]
    fn test_return_mirrors_frustration() {
        assert_eq!(return_power(255), Ok(102));
        assert_eq!(return_power(0), Ok(1));
        // The two formulas cross at the midpoint.
        assert_eq!(return_power(128), frustration_power(127));
        assert!(return_power(300).is_err());
    }

    #[test]
    fn test_spit_up_per_stockpile() {
        assert_eq!(spit_up_power(0), Ok(0));
        assert_eq!(spit_up_power(1), Ok(100));
        assert_eq!(spit_up_power(3), Ok(300));
        assert!(spit_up_power(4).is_err());
    }

    #[test]
    fn test_trump_card_ladder() {
        assert_eq!(trump_card_power(0), Ok(200));
        assert_eq!(trump_card_power(1), Ok(80));
        assert_eq!(trump_card_power(2), Ok(60));
        assert_eq!(trump_card_power(3), Ok(50));
        assert_eq!(trump_card_power(4), Ok(40));
        assert_eq!(trump_card_power(8), Ok(40));
        assert!(trump_card_power(9).is_err());
    }
}
