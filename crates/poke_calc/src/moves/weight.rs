//! Moves whose power depends on body weight in kilograms.

use crate::error::{check_generation, check_range, CalcResult};

fn check_weight(param: &'static str, weight: f64) -> CalcResult<()> {
    check_range(param, weight, 0.1, 999.9).map(|_| ())
}

/// Grass Knot and Low Kick bucket the target's weight into six tiers.
fn weight_class_power(target_weight: f64) -> u32 {
    if target_weight >= 200.0 {
        120
    } else if target_weight >= 100.0 {
        100
    } else if target_weight >= 50.0 {
        80
    } else if target_weight >= 25.0 {
        60
    } else if target_weight >= 10.0 {
        40
    } else {
        20      // featherweights
    }
}

pub fn grass_knot_power(target_weight: f64) -> CalcResult<u32> {
    check_weight("target weight", target_weight)?;
    Ok(weight_class_power(target_weight))
}

/// Low Kick used the weight table from Gen 3 on; before that it was a
/// flat 50 base power regardless of the target.
pub fn low_kick_power(target_weight: f64, generation: u8) -> CalcResult<u32> {
    check_generation(generation, 1)?;
    check_weight("target weight", target_weight)?;
    Ok(if generation <= 2 {
        50
    } else {
        weight_class_power(target_weight)
    })
}

/// Heavy Slam and Heat Crash bucket the attacker/target weight ratio.
pub fn heavy_slam_power(attacker_weight: f64, target_weight: f64) -> CalcResult<u32> {
    check_weight("attacker weight", attacker_weight)?;
    check_weight("target weight", target_weight)?;

    let ratio = attacker_weight / target_weight;
    Ok(if ratio >= 5.0 {
        120     // five times heavier or more
    } else if ratio >= 4.0 {
        100
    } else if ratio >= 3.0 {
        80
    } else if ratio >= 2.0 {
        60
    } else {
        40
    })
}

pub fn heat_crash_power(attacker_weight: f64, target_weight: f64) -> CalcResult<u32> {
    heavy_slam_power(attacker_weight, target_weight)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grass_knot_tiers() {
        assert_eq!(grass_knot_power(0.1), Ok(20));
        assert_eq!(grass_knot_power(9.9), Ok(20));
        assert_eq!(grass_knot_power(10.0), Ok(40));
        assert_eq!(grass_knot_power(25.0), Ok(60));
        assert_eq!(grass_knot_power(50.0), Ok(80));
        assert_eq!(grass_knot_power(100.0), Ok(100));
        assert_eq!(grass_knot_power(199.9), Ok(100));
        assert_eq!(grass_knot_power(200.0), Ok(120));
        assert_eq!(grass_knot_power(999.9), Ok(120));
    }

    #[test]
    fn test_low_kick_flat_before_gen3() {
        assert_eq!(low_kick_power(999.9, 1), Ok(50));
        assert_eq!(low_kick_power(0.1, 2), Ok(50));
        assert_eq!(low_kick_power(999.9, 3), Ok(120));
        assert_eq!(low_kick_power(0.1, 6), Ok(20));
        assert!(low_kick_power(50.0, 0).is_err());
        assert!(low_kick_power(50.0, 7).is_err());
    }

    #[test]
    fn test_heavy_slam_ratio_tiers() {
        assert_eq!(heavy_slam_power(100.0, 100.0), Ok(40));
        assert_eq!(heavy_slam_power(200.0, 100.0), Ok(60));
        assert_eq!(heavy_slam_power(300.0, 100.0), Ok(80));
        assert_eq!(heavy_slam_power(400.0, 100.0), Ok(100));
        assert_eq!(heavy_slam_power(500.0, 100.0), Ok(120));
        assert_eq!(heavy_slam_power(499.9, 100.0), Ok(100));
        assert_eq!(heat_crash_power(999.9, 0.1), Ok(120));
    }

    #[test]
    fn test_weight_domain() {
        assert!(grass_knot_power(0.0).is_err());
        assert!(grass_knot_power(1000.0).is_err());
        assert!(heavy_slam_power(0.05, 100.0).is_err());
        assert!(heat_crash_power(100.0, -1.0).is_err());
    }
}
