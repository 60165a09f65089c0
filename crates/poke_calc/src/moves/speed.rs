//! Moves whose power depends on the speed matchup.

use crate::error::{check_range, CalcResult};

/// Electro Ball: the faster the user relative to the target, the harder
/// it hits. Buckets on the ratio `user / target`.
pub fn electro_ball_power(attacker_speed: u32, target_speed: u32) -> CalcResult<u32> {
    check_range("attacker speed", attacker_speed, 1, 65535)?;
    check_range("target speed", target_speed, 1, 65535)?;

    Ok(if attacker_speed < target_speed {
        40      // slower than the target
    } else if attacker_speed < target_speed * 2 {
        60
    } else if attacker_speed < target_speed * 3 {
        80
    } else if attacker_speed < target_speed * 4 {
        120
    } else {
        150     // at least four times as fast
    })
}

/// Gyro Ball inverts the matchup: `min(150, max(1, 25 * target / user))`.
pub fn gyro_ball_power(attacker_speed: u32, target_speed: u32) -> CalcResult<u32> {
    check_range("attacker speed", attacker_speed, 1, 65535)?;
    check_range("target speed", target_speed, 1, 65535)?;

    Ok((25 * target_speed / attacker_speed).clamp(1, 150))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_electro_ball_buckets() {
        assert_eq!(electro_ball_power(100, 101), Ok(40));
        assert_eq!(electro_ball_power(100, 100), Ok(60));
        assert_eq!(electro_ball_power(199, 100), Ok(60));
        assert_eq!(electro_ball_power(200, 100), Ok(80));
        assert_eq!(electro_ball_power(300, 100), Ok(120));
        assert_eq!(electro_ball_power(100, 25), Ok(150));
    }

    #[test]
    fn test_gyro_ball_clamps_both_ends() {
        assert_eq!(gyro_ball_power(25, 100), Ok(100));
        assert_eq!(gyro_ball_power(1, 65535), Ok(150));
        // Floor bottoms out at 1 against a near-stationary target.
        assert_eq!(gyro_ball_power(65535, 1), Ok(1));
        assert_eq!(gyro_ball_power(100, 100), Ok(25));
    }

    #[test]
    fn test_speed_domain() {
        assert!(electro_ball_power(0, 100).is_err());
        assert!(electro_ball_power(100, 65536).is_err());
        assert!(gyro_ball_power(100, 0).is_err());
    }
}
