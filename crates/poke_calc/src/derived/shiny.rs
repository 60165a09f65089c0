//! Shininess checks for both eras.
//!
//! Gen 2 stores no PID, so shininess is a fixed IV pattern. From Gen 3
//! the check XORs the PID halves against the trainer ID halves.

use crate::error::{check_range, CalcResult};

/// Attack IVs whose middle two bits are both set, the Gen 2 shiny set.
const GEN2_SHINY_ATTACK_IVS: [u32; 8] = [2, 3, 6, 7, 10, 11, 14, 15];

/// Gen 2 shininess: Defense, Speed and Special IVs locked at 10, Attack
/// IV in one of eight values.
pub fn gen2_shiny(
    attack_iv: u32,
    defense_iv: u32,
    speed_iv: u32,
    special_iv: u32,
) -> CalcResult<bool> {
    check_range("attack iv", attack_iv, 0, 15)?;
    check_range("defense iv", defense_iv, 0, 15)?;
    check_range("speed iv", speed_iv, 0, 15)?;
    check_range("special iv", special_iv, 0, 15)?;

    Ok(defense_iv == 10
        && speed_iv == 10
        && special_iv == 10
        && GEN2_SHINY_ATTACK_IVS.contains(&attack_iv))
}

/// Modern shininess: `(pid_hi ^ pid_lo) ^ (tid ^ sid) < 8`.
///
/// `trainer_id` carries the secret ID in its high half and the public
/// ID in its low half.
pub fn modern_shiny(pid: u32, trainer_id: u32) -> bool {
    let pid_xor = (pid >> 16) ^ (pid & 0xFFFF);
    let tid_xor = (trainer_id >> 16) ^ (trainer_id & 0xFFFF);
    (pid_xor ^ tid_xor) < 8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gen2_shiny_pattern() {
        assert_eq!(gen2_shiny(2, 10, 10, 10), Ok(true));
        assert_eq!(gen2_shiny(15, 10, 10, 10), Ok(true));
        // Attack IV outside the eight shiny values.
        assert_eq!(gen2_shiny(1, 10, 10, 10), Ok(false));
        // Any of the locked IVs off 10 breaks the pattern.
        assert_eq!(gen2_shiny(2, 9, 10, 10), Ok(false));
        assert_eq!(gen2_shiny(2, 10, 11, 10), Ok(false));
        assert_eq!(gen2_shiny(2, 10, 10, 0), Ok(false));
    }

    #[test]
    fn test_gen2_iv_domain() {
        assert!(gen2_shiny(16, 10, 10, 10).is_err());
        assert!(gen2_shiny(2, 10, 10, 16).is_err());
    }

    #[test]
    fn test_modern_shiny_reference_pair() {
        assert!(modern_shiny(2814471828, 2545049318));
    }

    #[test]
    fn test_modern_shiny_threshold() {
        // pid halves XOR to 0; trainer halves XOR to 7 (shiny) or 8 (not).
        assert!(modern_shiny(0x12341234, 0x00000007));
        assert!(!modern_shiny(0x12341234, 0x00000008));
        assert!(modern_shiny(0, 0));
    }

    #[test]
    fn test_modern_shiny_is_symmetric_in_halves() {
        // Swapping the 16-bit halves of either input cannot change the XOR.
        assert_eq!(
            modern_shiny(0xABCD1234, 0x9999AAAA),
            modern_shiny(0x1234ABCD, 0xAAAA9999),
        );
    }
}
