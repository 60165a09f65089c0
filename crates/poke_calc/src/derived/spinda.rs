//! Spinda spot placement: eight nibbles of the PID, one coordinate each.

use std::ops::{Add, AddAssign};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpindaCoords {
    pub x: u32,
    pub y: u32,
}

impl Add for SpindaCoords {
    type Output = SpindaCoords;

    fn add(self, other: SpindaCoords) -> SpindaCoords {
        SpindaCoords { x: self.x + other.x, y: self.y + other.y }
    }
}

impl AddAssign for SpindaCoords {
    fn add_assign(&mut self, other: SpindaCoords) {
        *self = *self + other;
    }
}

/// The four spots, in sprite-layer order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpindaSpots {
    pub left_ear: SpindaCoords,
    pub right_ear: SpindaCoords,
    pub left_face: SpindaCoords,
    pub right_face: SpindaCoords,
}

impl Add for SpindaSpots {
    type Output = SpindaSpots;

    fn add(self, other: SpindaSpots) -> SpindaSpots {
        SpindaSpots {
            left_ear: self.left_ear + other.left_ear,
            right_ear: self.right_ear + other.right_ear,
            left_face: self.left_face + other.left_face,
            right_face: self.right_face + other.right_face,
        }
    }
}

impl AddAssign for SpindaSpots {
    fn add_assign(&mut self, other: SpindaSpots) {
        *self = *self + other;
    }
}

fn nibble(pid: u32, index: u32) -> u32 {
    (pid >> (4 * index)) & 0xF
}

/// Spot offsets from the PID, lowest nibble first: each spot reads an
/// (x, y) nibble pair, so every offset component lies in [0, 15].
pub fn spinda_spot_offset(pid: u32) -> SpindaSpots {
    SpindaSpots {
        left_ear: SpindaCoords { x: nibble(pid, 0), y: nibble(pid, 1) },
        right_ear: SpindaCoords { x: nibble(pid, 2), y: nibble(pid, 3) },
        left_face: SpindaCoords { x: nibble(pid, 4), y: nibble(pid, 5) },
        right_face: SpindaCoords { x: nibble(pid, 6), y: nibble(pid, 7) },
    }
}
