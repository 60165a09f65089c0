//! Variable-power move calculators.
//!
//! Grouped by the input that drives the power: remaining HP, speed,
//! weight, hit sequence, stat stages, or a held item/counter. Every
//! function validates its domain before computing and returns
//! [`CalcError`](crate::error::CalcError) on bad input.

pub mod hp;
pub mod multi_hit;
pub mod other;
pub mod speed;
pub mod stages;
pub mod weight;

pub use hp::{
    brine_power, crush_grip_power, eruption_power, flail_power, reversal_power,
    water_spout_power, wring_out_power,
};
pub use multi_hit::{
    echoed_voice_powers, fury_cutter_powers, ice_ball_powers, rollout_powers,
    triple_kick_powers,
};
pub use other::{
    fling_power, frustration_power, return_power, spit_up_power, trump_card_power,
};
pub use speed::{electro_ball_power, gyro_ball_power};
pub use stages::{power_trip_power, punishment_power, stored_power_power};
pub use weight::{grass_knot_power, heat_crash_power, heavy_slam_power, low_kick_power};
