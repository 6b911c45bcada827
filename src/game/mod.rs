//! Game-side data shown by the HUD
//!
//! - stats.rs: player counters and ship gauges
//! - formulas.rs: level from XP, counter formatting

pub mod formulas;
pub mod stats;
