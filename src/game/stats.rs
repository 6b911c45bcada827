//! Player and ship numbers shown on the HUD
//!
//! The client has no server connection yet, so `Default` returns mockup
//! values large enough to exercise the widest counter layouts.

/// A current/maximum pair (hit points, shield, ammo, ...)
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Gauge {
    current: u32,
    max: u32,
}

impl Gauge {
    /// Creates a gauge at its maximum
    pub fn full(max: u32) -> Self {
        Gauge { current: max, max }
    }

    pub fn current(&self) -> u32 {
        self.current
    }

    /// Fill ratio from 0.0 to 1.0 (0.0 for a zero-capacity gauge)
    pub fn percentage(&self) -> f32 {
        if self.max == 0 {
            0.0
        } else {
            self.current as f32 / self.max as f32
        }
    }
}

/// Account-wide counters shown in the header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerStats {
    pub xp: u64,
    pub honor: u64,
    pub credits: u64,
    pub uridium: u32,
    pub jackpot: u16,
}

impl Default for PlayerStats {
    fn default() -> Self {
        PlayerStats {
            xp: 1_999_888_777_666,
            honor: 111_222_333,
            credits: 999_999_999,
            uridium: 99_999_999,
            jackpot: 10_000,
        }
    }
}

/// Status of the currently flown ship
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShipStats {
    pub hit_points: Gauge,
    pub shield: Gauge,
    pub ammo: Gauge,
    pub rockets: Gauge,
    pub cargo: Gauge,
}

impl Default for ShipStats {
    fn default() -> Self {
        ShipStats {
            hit_points: Gauge::full(236_000),
            shield: Gauge::full(320_000),
            ammo: Gauge::full(220_000),
            rockets: Gauge::full(16_000),
            cargo: Gauge::full(999_999),
        }
    }
}
