use std::fmt;

use nalgebra::Vector2;

use crate::scenario::Preset;

// ---------------------------------------------------------------------------
// Physical constants (SI units: meters, kilograms, seconds)
// ---------------------------------------------------------------------------

/// Average Earth-Moon separation, m. Also the unit presets are written in.
pub const MOON_DISTANCE: f64 = 3.84399e8;
pub const EARTH_RADIUS: f64 = 6.3781e6;
pub const MOON_RADIUS: f64 = 1.7374e6;

/// Gravitational constant with the attraction sign folded in, so the
/// per-body force terms below are plain additions.
pub const GRAV_CONST: f64 = -6.67430e-11;
pub const EARTH_MASS: f64 = 5.972e24;
pub const MOON_MASS: f64 = 7.342e22;

/// Moon sidereal period: 27 d 7 h 43 min 12 s.
pub const MOON_SIDEREAL_S: f64 = 27.0 * 24.0 * 60.0 * 60.0 + 7.0 * 3600.0 + 43.0 * 60.0 + 12.0;

/// Moon position for a given angle. Earth sits at the origin.
pub fn moon_position(angle: f64) -> Vector2<f64> {
    Vector2::new(MOON_DISTANCE * angle.cos(), MOON_DISTANCE * angle.sin())
}

// ---------------------------------------------------------------------------
// Ship status
// ---------------------------------------------------------------------------

/// Outcome of the simulation. `InOrbit` is the only non-terminal state;
/// the engine makes at most one transition per run and it ends the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    InOrbit,
    BurnedUp,
    LunarImpact,
    Escaped,
}

impl Status {
    pub fn is_terminal(self) -> bool {
        self != Status::InOrbit
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Status::InOrbit => "in orbit",
            Status::BurnedUp => "Burned up in Earth atmosphere!",
            Status::LunarImpact => "Blasted new crater into Moon!",
            Status::Escaped => "Escape velocity! Lost in space!",
        };
        f.write_str(s)
    }
}

// ---------------------------------------------------------------------------
// Simulation state
// ---------------------------------------------------------------------------

/// Complete mutable state of one simulation run.
///
/// Created once per run from a [`Preset`], advanced step-by-step by
/// [`crate::sim::engine`], frozen the moment `status` turns terminal.
/// Never reused across runs.
#[derive(Debug, Clone)]
pub struct SimState {
    pub moon_angle: f64,        // rad, counterclockwise from +x
    pub moon: Vector2<f64>,     // m, derived from moon_angle every step
    pub ship: Vector2<f64>,     // m
    pub vel: Vector2<f64>,      // m/s
    pub sim_time: f64,          // s, simulated elapsed time
    pub dt: f64,                // s, fixed integration step
    pub steps: u64,
    pub orbits: u64,            // upward x-axis crossings
    pub status: Status,

    // Derived once at initialization
    pub earth_mu: f64,          // GRAV_CONST * EARTH_MASS (negative)
    pub moon_mu: f64,           // GRAV_CONST * MOON_MASS (negative)
    pub moon_step: f64,         // rad the Moon advances per time step

    /// Description of the preset this run started from; carried into snapshots.
    pub origin: String,
}

impl SimState {
    /// Build the initial state from a preset. Positions scale from Moon
    /// distances to meters here, once; velocities are taken verbatim.
    /// Clamping at selection time means there are no failure modes.
    pub fn from_preset(preset: &Preset) -> SimState {
        let moon_angle = preset.moon_degrees.to_radians();
        SimState {
            moon_angle,
            moon: moon_position(moon_angle),
            ship: Vector2::new(
                MOON_DISTANCE * preset.ship_x_md,
                MOON_DISTANCE * preset.ship_y_md,
            ),
            vel: Vector2::new(preset.vx, preset.vy),
            sim_time: 0.0,
            dt: preset.dt,
            steps: 0,
            orbits: 0,
            status: Status::InOrbit,
            earth_mu: GRAV_CONST * EARTH_MASS,
            moon_mu: GRAV_CONST * MOON_MASS,
            // The Moon orbits counterclockwise 360 degrees per sidereal period.
            moon_step: (360.0 * preset.dt / MOON_SIDEREAL_S).to_radians(),
            origin: preset.description.clone(),
        }
    }

    /// Distance from Earth's center, in Moon distances. Debug aid.
    pub fn moon_units(&self) -> f64 {
        self.ship.x.hypot(self.ship.y) / MOON_DISTANCE
    }

    /// Current ship speed, m/s.
    pub fn speed(&self) -> f64 {
        self.vel.x.hypot(self.vel.y)
    }

    /// Capture the current state as a preset-shaped record, positions
    /// re-expressed in Moon distances. Feeding it back through
    /// [`SimState::from_preset`] resumes from this instant.
    pub fn snapshot(&self) -> Preset {
        Preset {
            moon_degrees: self.moon_angle.to_degrees(),
            ship_x_md: self.ship.x / MOON_DISTANCE,
            ship_y_md: self.ship.y / MOON_DISTANCE,
            vx: self.vel.x,
            vy: self.vel.y,
            dt: self.dt,
            description: format!("Snapshot from: {}", self.origin),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenario;

    #[test]
    fn sidereal_period_in_seconds() {
        assert_eq!(MOON_SIDEREAL_S, 2_360_592.0);
    }

    #[test]
    fn initializer_converts_units() {
        let p = scenario::preset(1); // 60 deg, 1.1 md, vy=1000, dt=30
        let s = SimState::from_preset(&p);

        assert_eq!(s.moon_angle, 60.0_f64.to_radians());
        assert_eq!(s.ship.x, 1.1 * MOON_DISTANCE);
        assert_eq!(s.ship.y, 0.0);
        assert_eq!(s.vel.x, 0.0);
        assert_eq!(s.vel.y, 1000.0);
        assert_eq!(s.dt, 30.0);
        assert_eq!(s.steps, 0);
        assert_eq!(s.orbits, 0);
        assert_eq!(s.status, Status::InOrbit);
    }

    #[test]
    fn gravitational_terms_are_negative_products() {
        let s = SimState::from_preset(&scenario::preset(1));
        assert_eq!(s.earth_mu, GRAV_CONST * EARTH_MASS);
        assert_eq!(s.moon_mu, GRAV_CONST * MOON_MASS);
        assert!(s.earth_mu < 0.0);
        assert!(s.moon_mu < 0.0);
    }

    #[test]
    fn moon_step_matches_sidereal_rate() {
        let s = SimState::from_preset(&scenario::preset(1));
        assert_eq!(s.moon_step, (360.0 * 30.0 / MOON_SIDEREAL_S).to_radians());
    }

    #[test]
    fn moon_position_derived_from_angle() {
        let s = SimState::from_preset(&scenario::preset(1));
        assert_eq!(s.moon, moon_position(s.moon_angle));
        assert_eq!(s.moon.x, MOON_DISTANCE * s.moon_angle.cos());
        assert_eq!(s.moon.y, MOON_DISTANCE * s.moon_angle.sin());
    }

    #[test]
    fn snapshot_round_trips_into_preset() {
        let p = scenario::preset(19);
        let s = SimState::from_preset(&p);
        let snap = s.snapshot();

        assert!((snap.moon_degrees - p.moon_degrees).abs() < 1e-12);
        assert!((snap.ship_x_md - p.ship_x_md).abs() < 1e-15);
        assert_eq!(snap.vx, p.vx);
        assert_eq!(snap.vy, p.vy);
        assert_eq!(snap.dt, p.dt);
        assert_eq!(snap.description, format!("Snapshot from: {}", p.description));

        // And the snapshot is itself a usable preset.
        let resumed = SimState::from_preset(&snap);
        assert_eq!(resumed.status, Status::InOrbit);
    }

    #[test]
    fn status_terminality() {
        assert!(!Status::InOrbit.is_terminal());
        assert!(Status::BurnedUp.is_terminal());
        assert!(Status::LunarImpact.is_terminal());
        assert!(Status::Escaped.is_terminal());
    }
}
