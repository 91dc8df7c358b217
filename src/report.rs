use std::time::Instant;

use cpu_time::ProcessTime;

use crate::scenario::Preset;
use crate::sim::engine;
use crate::sim::state::{SimState, Status};

// ---------------------------------------------------------------------------
// Timing
// ---------------------------------------------------------------------------

/// Floor applied to the measured duration when dividing, seconds. Keeps
/// steps/second finite on runs shorter than the clock granularity.
const MIN_ELAPSED: f64 = 0.001;

/// Which clock brackets the integration loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimerKind {
    /// Process CPU time. Excludes OS interruptions and other processes,
    /// so it isolates raw throughput better. The default.
    #[default]
    Cpu,
    /// Wall clock. Includes scheduler noise and overheads.
    Wall,
}

// ---------------------------------------------------------------------------
// Run report
// ---------------------------------------------------------------------------

/// Read-only results of one benchmark run.
#[derive(Debug, Clone)]
pub struct RunReport {
    pub status: Status,
    pub steps: u64,
    pub orbits: u64,
    /// Simulated time, s.
    pub sim_time: f64,
    /// Measured processing time, s (CPU or wall per [`TimerKind`]).
    pub elapsed: f64,
    pub steps_per_second: f64,
    /// Order-sensitive digest of the final state.
    pub mashup: f64,
}

/// Initialize from the preset, run the integration loop to termination
/// bracketed by the chosen timer, and summarize.
pub fn benchmark(preset: &Preset, timer: TimerKind) -> RunReport {
    let mut state = SimState::from_preset(preset);
    let elapsed = match timer {
        TimerKind::Cpu => {
            let start = ProcessTime::now();
            engine::run(&mut state);
            start.elapsed().as_secs_f64()
        }
        TimerKind::Wall => {
            let start = Instant::now();
            engine::run(&mut state);
            start.elapsed().as_secs_f64()
        }
    };
    report(&state, elapsed)
}

/// Summarize a finished run given the measured duration.
pub fn report(state: &SimState, elapsed: f64) -> RunReport {
    RunReport {
        status: state.status,
        steps: state.steps,
        orbits: state.orbits,
        sim_time: state.sim_time,
        elapsed,
        steps_per_second: state.steps as f64 / elapsed.max(MIN_ELAPSED),
        mashup: mashup(state),
    }
}

/// Scalar digest of final position, velocity, and Moon angle. Deliberately
/// sensitive to floating-point summation order, so two platforms (or two
/// compilers) that fuse or reorder operations in the loop disagree here
/// even when both trajectories look sane.
pub fn mashup(state: &SimState) -> f64 {
    (state.ship.x * state.ship.y * state.vel.x * state.vel.y * state.moon_angle).abs()
}

/// Group digits with commas: 1234567 -> "1,234,567".
pub fn thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
