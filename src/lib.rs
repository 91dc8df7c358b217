pub mod report;
pub mod scenario;
pub mod sim;

// Convenience re-exports
pub mod types {
    pub use crate::report::{RunReport, TimerKind};
    pub use crate::scenario::Preset;
    pub use crate::sim::state::{
        SimState, Status, EARTH_RADIUS, MOON_DISTANCE, MOON_RADIUS,
    };
}
