use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Preset: one set of initial conditions
// ---------------------------------------------------------------------------

/// Initial conditions for one benchmark scenario.
///
/// Positions are expressed in Moon distances so the table stays readable;
/// velocities are already m/s. The serde names match the JSON snapshot
/// format, so a captured snapshot deserializes straight back into a
/// `Preset` for replay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Preset {
    /// Moon's starting angle around Earth, degrees counterclockwise from +x.
    #[serde(rename = "moondeg")]
    pub moon_degrees: f64,
    /// Ship x position, in Moon distances from Earth's center.
    #[serde(rename = "xmd")]
    pub ship_x_md: f64,
    /// Ship y position, in Moon distances from Earth's center.
    #[serde(rename = "ymd")]
    pub ship_y_md: f64,
    /// Ship x velocity, m/s.
    pub vx: f64,
    /// Ship y velocity, m/s.
    pub vy: f64,
    /// Integration time step, seconds.
    pub dt: f64,
    #[serde(rename = "Description")]
    pub description: String,
}

// ---------------------------------------------------------------------------
// Scenario table
// ---------------------------------------------------------------------------

// (moondeg, xmd, ymd, vx, vy, dt, description), selected by 1-based index.
// Curated so that no entry starts inside a body or at a singularity.
const SETUPS: [(f64, f64, f64, f64, f64, f64, &str); 32] = [
    (60.0, 1.1, 0.0, 0.0, 1000.0, 30.0, "9.4M steps to escape"),
    (60.0, 1.1, 0.0, 0.0, 1000.0, 60.0, "323k steps to lunar impact"),
    (60.0, 1.1, 0.0, 0.0, 1000.0, 1.0, "escape within 1B steps; small dt"),
    (60.0, 1.1, 0.0, 0.0, 1000.0, 10.0, "eventual lunar impact; medium dt"),
    (60.0, 1.1, 0.0, 0.0, 1000.0, 60.0, "eventual lunar impact; big dt"),
    (60.0, 1.1, 0.0, 0.0, 1000.0, 30.0, "8M steps to escape"),
    (0.0, 0.017, 0.0, 0.0, 9200.0, 1.0, "elliptical orbit"),
    (0.0, 0.017, 0.0, 0.0, 7900.0, 1.0, "LEO = low Earth orbit"),
    (0.0, 0.10968811, 0.0, 0.0, 3074.7937, 1.0, "geosynchronous orbit"),
    (0.0, 0.8491, 0.0, 0.0, 861.2724303351446, 10.0, "just outside L1"),
    (0.0, 0.8491, 0.0, 0.0, 861.2724303351447, 10.0, "outside 22M inside outside L1"),
    (0.0, 0.8491, 0.0, 0.0, 861.27243, 10.0, "just below L1"),
    (0.0, 0.85, 0.0, 0.0, 870.0, 10.0, "near L1"),
    (0.0, 0.90, 0.0, 0.0, 770.0, 10.0, "distant lunar orbit"),
    (135.4, 0.0168, 0.0, 0.0, 11050.0, 1.0, "escape with lunar assist"),
    (135.0, 0.0168, 0.0, 0.0, 11050.0, 1.0, "Ranger direct lunar impact"),
    (0.0, 0.995, 0.0, 0.0, 2590.0, 10.0, "Apollo 8 orbiting moon"),
    (135.0, 0.017, 0.0, 0.0, 10998.0, 1.0, "Apollo 13 safe return"),
    (135.0, 0.017, 0.0, 0.0, 10990.0, 1.0, "direct lunar impact"),
    (135.0, 0.017, 0.0, 0.0, 11000.0, 1.0, "lost Apollo 13"),
    (130.0, 0.02, 0.0, 0.0, 10080.0, 10.0, "2-orbit lunar impact"),
    (60.0, 0.8, 0.0, 400.0, 1100.0, 50.0, "failed L4; 11M steps to moon"),
    (60.0, 0.8, 0.0, 100.0, 1073.0, 10.0, "eventual lunar impact #2"),
    (60.0, 1.0, 0.0, 0.0, 900.0, 101.0, "lunar impact 1.5M loops"),
    (60.0, 1.0, 0.0, 0.0, 900.0, 60.0, "many lunar interactions"),
    (60.0, 1.0, 0.0, 0.0, 900.0, 30.0, "lunar impact, 2.2M steps"),
    (60.0, 1.0, 0.0, 0.0, 900.0, 10.0, "temporary lunar orbits then impact"),
    (55.0, 3.0, 0.0, 0.0, 0.0, 10.0, "non-fall to Earth from 3 moondistances"),
    (40.0, 5.0, 0.0, 0.0, 0.0, 1.0, "fall to Earth from 5 moondistances"),
    (60.0, 0.9, 0.0, 0.0, 950.0, 60.0, "11.85M steps to lunar impact"),
    (60.0, 0.8, 0.0, 0.0, 1073.0, 10.0, "lunar impact"),
    (60.0, 1.0, 0.0, 0.0, 923.0, 10.0, "lunar impact, vy=921-926"),
];

/// Number of scenarios in the table.
pub fn count() -> usize {
    SETUPS.len()
}

/// Clamp a 1-based scenario index into the table's valid range.
/// Zero and negative indices select the first entry, oversized indices the last.
pub fn clamp_index(index: i64) -> usize {
    index.clamp(1, SETUPS.len() as i64) as usize
}

/// Fetch one preset by 1-based index. Out-of-range indices are clamped,
/// never rejected.
pub fn preset(index: i64) -> Preset {
    let (moon_degrees, ship_x_md, ship_y_md, vx, vy, dt, description) =
        SETUPS[clamp_index(index) - 1];
    Preset {
        moon_degrees,
        ship_x_md,
        ship_y_md,
        vx,
        vy,
        dt,
        description: description.to_string(),
    }
}
