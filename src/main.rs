use std::io::{self, BufRead, Write};

use cislunar_bench::report::{self, TimerKind};
use cislunar_bench::scenario;

fn main() -> io::Result<()> {
    // -----------------------------------------------------------------------
    // Scenario menu
    // -----------------------------------------------------------------------
    println!();
    println!("====================================================================");
    println!("  CISLUNAR BENCH — Earth-Moon trajectory CPU benchmark");
    println!("====================================================================");
    println!();
    println!("  Scenarios");
    println!("  ──────────────────────────────────────────────────────────────────");
    for i in 1..=scenario::count() {
        println!("  {:>2}  {}", i, scenario::preset(i as i64).description);
    }
    println!();

    let index = prompt_index()?;
    let preset = scenario::preset(index);
    let chosen = scenario::clamp_index(index);

    println!();
    println!("  Running scenario {}: {}", chosen, preset.description);

    // -----------------------------------------------------------------------
    // Run and report
    // -----------------------------------------------------------------------
    let r = report::benchmark(&preset, TimerKind::default());

    println!();
    println!("  Ship status:  {}", r.status);
    println!(
        "  {} steps in {:.3} seconds",
        report::thousands(r.steps),
        r.elapsed
    );
    println!(
        "  Steps per second: {:>12}    Orbits of Earth: {}",
        report::thousands(r.steps_per_second as u64),
        r.orbits
    );
    println!("  Computation summary mashup = {:.16e}", r.mashup);
    println!();

    Ok(())
}

/// Ask for a 1-based scenario index on stdin. Empty input (or EOF) takes
/// scenario 1; anything that isn't an integer re-prompts. Any integer is
/// accepted — out-of-range values clamp downstream.
fn prompt_index() -> io::Result<i64> {
    let stdin = io::stdin();
    let mut line = String::new();
    loop {
        print!("Choose an initial setup: ");
        io::stdout().flush()?;
        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            return Ok(1);
        }
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Ok(1);
        }
        match trimmed.parse::<i64>() {
            Ok(n) => return Ok(n),
            Err(_) => println!("Enter a number to choose an initial setup."),
        }
    }
}
