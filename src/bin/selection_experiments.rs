use std::error::Error;

use selectors::selection::{run_experiments, ExperimentConfig};

/// Times both selectors across input sizes and distributions.
///
/// Usage: `selection_experiments [seed]`
fn main() -> Result<(), Box<dyn Error>> {
    let mut config = ExperimentConfig::default();
    if let Some(seed) = std::env::args().nth(1) {
        config.seed = seed.parse()?;
    }

    println!("Selection experiments (seed {})", config.seed);
    let measurements = run_experiments(&config)?;

    let mut current_size = None;
    for m in &measurements {
        if current_size != Some(m.size) {
            println!("\nRunning experiments for n = {}", m.size);
            current_size = Some(m.size);
        }
        println!("  {}", m);
    }

    Ok(())
}
