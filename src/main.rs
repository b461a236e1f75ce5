use clap::Parser;
use zombie_sim::logging;
use zombie_sim::prelude::*;

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    logging::init(args.trace_file.as_deref())?;

    let rng = if let Some(seed) = args.seed {
        fastrand::Rng::with_seed(seed)
    } else {
        fastrand::Rng::new()
    };

    // Populate world
    let population = Population::from_density(args.density, args.zombie_chance, rng)?;
    let world = World::populated_by(args.size.width, args.size.height, population)?;

    // Run simulation
    let mut engine = SimulationEngine::new();
    let summary = engine.run_simulation(world, &args)?;

    // Print results
    engine.print_summary(&summary, &args);

    Ok(())
}
