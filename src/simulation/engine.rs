use crate::cli::Args;
use crate::error::Result;
use crate::render::Renderer;
use crate::world::{Census, World};
use colored::Colorize;
use std::thread;
use std::time::{Duration, Instant};
use tracing::{info, info_span};

/// Paces the loop: at least `interval` between successive `wait` returns,
/// without racing to catch up after a slow frame
#[derive(Debug)]
pub struct Ticker {
    interval: Duration,
    deadline: Option<Instant>,
}

impl Ticker {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            deadline: None,
        }
    }

    /// Sleep until the previous deadline, then start the next interval
    pub fn wait(&mut self) {
        if let Some(deadline) = self.deadline {
            let remaining = deadline.saturating_duration_since(Instant::now());
            if !remaining.is_zero() {
                thread::sleep(remaining);
            }
        }
        self.deadline = Some(Instant::now() + self.interval);
    }
}

/// How a run ended
#[derive(Clone, Debug, PartialEq)]
pub struct RunSummary {
    pub ticks: u64,
    pub census: Census,
    /// The last tick changed nothing
    pub stable: bool,
    pub elapsed: Duration,
}

/// Drives a world tick after tick, rendering each frame to stdout
pub struct SimulationEngine {
    renderer: Renderer,
}

impl SimulationEngine {
    pub fn new() -> Self {
        Self {
            renderer: Renderer::new(),
        }
    }

    /// Run until `max_age` ticks have passed or a tick changes nothing
    pub fn run_simulation(&mut self, world: World, args: &Args) -> Result<RunSummary> {
        let census = world.census();
        info!(
            width = world.width(),
            height = world.height(),
            humans = census.humans,
            zombies = census.zombies,
            "simulation started"
        );

        let sim_start = Instant::now();
        let mut ticker = Ticker::new(args.tick);
        let mut world = world;
        let mut ticks = 0u64;
        let mut stable = false;

        while args.max_age.map_or(true, |max_age| ticks < max_age) {
            ticker.wait();
            if !args.suppress_frames {
                self.print_frame(&world);
            }

            let next = {
                let _span = info_span!("tick", tick = ticks).entered();
                world.tick()?
            };
            ticks += 1;

            if next == world {
                stable = true;
                break;
            }
            world = next;
        }

        let summary = RunSummary {
            ticks,
            census: world.census(),
            stable,
            elapsed: sim_start.elapsed(),
        };
        info!(ticks, stable, "simulation finished");
        Ok(summary)
    }

    fn print_frame(&self, world: &World) {
        // home the cursor and clear the screen
        print!("\x1B[H\x1B[J");
        for line in self.renderer.lines(world) {
            println!("{}", line);
        }
    }

    /// Print simulation summary
    pub fn print_summary(&self, summary: &RunSummary, args: &Args) {
        println!(
            "\n{}\n{} {:.3} ms {} {} {} {} {} {}",
            "===".bright_blue().bold(),
            "Simulation finished:".green().bold(),
            summary.elapsed.as_secs_f64() * 1000.0,
            "|".dimmed(),
            format!("size={}", args.size).cyan(),
            format!("ticks={}", summary.ticks).cyan(),
            format!("humans={}", summary.census.humans).cyan(),
            format!("zombies={}", summary.census.zombies).red(),
            format!("stable={}", summary.stable).cyan(),
        );
    }
}

impl Default for SimulationEngine {
    fn default() -> Self {
        Self::new()
    }
}
