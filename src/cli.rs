use crate::error::WorldError;
use clap::Parser;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

/// CLI arguments for the zombie simulation. Every option can also come from
/// the environment.
#[derive(Parser, Debug)]
#[command(name = "zombie_sim", about = "Zombies chase humans across a grid")]
pub struct Args {
    /// World size as WIDTHxHEIGHT
    #[arg(long, env = "WORLD_SIZE", default_value = "60x30")]
    pub size: WorldSize,

    /// Fraction of cells that start occupied
    #[arg(long, env = "DENSITY", default_value_t = 0.05)]
    pub density: f64,

    /// Fraction of occupants that start as zombies
    #[arg(long, env = "ZOMBIE_CHANCE", default_value_t = 0.2)]
    pub zombie_chance: f64,

    /// Seconds between frames
    #[arg(long, env = "TICK", default_value = "0.1", value_parser = parse_interval)]
    pub tick: Duration,

    /// Stop after this many ticks
    #[arg(long, env = "MAX_AGE")]
    pub max_age: Option<u64>,

    /// Random seed
    #[arg(long)]
    pub seed: Option<u64>,

    /// Do not draw frames (for benchmarks)
    #[arg(long, default_value_t = false)]
    pub suppress_frames: bool,

    /// Write JSON trace records to this file
    #[arg(long, env = "TRACEFILE")]
    pub trace_file: Option<PathBuf>,
}

/// Grid dimensions
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WorldSize {
    pub width: u16,
    pub height: u16,
}

impl FromStr for WorldSize {
    type Err = WorldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || WorldError::InvalidSize(s.to_string());

        let (width, height) = s.trim().split_once(['x', 'X']).ok_or_else(invalid)?;
        let width: u16 = width.parse().map_err(|_| invalid())?;
        let height: u16 = height.parse().map_err(|_| invalid())?;
        if width == 0 || height == 0 {
            return Err(invalid());
        }
        Ok(WorldSize { width, height })
    }
}

impl fmt::Display for WorldSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

fn parse_interval(s: &str) -> Result<Duration, String> {
    let seconds: f64 = s
        .parse()
        .map_err(|_| format!("{:?} is not a number of seconds", s))?;
    Duration::try_from_secs_f64(seconds)
        .map_err(|_| format!("{:?} is not a valid interval", s))
}
