use crate::occupant::OccupantId;
use thiserror::Error;

/// Error types for the grid model and its driver
#[derive(Debug, Error, Clone, PartialEq)]
pub enum WorldError {
    /// A vector was built without one of its axes
    #[error("invalid vector: {0}")]
    InvalidVector(String),
    /// A coordinate fell outside the grid
    #[error("({x}, {y}) is outside the {width}x{height} grid")]
    OutOfBounds {
        x: i32,
        y: i32,
        width: u16,
        height: u16,
    },
    /// A placement targeted a cell held by a different occupant
    #[error("cannot place occupant {occupant} at ({x}, {y}): held by occupant {holder}")]
    OccupiedCell {
        occupant: OccupantId,
        holder: OccupantId,
        x: i32,
        y: i32,
    },
    /// The same occupant was placed twice
    #[error("occupant {0} appears in more than one placement")]
    DuplicateOccupant(OccupantId),
    /// Population probabilities are not a valid distribution
    #[error("invalid population probabilities: human={human}, zombie={zombie}")]
    InvalidPopulation { human: f64, zombie: f64 },
    /// World size string could not be parsed
    #[error("invalid world size {0:?}: expected WIDTHxHEIGHT")]
    InvalidSize(String),
}

/// Result type alias for this crate
pub type Result<T> = std::result::Result<T, WorldError>;
