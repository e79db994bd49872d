//! Error types surfaced by construction, configuration, and training.

use std::error;
use std::fmt;
use std::result;

pub type Result<T> = result::Result<T, Error>;

/// Everything that can go wrong while building or training a network.
#[derive(Clone, Debug, PartialEq)]
pub enum Error {
    /// An unrecognized activation, cost, or optimizer name, or a
    /// hyperparameter outside its valid range. Raised before any training
    /// step executes.
    Configuration(String),
    /// Inconsistent dimensions between data, labels, or weight matrices.
    /// Raised before any mutation occurs.
    ShapeMismatch(String),
    /// A non-finite loss or gradient was produced at the given epoch and
    /// example. Weights keep their last valid values; the caller may call
    /// `train` again to continue.
    TrainingDiverged { epoch: usize, example: usize },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            &Error::Configuration(ref msg) => {
                write!(f, "configuration error: {}", msg)
            }
            &Error::ShapeMismatch(ref msg) => {
                write!(f, "shape mismatch: {}", msg)
            }
            &Error::TrainingDiverged { epoch, example } => {
                write!(f,
                       "training diverged at epoch {}, example {}",
                       epoch,
                       example)
            }
        }
    }
}

impl error::Error for Error {}
