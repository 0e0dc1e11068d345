//! Diagonal line extraction and border-effect correction.
//!
//! The pipeline is: walk every off-main diagonal of a recurrence plot,
//! split it into maximal runs of recurrences, classify each run against the
//! ends of its diagonal, then let a [`CorrectionPolicy`] decide which runs
//! survive and with what length.

mod border;
mod diagonal;
mod histogram;
mod policy;
mod runs;

// Diagonal traversal
pub use diagonal::{Diagonal, Triangle, diagonal};

// Run extraction
pub use runs::{Line, Run, find_runs, runs_from_iter};

// Border classification
pub use border::{BorderClass, BorderMode, classify};

// Correction policies and the traversal engine
pub use policy::{
    CorrectionPolicy, DEFAULT_MASK_WIDTH, LineConfig, LineLengths, Traversal, collect_lines,
    diagonal_lines,
};

// Histogram
pub use histogram::LineLengthDistribution;
