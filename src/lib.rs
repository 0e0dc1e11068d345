//! Diagonal line analysis for recurrence plots with border-effect and
//! tangential-motion corrections.
//!
//! A recurrence plot (RP) is a square boolean matrix marking the pairs of
//! time indices whose phase-space states lie within a threshold of each
//! other. Diagonal lines in an RP are segments of the trajectory that evolve
//! alike, shifted in time. Counting them naively is biased in two ways:
//! lines cut by the edge of the matrix are too short, and slow tangential
//! drift of the trajectory produces thick bands of spurious recurrences.
//! This crate extracts diagonal lines and corrects both effects.
//!
//! # Quick Start
//!
//! ```rust
//! use ndarray::Array2;
//! use rqa_border::lines::{CorrectionPolicy, LineConfig, diagonal_lines};
//! use rqa_border::RecurrencePlot;
//!
//! let rp = RecurrencePlot::new(Array2::from_elem((5, 5), true)).unwrap();
//! let config = LineConfig::default();
//!
//! let conventional = diagonal_lines(&rp, CorrectionPolicy::Conventional, &config);
//! let dibo = diagonal_lines(&rp, CorrectionPolicy::DiscardBorder, &config);
//!
//! // Every off-diagonal line of an all-true plot touches both borders.
//! assert_eq!(conventional.len(), 8);
//! assert!(dibo.is_empty());
//! ```
//!
//! # Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`plot`] | Validated recurrence plot type with direct diagonal access |
//! | [`lines`] | Diagonal traversal, run extraction, border classification, correction policies, histograms |
//! | [`recurrence`] | Distance matrices and threshold modes for building RPs from trajectories |
//! | [`tangential`] | Perpendicular and isodirectional tangential-motion correctors |
//! | [`rqa`] | Line statistics (mean, max, entropy, determinism) |
//! | [`analysis`] | Run all correction policies on one RP |
//!
//! # Error Handling
//!
//! All fallible operations return [`Result<T>`], an alias for
//! `std::result::Result<T, Error>`.
//!
//! # Feature Flags
//!
//! | Flag | Description |
//! |------|-------------|
//! | `parallel` | Parallel run collection and policy evaluation via rayon |

#![forbid(unsafe_code)]

pub mod error;
pub use error::{Error, Result};

pub mod analysis;
pub mod lines;
pub mod plot;
pub mod recurrence;
pub mod rqa;
pub mod tangential;

pub use plot::RecurrencePlot;
