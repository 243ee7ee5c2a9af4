//! # scalescore Core
//!
//! Core data model for the scalescore questionnaire scoring engine.
//!
//! This crate provides the types every other scalescore crate builds on:
//!
//! - [`ResponseTable`] - Rectangular table of respondent rows with named columns
//! - [`Cell`] - A single response: number, text, or missing
//! - [`ColumnSpec`] - How callers address columns (by name, by 1-based position, or all/none)
//! - [`Error`] / [`ErrorKind`] - Structural, parameter, selection and range failures
//! - [`synth`] - Seeded synthetic responses for demos and benchmarks
//!
//! ## Example
//!
//! ```rust
//! use scalescore_core::{ResponseTable, Cell};
//!
//! let table = ResponseTable::from_numeric(
//!     ["q1", "q2", "q3", "q4"],
//!     vec![vec![Some(4.0), Some(3.0), None, Some(2.0)]],
//! ).unwrap();
//!
//! assert_eq!(table.n_rows(), 1);
//! assert_eq!(table.cell(0, 2), Some(&Cell::Missing));
//! ```

pub mod columns;
pub mod error;
pub mod synth;
pub mod table;

pub use columns::ColumnSpec;
pub use error::{Error, ErrorKind, Result};
pub use synth::{fake_responses, FakeDataConfig};
pub use table::{Cell, ResponseTable};
