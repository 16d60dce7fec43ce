//! Fixture import pipeline.
//!
//! The fixtures secretary maintains next season's schedule in a spreadsheet
//! and uploads a CSV export of it. The export is semi-tabular: one column
//! header line, `month=<abbrev>` lines that set the month for the data lines
//! below them, and seven-column data lines. The pipeline scans the whole file
//! twice — a validation pass that collects every problem before anything is
//! written, then a build pass that derives the stored event records — and the
//! resulting set replaces the events collection in one transaction.

pub mod builder;
pub mod calendar;
pub mod handlers;
pub mod pipeline;
pub mod rows;
pub mod types;
pub mod validation;
