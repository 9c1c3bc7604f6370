//! Terminal output formatting
//!
//! End-of-session report printing.

pub mod display;
pub mod formatters;

pub use display::{ReportOptions, print_report, render_report};
