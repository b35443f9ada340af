//! Request middleware.
//!
//! Purpose: request lifecycle concerns shared by every route, currently trace
//! correlation.

pub mod trace;

pub use trace::Trace;
