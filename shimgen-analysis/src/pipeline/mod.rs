//! Analysis pipeline for handle-containment generation passes.
//!
//! This module provides a [`Pipeline`] orchestrator that manages the three
//! analysis stages of a generation pass:
//!
//! - Explicit phase boundaries (resolve → contain → collect)
//! - Per-pass state owned by one [`AnalysisContext`], no ambient globals
//! - Unified diagnostics collection
//!
//! # Example
//!
//! ```ignore
//! use shimgen_analysis::Pipeline;
//!
//! let pipeline = Pipeline::new();
//! let ctx = pipeline.run(registry, filter)?;
//!
//! for diag in &ctx.diagnostics {
//!     eprintln!("{}", diag);
//! }
//! ```

mod context;
mod diagnostic;
mod phase;
pub mod phases;
mod runner;

pub use context::AnalysisContext;
pub use diagnostic::{Diagnostic, Severity};
pub use phase::Phase;
pub use runner::Pipeline;
