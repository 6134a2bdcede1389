//! Presentation layer for the Mendelian cross engine in `punnett_core`.
//!
//! Trait selections are resolved once per request and handed explicitly to the engine and to
//! every renderer:
//! ```
//! use punnett_core::Engine;
//! use punnett_rs::console;
//!
//! let engine = Engine::default();
//! let selection = engine.select(&["Eye Color", "Hair Type"]).unwrap();
//! let result = engine.cross("BbDd", "BbDd", &selection).unwrap();
//!
//! assert!(console::render_summary(&result).contains("9:3:3:1"));
//! ```

/// Exports the command line parser
pub mod cli;
/// Exports the text renderers for grids and summaries
pub mod console;
/// Exports the subcommand handlers
pub mod handlers;
/// Exports the trait catalog file loader
pub mod settings;
/// Exports the SVG renderer for Punnett squares
pub mod visualisation;
