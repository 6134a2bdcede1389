//! Mendelian cross (Punnett square) modelling library.
//!
//! Crosses are computed from a trait catalog, a selection of one or two traits and the
//! genotypes of both parents. Typical use is as follows:
//! ```
//! use punnett_core::cross::Engine;
//!
//! let engine = Engine::default();
//! let selection = engine.select(&["Eye Color"]).unwrap();
//! let result = engine.cross("Bb", "Bb", &selection).unwrap();
//!
//! assert_eq!(4, result.offspring.len());
//! assert_eq!(4, result.phenotype_counts.total());
//! ```

/// Exports the allele classification and size traits shared by the other modules
pub mod abstract_genetics;
/// Exports the trait definitions, the catalog and trait selections
pub mod catalog;
/// Exports gamete formation, crossing, phenotypes and tallies
pub mod cross;
pub mod error;
/// Exports utilities for ratio analysis and generating instances
pub mod extra;
/// Exports the genotype and gamete types and genotype validation
pub mod genotype;
/// Exports the type for representing the result of a cross
pub mod solution;

pub use catalog::{TraitCatalog, TraitDefinition, TraitSelection};
pub use cross::Engine;
pub use error::{GeneticsError, InvalidReason};
