//! Python bindings for the Mendelian cross engine.
//!
//! ```python
//! import punnett_pywrapper
//! gametes_a, gametes_b, offspring, genotypes, phenotypes = punnett_pywrapper.cross(
//!     "Bb", "Bb", ["Eye Color"]
//! )
//! ```

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use punnett_core::Engine;

/// Exports the type returned to Python callers
pub mod solution;

use solution::PyCrossSolution;

fn strings<T: ToString>(v: &[T]) -> Vec<String> {
    v.iter().map(|x| x.to_string()).collect()
}

/// Crosses `parent1` with `parent2` over the named traits of the built-in catalog.
///
/// Returns `(gametes_a, gametes_b, offspring, genotype_counts, phenotype_counts)`; the counts
/// are lists of `(key, count)` pairs in first-seen order.
#[pyfunction]
#[pyo3(signature = (parent1, parent2, traits))]
pub fn cross(parent1: &str, parent2: &str, traits: Vec<String>) -> PyCrossSolution {
    let engine = Engine::default();
    let res = engine
        .select(traits.as_slice())
        .and_then(|sel| engine.cross(parent1.trim(), parent2.trim(), &sel))
        .map_err(|e| PyValueError::new_err(e.to_string()))?;
    Ok((
        strings(&res.gametes_a),
        strings(&res.gametes_b),
        strings(&res.offspring),
        res.genotype_counts
            .iter()
            .map(|(g, n)| (g.to_string(), n))
            .collect(),
        res.phenotype_counts
            .iter()
            .map(|(p, n)| (p.to_string(), n))
            .collect(),
    ))
}

/// Names of the traits in the built-in catalog.
#[pyfunction]
pub fn trait_names() -> Vec<String> {
    Engine::default()
        .catalog()
        .names()
        .into_iter()
        .map(str::to_owned)
        .collect()
}

#[pymodule]
#[pyo3(name = "punnett_pywrapper")]
fn punnett_pywrapper(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(cross, m)?)?;
    m.add_function(wrap_pyfunction!(trait_names, m)?)?;
    Ok(())
}
