use crate::abstract_genetics::*;
use crate::catalog::{TraitCatalog, TraitSelection};
use crate::error::Result;
use crate::genotype::{canonicalize, Gamete, Genotype};
use crate::solution::{CrossResult, Phenotype, Tally};
use itertools::{iproduct, Itertools};
use log::debug;

/// Every gamete `x` can form under independent assortment.
///
/// The result is the Cartesian product of each trait block's two alleles, generated with the
/// last trait varying fastest. Homozygous blocks yield repeated gametes, so a monohybrid
/// parent always contributes two and a dihybrid parent four.
pub fn compute_gametes(x: &Genotype, selection: &TraitSelection) -> Vec<Gamete> {
    debug_assert_eq!(x.get_n_traits(), selection.get_n_traits());
    x.blocks()
        .map(|b| b.into_iter())
        .multi_cartesian_product()
        .map(Gamete::new)
        .collect()
}

/// Pairs every gamete of `gametes_a` (outer) with every gamete of `gametes_b` (inner).
///
/// The output is row-major: rows follow `gametes_a`, columns follow `gametes_b`.
pub fn cross_gametes(
    gametes_a: &[Gamete],
    gametes_b: &[Gamete],
    selection: &TraitSelection,
) -> Vec<Genotype> {
    iproduct!(gametes_a.iter(), gametes_b.iter())
        .map(|(gx, gy)| zygote(gx, gy, selection))
        .collect()
}

fn zygote(gx: &Gamete, gy: &Gamete, selection: &TraitSelection) -> Genotype {
    Genotype::from_blocks(
        selection
            .iter()
            .enumerate()
            .map(|(i, t)| canonicalize(t, [gx.index(i), gy.index(i)])),
    )
}

/// Dominant phenotype wherever the dominant allele appears in a block, recessive otherwise.
pub fn determine_phenotype(x: &Genotype, selection: &TraitSelection) -> Phenotype {
    Phenotype::new(
        x.blocks()
            .zip(selection)
            .map(|(block, t)| {
                let a = Allele::from(block.contains(&t.dominant_allele));
                t.phenotype(a).to_owned()
            })
            .collect(),
    )
}

/// Counts offspring by exact genotype and by phenotype.
pub fn tally_results(
    offspring: &[Genotype],
    selection: &TraitSelection,
) -> (Tally<Genotype>, Tally<Phenotype>) {
    let genotypes: Tally<Genotype> = offspring.iter().cloned().collect();
    let phenotypes: Tally<Phenotype> = offspring
        .iter()
        .map(|x| determine_phenotype(x, selection))
        .collect();
    (genotypes, phenotypes)
}

/// Entry point for callers that work from trait names and raw genotype strings.
///
/// Holds the trait catalog it was built with; every call gets its trait selection passed in.
#[derive(Debug, Clone, Default)]
pub struct Engine {
    catalog: TraitCatalog,
}

impl Engine {
    pub fn new(catalog: TraitCatalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &TraitCatalog {
        &self.catalog
    }

    pub fn select<S: AsRef<str>>(&self, names: &[S]) -> Result<TraitSelection> {
        self.catalog.select(names)
    }

    /// Validates both parents, then builds the Punnett square and its tallies.
    ///
    /// Nothing is computed unless both genotypes are valid.
    pub fn cross(
        &self,
        parent1: &str,
        parent2: &str,
        selection: &TraitSelection,
    ) -> Result<CrossResult> {
        let x = Genotype::parse(parent1, selection)?;
        let y = Genotype::parse(parent2, selection)?;
        Ok(punnett_square(x, y, selection))
    }
}

/// Crosses two already validated parents.
pub fn punnett_square(x: Genotype, y: Genotype, selection: &TraitSelection) -> CrossResult {
    let gametes_a = compute_gametes(&x, selection);
    let gametes_b = compute_gametes(&y, selection);
    debug!(
        "{} x {}: gametes {:?} and {:?}",
        x,
        y,
        gametes_a.iter().map(|g| g.to_string()).collect_vec(),
        gametes_b.iter().map(|g| g.to_string()).collect_vec()
    );
    let offspring = cross_gametes(&gametes_a, &gametes_b, selection);
    let (genotype_counts, phenotype_counts) = tally_results(&offspring, selection);
    debug!(
        "{}x{} square, {} genotypes, {} phenotypes",
        gametes_a.len(),
        gametes_b.len(),
        genotype_counts.len(),
        phenotype_counts.len()
    );
    CrossResult {
        parent1: x,
        parent2: y,
        gametes_a,
        gametes_b,
        offspring,
        genotype_counts,
        phenotype_counts,
    }
}
