use crate::abstract_genetics::*;
use crate::catalog::TraitSelection;
use crate::genotype::{canonicalize, Genotype};
use rand::Rng;

/// A uniformly random canonical genotype for `selection`.
///
/// Each allele is drawn independently, so heterozygous blocks come up half the time.
pub fn random_genotype<R>(rng: &mut R, selection: &TraitSelection) -> Genotype
where
    R: Rng + ?Sized,
{
    Genotype::from_blocks(selection.iter().map(|t| {
        let a = t.allele(Allele::from(rng.gen::<bool>()));
        let b = t.allele(Allele::from(rng.gen::<bool>()));
        canonicalize(t, [a, b])
    }))
}

pub fn init_pop_random<R>(rng: &mut R, selection: &TraitSelection, n_pop: usize) -> Vec<Genotype>
where
    R: Rng + ?Sized,
{
    (0..n_pop).map(|_| random_genotype(rng, selection)).collect()
}

/// Splits a batch line of the form `"<parent1> <parent2>"`.
///
/// Blank lines and lines starting with `#` yield `None`, as does any line without exactly
/// two fields.
pub fn parse_parents(s: &str) -> Option<(&str, &str)> {
    let s = s.trim();
    if s.is_empty() || s.starts_with('#') {
        return None;
    }
    let mut words = s.split_whitespace();
    match (words.next(), words.next(), words.next()) {
        (Some(x), Some(y), None) => Some((x, y)),
        _ => None,
    }
}
