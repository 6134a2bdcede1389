use crate::abstract_genetics::*;
use crate::catalog::{TraitDefinition, TraitSelection};
use crate::error::{GeneticsError, InvalidReason, Result};
use std::fmt;

/// Allele-pair blocks, two characters per selected trait.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Genotype {
    alleles: Vec<char>,
}

/// One allele per trait, as contributed by a parent.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Gamete {
    alleles: Vec<char>,
}

impl Genotype {
    /// Checks `s` against `selection` and wraps it.
    ///
    /// Length, allele membership and dominant-first ordering are all enforced: `"bB"` is
    /// rejected rather than normalised.
    pub fn parse(s: &str, selection: &TraitSelection) -> Result<Self> {
        validate_genotype(s, selection)?;
        Ok(Self {
            alleles: s.chars().collect(),
        })
    }

    /// Builds a genotype from already canonical blocks.
    pub(crate) fn from_blocks<I>(blocks: I) -> Self
    where
        I: IntoIterator<Item = [char; 2]>,
    {
        Self {
            alleles: blocks.into_iter().flatten().collect(),
        }
    }

    pub fn blocks(&self) -> impl Iterator<Item = [char; 2]> + '_ {
        self.alleles.chunks_exact(2).map(|b| [b[0], b[1]])
    }
}

impl BioSize for Genotype {
    fn get_n_traits(&self) -> usize {
        self.alleles.len() / 2
    }
}

impl fmt::Display for Genotype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.alleles.iter().try_for_each(|c| write!(f, "{}", c))
    }
}

impl Gamete {
    pub fn new(alleles: Vec<char>) -> Self {
        Self { alleles }
    }
}

impl BioSize for Gamete {
    fn get_n_traits(&self) -> usize {
        self.alleles.len()
    }
}

impl IndexAllele<usize> for Gamete {
    fn index(&self, idx: usize) -> char {
        self.alleles[idx]
    }
}

impl fmt::Display for Gamete {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.alleles.iter().try_for_each(|c| write!(f, "{}", c))
    }
}

/// Verifies that `genotype` is a canonical genotype for `selection`.
pub fn validate_genotype(genotype: &str, selection: &TraitSelection) -> Result<()> {
    let chars: Vec<char> = genotype.chars().collect();
    let expected = 2 * selection.get_n_traits();
    if chars.len() != expected {
        return Err(GeneticsError::invalid_genotype(
            genotype,
            InvalidReason::WrongLength {
                expected,
                actual: chars.len(),
            },
        ));
    }
    for (i, (block, t)) in chars.chunks_exact(2).zip(selection).enumerate() {
        for &c in block {
            if t.classify(c).is_none() {
                return Err(GeneticsError::invalid_genotype(
                    genotype,
                    InvalidReason::DisallowedAllele {
                        trait_index: i,
                        trait_name: t.name.clone(),
                        found: c,
                        dominant: t.dominant_allele,
                        recessive: t.recessive_allele,
                    },
                ));
            }
        }
        if canonicalize(t, [block[0], block[1]]) != [block[0], block[1]] {
            return Err(GeneticsError::invalid_genotype(
                genotype,
                InvalidReason::NonCanonical {
                    trait_index: i,
                    trait_name: t.name.clone(),
                    block: block.iter().collect(),
                },
            ));
        }
    }
    Ok(())
}

/// Stable reorder of a two-allele block so the dominant allele comes first.
///
/// Only a dominant character may jump ahead; equal-class pairs keep their order.
pub fn canonicalize(t: &TraitDefinition, block: [char; 2]) -> [char; 2] {
    let [a, b] = block;
    if a != t.dominant_allele && b == t.dominant_allele {
        [b, a]
    } else {
        [a, b]
    }
}
