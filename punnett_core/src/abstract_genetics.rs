/// Number of traits (allele blocks) carried by a genotype, gamete or selection.
pub trait BioSize {
    fn get_n_traits(&self) -> usize;
}

/// Dominance class of a single allele character relative to one trait.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum Allele {
    Recessive,
    Dominant,
}

impl From<bool> for Allele {
    fn from(value: bool) -> Self {
        match value {
            true => Allele::Dominant,
            false => Allele::Recessive,
        }
    }
}

impl From<Allele> for bool {
    fn from(value: Allele) -> bool {
        match value {
            Allele::Recessive => false,
            Allele::Dominant => true,
        }
    }
}

/// Looks up the allele character stored at a given position.
pub trait IndexAllele<Idx> {
    fn index(&self, idx: Idx) -> char;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allele_bool_conversion() {
        assert_eq!(Allele::Dominant, Allele::from(true));
        assert_eq!(Allele::Recessive, Allele::from(false));
        assert!(bool::from(Allele::Dominant));
        assert!(!bool::from(Allele::Recessive));
    }
}
