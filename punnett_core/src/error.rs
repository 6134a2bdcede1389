use thiserror::Error;

/// Why a parental genotype was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidReason {
    /// The genotype does not hold exactly two alleles per selected trait.
    WrongLength { expected: usize, actual: usize },
    /// A block holds a character outside the trait's allele alphabet.
    DisallowedAllele {
        trait_index: usize,
        trait_name: String,
        found: char,
        dominant: char,
        recessive: char,
    },
    /// A heterozygous block lists the recessive allele first, e.g. `bB`.
    NonCanonical {
        trait_index: usize,
        trait_name: String,
        block: String,
    },
}

impl std::fmt::Display for InvalidReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvalidReason::WrongLength { expected, actual } => {
                write!(f, "expected {} alleles, got {}", expected, actual)
            }
            InvalidReason::DisallowedAllele {
                trait_index,
                trait_name,
                found,
                dominant,
                recessive,
            } => write!(
                f,
                "allele '{}' is not valid for trait {} ({}), expected one of '{}' or '{}'",
                found, trait_index, trait_name, dominant, recessive
            ),
            InvalidReason::NonCanonical {
                trait_index,
                trait_name,
                block,
            } => write!(
                f,
                "block '{}' for trait {} ({}) must list the dominant allele first",
                block, trait_index, trait_name
            ),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GeneticsError {
    #[error("Invalid genotype '{genotype}': {reason}")]
    InvalidGenotype {
        genotype: String,
        reason: InvalidReason,
    },

    #[error("Unknown trait: {0}")]
    UnknownTrait(String),

    #[error("Invalid trait selection: {0}")]
    InvalidSelection(String),

    #[error("Invalid trait catalog: {0}")]
    InvalidCatalog(String),
}

impl GeneticsError {
    pub fn invalid_genotype(genotype: &str, reason: InvalidReason) -> Self {
        GeneticsError::InvalidGenotype {
            genotype: genotype.to_owned(),
            reason,
        }
    }
}

pub type Result<T> = std::result::Result<T, GeneticsError>;
