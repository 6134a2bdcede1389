use crate::abstract_genetics::*;
use crate::error::{GeneticsError, Result};
use std::collections::HashSet;

/// Most traits a single cross may consider (a dihybrid cross).
pub const MAX_TRAITS: usize = 2;

/// A single Mendelian trait with one dominant and one recessive allele.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TraitDefinition {
    pub name: String,
    pub dominant_allele: char,
    pub recessive_allele: char,
    pub dominant_phenotype: String,
    pub recessive_phenotype: String,
}

impl TraitDefinition {
    pub fn new(
        name: &str,
        dominant_allele: char,
        recessive_allele: char,
        dominant_phenotype: &str,
        recessive_phenotype: &str,
    ) -> Self {
        Self {
            name: name.to_owned(),
            dominant_allele,
            recessive_allele,
            dominant_phenotype: dominant_phenotype.to_owned(),
            recessive_phenotype: recessive_phenotype.to_owned(),
        }
    }

    /// Returns the dominance class of `c`, or `None` if `c` is not one of this trait's alleles.
    pub fn classify(&self, c: char) -> Option<Allele> {
        if c == self.dominant_allele {
            Some(Allele::Dominant)
        } else if c == self.recessive_allele {
            Some(Allele::Recessive)
        } else {
            None
        }
    }

    pub fn allele(&self, a: Allele) -> char {
        match a {
            Allele::Dominant => self.dominant_allele,
            Allele::Recessive => self.recessive_allele,
        }
    }

    pub fn phenotype(&self, a: Allele) -> &str {
        match a {
            Allele::Dominant => &self.dominant_phenotype,
            Allele::Recessive => &self.recessive_phenotype,
        }
    }
}

/// Immutable table of the traits a caller may choose from.
///
/// Built once and handed to [`crate::cross::Engine`]; nothing mutates it afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraitCatalog {
    traits: Vec<TraitDefinition>,
}

impl TraitCatalog {
    /// Builds a catalog, rejecting empty or duplicate names and traits whose two alleles coincide.
    pub fn new(traits: Vec<TraitDefinition>) -> Result<Self> {
        if traits.is_empty() {
            return Err(GeneticsError::InvalidCatalog(
                "catalog must define at least one trait".to_owned(),
            ));
        }
        let mut seen = HashSet::new();
        for t in &traits {
            if t.name.trim().is_empty() {
                return Err(GeneticsError::InvalidCatalog(
                    "trait name must not be empty".to_owned(),
                ));
            }
            if t.dominant_allele == t.recessive_allele {
                return Err(GeneticsError::InvalidCatalog(format!(
                    "trait '{}' uses '{}' for both alleles",
                    t.name, t.dominant_allele
                )));
            }
            if !seen.insert(t.name.as_str()) {
                return Err(GeneticsError::InvalidCatalog(format!(
                    "trait '{}' is defined more than once",
                    t.name
                )));
            }
        }
        Ok(Self { traits })
    }

    pub fn get(&self, name: &str) -> Option<&TraitDefinition> {
        self.traits.iter().find(|t| t.name == name)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TraitDefinition> {
        self.traits.iter()
    }

    pub fn names(&self) -> Vec<&str> {
        self.traits.iter().map(|t| t.name.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.traits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.traits.is_empty()
    }

    /// Resolves trait names into a selection for a monohybrid or dihybrid cross.
    pub fn select<S: AsRef<str>>(&self, names: &[S]) -> Result<TraitSelection> {
        if names.is_empty() || names.len() > MAX_TRAITS {
            return Err(GeneticsError::InvalidSelection(format!(
                "select between 1 and {} traits, got {}",
                MAX_TRAITS,
                names.len()
            )));
        }
        let traits = names
            .iter()
            .map(|name| {
                let name = name.as_ref();
                self.get(name)
                    .cloned()
                    .ok_or_else(|| GeneticsError::UnknownTrait(name.to_owned()))
            })
            .collect::<Result<Vec<_>>>()?;
        TraitSelection::from_traits(traits)
    }
}

impl Default for TraitCatalog {
    fn default() -> Self {
        Self {
            traits: vec![
                TraitDefinition::new("Eye Color", 'B', 'b', "Brown Eyes", "Blue Eyes"),
                TraitDefinition::new("Hair Type", 'D', 'd', "Curly Hair", "Straight Hair"),
                TraitDefinition::new("Dimples", 'M', 'm', "Has Dimples", "No Dimples"),
                TraitDefinition::new("Freckles", 'F', 'f', "Has Freckles", "No Freckles"),
                TraitDefinition::new(
                    "Earlobe Attachment",
                    'E',
                    'e',
                    "Free Earlobes",
                    "Attached Earlobes",
                ),
            ],
        }
    }
}

/// The ordered traits under consideration for one cross.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraitSelection {
    traits: Vec<TraitDefinition>,
}

impl TraitSelection {
    /// Builds a selection from 1 to [`MAX_TRAITS`] distinct definitions.
    pub fn from_traits(traits: Vec<TraitDefinition>) -> Result<Self> {
        if traits.is_empty() || traits.len() > MAX_TRAITS {
            return Err(GeneticsError::InvalidSelection(format!(
                "select between 1 and {} traits, got {}",
                MAX_TRAITS,
                traits.len()
            )));
        }
        let mut seen = HashSet::new();
        if let Some(t) = traits.iter().find(|t| !seen.insert(t.name.as_str())) {
            return Err(GeneticsError::InvalidSelection(format!(
                "trait '{}' selected more than once",
                t.name
            )));
        }
        Ok(Self { traits })
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TraitDefinition> {
        self.traits.iter()
    }

    pub fn names(&self) -> Vec<&str> {
        self.traits.iter().map(|t| t.name.as_str()).collect()
    }
}

impl BioSize for TraitSelection {
    fn get_n_traits(&self) -> usize {
        self.traits.len()
    }
}

impl<'a> IntoIterator for &'a TraitSelection {
    type Item = &'a TraitDefinition;
    type IntoIter = std::slice::Iter<'a, TraitDefinition>;

    fn into_iter(self) -> Self::IntoIter {
        self.traits.iter()
    }
}
