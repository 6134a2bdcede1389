use anyhow::{bail, Context, Result};
use log::info;
use punnett_core::{TraitCatalog, TraitDefinition};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// One `[[traits]]` table of a catalog file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TraitConfig {
    pub name: String,
    pub dominant: String,
    pub recessive: String,
    pub dominant_trait: String,
    pub recessive_trait: String,
}

/// Contents of a trait catalog TOML file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    pub traits: Vec<TraitConfig>,
}

fn single_char(field: &str, trait_name: &str, s: &str) -> Result<char> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if !c.is_whitespace() => Ok(c),
        _ => bail!(
            "{} allele of trait '{}' must be a single character, got '{}'",
            field,
            trait_name,
            s
        ),
    }
}

impl CatalogConfig {
    pub fn from_toml(s: &str) -> Result<Self> {
        toml::from_str(s).context("Failed to parse trait catalog")
    }

    /// Checks every allele field and builds the catalog, which applies its own naming rules.
    pub fn into_catalog(self) -> Result<TraitCatalog> {
        let traits = self
            .traits
            .iter()
            .map(|t| {
                Ok(TraitDefinition::new(
                    &t.name,
                    single_char("dominant", &t.name, &t.dominant)?,
                    single_char("recessive", &t.name, &t.recessive)?,
                    &t.dominant_trait,
                    &t.recessive_trait,
                ))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(TraitCatalog::new(traits)?)
    }
}

impl From<&TraitCatalog> for CatalogConfig {
    fn from(catalog: &TraitCatalog) -> Self {
        Self {
            traits: catalog
                .iter()
                .map(|t| TraitConfig {
                    name: t.name.clone(),
                    dominant: t.dominant_allele.to_string(),
                    recessive: t.recessive_allele.to_string(),
                    dominant_trait: t.dominant_phenotype.clone(),
                    recessive_trait: t.recessive_phenotype.clone(),
                })
                .collect(),
        }
    }
}

/// Loads the catalog at `path`, or the built-in catalog when no path is given.
pub fn load_catalog(path: Option<&Path>) -> Result<TraitCatalog> {
    match path {
        None => Ok(TraitCatalog::default()),
        Some(path) => {
            let s = fs::read_to_string(path)
                .with_context(|| format!("Failed to read trait catalog {}", path.display()))?;
            let catalog = CatalogConfig::from_toml(&s)?.into_catalog()?;
            info!(
                "Loaded {} traits from {}",
                catalog.len(),
                path.display()
            );
            Ok(catalog)
        }
    }
}
