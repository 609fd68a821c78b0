//! Provenance manifests: TOML lists of dataset sources

use crate::domain::TypedTag;
use crate::error::{ProvenanceError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Sources listed as `[[source]]` tables
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    #[serde(default, rename = "source")]
    pub sources: Vec<TypedTag>,
}

impl Manifest {
    pub fn new(sources: Vec<TypedTag>) -> Self {
        Manifest { sources }
    }

    /// Load a manifest from a TOML file
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ProvenanceError::Manifest(format!("{} not found", path.display()))
            } else {
                ProvenanceError::Io(e)
            }
        })?;

        let manifest: Manifest = toml::from_str(&contents).map_err(|e| {
            ProvenanceError::Manifest(format!("Failed to parse {}: {}", path.display(), e))
        })?;
        debug!(path = %path.display(), sources = manifest.sources.len(), "Loaded manifest");
        Ok(manifest)
    }

    /// Save the manifest as TOML, overwriting any existing file
    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        let contents = toml::to_string_pretty(self)?;
        fs::write(path, contents)?;
        Ok(())
    }

    /// Merge every source in file order
    pub fn merged(&self) -> Result<TypedTag> {
        let mut merged = TypedTag::default();
        for source in &self.sources {
            merged.append(source)?;
        }
        Ok(merged)
    }
}
