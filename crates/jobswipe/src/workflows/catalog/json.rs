use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use tracing::info;

use super::{validate_jobs, validate_profile, CatalogError, JobCatalog};
use crate::workflows::matching::{Job, StudentProfile};

/// Catalog backed by a JSON array of jobs on disk.
///
/// The file uses the same camelCase shape as the seed data (`minCGPA`, `atsScore`, ...).
#[derive(Debug, Clone)]
pub struct JsonCatalog {
    path: PathBuf,
}

impl JsonCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl JobCatalog for JsonCatalog {
    fn jobs(&self) -> Result<Vec<Job>, CatalogError> {
        let jobs: Vec<Job> = read_json(&self.path)?;
        validate_jobs(&jobs)?;
        info!(path = %self.path.display(), count = jobs.len(), "loaded job catalog");
        Ok(jobs)
    }
}

/// Loads a single student profile from a JSON object on disk.
pub fn load_profile(path: impl AsRef<Path>) -> Result<StudentProfile, CatalogError> {
    let path = path.as_ref();
    let profile: StudentProfile = read_json(path)?;
    validate_profile(&profile)?;
    info!(path = %path.display(), student = %profile.email, "loaded student profile");
    Ok(profile)
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, CatalogError> {
    let raw = fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| CatalogError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
