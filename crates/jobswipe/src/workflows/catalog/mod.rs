//! Sources of job postings and student profiles.
//!
//! The session never reaches for global data: a [`JobCatalog`] is resolved at the
//! composition root and its jobs are handed to [`crate::workflows::swipe::SwipeSession::new`].

mod json;
mod seed;

use std::collections::HashSet;
use std::path::PathBuf;

use crate::workflows::matching::{Job, JobId, StudentProfile};

pub use json::{load_profile, JsonCatalog};
pub use seed::{seed_jobs, seed_student_profile, SeedCatalog};

/// Storage abstraction so sessions can be built from seed data, files, or test doubles.
pub trait JobCatalog {
    fn jobs(&self) -> Result<Vec<Job>, CatalogError>;
}

/// Error raised while loading catalog or profile data.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("unable to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed JSON in {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("job id {0} appears more than once")]
    DuplicateJobId(JobId),
    #[error("CGPA {value} outside the 0-10 scale for {context}")]
    InvalidCgpa { context: String, value: f64 },
}

/// Rejects duplicate ids and out-of-scale CGPA thresholds.
pub fn validate_jobs(jobs: &[Job]) -> Result<(), CatalogError> {
    let mut seen = HashSet::new();
    for job in jobs {
        if !seen.insert(&job.id) {
            return Err(CatalogError::DuplicateJobId(job.id.clone()));
        }
        validate_cgpa(job.eligibility.min_cgpa, || format!("job {}", job.id))?;
    }
    Ok(())
}

pub fn validate_profile(profile: &StudentProfile) -> Result<(), CatalogError> {
    validate_cgpa(profile.cgpa, || format!("student {}", profile.email))
}

fn validate_cgpa(value: f64, context: impl FnOnce() -> String) -> Result<(), CatalogError> {
    if (0.0..=10.0).contains(&value) {
        Ok(())
    } else {
        Err(CatalogError::InvalidCgpa {
            context: context(),
            value,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_catalog_passes_validation() {
        let jobs = SeedCatalog.jobs().expect("seed jobs load");
        assert!(validate_jobs(&jobs).is_ok());
        assert!(validate_profile(&seed_student_profile()).is_ok());
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let mut jobs = seed_jobs();
        jobs[3].id = jobs[0].id.clone();
        match validate_jobs(&jobs) {
            Err(CatalogError::DuplicateJobId(id)) => assert_eq!(id.as_str(), "1"),
            other => panic!("expected duplicate id error, got {other:?}"),
        }
    }

    #[test]
    fn out_of_scale_cgpa_is_rejected() {
        let mut profile = seed_student_profile();
        profile.cgpa = 10.5;
        match validate_profile(&profile) {
            Err(CatalogError::InvalidCgpa { value, context }) => {
                assert_eq!(value, 10.5);
                assert!(context.contains("alex.johnson"));
            }
            other => panic!("expected invalid cgpa error, got {other:?}"),
        }

        let mut jobs = seed_jobs();
        jobs[1].eligibility.min_cgpa = f64::NAN;
        assert!(matches!(
            validate_jobs(&jobs),
            Err(CatalogError::InvalidCgpa { .. })
        ));
    }
}
