use jobswipe::config::DataConfig;
use jobswipe::error::AppError;
use jobswipe::workflows::catalog::{
    load_profile, seed_student_profile, JobCatalog, JsonCatalog, SeedCatalog,
};
use jobswipe::workflows::matching::{Job, JobId, StudentProfile};
use jobswipe::workflows::swipe::SessionContext;
use tracing::info;

/// Composition root: the resolved student profile and job deck for this run.
#[derive(Debug, Clone)]
pub(crate) struct Workspace {
    profile: StudentProfile,
    jobs: Vec<Job>,
}

impl Workspace {
    pub(crate) fn load(config: &DataConfig) -> Result<Self, AppError> {
        let catalog = catalog_for(config);
        let jobs = catalog.jobs()?;

        let profile = match &config.profile_path {
            Some(path) => load_profile(path)?,
            None => seed_student_profile(),
        };

        info!(
            jobs = jobs.len(),
            student = %profile.email,
            seeded = config.catalog_path.is_none(),
            "workspace ready"
        );
        Ok(Self::new(profile, jobs))
    }

    pub(crate) fn new(profile: StudentProfile, jobs: Vec<Job>) -> Self {
        Self { profile, jobs }
    }

    pub(crate) fn profile(&self) -> &StudentProfile {
        &self.profile
    }

    pub(crate) fn jobs(&self) -> &[Job] {
        &self.jobs
    }

    pub(crate) fn find_job(&self, id: &JobId) -> Result<&Job, AppError> {
        self.jobs
            .iter()
            .find(|job| &job.id == id)
            .ok_or_else(|| AppError::UnknownJob(id.clone()))
    }

    pub(crate) fn start_session(&self) -> SessionContext {
        let mut context = SessionContext::new();
        context.initialize(self.profile.clone(), self.jobs.clone());
        context
    }
}

fn catalog_for(config: &DataConfig) -> Box<dyn JobCatalog> {
    match &config.catalog_path {
        Some(path) => Box::new(JsonCatalog::new(path.clone())),
        None => Box::new(SeedCatalog),
    }
}

#[cfg(test)]
pub(crate) fn seeded_workspace() -> Workspace {
    Workspace::new(seed_student_profile(), jobswipe::workflows::catalog::seed_jobs())
}
