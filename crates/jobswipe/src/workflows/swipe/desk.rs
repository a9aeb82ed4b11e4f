use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{info, warn};

use super::session::SwipeSession;
use crate::workflows::matching::{
    calculate_ats_score, check_eligibility, AtsResult, EligibilityCheck, Job, JobId,
    StudentProfile,
};

/// Pre-confirmation view: what the student sees before pressing "apply".
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApplicationReview {
    pub job_id: JobId,
    pub headline: String,
    pub eligibility: EligibilityCheck,
    /// Empty when eligible. Otherwise shown as a warning; applying is still allowed.
    pub warnings: Vec<String>,
}

/// Outcome of a confirmed application, carrying the live ATS result.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApplicationReceipt {
    pub job_id: JobId,
    pub company: String,
    pub eligibility: EligibilityCheck,
    pub ats: AtsResult,
    pub submitted_at: DateTime<Utc>,
    pub message: String,
}

impl ApplicationReceipt {
    pub fn applied_while_ineligible(&self) -> bool {
        !self.eligibility.overall_eligible
    }
}

/// Composes the eligibility evaluator, the ATS scorer, and the session's apply command
/// for one student.
#[derive(Debug, Clone, Copy)]
pub struct ApplicationDesk<'a> {
    student: &'a StudentProfile,
}

impl<'a> ApplicationDesk<'a> {
    pub fn new(student: &'a StudentProfile) -> Self {
        Self { student }
    }

    pub fn review(&self, job: &Job) -> ApplicationReview {
        let eligibility = check_eligibility(self.student, job);
        ApplicationReview {
            job_id: job.id.clone(),
            headline: job.headline(),
            eligibility,
            warnings: eligibility.blocking_reasons(self.student, job),
        }
    }

    /// Records the application on `session` and scores it.
    pub fn confirm(&self, session: &mut SwipeSession, job: &Job) -> ApplicationReceipt {
        self.confirm_at(session, job, Utc::now())
    }

    pub fn confirm_at(
        &self,
        session: &mut SwipeSession,
        job: &Job,
        submitted_at: DateTime<Utc>,
    ) -> ApplicationReceipt {
        let eligibility = check_eligibility(self.student, job);
        let ats = calculate_ats_score(self.student, job);

        session.apply_to_job(job.clone());

        if eligibility.overall_eligible {
            info!(job = %job.id, score = ats.score, "application submitted");
        } else {
            warn!(
                job = %job.id,
                score = ats.score,
                reason = %eligibility.summary(),
                "application submitted despite unmet eligibility"
            );
        }

        ApplicationReceipt {
            job_id: job.id.clone(),
            company: job.company.clone(),
            eligibility,
            ats,
            submitted_at,
            message: format!(
                "Your application has been submitted to {}. They will review your profile and get back to you soon.",
                job.company
            ),
        }
    }
}
