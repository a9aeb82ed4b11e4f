//! Student-to-job matching: eligibility gating and simulated ATS keyword scoring.
//!
//! Both entry points are pure functions over a [`StudentProfile`] and a [`Job`].

mod ats;
pub mod domain;
mod eligibility;
pub mod keywords;

#[cfg(test)]
mod proptests;

pub use ats::{calculate_ats_score, AtsResult, MatchTier, MISSING_KEYWORD_LIMIT};
pub use domain::{EligibilityRequirement, Job, JobId, StudentProfile};
pub use eligibility::{check_eligibility, EligibilityCheck};
pub use keywords::{job_keywords, student_keywords, KeywordSet, REFERENCE_PATTERNS};
