use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable identifier of a job posting.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JobId(pub String);

impl JobId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The signed-in student. Immutable for the lifetime of a session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentProfile {
    pub name: String,
    pub email: String,
    /// Cumulative grade-point average on a 0–10 scale.
    pub cgpa: f64,
    /// Academic branch code such as `CSE` or `ECE`.
    pub branch: String,
    pub skills: Vec<String>,
    pub resume_keywords: Vec<String>,
}

/// Minimum criteria a student must meet for a posting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EligibilityRequirement {
    #[serde(rename = "minCGPA")]
    pub min_cgpa: f64,
    /// Eligible branch codes in display order. Matching is exact and case-sensitive.
    pub branches: Vec<String>,
}

/// A job posting as shown on a swipe card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: JobId,
    pub title: String,
    pub company: String,
    pub tags: Vec<String>,
    pub description: String,
    pub eligibility: EligibilityRequirement,
    /// Score printed on the listing by the employer. Display-only; the live score comes
    /// from [`super::calculate_ats_score`] and is never reconciled with this value.
    #[serde(rename = "atsScore", default)]
    pub listed_ats_score: u8,
    /// Display-only companion of `listed_ats_score`.
    #[serde(rename = "missingKeywords", default)]
    pub listed_missing_keywords: Vec<String>,
}

impl Job {
    pub fn headline(&self) -> String {
        format!("{} at {}", self.title, self.company)
    }
}
