use serde::{Deserialize, Serialize};

use super::domain::{Job, StudentProfile};
use super::keywords::{job_keywords, student_keywords};

/// At most this many missing keywords are surfaced as improvement hints.
pub const MISSING_KEYWORD_LIMIT: usize = 5;

/// Simulated applicant-tracking compatibility between a student and a job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AtsResult {
    /// Percentage of job keywords covered by the student, 0–100.
    pub score: u8,
    pub matched_keywords: Vec<String>,
    /// First missing keywords in encounter order, capped at [`MISSING_KEYWORD_LIMIT`].
    pub missing_keywords: Vec<String>,
}

impl AtsResult {
    pub fn tier(&self) -> MatchTier {
        MatchTier::from_score(self.score)
    }
}

/// Coarse rating shown next to the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchTier {
    Excellent,
    Good,
    NeedsImprovement,
}

impl MatchTier {
    pub const fn from_score(score: u8) -> Self {
        if score >= 80 {
            MatchTier::Excellent
        } else if score >= 60 {
            MatchTier::Good
        } else {
            MatchTier::NeedsImprovement
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            MatchTier::Excellent => "Excellent Match!",
            MatchTier::Good => "Good Match",
            MatchTier::NeedsImprovement => "Needs Improvement",
        }
    }
}

/// Scores keyword overlap between the student's skills/resume and the job.
///
/// A job keyword counts as matched when it and some student keyword contain one another
/// in either direction. An empty job keyword set scores 0.
pub fn calculate_ats_score(student: &StudentProfile, job: &Job) -> AtsResult {
    let job_keywords = job_keywords(job);
    let student_keywords = student_keywords(student);

    let mut matched_keywords = Vec::new();
    let mut missing_keywords = Vec::new();

    for keyword in job_keywords.iter() {
        let is_match = student_keywords.contains(keyword)
            || student_keywords
                .iter()
                .any(|known| known.contains(keyword) || keyword.contains(known));

        if is_match {
            matched_keywords.push(keyword.to_string());
        } else {
            missing_keywords.push(keyword.to_string());
        }
    }

    let score = percentage(matched_keywords.len(), job_keywords.len());
    missing_keywords.truncate(MISSING_KEYWORD_LIMIT);

    AtsResult {
        score,
        matched_keywords,
        missing_keywords,
    }
}

/// Nearest whole percent; halves round away from zero.
fn percentage(part: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    let ratio = part as f64 / total as f64;
    (ratio * 100.0).round().clamp(0.0, 100.0) as u8
}
