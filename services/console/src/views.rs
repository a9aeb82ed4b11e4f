use jobswipe::workflows::matching::{
    calculate_ats_score, check_eligibility, AtsResult, EligibilityCheck, Job, JobId, MatchTier,
    StudentProfile,
};
use jobswipe::workflows::swipe::{ApplicationReceipt, ApplicationReview, SessionSummary};
use serde::Serialize;
use std::fmt::Write;

/// Profile screen shows this many skills before collapsing the rest.
const PROFILE_SKILL_PREVIEW: usize = 6;

/// Job detail screen: eligibility plus the live ATS result.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct MatchReport {
    pub(crate) job_id: JobId,
    pub(crate) headline: String,
    pub(crate) eligibility: EligibilityCheck,
    pub(crate) blocking_reasons: Vec<String>,
    pub(crate) ats: AtsResult,
    pub(crate) tier: MatchTier,
    pub(crate) listed_ats_score: u8,
}

impl MatchReport {
    pub(crate) fn build(student: &StudentProfile, job: &Job) -> Self {
        let eligibility = check_eligibility(student, job);
        let ats = calculate_ats_score(student, job);
        Self {
            job_id: job.id.clone(),
            headline: job.headline(),
            blocking_reasons: eligibility.blocking_reasons(student, job),
            eligibility,
            tier: ats.tier(),
            ats,
            listed_ats_score: job.listed_ats_score,
        }
    }
}

fn mark(flag: bool) -> &'static str {
    if flag {
        "yes"
    } else {
        "no"
    }
}

fn join_or_none(items: &[String]) -> String {
    if items.is_empty() {
        "none".to_string()
    } else {
        items.join(", ")
    }
}

pub(crate) fn render_jobs(jobs: &[Job], student: &StudentProfile) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} jobs in the deck", jobs.len());
    for job in jobs {
        let eligibility = check_eligibility(student, job);
        let _ = writeln!(
            out,
            "[{}] {} | min CGPA {} | {} | {}",
            job.id,
            job.headline(),
            job.eligibility.min_cgpa,
            job.eligibility.branches.join("/"),
            eligibility.summary()
        );
        let _ = writeln!(out, "    tags: {}", job.tags.join(", "));
    }
    out
}

pub(crate) fn render_profile(student: &StudentProfile) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} <{}>", student.name, student.email);
    let _ = writeln!(out, "CGPA {} | branch {}", student.cgpa, student.branch);

    let preview: Vec<&str> = student
        .skills
        .iter()
        .take(PROFILE_SKILL_PREVIEW)
        .map(String::as_str)
        .collect();
    let hidden = student.skills.len().saturating_sub(PROFILE_SKILL_PREVIEW);
    let mut skills = preview.join(", ");
    if hidden > 0 {
        let _ = write!(skills, " +{hidden} more");
    }
    let _ = writeln!(out, "skills: {skills}");
    let _ = writeln!(out, "resume: {}", join_or_none(&student.resume_keywords));
    out
}

pub(crate) fn render_match(report: &MatchReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "[{}] {}", report.job_id, report.headline);
    let _ = writeln!(
        out,
        "eligibility: cgpa {} | branch {} | overall {}",
        mark(report.eligibility.cgpa_eligible),
        mark(report.eligibility.branch_eligible),
        mark(report.eligibility.overall_eligible)
    );
    for reason in &report.blocking_reasons {
        let _ = writeln!(out, "  warning: {reason}");
    }
    let _ = writeln!(
        out,
        "ATS score: {}% ({})",
        report.ats.score,
        report.tier.label()
    );
    let _ = writeln!(out, "matched: {}", join_or_none(&report.ats.matched_keywords));
    let _ = writeln!(out, "missing: {}", join_or_none(&report.ats.missing_keywords));
    out
}

pub(crate) fn render_review(review: &ApplicationReview) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Apply to {}?", review.headline);
    for warning in &review.warnings {
        let _ = writeln!(out, "  warning: {warning}");
    }
    out
}

pub(crate) fn render_receipt(receipt: &ApplicationReceipt) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", receipt.message);
    let _ = writeln!(
        out,
        "  ATS score {}% ({}) at {}",
        receipt.ats.score,
        receipt.ats.tier().label(),
        receipt.submitted_at.format("%Y-%m-%d %H:%M UTC")
    );
    if !receipt.ats.missing_keywords.is_empty() {
        let _ = writeln!(
            out,
            "  add to your resume: {}",
            receipt.ats.missing_keywords.join(", ")
        );
    }
    out
}

pub(crate) fn render_summary(summary: &SessionSummary) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "position {}/{} | {} remaining | {} interested | {} applied",
        summary.position, summary.total, summary.remaining, summary.interested, summary.applied
    );
    match &summary.current_job {
        Some(headline) => {
            let _ = writeln!(out, "next up: {headline}");
        }
        None => {
            let _ = writeln!(out, "no more jobs");
        }
    }
    out
}
