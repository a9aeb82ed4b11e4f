use serde::{Deserialize, Serialize};

use super::domain::{Job, StudentProfile};

/// Per-criterion eligibility breakdown for one student and one job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EligibilityCheck {
    pub cgpa_eligible: bool,
    pub branch_eligible: bool,
    pub overall_eligible: bool,
}

impl EligibilityCheck {
    pub fn summary(&self) -> String {
        match (self.cgpa_eligible, self.branch_eligible) {
            (true, true) => "eligible".to_string(),
            (false, true) => "not eligible: CGPA below requirement".to_string(),
            (true, false) => "not eligible: branch not accepted".to_string(),
            (false, false) => "not eligible: CGPA below requirement, branch not accepted".to_string(),
        }
    }

    /// Failed criteria phrased for the confirmation warning shown before applying.
    pub fn blocking_reasons(&self, student: &StudentProfile, job: &Job) -> Vec<String> {
        let mut reasons = Vec::new();
        if !self.cgpa_eligible {
            reasons.push(format!(
                "CGPA {} below required {}",
                student.cgpa, job.eligibility.min_cgpa
            ));
        }
        if !self.branch_eligible {
            reasons.push(format!(
                "branch {} not in [{}]",
                student.branch,
                job.eligibility.branches.join(", ")
            ));
        }
        reasons
    }
}

/// Checks the CGPA threshold (inclusive) and branch membership (exact match).
///
/// A job with no listed branches admits nobody.
pub fn check_eligibility(student: &StudentProfile, job: &Job) -> EligibilityCheck {
    let cgpa_eligible = student.cgpa >= job.eligibility.min_cgpa;
    let branch_eligible = job
        .eligibility
        .branches
        .iter()
        .any(|branch| *branch == student.branch);

    EligibilityCheck {
        cgpa_eligible,
        branch_eligible,
        overall_eligible: cgpa_eligible && branch_eligible,
    }
}
