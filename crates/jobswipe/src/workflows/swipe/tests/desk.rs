use super::common::*;
use crate::workflows::matching::MatchTier;
use crate::workflows::swipe::ApplicationDesk;

#[test]
fn review_warns_but_does_not_block_ineligible_jobs() {
    let profile = student();
    let desk = ApplicationDesk::new(&profile);

    let review = desk.review(&job(0));

    assert!(!review.eligibility.cgpa_eligible);
    assert!(review.eligibility.branch_eligible);
    assert_eq!(review.headline, "Frontend Developer Intern at TechCorp");
    assert_eq!(review.warnings, vec!["CGPA 8.5 below required 9".to_string()]);
}

#[test]
fn review_of_eligible_job_has_no_warnings() {
    let profile = student();
    let desk = ApplicationDesk::new(&profile);

    let review = desk.review(&job(1));

    assert!(review.eligibility.overall_eligible);
    assert!(review.warnings.is_empty());
}

#[test]
fn confirm_records_application_and_scores_live() {
    let profile = student();
    let desk = ApplicationDesk::new(&profile);
    let mut session = seeded_session();
    let posting = job(0);

    let receipt = desk.confirm_at(&mut session, &posting, submitted_at());

    assert_eq!(session.applied_jobs().len(), 1);
    assert_eq!(session.applied_jobs()[0].id, posting.id);
    assert_eq!(session.current_index(), 0, "applying never moves the cursor");
    assert!(receipt.applied_while_ineligible());
    assert_eq!(receipt.ats.score, 75);
    assert_eq!(
        receipt.ats.matched_keywords,
        vec!["react", "typescript", "typescript."]
    );
    assert_eq!(receipt.ats.missing_keywords, vec!["remote"]);
    assert_eq!(receipt.ats.tier(), MatchTier::Good);
    assert_ne!(receipt.ats.score, posting.listed_ats_score);
    assert_eq!(receipt.submitted_at, submitted_at());
    assert!(receipt.message.contains("submitted to TechCorp"));
}

#[test]
fn confirm_on_devops_job_lists_all_five_gaps() {
    let profile = student();
    let desk = ApplicationDesk::new(&profile);
    let mut session = seeded_session();

    let receipt = desk.confirm(&mut session, &job(4));

    assert!(!receipt.applied_while_ineligible());
    assert_eq!(receipt.ats.score, 0);
    assert!(receipt.ats.matched_keywords.is_empty());
    assert_eq!(
        receipt.ats.missing_keywords,
        vec!["aws", "docker", "kubernetes", "remote", "ci/cd"]
    );
    assert_eq!(receipt.ats.tier(), MatchTier::NeedsImprovement);
}
