use super::*;
use proptest::prelude::*;

// ── Strategy helpers ──────────────────────────────────

const VOCABULARY: [&str; 16] = [
    "React",
    "Node.js",
    "Python",
    "Docker",
    "Remote",
    "Hybrid",
    "SQL",
    "GraphQL",
    "Git",
    "Figma",
    "Agile",
    "Kubernetes",
    "TypeScript",
    "AWS",
    "REST API",
    "testing",
];

fn arb_term() -> impl Strategy<Value = String> {
    prop_oneof![
        prop::sample::select(VOCABULARY.to_vec()).prop_map(str::to_string),
        "[a-z]{1,9}",
    ]
}

fn arb_branch() -> impl Strategy<Value = String> {
    prop::sample::select(vec!["CSE", "IT", "ECE", "EEE", "Design"]).prop_map(str::to_string)
}

fn arb_student() -> impl Strategy<Value = StudentProfile> {
    (
        0.0f64..=10.0,
        arb_branch(),
        prop::collection::vec(arb_term(), 0..8),
        prop::collection::vec(arb_term(), 0..8),
    )
        .prop_map(|(cgpa, branch, skills, resume_keywords)| StudentProfile {
            name: "Prop Student".to_string(),
            email: "prop@example.edu".to_string(),
            cgpa,
            branch,
            skills,
            resume_keywords,
        })
}

fn arb_job() -> impl Strategy<Value = Job> {
    (
        0.0f64..=10.0,
        prop::collection::vec(arb_branch(), 0..4),
        prop::collection::vec(arb_term(), 0..10),
        prop::collection::vec(arb_term(), 0..20),
    )
        .prop_map(|(min_cgpa, branches, tags, words)| Job {
            id: JobId::new("prop"),
            title: "Prop Job".to_string(),
            company: "Prop Co".to_string(),
            tags,
            description: words.join(" "),
            eligibility: EligibilityRequirement { min_cgpa, branches },
            listed_ats_score: 0,
            listed_missing_keywords: Vec::new(),
        })
}

// ── Eligibility properties ────────────────────────────

proptest! {
    #[test]
    fn prop_overall_is_conjunction(student in arb_student(), job in arb_job()) {
        let check = check_eligibility(&student, &job);
        prop_assert_eq!(
            check.overall_eligible,
            check.cgpa_eligible && check.branch_eligible
        );
    }

    #[test]
    fn prop_raising_cgpa_never_revokes_eligibility(
        student in arb_student(),
        job in arb_job(),
        bump in 0.0f64..5.0,
    ) {
        let before = check_eligibility(&student, &job);
        let mut stronger = student.clone();
        stronger.cgpa += bump;
        let after = check_eligibility(&stronger, &job);
        prop_assert!(!before.cgpa_eligible || after.cgpa_eligible);
    }
}

// ── ATS scorer properties ─────────────────────────────

proptest! {
    #[test]
    fn prop_score_within_bounds(student in arb_student(), job in arb_job()) {
        let result = calculate_ats_score(&student, &job);
        prop_assert!(result.score <= 100);
    }

    #[test]
    fn prop_zero_and_hundred_track_matches(student in arb_student(), job in arb_job()) {
        let result = calculate_ats_score(&student, &job);
        let total = job_keywords(&job).len();
        let matched = result.matched_keywords.len();

        prop_assert_eq!(result.score == 0, total == 0 || matched == 0);
        prop_assert_eq!(result.score == 100, total > 0 && matched == total);
    }

    #[test]
    fn prop_missing_keywords_are_capped_prefix(student in arb_student(), job in arb_job()) {
        let result = calculate_ats_score(&student, &job);
        let expected: Vec<String> = job_keywords(&job)
            .iter()
            .filter(|keyword| !result.matched_keywords.iter().any(|m| m.as_str() == *keyword))
            .take(MISSING_KEYWORD_LIMIT)
            .map(str::to_string)
            .collect();

        prop_assert!(result.missing_keywords.len() <= MISSING_KEYWORD_LIMIT);
        prop_assert_eq!(result.missing_keywords, expected);
    }
}
