use std::collections::HashSet;

use super::domain::{Job, StudentProfile};

/// Technology and process terms that promote a description word to a keyword.
pub const REFERENCE_PATTERNS: [&str; 19] = [
    "react",
    "node",
    "python",
    "java",
    "typescript",
    "javascript",
    "docker",
    "kubernetes",
    "aws",
    "azure",
    "mongodb",
    "sql",
    "api",
    "rest",
    "graphql",
    "ci/cd",
    "agile",
    "testing",
    "git",
];

/// Description words of this many characters or fewer are never keywords.
const MIN_WORD_CHARS: usize = 3;

/// Lower-cased keywords, de-duplicated, iterated in first-insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeywordSet {
    ordered: Vec<String>,
    seen: HashSet<String>,
}

impl KeywordSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lower-cases `keyword` and appends it unless already present.
    pub fn insert(&mut self, keyword: &str) -> bool {
        let normalized = keyword.to_lowercase();
        if self.seen.contains(&normalized) {
            return false;
        }
        self.seen.insert(normalized.clone());
        self.ordered.push(normalized);
        true
    }

    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }

    pub fn contains(&self, keyword: &str) -> bool {
        self.seen.contains(&keyword.to_lowercase())
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ordered.iter().map(String::as_str)
    }
}

impl<'a> FromIterator<&'a str> for KeywordSet {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut set = KeywordSet::new();
        for keyword in iter {
            set.insert(keyword);
        }
        set
    }
}

/// Tags first, in tag order, then qualifying description words in reading order.
///
/// A description word qualifies when it is longer than three characters and embeds one
/// of [`REFERENCE_PATTERNS`]; the whole word is kept, punctuation included.
pub fn job_keywords(job: &Job) -> KeywordSet {
    let mut keywords: KeywordSet = job.tags.iter().map(String::as_str).collect();

    let description = job.description.to_lowercase();
    for word in description.split_whitespace() {
        if word.chars().count() <= MIN_WORD_CHARS {
            continue;
        }
        if REFERENCE_PATTERNS
            .iter()
            .any(|pattern| word.contains(pattern))
        {
            keywords.insert(word);
        }
    }

    keywords
}

/// Skills followed by resume keywords, lower-cased and de-duplicated.
pub fn student_keywords(student: &StudentProfile) -> KeywordSet {
    student
        .skills
        .iter()
        .chain(student.resume_keywords.iter())
        .map(String::as_str)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflows::matching::domain::{EligibilityRequirement, JobId};

    fn job(tags: &[&str], description: &str) -> Job {
        Job {
            id: JobId::new("k-1"),
            title: "Engineer".to_string(),
            company: "Acme".to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            description: description.to_string(),
            eligibility: EligibilityRequirement {
                min_cgpa: 0.0,
                branches: vec!["CSE".to_string()],
            },
            listed_ats_score: 0,
            listed_missing_keywords: Vec::new(),
        }
    }

    #[test]
    fn keyword_set_keeps_first_insertion_order() {
        let mut set = KeywordSet::new();
        assert!(set.insert("React"));
        assert!(set.insert("Docker"));
        assert!(!set.insert("REACT"));
        assert!(set.insert("agile"));

        let collected: Vec<&str> = set.iter().collect();
        assert_eq!(collected, vec!["react", "docker", "agile"]);
        assert!(set.contains("DOCKER"));
    }

    #[test]
    fn tags_precede_description_words() {
        let posting = job(
            &["Remote", "Python"],
            "Ship Docker images and review GraphQL schemas daily",
        );
        let keywords: Vec<String> = job_keywords(&posting).iter().map(str::to_string).collect();
        assert_eq!(keywords, vec!["remote", "python", "docker", "graphql"]);
    }

    #[test]
    fn description_words_keep_punctuation_and_embed_patterns() {
        let posting = job(&[], "Strong TypeScript. skills, robust APIs and digital tooling");
        let keywords: Vec<String> = job_keywords(&posting).iter().map(str::to_string).collect();
        assert_eq!(keywords, vec!["typescript.", "apis", "digital"]);
    }

    #[test]
    fn short_words_are_ignored_even_when_they_match() {
        let posting = job(&[], "aws git sql java");
        let keywords = job_keywords(&posting);
        assert_eq!(keywords.iter().collect::<Vec<_>>(), vec!["java"]);
    }

    #[test]
    fn description_duplicates_of_tags_are_collapsed() {
        let posting = job(&["React"], "Modern react work with react hooks");
        assert_eq!(job_keywords(&posting).len(), 1);
    }

    #[test]
    fn student_keywords_union_skills_and_resume() {
        let student = StudentProfile {
            name: "Sam".to_string(),
            email: "sam@example.edu".to_string(),
            cgpa: 7.0,
            branch: "IT".to_string(),
            skills: vec!["React".to_string(), "Git".to_string()],
            resume_keywords: vec!["git".to_string(), "REST API".to_string()],
        };
        let keywords = student_keywords(&student);
        assert_eq!(
            keywords.iter().collect::<Vec<_>>(),
            vec!["react", "git", "rest api"]
        );
    }
}
