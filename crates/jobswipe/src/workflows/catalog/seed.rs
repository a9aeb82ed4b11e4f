use super::{CatalogError, JobCatalog};
use crate::workflows::matching::{EligibilityRequirement, Job, JobId, StudentProfile};

/// The built-in deck of six postings used when no catalog file is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct SeedCatalog;

impl JobCatalog for SeedCatalog {
    fn jobs(&self) -> Result<Vec<Job>, CatalogError> {
        Ok(seed_jobs())
    }
}

/// Stand-in for the signed-in student.
pub fn seed_student_profile() -> StudentProfile {
    StudentProfile {
        name: "Alex Johnson".to_string(),
        email: "alex.johnson@university.edu".to_string(),
        cgpa: 8.5,
        branch: "CSE".to_string(),
        skills: strings(&["React", "TypeScript", "Node.js", "Python", "MongoDB", "Git"]),
        resume_keywords: strings(&[
            "React",
            "TypeScript",
            "Node.js",
            "Python",
            "MongoDB",
            "REST API",
            "Git",
            "Agile",
            "Problem Solving",
            "Team Collaboration",
        ]),
    }
}

pub fn seed_jobs() -> Vec<Job> {
    vec![
        posting(
            "1",
            "Frontend Developer Intern",
            "TechCorp",
            &["React", "TypeScript", "Remote"],
            "We are looking for a passionate frontend developer to join our team. You will work on building modern web applications using React and TypeScript. Experience with Next.js and Tailwind CSS is a plus.",
            (9.0, &["CSE", "IT", "ECE"]),
            (78, &["Next.js", "Testing", "CI/CD"]),
        ),
        posting(
            "2",
            "Full Stack Developer",
            "StartupXYZ",
            &["Node.js", "React", "MongoDB", "Remote"],
            "Join our fast-paced startup as a full stack developer. You will be responsible for building scalable web applications from scratch. Knowledge of cloud platforms and microservices architecture is preferred.",
            (8.5, &["CSE", "IT"]),
            (65, &["AWS", "Docker", "Kubernetes", "GraphQL"]),
        ),
        posting(
            "3",
            "Backend Engineer",
            "DataFlow Inc",
            &["Python", "Django", "PostgreSQL", "Hybrid"],
            "We need a backend engineer to build robust APIs and data processing pipelines. You will work with large datasets and implement efficient database schemas. Experience with Redis and message queues is valuable.",
            (7.2, &["CSE", "IT", "ECE", "EEE"]),
            (82, &["Redis", "Message Queues"]),
        ),
        posting(
            "4",
            "Mobile App Developer",
            "AppMakers",
            &["React Native", "Mobile", "Firebase", "Remote"],
            "Build cross-platform mobile applications using React Native. You will collaborate with designers to create intuitive user experiences and integrate with backend services. Knowledge of native iOS/Android development is a bonus.",
            (6.8, &["CSE", "IT", "ECE"]),
            (71, &["Swift", "Kotlin", "Push Notifications"]),
        ),
        posting(
            "5",
            "DevOps Intern",
            "CloudTech",
            &["AWS", "Docker", "Kubernetes", "Remote"],
            "Learn and implement modern DevOps practices. You will work on CI/CD pipelines, containerization, and cloud infrastructure. This is a great opportunity to gain hands-on experience with industry-standard tools.",
            (7.0, &["CSE", "IT"]),
            (88, &["Terraform", "Ansible"]),
        ),
        posting(
            "6",
            "UI/UX Designer",
            "DesignHub",
            &["Figma", "UI/UX", "Web Design", "Hybrid"],
            "Create beautiful and functional user interfaces. You will conduct user research, create wireframes and prototypes, and work closely with developers to implement designs. Portfolio required.",
            (6.5, &["CSE", "IT", "Design"]),
            (75, &["Adobe XD", "User Research", "Prototyping"]),
        ),
    ]
}

fn posting(
    id: &str,
    title: &str,
    company: &str,
    tags: &[&str],
    description: &str,
    (min_cgpa, branches): (f64, &[&str]),
    (listed_ats_score, listed_missing): (u8, &[&str]),
) -> Job {
    Job {
        id: JobId::new(id),
        title: title.to_string(),
        company: company.to_string(),
        tags: strings(tags),
        description: description.to_string(),
        eligibility: EligibilityRequirement {
            min_cgpa,
            branches: strings(branches),
        },
        listed_ats_score,
        listed_missing_keywords: strings(listed_missing),
    }
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}
