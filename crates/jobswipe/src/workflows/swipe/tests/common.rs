use chrono::{DateTime, TimeZone, Utc};

use crate::workflows::catalog::{seed_jobs, seed_student_profile};
use crate::workflows::matching::{Job, StudentProfile};
use crate::workflows::swipe::SwipeSession;

pub(super) use crate::workflows::swipe::SwipeDirection::{Left, Right};

pub(super) fn student() -> StudentProfile {
    seed_student_profile()
}

pub(super) fn jobs() -> Vec<Job> {
    seed_jobs()
}

pub(super) fn seeded_session() -> SwipeSession {
    SwipeSession::new(jobs())
}

pub(super) fn job(index: usize) -> Job {
    jobs()
        .into_iter()
        .nth(index)
        .expect("seed deck has six jobs")
}

pub(super) fn interested_ids(session: &SwipeSession) -> Vec<&str> {
    session
        .interested_jobs()
        .iter()
        .map(|job| job.id.as_str())
        .collect()
}

pub(super) fn submitted_at() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 10, 1, 9, 30, 0)
        .single()
        .expect("valid timestamp")
}
