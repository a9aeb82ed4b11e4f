use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::workflows::matching::Job;

/// Direction of a swipe: `Left` skips the card, `Right` marks it interesting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SwipeDirection {
    Left,
    Right,
}

impl SwipeDirection {
    pub const fn label(self) -> &'static str {
        match self {
            SwipeDirection::Left => "left",
            SwipeDirection::Right => "right",
        }
    }
}

impl fmt::Display for SwipeDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown swipe direction '{0}', expected 'left' or 'right'")]
pub struct ParseDirectionError(pub String);

impl FromStr for SwipeDirection {
    type Err = ParseDirectionError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "left" | "l" | "skip" => Ok(SwipeDirection::Left),
            "right" | "r" | "like" => Ok(SwipeDirection::Right),
            _ => Err(ParseDirectionError(raw.to_string())),
        }
    }
}

/// Cursor over a fixed deck of jobs plus the interested and applied logs.
///
/// The cursor only moves forward, and only through [`SwipeSession::swipe`]. Both logs are
/// append-only. Once the cursor passes the last job there is no current job; further
/// swipes still advance the cursor but never touch the logs.
#[derive(Debug, Clone)]
pub struct SwipeSession {
    jobs: Vec<Job>,
    current_index: usize,
    interested_jobs: Vec<Job>,
    applied_jobs: Vec<Job>,
}

impl SwipeSession {
    pub fn new(jobs: Vec<Job>) -> Self {
        Self {
            jobs,
            current_index: 0,
            interested_jobs: Vec::new(),
            applied_jobs: Vec::new(),
        }
    }

    /// Records a right-swipe on the job under the cursor, then advances the cursor.
    pub fn swipe(&mut self, direction: SwipeDirection) {
        if direction == SwipeDirection::Right {
            if let Some(job) = self.jobs.get(self.current_index) {
                self.interested_jobs.push(job.clone());
            }
        }

        debug!(
            %direction,
            index = self.current_index,
            job = self.jobs.get(self.current_index).map(|job| job.id.as_str()),
            "swipe"
        );
        self.current_index = self.current_index.saturating_add(1);
    }

    /// Appends `job` to the applied log.
    ///
    /// There is no eligibility gate and no check that `job` is the one on display;
    /// callers confirm with the user first.
    pub fn apply_to_job(&mut self, job: Job) {
        self.applied_jobs.push(job);
    }

    pub fn current_job(&self) -> Option<&Job> {
        self.jobs.get(self.current_index)
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn jobs(&self) -> &[Job] {
        &self.jobs
    }

    pub fn interested_jobs(&self) -> &[Job] {
        &self.interested_jobs
    }

    pub fn applied_jobs(&self) -> &[Job] {
        &self.applied_jobs
    }

    pub fn is_exhausted(&self) -> bool {
        self.current_index >= self.jobs.len()
    }

    pub fn summary(&self) -> SessionSummary {
        SessionSummary {
            position: self.current_index.min(self.jobs.len()),
            total: self.jobs.len(),
            remaining: self.jobs.len().saturating_sub(self.current_index),
            interested: self.interested_jobs.len(),
            applied: self.applied_jobs.len(),
            current_job: self.current_job().map(Job::headline),
        }
    }
}

/// Header counters for the swipe screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionSummary {
    pub position: usize,
    pub total: usize,
    pub remaining: usize,
    pub interested: usize,
    pub applied: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_job: Option<String>,
}
