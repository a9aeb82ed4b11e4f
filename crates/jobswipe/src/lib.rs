//! Swipe-to-apply job matching.
//!
//! A student profile is matched against an ordered job catalog through an eligibility
//! check and a keyword-overlap ATS score, while a [`workflows::swipe::SwipeSession`]
//! tracks which job is on display, which jobs were marked interesting, and which were
//! applied to.

pub mod config;
pub mod error;
pub mod telemetry;
pub mod workflows;
