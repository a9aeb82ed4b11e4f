//! Swipe deck state, the session holder, the confirm-and-apply flow, and card gestures.

mod context;
mod desk;
pub mod gesture;
mod session;

#[cfg(test)]
mod tests;

pub use context::{SessionContext, SessionError};
pub use desk::{ApplicationDesk, ApplicationReceipt, ApplicationReview};
pub use gesture::{DragGesture, GestureOutcome};
pub use session::{ParseDirectionError, SessionSummary, SwipeDirection, SwipeSession};
