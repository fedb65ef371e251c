//! Review workflow for extracted keywords
//!
//! This module reifies the approval loop as an explicit state machine:
//! submit text, review the extracted keywords, approve / reject / edit,
//! and display ranked results once approved.

pub mod phase;
pub mod session;

pub use phase::ReviewPhase;
pub use session::ReviewSession;
