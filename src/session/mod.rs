//! Interview session management
//!
//! This module provides the scripted dialogue core:
//! - `InterviewSession`: the dialogue controller (start, submit, completion)
//! - `Transcript`: append-only ordered record of turns
//! - `SessionStats` / `ResultsSummary`: observational state for consumers
//!
//! Sessions live in memory only; nothing survives the process.

mod config;
mod error;
mod session;
mod stats;
mod transcript;

pub use config::{SessionConfig, CLOSING_MESSAGE, DEFAULT_PROMPTS};
pub use error::SessionError;
pub use session::{InterviewSession, SessionStatus, SubmitOutcome};
pub use stats::{ResultsSummary, SessionStats};
pub use transcript::{Speaker, Transcript, Turn};
