use super::session::SessionStatus;
use super::transcript::Turn;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Statistics about an interview session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionStats {
    /// Session identifier
    pub session_id: String,

    /// Current lifecycle state
    pub status: SessionStatus,

    /// When the session started
    pub started_at: DateTime<Utc>,

    /// Elapsed time since start in seconds
    pub duration_secs: f64,

    /// Total prompts in the script
    pub prompts_total: usize,

    /// Prompts answered so far
    pub prompts_answered: usize,

    /// Number of turns recorded in the transcript
    pub transcript_turns: usize,
}

/// Final hand-off payload for the results view
///
/// The duration is supplied by the caller's timer, not measured here; a
/// missing value is reported as zero.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResultsSummary {
    /// Session identifier
    pub session_id: String,

    /// Job listing the interview was for, if any
    pub job_id: Option<String>,

    /// Lifecycle state at hand-off time
    pub status: SessionStatus,

    /// Elapsed interview duration in whole seconds (0 when not reported)
    pub duration_secs: u64,

    /// Full transcript snapshot
    pub transcript: Vec<Turn>,
}
