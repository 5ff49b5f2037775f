use super::config::SessionConfig;
use super::stats::SessionStats;
use super::transcript::{Speaker, Transcript, Turn};
use super::SessionError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

/// Lifecycle state of an interview session
///
/// `Completed` is terminal; no transition leaves it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionStatus {
    InProgress,
    Completed,
}

/// The delta produced by a successful submission: the candidate turn
/// that was recorded and the interviewer turn that followed it
#[derive(Debug, Clone, Serialize)]
pub struct SubmitOutcome {
    pub candidate_turn: Turn,
    pub interviewer_turn: Turn,
    pub status: SessionStatus,
}

/// A scripted interview dialogue between an interviewer and a candidate
///
/// The session owns the prompt script, the cursor into it, and the
/// append-only transcript. Advancement is content-blind: the candidate's
/// response is recorded verbatim but never influences which prompt comes
/// next. The session is held in memory only and discarded after the
/// results hand-off.
#[derive(Debug, Clone)]
pub struct InterviewSession {
    /// Session configuration (script, closing message, identifiers)
    config: SessionConfig,

    /// Index of the currently active prompt; valid until completion
    cursor: usize,

    /// Append-only record of all turns
    transcript: Transcript,

    /// Current lifecycle state
    status: SessionStatus,

    /// When the session started
    started_at: DateTime<Utc>,
}

impl InterviewSession {
    /// Start a new session: deliver the first prompt as the opening
    /// interviewer turn.
    ///
    /// Fails with `InvalidInput` if the prompt script is empty; no
    /// session is created in that case.
    pub fn start(config: SessionConfig) -> Result<Self, SessionError> {
        if config.prompts.is_empty() {
            return Err(SessionError::InvalidInput);
        }

        info!("Starting interview session: {}", config.session_id);

        let mut transcript = Transcript::new();
        transcript.append(Speaker::Interviewer, config.prompts[0].clone());

        Ok(Self {
            config,
            cursor: 0,
            transcript,
            status: SessionStatus::InProgress,
            started_at: Utc::now(),
        })
    }

    /// Record a candidate response and advance the dialogue.
    ///
    /// On success the candidate turn is appended, followed by either the
    /// next prompt (cursor advances) or the closing message (status flips
    /// to `Completed`). Validation happens before any mutation, so a
    /// failed call leaves the session untouched.
    pub fn submit(&mut self, response: &str) -> Result<SubmitOutcome, SessionError> {
        if self.status == SessionStatus::Completed {
            return Err(SessionError::SessionClosed);
        }

        let response = response.trim();
        if response.is_empty() {
            return Err(SessionError::EmptyResponse);
        }

        let candidate_turn = self.transcript.append(Speaker::Candidate, response);

        let interviewer_turn = if self.cursor + 1 < self.config.prompts.len() {
            self.cursor += 1;
            self.transcript
                .append(Speaker::Interviewer, self.config.prompts[self.cursor].clone())
        } else {
            self.status = SessionStatus::Completed;
            info!("Interview session completed: {}", self.config.session_id);
            self.transcript
                .append(Speaker::Interviewer, self.config.closing_message.clone())
        };

        Ok(SubmitOutcome {
            candidate_turn,
            interviewer_turn,
            status: self.status,
        })
    }

    /// Whether the final prompt has been answered
    pub fn is_complete(&self) -> bool {
        self.status == SessionStatus::Completed
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    /// Index of the currently active prompt
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn prompts(&self) -> &[String] {
        &self.config.prompts
    }

    pub fn session_id(&self) -> &str {
        &self.config.session_id
    }

    pub fn job_id(&self) -> Option<&str> {
        self.config.job_id.as_deref()
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// Current session statistics
    pub fn stats(&self) -> SessionStats {
        let duration = Utc::now().signed_duration_since(self.started_at);

        let prompts_answered = self
            .transcript
            .turns()
            .iter()
            .filter(|t| t.speaker == Speaker::Candidate)
            .count();

        SessionStats {
            session_id: self.config.session_id.clone(),
            status: self.status,
            started_at: self.started_at,
            duration_secs: duration.num_milliseconds() as f64 / 1000.0,
            prompts_total: self.config.prompts.len(),
            prompts_answered,
            transcript_turns: self.transcript.len(),
        }
    }
}
