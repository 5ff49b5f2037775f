use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Which party produced a turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Speaker {
    Interviewer,
    Candidate,
}

/// A single recorded utterance in an interview session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Turn {
    /// Who spoke
    pub speaker: Speaker,

    /// What was said (never empty)
    pub text: String,

    /// Position in the transcript; insertion order is the only
    /// ordering guarantee
    pub sequence: u64,

    /// When the turn was recorded (informational only)
    pub timestamp: DateTime<Utc>,
}

/// Append-only ordered log of turns for one session
///
/// Turns are never removed or mutated after insertion; sequence numbers
/// are assigned on append and are strictly increasing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Transcript {
    turns: Vec<Turn>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a turn, assigning the next sequence number and a capture
    /// timestamp. Returns a copy of the stored turn.
    pub(crate) fn append(&mut self, speaker: Speaker, text: impl Into<String>) -> Turn {
        let turn = Turn {
            speaker,
            text: text.into(),
            sequence: self.turns.len() as u64,
            timestamp: Utc::now(),
        };
        self.turns.push(turn.clone());
        turn
    }

    /// Read-only view of all turns in insertion order
    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    pub fn last(&self) -> Option<&Turn> {
        self.turns.last()
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }
}
