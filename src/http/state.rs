use crate::jobs::JobCatalog;
use crate::session::{InterviewSession, CLOSING_MESSAGE};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};

/// Shared application state for HTTP handlers
///
/// Each session sits behind its own `Mutex`, which serializes
/// submissions per session (at most one in-flight `submit` per
/// interview) while leaving independent interviews concurrent.
#[derive(Clone)]
pub struct AppState {
    /// Job listings served to candidates
    pub catalog: Arc<JobCatalog>,

    /// Closing message delivered when an interview completes
    pub closing_message: String,

    /// Active interview sessions (interview_id → session)
    pub sessions: Arc<RwLock<HashMap<String, Arc<Mutex<InterviewSession>>>>>,
}

impl AppState {
    pub fn new(catalog: JobCatalog, closing_message: String) -> Self {
        Self {
            catalog: Arc::new(catalog),
            closing_message,
            sessions: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(JobCatalog::with_demo_listings(), CLOSING_MESSAGE.to_string())
    }
}
