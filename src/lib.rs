pub mod config;
pub mod http;
pub mod jobs;
pub mod session;

pub use config::Config;
pub use http::{create_router, AppState};
pub use jobs::{Job, JobCatalog, JobFilter, WorkType};
pub use session::{
    InterviewSession, ResultsSummary, SessionConfig, SessionError, SessionStats, SessionStatus,
    Speaker, SubmitOutcome, Transcript, Turn,
};
