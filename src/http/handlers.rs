use super::state::AppState;
use crate::jobs::JobFilter;
use crate::session::{
    InterviewSession, ResultsSummary, SessionConfig, SessionError, SessionStatus, Turn,
};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{error, info};

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct JobsQuery {
    /// Free-text search over title, company, and skills
    pub q: Option<String>,

    /// Comma-separated experience bands
    pub experience: Option<String>,

    /// Comma-separated locations
    pub locations: Option<String>,

    /// Salary band in thousands of USD
    pub salary_min_k: Option<u32>,
    pub salary_max_k: Option<u32>,
}

#[derive(Debug, Deserialize)]
pub struct StartInterviewRequest {
    /// Job listing the interview is for (must exist if provided)
    pub job_id: Option<String>,

    /// Custom prompt script (if not provided, use the default questions)
    pub prompts: Option<Vec<String>>,
}

#[derive(Debug, Serialize)]
pub struct StartInterviewResponse {
    pub interview_id: String,
    pub job_id: Option<String>,
    pub status: SessionStatus,
    /// The opening interviewer turn (first question)
    pub opening_turn: Turn,
    pub prompts_total: usize,
}

#[derive(Debug, Deserialize)]
pub struct SubmitRequest {
    pub response: String,
}

#[derive(Debug, Serialize)]
pub struct SubmitResponse {
    pub interview_id: String,
    pub candidate_turn: Turn,
    pub interviewer_turn: Turn,
    pub status: SessionStatus,
    /// 1-based number of the question now on screen
    pub question_number: usize,
    pub questions_total: usize,
}

#[derive(Debug, Default, Deserialize)]
pub struct FinishRequest {
    /// Elapsed duration measured by the caller's timer; missing means 0
    pub duration_secs: Option<u64>,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

fn error_status(err: &SessionError) -> StatusCode {
    match err {
        SessionError::SessionClosed => StatusCode::CONFLICT,
        SessionError::InvalidInput | SessionError::EmptyResponse => {
            StatusCode::UNPROCESSABLE_ENTITY
        }
    }
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /jobs
/// List job listings, optionally filtered
pub async fn list_jobs(
    State(state): State<AppState>,
    Query(query): Query<JobsQuery>,
) -> impl IntoResponse {
    let split = |s: Option<String>| -> Vec<String> {
        s.map(|s| {
            s.split(',')
                .map(|p| p.trim().to_string())
                .filter(|p| !p.is_empty())
                .collect()
        })
        .unwrap_or_default()
    };

    let filter = JobFilter {
        query: query.q,
        experience: split(query.experience),
        locations: split(query.locations),
        salary_min_k: query.salary_min_k,
        salary_max_k: query.salary_max_k,
    };

    (StatusCode::OK, Json(state.catalog.search(&filter)))
}

/// GET /jobs/:job_id
/// Single job listing
pub async fn get_job(
    State(state): State<AppState>,
    Path(job_id): Path<String>,
) -> impl IntoResponse {
    match state.catalog.get(&job_id) {
        Some(job) => (StatusCode::OK, Json(job.clone())).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: format!("Job {} not found", job_id),
            }),
        )
            .into_response(),
    }
}

/// POST /interviews/start
/// Start a new interview session
pub async fn start_interview(
    State(state): State<AppState>,
    Json(req): Json<StartInterviewRequest>,
) -> impl IntoResponse {
    // Validate the job reference before creating anything
    if let Some(job_id) = &req.job_id {
        if state.catalog.get(job_id).is_none() {
            return (
                StatusCode::NOT_FOUND,
                Json(ErrorResponse {
                    error: format!("Job {} not found", job_id),
                }),
            )
                .into_response();
        }
    }

    let interview_id = format!("interview-{}", uuid::Uuid::new_v4());

    info!("Starting interview: {}", interview_id);

    let mut config = SessionConfig {
        session_id: interview_id.clone(),
        job_id: req.job_id,
        closing_message: state.closing_message.clone(),
        ..SessionConfig::default()
    };
    if let Some(prompts) = req.prompts {
        config.prompts = prompts;
    }

    let session = match InterviewSession::start(config) {
        Ok(s) => s,
        Err(e) => {
            error!("Failed to start interview: {}", e);
            return (
                error_status(&e),
                Json(ErrorResponse {
                    error: e.to_string(),
                }),
            )
                .into_response();
        }
    };

    let opening_turn = match session.transcript().last() {
        Some(turn) => turn.clone(),
        None => {
            // start() always seeds the first prompt; treat this as a bug
            error!("Interview {} started with empty transcript", interview_id);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "interview started with empty transcript".to_string(),
                }),
            )
                .into_response();
        }
    };

    let response = StartInterviewResponse {
        interview_id: interview_id.clone(),
        job_id: session.job_id().map(|s| s.to_string()),
        status: session.status(),
        opening_turn,
        prompts_total: session.prompts().len(),
    };

    {
        let mut sessions = state.sessions.write().await;
        sessions.insert(interview_id, Arc::new(Mutex::new(session)));
    }

    (StatusCode::OK, Json(response)).into_response()
}

/// POST /interviews/:interview_id/submit
/// Record a candidate response and return the interviewer's next turn
pub async fn submit_response(
    State(state): State<AppState>,
    Path(interview_id): Path<String>,
    Json(req): Json<SubmitRequest>,
) -> impl IntoResponse {
    let session = {
        let sessions = state.sessions.read().await;
        sessions.get(&interview_id).cloned()
    };

    let session = match session {
        Some(s) => s,
        None => {
            return (
                StatusCode::NOT_FOUND,
                Json(ErrorResponse {
                    error: format!("Interview {} not found", interview_id),
                }),
            )
                .into_response();
        }
    };

    let mut session = session.lock().await;

    match session.submit(&req.response) {
        Ok(outcome) => {
            let response = SubmitResponse {
                interview_id,
                candidate_turn: outcome.candidate_turn,
                interviewer_turn: outcome.interviewer_turn,
                status: outcome.status,
                question_number: session.cursor() + 1,
                questions_total: session.prompts().len(),
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => (
            error_status(&e),
            Json(ErrorResponse {
                error: e.to_string(),
            }),
        )
            .into_response(),
    }
}

/// GET /interviews/:interview_id/status
/// Current statistics for an interview session
pub async fn get_interview_status(
    State(state): State<AppState>,
    Path(interview_id): Path<String>,
) -> impl IntoResponse {
    let sessions = state.sessions.read().await;

    match sessions.get(&interview_id) {
        Some(session) => {
            let session = session.lock().await;
            (StatusCode::OK, Json(session.stats())).into_response()
        }
        None => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: format!("Interview {} not found", interview_id),
            }),
        )
            .into_response(),
    }
}

/// GET /interviews/:interview_id/transcript
/// Transcript snapshot (accumulated so far)
pub async fn get_interview_transcript(
    State(state): State<AppState>,
    Path(interview_id): Path<String>,
) -> impl IntoResponse {
    let sessions = state.sessions.read().await;

    match sessions.get(&interview_id) {
        Some(session) => {
            let session = session.lock().await;
            let transcript: Vec<Turn> = session.transcript().turns().to_vec();
            (StatusCode::OK, Json(transcript)).into_response()
        }
        None => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: format!("Interview {} not found", interview_id),
            }),
        )
            .into_response(),
    }
}

/// POST /interviews/:interview_id/finish
/// Discard the session and hand its summary to the results view
///
/// Works for in-progress sessions too (the candidate can end the
/// interview at any time). The duration comes from the caller's timer;
/// a missing body or field is treated as zero.
pub async fn finish_interview(
    State(state): State<AppState>,
    Path(interview_id): Path<String>,
    req: Option<Json<FinishRequest>>,
) -> impl IntoResponse {
    let session = {
        let mut sessions = state.sessions.write().await;
        sessions.remove(&interview_id)
    };

    match session {
        Some(session) => {
            let session = session.lock().await;
            let duration_secs = req.and_then(|Json(r)| r.duration_secs).unwrap_or(0);

            info!(
                "Interview finished: {} ({} turns, {}s)",
                interview_id,
                session.transcript().len(),
                duration_secs
            );

            let summary = ResultsSummary {
                session_id: interview_id,
                job_id: session.job_id().map(|s| s.to_string()),
                status: session.status(),
                duration_secs,
                transcript: session.transcript().turns().to_vec(),
            };
            (StatusCode::OK, Json(summary)).into_response()
        }
        None => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: format!("Interview {} not found", interview_id),
            }),
        )
            .into_response(),
    }
}

/// GET /health
/// Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}
