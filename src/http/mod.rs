//! HTTP API for the browser front-end
//!
//! This module provides a REST API over the interview core:
//! - GET  /jobs and /jobs/:id - job catalog queries
//! - POST /interviews/start - begin a scripted interview
//! - POST /interviews/:id/submit - record a response, get the next prompt
//! - POST /interviews/:id/finish - discard the session, hand off results
//! - GET  /interviews/:id/status and /transcript - session queries
//! - GET  /health - health check

mod handlers;
mod routes;
mod state;

pub use routes::create_router;
pub use state::AppState;
