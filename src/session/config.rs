use serde::{Deserialize, Serialize};

/// The default five-question interview script
pub const DEFAULT_PROMPTS: [&str; 5] = [
    "Hello! Welcome to your interview for the position. I'm your AI interviewer today. Let's start with a simple introduction. Could you tell me a bit about yourself and your background?",
    "That's great! Now, looking at your experience, could you walk me through a challenging project you've worked on and how you approached solving complex problems?",
    "Excellent response. Let's dive into some technical aspects. How do you stay updated with the latest technologies in your field?",
    "Good to know. Can you describe a situation where you had to work under pressure or meet a tight deadline? How did you handle it?",
    "Thank you for sharing that. As a final question, where do you see yourself in 5 years, and why are you interested in this role specifically?",
];

/// Fixed message delivered once the final prompt has been answered
pub const CLOSING_MESSAGE: &str = "Thank you for completing the interview! Your responses have been recorded and analyzed. You can now proceed to view your results and feedback.";

/// Configuration for an interview session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Unique session identifier (e.g., "interview-<uuid>")
    pub session_id: String,

    /// Job listing this interview is for, if any
    pub job_id: Option<String>,

    /// Ordered interviewer prompts; immutable for the session's lifetime
    pub prompts: Vec<String>,

    /// Message appended when the last prompt has been answered
    pub closing_message: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            session_id: format!("interview-{}", uuid::Uuid::new_v4()),
            job_id: None,
            prompts: DEFAULT_PROMPTS.iter().map(|s| s.to_string()).collect(),
            closing_message: CLOSING_MESSAGE.to_string(),
        }
    }
}
