use serde::{Deserialize, Serialize};

/// Raw speech-to-text output. `language` is whatever the model detected,
/// which may disagree with the caller's declared language.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transcript {
    pub text: String,
    pub language: String,
}

/// Final pipeline output. `transcription` is the post-translation English
/// text, not the raw transcript.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryResult {
    pub summary: String,
    pub transcription: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizQuestion {
    pub question: String,
    pub options: Vec<String>,
    #[serde(rename = "correctAnswer")]
    pub correct_answer: usize,
}
