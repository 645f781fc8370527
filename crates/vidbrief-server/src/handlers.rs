use axum::Json;
use axum::extract::State;
use serde::{Deserialize, Serialize};

use vidbrief_core::{QuizQuestion, SummaryResult, generate_quiz, run_chat, run_summarize};

use crate::AppState;
use crate::error::HttpError;

#[derive(Deserialize)]
pub struct SummarizeRequest {
    #[serde(default)]
    url: Option<String>,
    #[serde(default)]
    language: Option<String>,
}

pub async fn summarize(
    State(state): State<AppState>,
    Json(req): Json<SummarizeRequest>,
) -> Result<Json<SummaryResult>, HttpError> {
    let url = req.url.unwrap_or_default();
    let language = req.language.unwrap_or_else(|| "en".to_string());

    let result = run_summarize(&state.caps, &state.config, &url, &language).await?;
    Ok(Json(result))
}

#[derive(Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    question: Option<String>,
    #[serde(default)]
    summary: Option<String>,
}

#[derive(Serialize)]
pub struct ChatResponse {
    response: String,
}

pub async fn chat(
    State(state): State<AppState>,
    Json(req): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, HttpError> {
    let (Some(question), Some(summary)) = (
        req.question.filter(|q| !q.is_empty()),
        req.summary.filter(|s| !s.is_empty()),
    ) else {
        return Err(HttpError::BadRequest(
            "Missing required parameters".to_string(),
        ));
    };

    let response = run_chat(&state.caps, &question, &summary).await?;
    Ok(Json(ChatResponse { response }))
}

#[derive(Deserialize)]
pub struct QuizRequest {
    #[serde(default)]
    summary: Option<String>,
}

#[derive(Serialize)]
pub struct QuizResponse {
    questions: Vec<QuizQuestion>,
}

pub async fn quiz(
    State(_state): State<AppState>,
    Json(req): Json<QuizRequest>,
) -> Result<Json<QuizResponse>, HttpError> {
    let Some(summary) = req.summary.filter(|s| !s.is_empty()) else {
        return Err(HttpError::BadRequest("Missing summary".to_string()));
    };

    Ok(Json(QuizResponse {
        questions: generate_quiz(&summary),
    }))
}
