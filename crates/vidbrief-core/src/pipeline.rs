use std::path::Path;

use tokio::fs;
use tracing::{debug, warn};

use crate::capability::Capabilities;
use crate::config::PipelineConfig;
use crate::error::{PipelineError, Result};
use crate::text;
use crate::translate;
use crate::types::SummaryResult;

/// Run the full summarization pipeline for one request: acquire audio,
/// transcribe it, translate into English when the declared language calls
/// for it, and summarize. The audio artifact never outlives the call.
pub async fn run_summarize(
    caps: &Capabilities,
    config: &PipelineConfig,
    url: &str,
    declared_language: &str,
) -> Result<SummaryResult> {
    if url.trim().is_empty() {
        return Err(PipelineError::InvalidInput("No URL provided".to_string()));
    }

    debug!(url, language = declared_language, "acquiring audio");
    let audio_path =
        caps.acquirer
            .fetch(url)
            .await
            .map_err(|e| PipelineError::AcquisitionFailed {
                url: url.to_string(),
                reason: e.to_string(),
            })?;

    // The artifact is on disk from here on; every exit path below must
    // release it before the error or result propagates.
    let result = summarize_audio(caps, config, &audio_path, declared_language).await;
    remove_artifact(&audio_path).await;
    result
}

async fn summarize_audio(
    caps: &Capabilities,
    config: &PipelineConfig,
    audio_path: &Path,
    declared_language: &str,
) -> Result<SummaryResult> {
    debug!(path = %audio_path.display(), "transcribing");
    let transcript = caps
        .transcriber
        .transcribe(audio_path)
        .await
        .map_err(|e| PipelineError::TranscriptionFailed {
            audio_path: audio_path.to_path_buf(),
            reason: e.to_string(),
        })?;
    debug!(detected = %transcript.language, chars = transcript.text.len(), "transcribed");

    let english = translate::translate_transcript(
        caps.translator.as_ref(),
        caps.tokenizer.as_ref(),
        &transcript.text,
        declared_language,
        config.max_chunk_tokens,
    )
    .await
    .map_err(|e| PipelineError::TranslationFailed {
        reason: e.to_string(),
    })?;

    let summary = text::summarize_text(caps.language_model.as_ref(), &english)
        .await
        .map_err(|e| PipelineError::SummarizationFailed {
            reason: e.to_string(),
        })?;

    Ok(SummaryResult {
        summary,
        transcription: english,
    })
}

/// Answer a follow-up question about a previously returned summary.
pub async fn run_chat(caps: &Capabilities, question: &str, summary: &str) -> Result<String> {
    text::answer_question(caps.language_model.as_ref(), question, summary)
        .await
        .map_err(|e| PipelineError::SummarizationFailed {
            reason: e.to_string(),
        })
}

/// Best-effort removal. A failure here is logged, never escalated, so it
/// cannot mask the pipeline's own error.
async fn remove_artifact(path: &Path) {
    match fs::remove_file(path).await {
        Ok(()) => debug!(path = %path.display(), "artifact removed"),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
        Err(e) => warn!(path = %path.display(), error = %e, "failed to remove artifact"),
    }
}
