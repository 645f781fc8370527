use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("{0}")]
    InvalidInput(String),

    #[error("Audio acquisition failed for {url}: {reason}")]
    AcquisitionFailed { url: String, reason: String },

    #[error("Transcription failed for {audio_path}: {reason}")]
    TranscriptionFailed { audio_path: PathBuf, reason: String },

    #[error("Translation failed: {reason}")]
    TranslationFailed { reason: String },

    #[error("Summarization failed: {reason}")]
    SummarizationFailed { reason: String },

    #[error("Missing API key: {env_var} environment variable is not set")]
    MissingApiKey { env_var: String },
}

pub type Result<T> = std::result::Result<T, PipelineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_input_displays_bare_message() {
        let error = PipelineError::InvalidInput("No URL provided".to_string());
        assert_eq!(error.to_string(), "No URL provided");
    }

    #[test]
    fn stage_errors_carry_the_underlying_reason() {
        let error = PipelineError::AcquisitionFailed {
            url: "https://youtu.be/abc".to_string(),
            reason: "video unavailable".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Audio acquisition failed for https://youtu.be/abc: video unavailable"
        );

        let error = PipelineError::TranscriptionFailed {
            audio_path: PathBuf::from("/tmp/audio.wav"),
            reason: "decode error".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Transcription failed for /tmp/audio.wav: decode error"
        );

        let error = PipelineError::TranslationFailed {
            reason: "endpoint down".to_string(),
        };
        assert_eq!(error.to_string(), "Translation failed: endpoint down");

        let error = PipelineError::SummarizationFailed {
            reason: "model overloaded".to_string(),
        };
        assert_eq!(error.to_string(), "Summarization failed: model overloaded");
    }
}
