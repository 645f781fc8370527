use std::path::PathBuf;

use crate::translate::DEFAULT_MAX_CHUNK_TOKENS;

/// Runtime settings for the pipeline. Built once at startup; every field can
/// be overridden through a `VIDBRIEF_*` environment variable.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Directory for per-request audio artifacts and model files.
    pub work_dir: PathBuf,
    /// Path to the Whisper ggml model.
    pub whisper_model: PathBuf,
    /// Path to the tokenizer definition used for translation chunking.
    pub tokenizer_file: PathBuf,
    /// Inference endpoint for the translation model.
    pub translation_endpoint: String,
    /// Token window for translation chunking.
    pub max_chunk_tokens: usize,
}

impl PipelineConfig {
    pub fn from_env() -> Self {
        let work_dir = env_path("VIDBRIEF_WORK_DIR").unwrap_or_else(default_work_dir);
        let whisper_model = env_path("VIDBRIEF_WHISPER_MODEL")
            .unwrap_or_else(|| work_dir.join("models").join("ggml-base.bin"));
        let tokenizer_file = env_path("VIDBRIEF_TOKENIZER")
            .unwrap_or_else(|| work_dir.join("models").join("tokenizer.json"));
        let translation_endpoint = std::env::var("VIDBRIEF_TRANSLATION_URL")
            .unwrap_or_else(|_| "http://127.0.0.1:8080/translate".to_string());
        let max_chunk_tokens = std::env::var("VIDBRIEF_MAX_CHUNK_TOKENS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_MAX_CHUNK_TOKENS);

        Self {
            work_dir,
            whisper_model,
            tokenizer_file,
            translation_endpoint,
            max_chunk_tokens,
        }
    }
}

fn env_path(var: &str) -> Option<PathBuf> {
    std::env::var_os(var).map(PathBuf::from)
}

fn default_work_dir() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(|| PathBuf::from("/tmp"))
        .join("vidbrief")
}
