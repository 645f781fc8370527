use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;

use crate::acquire::YtDlpAcquirer;
use crate::config::PipelineConfig;
use crate::llm::{ChatCompletions, Provider};
use crate::transcribe::WhisperTranscriber;
use crate::translate::{HfTokenizer, NllbEndpoint};
use crate::types::Transcript;

/// Fetches a remote video and produces a local audio artifact.
#[async_trait]
pub trait MediaAcquirer: Send + Sync {
    async fn fetch(&self, url: &str) -> anyhow::Result<PathBuf>;
}

/// Turns an audio artifact into text in its spoken language.
#[async_trait]
pub trait Transcriber: Send + Sync {
    async fn transcribe(&self, audio_path: &Path) -> anyhow::Result<Transcript>;
}

/// Translates a single piece of text between two model language tags.
/// Chunking happens above this seam; implementations see one chunk at a time
/// with no cross-chunk context.
#[async_trait]
pub trait TranslationModel: Send + Sync {
    async fn translate(&self, text: &str, source_tag: &str, target_tag: &str)
    -> anyhow::Result<String>;
}

/// Summarization and question answering over English text. Both calls are
/// stateless single shots; there is no conversation memory.
#[async_trait]
pub trait LanguageModel: Send + Sync {
    async fn summarize(
        &self,
        text: &str,
        max_words: usize,
        min_words: usize,
    ) -> anyhow::Result<String>;

    async fn answer(&self, question: &str, context: &str) -> anyhow::Result<String>;
}

/// Token-id encoding used by the translation chunker.
pub trait TextTokenizer: Send + Sync {
    fn encode_ids(&self, text: &str) -> anyhow::Result<Vec<u32>>;
    fn decode_ids(&self, ids: &[u32]) -> anyhow::Result<String>;
}

/// Read-only registry of the external model capabilities. Built once at
/// process startup and shared across requests via `Arc`.
pub struct Capabilities {
    pub acquirer: Arc<dyn MediaAcquirer>,
    pub transcriber: Arc<dyn Transcriber>,
    pub translator: Arc<dyn TranslationModel>,
    pub tokenizer: Arc<dyn TextTokenizer>,
    pub language_model: Arc<dyn LanguageModel>,
}

impl Capabilities {
    /// Build the production capability set. Loads the Whisper model and the
    /// chunking tokenizer eagerly; fails fast on a missing API key.
    pub fn from_config(config: &PipelineConfig, provider: Provider) -> anyhow::Result<Self> {
        Ok(Self {
            acquirer: Arc::new(YtDlpAcquirer::new(config.work_dir.clone())),
            transcriber: Arc::new(WhisperTranscriber::new(&config.whisper_model)?),
            translator: Arc::new(NllbEndpoint::new(config.translation_endpoint.clone())),
            tokenizer: Arc::new(HfTokenizer::from_file(&config.tokenizer_file)?),
            language_model: Arc::new(ChatCompletions::new(provider)?),
        })
    }
}
