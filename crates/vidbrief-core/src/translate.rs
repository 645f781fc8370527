use std::path::Path;

use async_trait::async_trait;

use crate::capability::{TextTokenizer, TranslationModel};

/// Token window for chunked translation.
pub const DEFAULT_MAX_CHUNK_TOKENS: usize = 512;

/// Everything is translated into English.
pub const TARGET_LANG_TAG: &str = "eng_Latn";

/// Translation model tag for a supported ISO 639-1 source code. `None` means
/// the language is unsupported and the transcript passes through untouched.
pub fn source_lang_tag(code: &str) -> Option<&'static str> {
    match code {
        "te" => Some("tel_Telu"),
        "hi" => Some("hin_Deva"),
        _ => None,
    }
}

/// Split text into consecutive token windows of at most `max_tokens`, each
/// decoded back to text. No overlap, no reordering; the last window may be
/// short and window boundaries can fall mid-sentence.
pub fn split_into_chunks(
    tokenizer: &dyn TextTokenizer,
    text: &str,
    max_tokens: usize,
) -> anyhow::Result<Vec<String>> {
    let max_tokens = max_tokens.max(1);
    let ids = tokenizer.encode_ids(text)?;
    let mut chunks = Vec::with_capacity(ids.len().div_ceil(max_tokens));
    for window in ids.chunks(max_tokens) {
        chunks.push(tokenizer.decode_ids(window)?);
    }
    Ok(chunks)
}

/// Translate a transcript into English if its declared language is supported,
/// otherwise return it unchanged. Chunks are translated independently and
/// rejoined with a single space in their original order.
pub async fn translate_transcript(
    model: &dyn TranslationModel,
    tokenizer: &dyn TextTokenizer,
    text: &str,
    source_language: &str,
    max_tokens: usize,
) -> anyhow::Result<String> {
    let Some(src_tag) = source_lang_tag(source_language) else {
        return Ok(text.to_string());
    };

    let chunks = split_into_chunks(tokenizer, text, max_tokens)?;
    let mut translated = Vec::with_capacity(chunks.len());
    for chunk in &chunks {
        translated.push(model.translate(chunk, src_tag, TARGET_LANG_TAG).await?);
    }
    Ok(translated.join(" "))
}

/// Chunking tokenizer backed by a HuggingFace `tokenizer.json` file, loaded
/// once at startup alongside the models.
pub struct HfTokenizer {
    inner: tokenizers::Tokenizer,
}

impl HfTokenizer {
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let inner = tokenizers::Tokenizer::from_file(path)
            .map_err(|e| anyhow::anyhow!("failed to load tokenizer: {e}"))?;
        Ok(Self { inner })
    }
}

impl TextTokenizer for HfTokenizer {
    fn encode_ids(&self, text: &str) -> anyhow::Result<Vec<u32>> {
        let encoding = self
            .inner
            .encode(text, false)
            .map_err(|e| anyhow::anyhow!("{e}"))?;
        Ok(encoding.get_ids().to_vec())
    }

    fn decode_ids(&self, ids: &[u32]) -> anyhow::Result<String> {
        self.inner
            .decode(ids, true)
            .map_err(|e| anyhow::anyhow!("{e}"))
    }
}

/// Remote translation model behind an inference endpoint speaking NLLB
/// language tags.
pub struct NllbEndpoint {
    client: reqwest::Client,
    endpoint: String,
}

impl NllbEndpoint {
    pub fn new(endpoint: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint,
        }
    }
}

#[async_trait]
impl TranslationModel for NllbEndpoint {
    async fn translate(
        &self,
        text: &str,
        source_tag: &str,
        target_tag: &str,
    ) -> anyhow::Result<String> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(&serde_json::json!({
                "inputs": text,
                "parameters": {
                    "src_lang": source_tag,
                    "tgt_lang": target_tag,
                },
            }))
            .send()
            .await?
            .error_for_status()?
            .json::<serde_json::Value>()
            .await?;

        // Endpoints return either a bare object or a one-element array.
        let translated = response["translation_text"]
            .as_str()
            .or_else(|| response[0]["translation_text"].as_str())
            .ok_or_else(|| anyhow::anyhow!("invalid translation response: {response:?}"))?;

        Ok(translated.to_string())
    }
}
