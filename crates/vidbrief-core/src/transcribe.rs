use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use whisper_rs::{FullParams, SamplingStrategy, WhisperContext, WhisperContextParameters};

use crate::capability::Transcriber;
use crate::types::Transcript;

/// Local Whisper inference. The model context is loaded once at construction
/// and shared across requests; each call gets its own inference state.
pub struct WhisperTranscriber {
    ctx: Arc<WhisperContext>,
}

impl WhisperTranscriber {
    pub fn new(model_path: &Path) -> anyhow::Result<Self> {
        let model_path = model_path
            .to_str()
            .ok_or_else(|| anyhow::anyhow!("non-UTF-8 model path"))?;
        let ctx = WhisperContext::new_with_params(model_path, WhisperContextParameters::default())?;
        Ok(Self { ctx: Arc::new(ctx) })
    }
}

#[async_trait]
impl Transcriber for WhisperTranscriber {
    async fn transcribe(&self, audio_path: &Path) -> anyhow::Result<Transcript> {
        let ctx = self.ctx.clone();
        let audio_path = audio_path.to_path_buf();

        // whisper-rs is synchronous and CPU-heavy; keep it off the runtime.
        let transcript = tokio::task::spawn_blocking(move || -> anyhow::Result<Transcript> {
            let mut reader = hound::WavReader::open(&audio_path)?;
            let samples: Vec<f32> = reader
                .samples::<i16>()
                .map(|s| s.map(|v| v as f32 / i16::MAX as f32))
                .collect::<Result<_, _>>()?;

            let params = FullParams::new(SamplingStrategy::Greedy { best_of: 5 });
            let mut state = ctx.create_state()?;
            state.full(params, &samples)?;

            let mut text = String::new();
            for segment in state.as_iter() {
                let Ok(seg_text) = segment.to_str() else {
                    continue;
                };
                text.push_str(seg_text);
            }

            let language_index = state.full_lang_id_from_state();
            let language = whisper_rs::get_lang_str(language_index)
                .unwrap_or("unknown")
                .to_string();

            Ok(Transcript { text, language })
        })
        .await??;

        Ok(transcript)
    }
}
