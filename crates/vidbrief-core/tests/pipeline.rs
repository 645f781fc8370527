use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use uuid::Uuid;

use vidbrief_core::{
    Capabilities, LanguageModel, MediaAcquirer, PipelineConfig, PipelineError, TextTokenizer,
    Transcriber, Transcript, TranslationModel, run_chat, run_summarize,
};

fn test_work_dir() -> PathBuf {
    let dir = std::env::temp_dir().join(format!("vidbrief-test-{}", Uuid::new_v4()));
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

fn test_config(work_dir: &Path) -> PipelineConfig {
    PipelineConfig {
        work_dir: work_dir.to_path_buf(),
        whisper_model: work_dir.join("ggml-base.bin"),
        tokenizer_file: work_dir.join("tokenizer.json"),
        translation_endpoint: "http://127.0.0.1:0/translate".to_string(),
        max_chunk_tokens: 4,
    }
}

/// Writes a dummy artifact and remembers where, so tests can check it was
/// cleaned up.
struct FakeAcquirer {
    work_dir: PathBuf,
    created: Arc<Mutex<Option<PathBuf>>>,
}

impl FakeAcquirer {
    fn new(work_dir: PathBuf) -> (Self, Arc<Mutex<Option<PathBuf>>>) {
        let created = Arc::new(Mutex::new(None));
        (
            Self {
                work_dir,
                created: created.clone(),
            },
            created,
        )
    }
}

#[async_trait]
impl MediaAcquirer for FakeAcquirer {
    async fn fetch(&self, _url: &str) -> anyhow::Result<PathBuf> {
        let path = self.work_dir.join(format!("audio-{}.wav", Uuid::new_v4()));
        tokio::fs::write(&path, b"riff").await?;
        *self.created.lock().unwrap() = Some(path.clone());
        Ok(path)
    }
}

struct FailingAcquirer;

#[async_trait]
impl MediaAcquirer for FailingAcquirer {
    async fn fetch(&self, _url: &str) -> anyhow::Result<PathBuf> {
        anyhow::bail!("video unavailable")
    }
}

struct FakeTranscriber {
    text: &'static str,
}

#[async_trait]
impl Transcriber for FakeTranscriber {
    async fn transcribe(&self, audio_path: &Path) -> anyhow::Result<Transcript> {
        assert!(audio_path.exists(), "artifact must exist during transcription");
        Ok(Transcript {
            text: self.text.to_string(),
            language: "en".to_string(),
        })
    }
}

struct FailingTranscriber;

#[async_trait]
impl Transcriber for FailingTranscriber {
    async fn transcribe(&self, _audio_path: &Path) -> anyhow::Result<Transcript> {
        anyhow::bail!("decode error")
    }
}

struct UppercaseModel {
    calls: Arc<Mutex<usize>>,
}

#[async_trait]
impl TranslationModel for UppercaseModel {
    async fn translate(
        &self,
        text: &str,
        _source_tag: &str,
        _target_tag: &str,
    ) -> anyhow::Result<String> {
        *self.calls.lock().unwrap() += 1;
        Ok(text.to_uppercase())
    }
}

struct FailingTranslationModel;

#[async_trait]
impl TranslationModel for FailingTranslationModel {
    async fn translate(
        &self,
        _text: &str,
        _source_tag: &str,
        _target_tag: &str,
    ) -> anyhow::Result<String> {
        anyhow::bail!("endpoint down")
    }
}

struct ByteTokenizer;

impl TextTokenizer for ByteTokenizer {
    fn encode_ids(&self, text: &str) -> anyhow::Result<Vec<u32>> {
        Ok(text.bytes().map(u32::from).collect())
    }

    fn decode_ids(&self, ids: &[u32]) -> anyhow::Result<String> {
        let bytes: Vec<u8> = ids.iter().map(|&id| id as u8).collect();
        Ok(String::from_utf8(bytes)?)
    }
}

struct EchoLanguageModel;

#[async_trait]
impl LanguageModel for EchoLanguageModel {
    async fn summarize(
        &self,
        text: &str,
        max_words: usize,
        _min_words: usize,
    ) -> anyhow::Result<String> {
        let words: Vec<&str> = text.split_whitespace().take(max_words).collect();
        Ok(words.join(" "))
    }

    async fn answer(&self, question: &str, context: &str) -> anyhow::Result<String> {
        Ok(format!("{question} -> {context}"))
    }
}

struct FailingLanguageModel;

#[async_trait]
impl LanguageModel for FailingLanguageModel {
    async fn summarize(
        &self,
        _text: &str,
        _max_words: usize,
        _min_words: usize,
    ) -> anyhow::Result<String> {
        anyhow::bail!("model overloaded")
    }

    async fn answer(&self, _question: &str, _context: &str) -> anyhow::Result<String> {
        anyhow::bail!("model overloaded")
    }
}

struct CapsBuilder {
    work_dir: PathBuf,
    caps: Capabilities,
    created: Arc<Mutex<Option<PathBuf>>>,
    translate_calls: Arc<Mutex<usize>>,
}

fn build_caps(work_dir: &Path) -> CapsBuilder {
    let (acquirer, created) = FakeAcquirer::new(work_dir.to_path_buf());
    let translate_calls = Arc::new(Mutex::new(0));
    let caps = Capabilities {
        acquirer: Arc::new(acquirer),
        transcriber: Arc::new(FakeTranscriber {
            text: "hello world from the video",
        }),
        translator: Arc::new(UppercaseModel {
            calls: translate_calls.clone(),
        }),
        tokenizer: Arc::new(ByteTokenizer),
        language_model: Arc::new(EchoLanguageModel),
    };
    CapsBuilder {
        work_dir: work_dir.to_path_buf(),
        caps,
        created,
        translate_calls,
    }
}

#[tokio::test]
async fn english_request_skips_translation_and_removes_artifact() {
    let work_dir = test_work_dir();
    let fixture = build_caps(&work_dir);
    let config = test_config(&fixture.work_dir);

    let result = run_summarize(&fixture.caps, &config, "https://youtu.be/abc", "en")
        .await
        .unwrap();

    assert!(!result.summary.is_empty());
    assert_eq!(result.transcription, "hello world from the video");
    assert_eq!(*fixture.translate_calls.lock().unwrap(), 0);

    let artifact = fixture.created.lock().unwrap().clone().unwrap();
    assert!(!artifact.exists(), "artifact must be removed on success");
}

#[tokio::test]
async fn telugu_request_translates_before_summarizing() {
    let work_dir = test_work_dir();
    let fixture = build_caps(&work_dir);
    let config = test_config(&fixture.work_dir);

    let result = run_summarize(&fixture.caps, &config, "https://youtu.be/abc", "te")
        .await
        .unwrap();

    assert_eq!(result.transcription, result.transcription.to_uppercase());
    assert!(*fixture.translate_calls.lock().unwrap() > 1, "chunked input");

    let artifact = fixture.created.lock().unwrap().clone().unwrap();
    assert!(!artifact.exists());
}

#[tokio::test]
async fn empty_url_is_rejected_before_acquisition() {
    let work_dir = test_work_dir();
    let fixture = build_caps(&work_dir);
    let config = test_config(&fixture.work_dir);

    let err = run_summarize(&fixture.caps, &config, "", "en")
        .await
        .unwrap_err();

    assert!(matches!(err, PipelineError::InvalidInput(_)));
    assert_eq!(err.to_string(), "No URL provided");
    assert!(fixture.created.lock().unwrap().is_none());
}

#[tokio::test]
async fn acquisition_failure_carries_cause_and_creates_nothing() {
    let work_dir = test_work_dir();
    let fixture = build_caps(&work_dir);
    let caps = Capabilities {
        acquirer: Arc::new(FailingAcquirer),
        ..fixture.caps
    };
    let config = test_config(&work_dir);

    let err = run_summarize(&caps, &config, "https://youtu.be/abc", "en")
        .await
        .unwrap_err();

    assert!(matches!(err, PipelineError::AcquisitionFailed { .. }));
    assert!(err.to_string().contains("video unavailable"));
    assert_eq!(std::fs::read_dir(&work_dir).unwrap().count(), 0);
}

#[tokio::test]
async fn transcription_failure_still_removes_artifact() {
    let work_dir = test_work_dir();
    let fixture = build_caps(&work_dir);
    let caps = Capabilities {
        transcriber: Arc::new(FailingTranscriber),
        ..fixture.caps
    };
    let config = test_config(&work_dir);

    let err = run_summarize(&caps, &config, "https://youtu.be/abc", "en")
        .await
        .unwrap_err();

    assert!(matches!(err, PipelineError::TranscriptionFailed { .. }));
    assert!(err.to_string().contains("decode error"));

    let artifact = fixture.created.lock().unwrap().clone().unwrap();
    assert!(!artifact.exists(), "artifact must be removed on failure");
}

#[tokio::test]
async fn translation_failure_still_removes_artifact() {
    let work_dir = test_work_dir();
    let fixture = build_caps(&work_dir);
    let caps = Capabilities {
        translator: Arc::new(FailingTranslationModel),
        ..fixture.caps
    };
    let config = test_config(&work_dir);

    let err = run_summarize(&caps, &config, "https://youtu.be/abc", "te")
        .await
        .unwrap_err();

    assert!(matches!(err, PipelineError::TranslationFailed { .. }));
    assert!(err.to_string().contains("endpoint down"));

    let artifact = fixture.created.lock().unwrap().clone().unwrap();
    assert!(!artifact.exists(), "artifact must be removed on failure");
}

#[tokio::test]
async fn summarization_failure_still_removes_artifact() {
    let work_dir = test_work_dir();
    let fixture = build_caps(&work_dir);
    let caps = Capabilities {
        language_model: Arc::new(FailingLanguageModel),
        ..fixture.caps
    };
    let config = test_config(&work_dir);

    let err = run_summarize(&caps, &config, "https://youtu.be/abc", "en")
        .await
        .unwrap_err();

    assert!(matches!(err, PipelineError::SummarizationFailed { .. }));

    let artifact = fixture.created.lock().unwrap().clone().unwrap();
    assert!(!artifact.exists());
}

#[tokio::test]
async fn chat_is_a_single_stateless_call() {
    let work_dir = test_work_dir();
    let fixture = build_caps(&work_dir);

    let answer = run_chat(&fixture.caps, "What is X?", "X is a thing.")
        .await
        .unwrap();

    assert_eq!(answer, "What is X? -> X is a thing.");
}
