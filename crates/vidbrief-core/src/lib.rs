//! vidbrief core library
//!
//! Orchestration pipeline that turns a video URL into a text summary,
//! answers follow-up questions about that summary, and produces quiz
//! questions. Media acquisition, transcription, translation, and
//! summarization are pluggable capabilities behind traits; this crate owns
//! the sequencing, the language-conditional translation branch, chunked
//! translation, and artifact cleanup.

pub mod acquire;
pub mod capability;
pub mod config;
pub mod error;
pub mod llm;
pub mod pipeline;
pub mod text;
pub mod transcribe;
pub mod translate;
pub mod types;

// Re-export commonly used items at crate root
pub use acquire::YtDlpAcquirer;
pub use capability::{
    Capabilities, LanguageModel, MediaAcquirer, TextTokenizer, Transcriber, TranslationModel,
};
pub use config::PipelineConfig;
pub use error::{PipelineError, Result};
pub use llm::{ChatCompletions, Provider};
pub use pipeline::{run_chat, run_summarize};
pub use text::{answer_question, generate_quiz, summarize_text, summary_word_budget};
pub use transcribe::WhisperTranscriber;
pub use translate::{
    HfTokenizer, NllbEndpoint, source_lang_tag, split_into_chunks, translate_transcript,
};
pub use types::{QuizQuestion, SummaryResult, Transcript};
