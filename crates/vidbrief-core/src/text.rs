use crate::capability::LanguageModel;
use crate::types::QuizQuestion;

const MAX_SUMMARY_WORDS: usize = 150;
const MIN_SUMMARY_WORDS: usize = 10;

/// Summary length budget: at most min(150, 80% of the input word count),
/// never below the floor of 10. Returns `(max, min)` in words.
pub fn summary_word_budget(text: &str) -> (usize, usize) {
    let words = text.split_whitespace().count();
    let max = MAX_SUMMARY_WORDS.min(words * 4 / 5).max(MIN_SUMMARY_WORDS);
    (max, MIN_SUMMARY_WORDS)
}

pub async fn summarize_text(model: &dyn LanguageModel, text: &str) -> anyhow::Result<String> {
    let (max_words, min_words) = summary_word_budget(text);
    model.summarize(text, max_words, min_words).await
}

pub async fn answer_question(
    model: &dyn LanguageModel,
    question: &str,
    context: &str,
) -> anyhow::Result<String> {
    model.answer(question, context).await
}

/// Fixed placeholder question set; generating questions from the summary
/// content is an open extension point.
pub fn generate_quiz(_summary: &str) -> Vec<QuizQuestion> {
    vec![
        QuizQuestion {
            question: "What is the main topic discussed in the summary?".to_string(),
            options: placeholder_options(),
            correct_answer: 0,
        },
        QuizQuestion {
            question: "What is a key point mentioned in the summary?".to_string(),
            options: placeholder_options(),
            correct_answer: 1,
        },
    ]
}

fn placeholder_options() -> Vec<String> {
    (1..=4).map(|i| format!("Option {i}")).collect()
}
