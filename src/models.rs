use serde::{Deserialize, Serialize};

/// Question fields the answer filter reads from an incoming item.
///
/// Only `answer` is ever written back to the item; see `handlers::filter`.
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
pub struct QuestionPayload {
    #[serde(default)]
    pub question_type: Option<String>,
    /// Older collections name the mode field `answer_type`.
    #[serde(default)]
    pub answer_type: Option<String>,
    #[serde(default)]
    pub choices: Option<Vec<String>>,
    #[serde(default)]
    pub selected_answers: Option<Vec<String>>,
    #[serde(default)]
    pub answer: Option<String>,
}

impl QuestionPayload {
    /// First non-blank of `question_type` and `answer_type`.
    pub fn mode_label(&self) -> Option<&str> {
        non_blank(&self.question_type).or_else(|| non_blank(&self.answer_type))
    }
}

fn non_blank(field: &Option<String>) -> Option<&str> {
    field.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StagedQuestion {
    pub id: i64,
    pub question_prompt: String,
    #[serde(default)]
    pub question_type: Option<String>,
    #[serde(default)]
    pub explanation: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub ai_answer_options_staging: Vec<StagedAnswerOption>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StagedAnswerOption {
    pub id: i64,
    pub option_text: String,
    #[serde(default)]
    pub is_correct: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
}

/// `{"data": ...}` envelope used by the CMS item endpoints.
#[derive(Debug, Deserialize)]
pub struct DataEnvelope<T> {
    pub data: T,
}
