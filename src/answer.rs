use std::{collections::HashSet, fmt};

use serde::Serialize;

use crate::names;

/// Cardinality policy attached to a question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerMode {
    SingleAnswer,
    MultipleAnswers,
    /// Reuses the single-answer rule.
    TrueFalse,
}

impl AnswerMode {
    /// Map a `question_type` / `answer_type` label onto a mode.
    ///
    /// Returns `None` for labels that carry no cardinality rule.
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim() {
            names::SINGLE_ANSWER
            | names::SINGLE_ANSWER_LEGACY
            | names::SINGLE_CHOICE
            | names::SINGLE_CHOICE_SINGLE_ANSWER => Some(Self::SingleAnswer),
            names::MULTIPLE_ANSWERS | names::MULTIPLE_ANSWERS_LEGACY => {
                Some(Self::MultipleAnswers)
            }
            names::TRUE_FALSE => Some(Self::TrueFalse),
            _ => None,
        }
    }

    /// Whether `count` selected choices satisfy this mode.
    pub fn allows(self, count: usize) -> bool {
        match self {
            Self::SingleAnswer | Self::TrueFalse => count == 1,
            Self::MultipleAnswers => {
                (names::MIN_MULTIPLE_ANSWERS..=names::MAX_MULTIPLE_ANSWERS).contains(&count)
            }
        }
    }

    fn cardinality_message(self) -> &'static str {
        match self {
            Self::SingleAnswer | Self::TrueFalse => {
                "Single Answer questions must have exactly one correct answer."
            }
            Self::MultipleAnswers => {
                "Multiple Answer questions must have between 2 and 4 correct answers."
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Both selected_answers and choices fields are required.")]
    MissingFields,
    #[error("{}", .mode.cardinality_message())]
    Cardinality { mode: AnswerMode, count: usize },
    #[error("Choice `{0}` appears more than once.")]
    DuplicateChoice(String),
}

/// One `'0'`/`'1'` per choice, in choice order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct CanonicalAnswer(String);

impl CanonicalAnswer {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn count_ones(&self) -> usize {
        self.0.bytes().filter(|b| *b == b'1').count()
    }

    /// Choices whose bit is set, in choice order.
    pub fn selection<'a, C: AsRef<str>>(&self, choices: &'a [C]) -> Vec<&'a str> {
        self.0
            .bytes()
            .zip(choices)
            .filter(|(bit, _)| *bit == b'1')
            .map(|(_, choice)| choice.as_ref())
            .collect()
    }
}

impl fmt::Display for CanonicalAnswer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<CanonicalAnswer> for String {
    fn from(answer: CanonicalAnswer) -> Self {
        answer.0
    }
}

/// Encode `selection` over `choices` without applying any cardinality rule.
pub fn encode<C, S>(choices: &[C], selection: &[S]) -> Result<CanonicalAnswer, ValidationError>
where
    C: AsRef<str>,
    S: AsRef<str>,
{
    if choices.is_empty() || selection.is_empty() {
        return Err(ValidationError::MissingFields);
    }

    let mut known = HashSet::with_capacity(choices.len());
    for choice in choices {
        if !known.insert(choice.as_ref()) {
            return Err(ValidationError::DuplicateChoice(choice.as_ref().to_owned()));
        }
    }

    let selected: HashSet<&str> = selection.iter().map(AsRef::as_ref).collect();

    let unknown: Vec<&str> = selected
        .iter()
        .copied()
        .filter(|s| !known.contains(s))
        .collect();
    if !unknown.is_empty() {
        tracing::debug!("dropping selections not present in choices: {unknown:?}");
    }

    let bits = choices
        .iter()
        .map(|choice| {
            if selected.contains(choice.as_ref()) {
                '1'
            } else {
                '0'
            }
        })
        .collect();

    Ok(CanonicalAnswer(bits))
}

/// Encode `selection` over `choices` and enforce the cardinality rule of `mode`.
pub fn encode_and_validate<C, S>(
    choices: &[C],
    selection: &[S],
    mode: AnswerMode,
) -> Result<CanonicalAnswer, ValidationError>
where
    C: AsRef<str>,
    S: AsRef<str>,
{
    let answer = encode(choices, selection)?;
    let count = answer.count_ones();

    if !mode.allows(count) {
        return Err(ValidationError::Cardinality { mode, count });
    }

    Ok(answer)
}
