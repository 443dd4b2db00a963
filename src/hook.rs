use std::str::FromStr;

use crate::{
    answer::{self, AnswerMode, CanonicalAnswer, ValidationError},
    models::QuestionPayload,
    names,
};

/// Item mutations the filter runs before.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterEvent {
    Create,
    Update,
}

impl FilterEvent {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Create => names::ITEMS_CREATE,
            Self::Update => names::ITEMS_UPDATE,
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct UnknownEvent;

impl FromStr for FilterEvent {
    type Err = UnknownEvent;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            names::ITEMS_CREATE => Ok(Self::Create),
            names::ITEMS_UPDATE => Ok(Self::Update),
            _ => Err(UnknownEvent),
        }
    }
}

#[derive(Debug, Clone)]
pub struct HookConfig {
    pub collections: Vec<String>,
    /// Choice set used when a payload carries no `choices` key.
    pub default_choices: Option<Vec<String>>,
}

impl Default for HookConfig {
    fn default() -> Self {
        Self {
            collections: names::DEFAULT_COLLECTIONS
                .iter()
                .map(|c| c.to_string())
                .collect(),
            default_choices: None,
        }
    }
}

impl HookConfig {
    pub fn handles(&self, collection: &str) -> bool {
        self.collections.iter().any(|c| c == collection)
    }

    /// Run the answer filter over an item of a collection this config `handles`,
    /// writing the canonical answer into `payload.answer`.
    ///
    /// On error the payload is left as it was and the mutation must be rejected.
    pub fn apply(
        &self,
        event: FilterEvent,
        collection: &str,
        payload: &mut QuestionPayload,
    ) -> Result<CanonicalAnswer, ValidationError> {
        let choices = payload
            .choices
            .as_deref()
            .or(self.default_choices.as_deref())
            .ok_or(ValidationError::MissingFields)?;
        let selection = payload
            .selected_answers
            .as_deref()
            .ok_or(ValidationError::MissingFields)?;

        let encoded = match payload.mode_label().and_then(AnswerMode::from_label) {
            Some(mode) => answer::encode_and_validate(choices, selection, mode)?,
            None => {
                tracing::debug!(
                    "{} on {collection}: no answer mode in {:?}, skipping cardinality check",
                    event.as_str(),
                    payload.mode_label()
                );
                answer::encode(choices, selection)?
            }
        };

        tracing::debug!("{} on {collection}: answer={encoded}", event.as_str());
        payload.answer = Some(encoded.clone().into());

        Ok(encoded)
    }
}
