use serde::{Deserialize, Serialize};

use crate::QuestionId;

/// A single question in a survey.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    /// Identifier, unique within the owning survey.
    id: QuestionId,

    /// The prompt text shown to the respondent.
    prompt: String,

    /// The kind of question (determines the expected answer shape).
    kind: QuestionKind,

    /// Whether a non-empty answer is required for a response to be accepted.
    required: bool,
}

impl Question {
    /// Create a new question. Prefer the per-kind constructors below.
    pub fn new(
        id: impl Into<QuestionId>,
        prompt: impl Into<String>,
        kind: QuestionKind,
    ) -> Self {
        Self {
            id: id.into(),
            prompt: prompt.into(),
            kind,
            required: false,
        }
    }

    /// Create a rating question (expected answer domain 1-5).
    pub fn rating(id: impl Into<QuestionId>, prompt: impl Into<String>) -> Self {
        Self::new(id, prompt, QuestionKind::Rating)
    }

    /// Create a multiple-choice question with the given allowed options.
    pub fn multiple_choice(
        id: impl Into<QuestionId>,
        prompt: impl Into<String>,
        options: Vec<String>,
    ) -> Self {
        Self::new(id, prompt, QuestionKind::MultipleChoice { options })
    }

    /// Create a free-text question.
    pub fn text(id: impl Into<QuestionId>, prompt: impl Into<String>) -> Self {
        Self::new(id, prompt, QuestionKind::Text)
    }

    /// Mark this question as required.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Get the question id.
    pub fn id(&self) -> &QuestionId {
        &self.id
    }

    /// Get the prompt text.
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// Get the question kind.
    pub fn kind(&self) -> &QuestionKind {
        &self.kind
    }

    /// Check whether this question is required.
    pub fn is_required(&self) -> bool {
        self.required
    }
}

/// The kind of question, determining the expected answer shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum QuestionKind {
    /// A 1-5 rating.
    Rating,

    /// Select one or more of the declared options.
    ///
    /// The options live inside the variant: a multiple-choice question
    /// cannot structurally lack them. An empty list is rejected when the
    /// survey is registered with the store.
    MultipleChoice { options: Vec<String> },

    /// Free text.
    Text,
}

impl QuestionKind {
    /// Check if this is a rating question.
    pub fn is_rating(&self) -> bool {
        matches!(self, Self::Rating)
    }

    /// Check if this is a multiple-choice question.
    pub fn is_multiple_choice(&self) -> bool {
        matches!(self, Self::MultipleChoice { .. })
    }

    /// Check if this is a text question.
    pub fn is_text(&self) -> bool {
        matches!(self, Self::Text)
    }

    /// Get the declared options of a multiple-choice question.
    pub fn options(&self) -> Option<&[String]> {
        match self {
            Self::MultipleChoice { options } => Some(options),
            _ => None,
        }
    }
}
