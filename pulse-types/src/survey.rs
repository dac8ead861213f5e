use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{Question, QuestionId, SurveyId};

/// Lifecycle status of a survey.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SurveyStatus {
    /// Accepting responses.
    Active,

    /// No longer accepting responses.
    Closed,
}

/// A named, ordered collection of questions with a lifecycle status.
///
/// Surveys are seeded at session start and treated as immutable once
/// responses exist; the only lifecycle transition is `close`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Survey {
    /// Survey identifier.
    pub id: SurveyId,

    /// Title shown to respondents.
    pub title: String,

    /// Longer description of the survey's purpose.
    pub description: String,

    /// Current lifecycle status.
    pub status: SurveyStatus,

    /// The questions, in presentation order.
    pub questions: Vec<Question>,

    /// When the survey was created.
    pub created_at: DateTime<Utc>,
}

impl Survey {
    /// Create a new active survey with the given questions.
    pub fn new(
        id: impl Into<SurveyId>,
        title: impl Into<String>,
        description: impl Into<String>,
        questions: Vec<Question>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            status: SurveyStatus::Active,
            questions,
            created_at: Utc::now(),
        }
    }

    /// Check whether the survey accepts responses.
    pub fn is_active(&self) -> bool {
        self.status == SurveyStatus::Active
    }

    /// Stop accepting responses.
    pub fn close(&mut self) {
        self.status = SurveyStatus::Closed;
    }

    /// Get the questions in presentation order.
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Look up a question by id.
    pub fn question(&self, id: &QuestionId) -> Option<&Question> {
        self.questions.iter().find(|q| q.id() == id)
    }

    /// Iterate over the required questions.
    pub fn required_questions(&self) -> impl Iterator<Item = &Question> {
        self.questions.iter().filter(|q| q.is_required())
    }

    /// Get the number of questions.
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Check if the survey has no questions.
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn close_transitions_status() {
        let mut survey = Survey::new("s1", "Pulse", "Quarterly check-in", Vec::new());
        assert!(survey.is_active());
        survey.close();
        assert!(!survey.is_active());
        assert_eq!(survey.status, SurveyStatus::Closed);
    }

    #[test]
    fn question_lookup() {
        let survey = Survey::new(
            "s1",
            "Pulse",
            "",
            vec![
                Question::rating("q1", "Rate us").required(),
                Question::text("q2", "Comments"),
            ],
        );
        assert!(survey.question(&"q1".into()).is_some());
        assert!(survey.question(&"missing".into()).is_none());
        assert_eq!(survey.required_questions().count(), 1);
    }
}
