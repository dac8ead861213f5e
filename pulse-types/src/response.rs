use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{Answer, AnswerValue, QuestionId, RespondentId, ResponseId, SurveyId};

/// One respondent's submission against a survey.
///
/// Responses are append-only: created once by the store, never edited or
/// deleted afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Response {
    /// Response identifier.
    pub id: ResponseId,

    /// The survey this response belongs to.
    pub survey: SurveyId,

    /// The (pseudo-)identifier of the respondent.
    pub respondent: RespondentId,

    /// The submitted answers, in submission order.
    pub answers: Vec<Answer>,

    /// When the response was recorded.
    pub submitted_at: DateTime<Utc>,
}

impl Response {
    /// Create a new response with a fresh id and the current timestamp.
    pub fn new(
        survey: SurveyId,
        respondent: RespondentId,
        answers: Vec<Answer>,
    ) -> Self {
        Self {
            id: ResponseId::generate(),
            survey,
            respondent,
            answers,
            submitted_at: Utc::now(),
        }
    }

    /// Look up the answer to a question, if present.
    pub fn answer(&self, question: &QuestionId) -> Option<&AnswerValue> {
        self.answers
            .iter()
            .find(|a| &a.question == question)
            .map(|a| &a.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn answer_lookup() {
        let response = Response::new(
            "s1".into(),
            RespondentId::generate(),
            vec![Answer::new("q1", 4), Answer::new("q2", "fine")],
        );
        assert_eq!(response.answer(&"q1".into()), Some(&AnswerValue::Int(4)));
        assert_eq!(response.answer(&"q9".into()), None);
    }
}
