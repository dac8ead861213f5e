use crate::{QuestionId, RespondentId, SurveyId};

/// Error type for response submission.
///
/// All variants are local and recoverable; they are surfaced to the caller
/// for display and never abort the session.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SubmissionError {
    /// No survey is registered under the given id.
    #[error("No survey found with id '{0}'")]
    SurveyNotFound(SurveyId),

    /// The survey exists but is no longer accepting responses.
    #[error("Survey '{0}' is closed")]
    SurveyClosed(SurveyId),

    /// The respondent already has a recorded response for this survey.
    #[error("Respondent '{0}' has already responded to this survey")]
    AlreadyResponded(RespondentId),

    /// The same question id appears more than once in the answer list.
    #[error("Duplicate answer for question '{0}'")]
    DuplicateAnswer(QuestionId),

    /// One or more required questions lack a non-empty answer.
    #[error("Missing required answers: {}", format_ids(.0))]
    MissingRequiredAnswers(Vec<QuestionId>),
}

fn format_ids(ids: &[QuestionId]) -> String {
    ids.iter()
        .map(QuestionId::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Error type for survey registration.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SurveyDefError {
    /// Two questions in the survey share an id.
    #[error("Duplicate question id '{0}' in survey definition")]
    DuplicateQuestionId(QuestionId),

    /// A multiple-choice question declares no options.
    #[error("Multiple-choice question '{0}' has no options")]
    NoOptions(QuestionId),
}
