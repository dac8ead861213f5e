//! Core types for the pulse crate.
//!
//! This crate provides the foundational types for survey data collection:
//! - `Survey` and `SurveyStatus` - The top-level survey structure and lifecycle
//! - `Question` and `QuestionKind` - Individual questions and their types
//! - `Answer` and `AnswerValue` - Submitted data and the per-answer value union
//! - `Response` - One respondent's submission against a survey
//! - `SubmissionError` and `SurveyDefError` - The fallible seams

mod ids;
pub use ids::{QuestionId, RespondentId, ResponseId, SurveyId};

mod answer;
pub use answer::{Answer, AnswerValue};

mod question;
pub use question::{Question, QuestionKind};

mod survey;
pub use survey::{Survey, SurveyStatus};

mod response;
pub use response::Response;

mod error;
pub use error::{SubmissionError, SurveyDefError};
