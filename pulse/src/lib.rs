//! # pulse
//!
//! Survey response store and results aggregator for employee-engagement
//! surveys. Presentation-agnostic: render the results however you like.
//!
//! Two collaborating pieces:
//!
//! - [`ResponseStore`] holds seeded surveys and the append-only response
//!   set, and enforces the submission invariants (survey exists, survey is
//!   active, one response per respondent, no duplicate answers, required
//!   questions covered).
//! - [`ResultsAggregator`] computes, on demand, per-question summaries and
//!   participation metrics from the current response set. It is a pure
//!   function of its inputs and deliberately total: malformed answers
//!   degrade the output instead of raising.
//!
//! ## Usage
//!
//! ```rust
//! use pulse::{Answer, Question, ResponseStore, ResultsAggregator, Survey};
//! use pulse::RespondentId;
//!
//! let mut store = ResponseStore::new();
//! store
//!     .insert_survey(Survey::new(
//!         "pulse-1",
//!         "Quarterly pulse",
//!         "How is the quarter going?",
//!         vec![Question::rating("q1", "Rate your workload.").required()],
//!     ))
//!     .unwrap();
//!
//! let me = RespondentId::generate();
//! store
//!     .submit(&"pulse-1".into(), me, vec![Answer::new("q1", 4)])
//!     .unwrap();
//!
//! let aggregator = ResultsAggregator::default();
//! let survey = store.survey(&"pulse-1".into()).unwrap();
//! let results = aggregator.summarize(survey, &store.responses_for(&"pulse-1".into()));
//! assert_eq!(results.total_responses, 1);
//! ```

// Re-export all types from pulse-types
pub use pulse_types::*;

mod store;
pub use store::ResponseStore;

mod results;
pub use results::{
    ChoiceSummary, OptionCount, QuestionResult, QuestionSummary, RatingBucket, RatingSummary,
    ResultsAggregator, SurveyResults, TextSummary,
};

pub mod storage;
