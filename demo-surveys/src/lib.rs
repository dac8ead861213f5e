//! Fixture surveys and canned responses for demos and tests.

mod engagement;
pub use engagement::{engagement_survey, seed_engagement_responses};

mod training_feedback;
pub use training_feedback::training_feedback_survey;

use anyhow::Result;
use pulse::ResponseStore;

/// Build a store seeded with all fixture surveys.
pub fn seed_store() -> Result<ResponseStore> {
    let mut store = ResponseStore::new();
    store.insert_survey(engagement_survey())?;
    store.insert_survey(training_feedback_survey())?;
    Ok(store)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pulse::ResultsAggregator;

    #[test]
    fn fixtures_register_cleanly() {
        let store = seed_store().unwrap();
        assert_eq!(store.surveys().count(), 2);
    }

    #[test]
    fn seeded_responses_aggregate() {
        let mut store = seed_store().unwrap();
        seed_engagement_responses(&mut store).unwrap();

        let id = "engagement-2024-q3".into();
        let survey = store.survey(&id).unwrap();
        let results = ResultsAggregator::default().summarize(survey, &store.responses_for(&id));
        assert!(results.total_responses > 0);
        assert!(results.average_overall_rating > 0.0);
    }

    #[test]
    fn closed_fixture_rejects_responses() {
        let mut store = seed_store().unwrap();
        let err = store
            .submit(
                &"training-2024-rust".into(),
                pulse::RespondentId::generate(),
                Vec::new(),
            )
            .unwrap_err();
        assert!(matches!(err, pulse::SubmissionError::SurveyClosed(_)));
    }
}
