//! Integration tests for pulse: submission gating end-to-end through
//! aggregation, against a realistic engagement survey.

use anyhow::Result;
use pulse::storage::{self, MemoryStore};
use pulse::{
    Answer, Question, QuestionSummary, RespondentId, ResponseStore, ResultsAggregator,
    SubmissionError, Survey, SurveyId,
};

fn engagement_survey() -> Survey {
    Survey::new(
        "survey-1",
        "Employee Engagement Pulse",
        "Quarterly engagement check-in",
        vec![
            Question::rating("1", "How satisfied are you with your role?").required(),
            Question::rating("2", "How would you rate work-life balance?").required(),
            Question::multiple_choice(
                "3",
                "Which benefits matter most to you?",
                vec![
                    "Health insurance".into(),
                    "Remote work".into(),
                    "Training budget".into(),
                ],
            )
            .required(),
            Question::rating("4", "How likely are you to recommend us as an employer?")
                .required(),
            Question::text("5", "Anything else you want to share?"),
        ],
    )
}

fn survey_id() -> SurveyId {
    "survey-1".into()
}

fn seeded_store() -> Result<ResponseStore> {
    let mut store = ResponseStore::new();
    store.insert_survey(engagement_survey())?;
    Ok(store)
}

fn full_answers() -> Vec<Answer> {
    vec![
        Answer::new("1", 4),
        Answer::new("2", 3),
        Answer::new("3", vec!["Remote work"]),
        Answer::new("4", 5),
    ]
}

#[test]
fn required_field_gating() -> Result<()> {
    let mut store = seeded_store()?;

    // Covering only questions 1-3 fails, naming the missing id.
    let err = store
        .submit(
            &survey_id(),
            RespondentId::generate(),
            vec![
                Answer::new("1", 4),
                Answer::new("2", 3),
                Answer::new("3", vec!["Remote work"]),
            ],
        )
        .unwrap_err();
    assert_eq!(
        err,
        SubmissionError::MissingRequiredAnswers(vec!["4".into()])
    );

    // Covering all required questions succeeds; the optional text question
    // may be skipped.
    store.submit(&survey_id(), RespondentId::generate(), full_answers())?;
    assert_eq!(store.responses_for(&survey_id()).len(), 1);

    // A closed survey rejects even complete answer sets.
    store.close_survey(&survey_id());
    let err = store
        .submit(&survey_id(), RespondentId::generate(), full_answers())
        .unwrap_err();
    assert_eq!(err, SubmissionError::SurveyClosed(survey_id()));
    Ok(())
}

#[test]
fn rating_aggregation_correctness() -> Result<()> {
    let mut store = ResponseStore::new();
    store.insert_survey(Survey::new(
        "s",
        "Ratings",
        "",
        vec![Question::rating("q", "Rate it")],
    ))?;

    let raw: Vec<Answer> = vec![
        Answer::new("q", 5),
        Answer::new("q", 4),
        Answer::new("q", 4),
        Answer::new("q", 3),
        Answer::new("q", "3"),
        Answer::new("q", "x"),
        Answer::new("q", 7),
    ];
    for answer in raw {
        store.submit(&"s".into(), RespondentId::generate(), vec![answer])?;
    }

    let survey = store.survey(&"s".into()).unwrap();
    let results =
        ResultsAggregator::default().summarize(survey, &store.responses_for(&"s".into()));
    let result = results.question_result(&"q".into()).unwrap();

    let Some(QuestionSummary::Rating(summary)) = &result.summary else {
        panic!("expected a rating summary");
    };
    // Surviving values are [5, 4, 4, 3, 3]; "x" and 7 are excluded.
    assert_eq!(summary.average, 3.8);
    assert_eq!(summary.total, 5);
    let counts: Vec<usize> = summary.distribution.iter().map(|b| b.count).collect();
    assert_eq!(counts, vec![0, 0, 2, 2, 1]);
    let percentages: Vec<f64> = summary.distribution.iter().map(|b| b.percentage).collect();
    assert_eq!(percentages, vec![0.0, 0.0, 40.0, 40.0, 20.0]);
    Ok(())
}

#[test]
fn multiple_choice_denominator_is_survey_responses() -> Result<()> {
    let mut store = ResponseStore::new();
    store.insert_survey(Survey::new(
        "s",
        "Choices",
        "",
        vec![
            Question::multiple_choice("c", "Pick", vec!["A".into(), "B".into()]),
            Question::text("t", "Why?"),
        ],
    ))?;

    // 4 responses answer the choice question...
    for _ in 0..3 {
        store.submit(
            &"s".into(),
            RespondentId::generate(),
            vec![Answer::new("c", vec!["A"])],
        )?;
    }
    store.submit(
        &"s".into(),
        RespondentId::generate(),
        vec![Answer::new("c", vec!["A", "B"])],
    )?;
    // ...and 6 skip it entirely.
    for _ in 0..6 {
        store.submit(
            &"s".into(),
            RespondentId::generate(),
            vec![Answer::new("t", "no opinion")],
        )?;
    }

    let survey = store.survey(&"s".into()).unwrap();
    let results =
        ResultsAggregator::default().summarize(survey, &store.responses_for(&"s".into()));
    assert_eq!(results.total_responses, 10);

    let result = results.question_result(&"c".into()).unwrap();
    let Some(QuestionSummary::MultipleChoice(summary)) = &result.summary else {
        panic!("expected a choice summary");
    };
    assert_eq!(summary.options[0].option, "A");
    assert_eq!(summary.options[0].count, 4);
    assert_eq!(summary.options[0].percentage, 40.0);
    assert_eq!(summary.options[1].option, "B");
    assert_eq!(summary.options[1].count, 1);
    assert_eq!(summary.options[1].percentage, 10.0);
    assert_eq!(summary.total_selections, 5);
    Ok(())
}

#[test]
fn text_vacuity_is_not_null() -> Result<()> {
    let mut store = ResponseStore::new();
    store.insert_survey(Survey::new(
        "s",
        "Text",
        "",
        vec![Question::rating("r", "Rate"), Question::text("t", "Comments?")],
    ))?;

    // One response, no text answer: the text summary is present but empty,
    // unlike the null-on-empty behavior of rating questions.
    store.submit(
        &"s".into(),
        RespondentId::generate(),
        vec![Answer::new("r", "not-a-number")],
    )?;

    let survey = store.survey(&"s".into()).unwrap();
    let results =
        ResultsAggregator::default().summarize(survey, &store.responses_for(&"s".into()));

    let text = results.question_result(&"t".into()).unwrap();
    let Some(QuestionSummary::Text(summary)) = &text.summary else {
        panic!("expected a text summary");
    };
    assert_eq!(summary.total, 0);
    assert!(summary.entries.is_empty());

    let rating = results.question_result(&"r".into()).unwrap();
    assert!(rating.summary.is_none());
    Ok(())
}

#[test]
fn zero_response_survey() -> Result<()> {
    let store = seeded_store()?;
    let survey = store.survey(&survey_id()).unwrap();
    let results =
        ResultsAggregator::default().summarize(survey, &store.responses_for(&survey_id()));

    assert_eq!(results.total_responses, 0);
    assert_eq!(results.participation_rate, 0.0);
    assert_eq!(results.average_overall_rating, 0.0);
    assert_eq!(results.question_results.len(), 5);
    assert!(results.question_results.iter().all(|r| r.summary.is_none()));
    Ok(())
}

#[test]
fn aggregation_is_idempotent() -> Result<()> {
    let mut store = seeded_store()?;
    store.submit(&survey_id(), RespondentId::generate(), full_answers())?;
    store.submit(
        &survey_id(),
        RespondentId::generate(),
        vec![
            Answer::new("1", 5),
            Answer::new("2", 2),
            Answer::new("3", vec!["Health insurance", "Training budget"]),
            Answer::new("4", 4),
            Answer::new("5", "More offsites please"),
        ],
    )?;

    let aggregator = ResultsAggregator::default();
    let survey = store.survey(&survey_id()).unwrap();
    let responses = store.responses_for(&survey_id());

    let first = aggregator.summarize(survey, &responses);
    let second = aggregator.summarize(survey, &responses);
    assert_eq!(first, second);
    Ok(())
}

#[test]
fn participation_rate_uses_configured_population() -> Result<()> {
    let mut store = seeded_store()?;
    for _ in 0..5 {
        store.submit(&survey_id(), RespondentId::generate(), full_answers())?;
    }

    let survey = store.survey(&survey_id()).unwrap();
    let responses = store.responses_for(&survey_id());

    let nominal = ResultsAggregator::default().summarize(survey, &responses);
    assert_eq!(nominal.participation_rate, 5.0);

    let sized = ResultsAggregator::with_population(20).summarize(survey, &responses);
    assert_eq!(sized.participation_rate, 25.0);
    Ok(())
}

#[test]
fn responses_survive_a_storage_round_trip() -> Result<()> {
    let mut store = seeded_store()?;
    let mut kv = MemoryStore::new();

    let respondent = storage::cached_respondent(&mut kv)?;
    store.submit(&survey_id(), respondent.clone(), full_answers())?;
    storage::save_responses(&mut kv, store.snapshot())?;

    // A fresh session restores the collection and still recognizes the
    // cached respondent as having responded.
    let mut session = ResponseStore::new();
    session.insert_survey(engagement_survey())?;
    session.restore(storage::load_responses(&kv)?);

    let same_respondent = storage::cached_respondent(&mut kv)?;
    assert_eq!(same_respondent, respondent);
    assert!(session.has_responded(&survey_id(), &same_respondent));

    let survey = session.survey(&survey_id()).unwrap();
    let results =
        ResultsAggregator::default().summarize(survey, &session.responses_for(&survey_id()));
    assert_eq!(results.total_responses, 1);
    Ok(())
}
