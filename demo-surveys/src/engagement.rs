use anyhow::Result;
use pulse::{Answer, Question, RespondentId, ResponseStore, Survey};

/// The quarterly engagement pulse: four required questions, one optional.
pub fn engagement_survey() -> Survey {
    Survey::new(
        "engagement-2024-q3",
        "Employee Engagement Pulse",
        "Quarterly check-in on satisfaction, balance, and benefits.",
        vec![
            Question::rating("1", "How satisfied are you with your current role?").required(),
            Question::rating("2", "How would you rate your work-life balance?").required(),
            Question::multiple_choice(
                "3",
                "Which benefits matter most to you?",
                vec![
                    "Health insurance".into(),
                    "Remote work".into(),
                    "Training budget".into(),
                    "Extra vacation days".into(),
                ],
            )
            .required(),
            Question::rating("4", "How likely are you to recommend us as an employer?")
                .required(),
            Question::text("5", "Anything else you want to share?"),
        ],
    )
}

/// Submit a handful of plausible responses to the engagement survey.
pub fn seed_engagement_responses(store: &mut ResponseStore) -> Result<()> {
    let survey_id = "engagement-2024-q3".into();
    let canned = [
        vec![
            Answer::new("1", 4),
            Answer::new("2", 3),
            Answer::new("3", vec!["Remote work", "Training budget"]),
            Answer::new("4", 5),
            Answer::new("5", "Keep the Friday demos going."),
        ],
        vec![
            Answer::new("1", 5),
            Answer::new("2", 4),
            Answer::new("3", vec!["Health insurance"]),
            Answer::new("4", 4),
        ],
        vec![
            Answer::new("1", 3),
            Answer::new("2", 2),
            Answer::new("3", vec!["Remote work"]),
            Answer::new("4", 3),
            Answer::new("5", "More focus time, fewer meetings."),
        ],
    ];

    for answers in canned {
        store.submit(&survey_id, RespondentId::generate(), answers)?;
    }
    Ok(())
}
