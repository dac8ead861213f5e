use pulse::{Question, Survey};

/// Feedback survey for a finished training program. Already closed: useful
/// for exercising the closed-survey rejection path.
pub fn training_feedback_survey() -> Survey {
    let mut survey = Survey::new(
        "training-2024-rust",
        "Rust Training Feedback",
        "Post-program feedback for the 2024 Rust fundamentals course.",
        vec![
            Question::rating("overall", "How useful was the course overall?").required(),
            Question::rating("pace", "How was the pace?").required(),
            Question::multiple_choice(
                "format",
                "Which formats worked for you?",
                vec![
                    "Live sessions".into(),
                    "Recordings".into(),
                    "Exercises".into(),
                ],
            ),
            Question::text("comments", "What should we change next time?"),
        ],
    );
    survey.close();
    survey
}
