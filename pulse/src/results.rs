use serde::Serialize;

use pulse_types::{AnswerValue, Question, QuestionId, Response, Survey, SurveyId};

/// On-demand results computation for one survey.
///
/// A pure function of `(Survey, responses)`: no hidden state, no caching,
/// always recomputed from scratch. The computation is total — malformed
/// answer values are filtered out silently and degrade the output rather
/// than raising, which fits a read-only analytics view. Cost is
/// O(responses x questions) per call.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultsAggregator {
    /// Number of people eligible to respond, the denominator of the
    /// participation rate. The rate is clamped at 100%; with a population
    /// of zero, any response at all counts as full participation.
    pub eligible_population: usize,
}

impl Default for ResultsAggregator {
    fn default() -> Self {
        Self {
            eligible_population: 100,
        }
    }
}

impl ResultsAggregator {
    /// Create an aggregator for the given eligible population.
    ///
    /// A population of zero is accepted: the participation rate is then
    /// 0% without responses and 100% with any, since the clamp would win
    /// over any finite denominator anyway.
    pub fn with_population(eligible_population: usize) -> Self {
        Self { eligible_population }
    }

    /// Compute the full statistical summary for a survey.
    ///
    /// `responses` is the survey's response set, as returned by
    /// [`ResponseStore::responses_for`](crate::ResponseStore::responses_for).
    /// With zero responses every question carries a `None` summary; with at
    /// least one response, text and multiple-choice summaries are always
    /// present (possibly vacuous) and rating summaries are `None` only when
    /// no usable rating values survive coercion.
    pub fn summarize(&self, survey: &Survey, responses: &[&Response]) -> SurveyResults {
        let total_responses = responses.len();

        let question_results = survey
            .questions()
            .iter()
            .map(|question| self.summarize_question(question, responses, total_responses))
            .collect::<Vec<_>>();

        let average_overall_rating = overall_rating(survey, &question_results);

        SurveyResults {
            survey: survey.id.clone(),
            total_responses,
            participation_rate: self.participation_rate(total_responses),
            average_overall_rating,
            question_results,
        }
    }

    fn participation_rate(&self, total_responses: usize) -> f64 {
        if total_responses == 0 {
            return 0.0;
        }
        if self.eligible_population == 0 {
            return 100.0;
        }
        let rate = total_responses as f64 / self.eligible_population as f64 * 100.0;
        rate.min(100.0)
    }

    fn summarize_question(
        &self,
        question: &Question,
        responses: &[&Response],
        total_responses: usize,
    ) -> QuestionResult {
        // Every matching answer counts. Submission rejects duplicate
        // question ids, but restored data is taken as-is, so a duplicated
        // answer contributes each of its values.
        let answers: Vec<AnswerValue> = responses
            .iter()
            .flat_map(|r| r.answers.iter())
            .filter(|a| &a.question == question.id())
            .map(|a| a.value.clone())
            .collect();

        let summary = if total_responses == 0 {
            None
        } else if question.kind().is_rating() {
            rating_summary(&answers).map(QuestionSummary::Rating)
        } else if let Some(options) = question.kind().options() {
            Some(QuestionSummary::MultipleChoice(choice_summary(
                options,
                &answers,
                total_responses,
            )))
        } else {
            Some(QuestionSummary::Text(text_summary(&answers)))
        };

        QuestionResult {
            question: question.clone(),
            answers,
            summary,
        }
    }
}

/// Coerce an answer value to a usable rating in `1..=5`.
///
/// Integers are taken as-is, strings go through a trimmed integer parse;
/// anything else, and anything out of range, is discarded.
fn coerce_rating(value: &AnswerValue) -> Option<i64> {
    let rating = match value {
        AnswerValue::Int(i) => *i,
        AnswerValue::String(s) => s.trim().parse::<i64>().ok()?,
        AnswerValue::StringList(_) => return None,
    };
    (1..=5).contains(&rating).then_some(rating)
}

fn rating_summary(answers: &[AnswerValue]) -> Option<RatingSummary> {
    let ratings: Vec<i64> = answers.iter().filter_map(coerce_rating).collect();
    if ratings.is_empty() {
        return None;
    }

    let total = ratings.len();
    let average = round1(ratings.iter().sum::<i64>() as f64 / total as f64);

    let distribution = (1..=5)
        .map(|rating| {
            let count = ratings.iter().filter(|&&r| r == rating).count();
            RatingBucket {
                rating: rating as u8,
                count,
                percentage: round1(count as f64 / total as f64 * 100.0),
            }
        })
        .collect();

    Some(RatingSummary {
        average,
        total,
        distribution,
    })
}

fn choice_summary(
    options: &[String],
    answers: &[AnswerValue],
    total_responses: usize,
) -> ChoiceSummary {
    let mut counts = vec![0usize; options.len()];
    for answer in answers {
        match answer {
            AnswerValue::StringList(selected) => {
                // Every listed value that matches a declared option counts;
                // unknown values are ignored.
                for value in selected {
                    if let Some(index) = options.iter().position(|o| o == value) {
                        counts[index] += 1;
                    }
                }
            }
            AnswerValue::String(value) => {
                if let Some(index) = options.iter().position(|o| o == value) {
                    counts[index] += 1;
                }
            }
            AnswerValue::Int(_) => {}
        }
    }

    let total_selections = counts.iter().sum();
    let options = options
        .iter()
        .zip(&counts)
        .map(|(option, &count)| OptionCount {
            option: option.clone(),
            count,
            // Denominator is total survey responses, not answers to this
            // question: a skipped question still contributes an implicit
            // zero.
            percentage: round1(count as f64 / total_responses as f64 * 100.0),
        })
        .collect();

    ChoiceSummary {
        options,
        total_selections,
    }
}

fn text_summary(answers: &[AnswerValue]) -> TextSummary {
    let entries: Vec<String> = answers
        .iter()
        .filter_map(AnswerValue::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect();
    TextSummary {
        total: entries.len(),
        entries,
    }
}

fn overall_rating(survey: &Survey, question_results: &[QuestionResult]) -> f64 {
    let averages: Vec<f64> = survey
        .questions()
        .iter()
        .zip(question_results)
        .filter(|(question, _)| question.kind().is_rating())
        .map(|(_, result)| match &result.summary {
            Some(QuestionSummary::Rating(summary)) => summary.average,
            _ => 0.0,
        })
        .collect();

    if averages.is_empty() {
        return 0.0;
    }
    round1(averages.iter().sum::<f64>() / averages.len() as f64)
}

/// Round to one decimal place.
fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Full statistical summary of one survey.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SurveyResults {
    /// The summarized survey.
    pub survey: SurveyId,

    /// Number of recorded responses.
    pub total_responses: usize,

    /// Percentage of the eligible population that responded, clamped at 100.
    pub participation_rate: f64,

    /// Mean of the per-question rating averages (missing summaries count as
    /// zero), or zero when the survey has no rating questions.
    pub average_overall_rating: f64,

    /// One entry per survey question, in survey order.
    pub question_results: Vec<QuestionResult>,
}

impl SurveyResults {
    /// Look up the result for a question by id.
    pub fn question_result(&self, id: &QuestionId) -> Option<&QuestionResult> {
        self.question_results.iter().find(|r| r.question.id() == id)
    }
}

/// Per-question slice of the results.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuestionResult {
    /// The question itself.
    pub question: Question,

    /// Every answer given to this question, in response order.
    pub answers: Vec<AnswerValue>,

    /// The per-type summary. `None` for a survey without responses, and for
    /// rating questions without any usable rating values.
    pub summary: Option<QuestionSummary>,
}

/// Per-type statistical summary of one question.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum QuestionSummary {
    /// Summary of a rating question.
    Rating(RatingSummary),

    /// Summary of a multiple-choice question.
    MultipleChoice(ChoiceSummary),

    /// Summary of a text question.
    Text(TextSummary),
}

/// Statistics over the usable rating values of one question.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RatingSummary {
    /// Arithmetic mean, rounded to one decimal place.
    pub average: f64,

    /// Number of usable rating values.
    pub total: usize,

    /// One bucket per rating value 1 through 5.
    pub distribution: Vec<RatingBucket>,
}

/// Count and share of one exact rating value.
///
/// Percentages are rounded independently and are not adjusted to sum to
/// exactly 100.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RatingBucket {
    /// The rating value, 1 through 5.
    pub rating: u8,

    /// How many usable answers had exactly this value.
    pub count: usize,

    /// `count / total * 100`, rounded to one decimal place.
    pub percentage: f64,
}

/// Selection counts of a multiple-choice question.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChoiceSummary {
    /// One entry per declared option, in declared order.
    pub options: Vec<OptionCount>,

    /// Sum of all option counts. May exceed the survey's response count,
    /// since multi-select answers count once per selection.
    pub total_selections: usize,
}

/// Count and share of one declared option.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OptionCount {
    /// The declared option string.
    pub option: String,

    /// How many selections named this option.
    pub count: usize,

    /// `count / total survey responses * 100`, rounded to one decimal place.
    pub percentage: f64,
}

/// Collected free-text answers of one question.
///
/// Unlike rating summaries, this is present even when vacuous: no numeric
/// data is "no data", but no text is "zero text answers".
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextSummary {
    /// Number of non-empty entries.
    pub total: usize,

    /// The non-empty (after trimming) answers, in encounter order.
    pub entries: Vec<String>,
}
