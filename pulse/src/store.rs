use std::collections::HashMap;

use pulse_types::{
    Answer, QuestionId, RespondentId, Response, ResponseId, SubmissionError, Survey,
    SurveyDefError, SurveyId,
};

/// In-session repository for surveys and their responses.
///
/// Constructed once per session and passed explicitly to whoever needs it;
/// there is no ambient global state. Surveys are seeded via
/// [`insert_survey`](Self::insert_survey) and treated as immutable once
/// responses exist (closing is the only transition). The response set is
/// append-only: no other component mutates it.
#[derive(Debug, Clone, Default)]
pub struct ResponseStore {
    surveys: HashMap<SurveyId, Survey>,
    responses: Vec<Response>,
}

impl ResponseStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a survey, validating its definition.
    ///
    /// Rejects duplicate question ids and multiple-choice questions with an
    /// empty option list. Re-registering an id replaces the survey.
    pub fn insert_survey(&mut self, survey: Survey) -> Result<(), SurveyDefError> {
        let mut seen: Vec<&QuestionId> = Vec::with_capacity(survey.len());
        for question in survey.questions() {
            if seen.contains(&question.id()) {
                return Err(SurveyDefError::DuplicateQuestionId(question.id().clone()));
            }
            if let Some(options) = question.kind().options()
                && options.is_empty()
            {
                return Err(SurveyDefError::NoOptions(question.id().clone()));
            }
            seen.push(question.id());
        }
        self.surveys.insert(survey.id.clone(), survey);
        Ok(())
    }

    /// Look up a survey by id.
    pub fn survey(&self, id: &SurveyId) -> Option<&Survey> {
        self.surveys.get(id)
    }

    /// Iterate over all registered surveys.
    pub fn surveys(&self) -> impl Iterator<Item = &Survey> {
        self.surveys.values()
    }

    /// Close a survey. Returns `false` if no such survey is registered.
    pub fn close_survey(&mut self, id: &SurveyId) -> bool {
        match self.surveys.get_mut(id) {
            Some(survey) => {
                survey.close();
                true
            }
            None => false,
        }
    }

    /// Validate and record a response.
    ///
    /// Preconditions are checked in order, short-circuiting: the survey
    /// exists, it is active, the respondent has not already responded, the
    /// answer list names each question at most once, and every required
    /// question has a non-empty answer. On success the response is appended
    /// with a fresh id and the current timestamp.
    pub fn submit(
        &mut self,
        survey_id: &SurveyId,
        respondent: RespondentId,
        answers: Vec<Answer>,
    ) -> Result<ResponseId, SubmissionError> {
        let survey = self
            .surveys
            .get(survey_id)
            .ok_or_else(|| SubmissionError::SurveyNotFound(survey_id.clone()))?;

        if !survey.is_active() {
            log::warn!("Rejected response to closed survey '{survey_id}'");
            return Err(SubmissionError::SurveyClosed(survey_id.clone()));
        }

        if self.has_responded(survey_id, &respondent) {
            log::warn!("Rejected duplicate response to '{survey_id}' from '{respondent}'");
            return Err(SubmissionError::AlreadyResponded(respondent));
        }

        for (index, answer) in answers.iter().enumerate() {
            if answers[..index].iter().any(|a| a.question == answer.question) {
                return Err(SubmissionError::DuplicateAnswer(answer.question.clone()));
            }
        }

        let missing: Vec<QuestionId> = survey
            .required_questions()
            .filter(|question| {
                !answers
                    .iter()
                    .any(|a| &a.question == question.id() && !a.value.is_empty())
            })
            .map(|question| question.id().clone())
            .collect();
        if !missing.is_empty() {
            return Err(SubmissionError::MissingRequiredAnswers(missing));
        }

        let response = Response::new(survey_id.clone(), respondent, answers);
        let id = response.id.clone();
        log::info!("Recorded response {id} for survey '{survey_id}'");
        self.responses.push(response);
        Ok(id)
    }

    /// Check whether a respondent already has a recorded response.
    ///
    /// Pure query; `submit` performs the same check itself, so this exists
    /// for UI gating (hide the form, show the results instead).
    pub fn has_responded(&self, survey_id: &SurveyId, respondent: &RespondentId) -> bool {
        self.responses
            .iter()
            .any(|r| &r.survey == survey_id && &r.respondent == respondent)
    }

    /// Get the responses for a survey, in submission order.
    pub fn responses_for(&self, survey_id: &SurveyId) -> Vec<&Response> {
        self.responses
            .iter()
            .filter(|r| &r.survey == survey_id)
            .collect()
    }

    /// Export the full response set, e.g. for persistence.
    pub fn snapshot(&self) -> &[Response] {
        &self.responses
    }

    /// Replace the response set wholesale, e.g. after loading from storage.
    pub fn restore(&mut self, responses: Vec<Response>) {
        log::info!("Restored {} responses", responses.len());
        self.responses = responses;
    }
}
