use serde::{Deserialize, Serialize};

use crate::QuestionId;

/// A single answer value as submitted by a respondent.
///
/// The shape depends on the owning question: a rating arrives as an integer
/// or a numeric string, a multiple-choice selection as one string or a list
/// of strings, free text as a string. Values are stored as submitted;
/// coercion to rating integers happens during aggregation, where unusable
/// values are filtered rather than rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerValue {
    /// An integer value (typical for rating questions).
    Int(i64),

    /// A string value (free text, a numeric-string rating, or a single
    /// multiple-choice selection).
    String(String),

    /// A list of strings (multi-select multiple-choice).
    StringList(Vec<String>),
}

impl AnswerValue {
    /// Try to get this value as an integer.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Try to get this value as a string reference.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get this value as a string list.
    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            Self::StringList(list) => Some(list),
            _ => None,
        }
    }

    /// Check whether this value is empty.
    ///
    /// An empty string or an empty list does not count as an answer when
    /// required questions are checked. Integers are never empty.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Int(_) => false,
            Self::String(s) => s.is_empty(),
            Self::StringList(list) => list.is_empty(),
        }
    }

    /// Get the type name of this value for error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Int(_) => "Int",
            Self::String(_) => "String",
            Self::StringList(_) => "StringList",
        }
    }
}

impl From<i64> for AnswerValue {
    fn from(i: i64) -> Self {
        Self::Int(i)
    }
}

impl From<i32> for AnswerValue {
    fn from(i: i32) -> Self {
        Self::Int(i64::from(i))
    }
}

impl From<String> for AnswerValue {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<&str> for AnswerValue {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<Vec<String>> for AnswerValue {
    fn from(list: Vec<String>) -> Self {
        Self::StringList(list)
    }
}

impl From<Vec<&str>> for AnswerValue {
    fn from(list: Vec<&str>) -> Self {
        Self::StringList(list.into_iter().map(str::to_string).collect())
    }
}

/// One answer within a response, tying a value to a question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Answer {
    /// The question this answer belongs to.
    pub question: QuestionId,

    /// The submitted value.
    pub value: AnswerValue,
}

impl Answer {
    /// Create a new answer.
    pub fn new(question: impl Into<QuestionId>, value: impl Into<AnswerValue>) -> Self {
        Self {
            question: question.into(),
            value: value.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emptiness() {
        assert!(AnswerValue::String(String::new()).is_empty());
        assert!(AnswerValue::StringList(Vec::new()).is_empty());
        assert!(!AnswerValue::Int(0).is_empty());
        assert!(!AnswerValue::String(" ".into()).is_empty());
    }

    #[test]
    fn conversions() {
        assert_eq!(AnswerValue::from(4), AnswerValue::Int(4));
        assert_eq!(AnswerValue::from("yes"), AnswerValue::String("yes".into()));
        assert_eq!(
            AnswerValue::from(vec!["a", "b"]),
            AnswerValue::StringList(vec!["a".into(), "b".into()])
        );
    }

    #[test]
    fn untagged_serde_round_trip() {
        let answer = Answer::new("q3", vec!["Remote work", "Training"]);
        let json = serde_json::to_string(&answer).unwrap();
        let back: Answer = serde_json::from_str(&json).unwrap();
        assert_eq!(answer, back);
    }
}
