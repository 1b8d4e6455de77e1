//! Responses and the per-session response store.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// A recorded answer: a scale point or a symbolic option value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResponseValue {
    Number(f64),
    Text(String),
}

impl ResponseValue {
    /// Numeric value, if this is a number.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            ResponseValue::Number(n) => Some(*n),
            ResponseValue::Text(_) => None,
        }
    }

    /// Empty strings count as "no answer" for navigation purposes.
    pub fn is_blank(&self) -> bool {
        matches!(self, ResponseValue::Text(s) if s.is_empty())
    }
}

impl fmt::Display for ResponseValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResponseValue::Number(n) if n.fract() == 0.0 && n.is_finite() => {
                write!(f, "{}", *n as i64)
            }
            ResponseValue::Number(n) => write!(f, "{n}"),
            ResponseValue::Text(s) => f.write_str(s),
        }
    }
}

/// Numbers parse as [`ResponseValue::Number`], everything else is text.
impl FromStr for ResponseValue {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Ok(match trimmed.parse::<f64>() {
            Ok(n) if n.is_finite() => ResponseValue::Number(n),
            _ => ResponseValue::Text(trimmed.to_string()),
        })
    }
}

impl From<f64> for ResponseValue {
    fn from(n: f64) -> Self {
        ResponseValue::Number(n)
    }
}

impl From<i32> for ResponseValue {
    fn from(n: i32) -> Self {
        ResponseValue::Number(f64::from(n))
    }
}

impl From<&str> for ResponseValue {
    fn from(s: &str) -> Self {
        ResponseValue::Text(s.to_string())
    }
}

impl From<String> for ResponseValue {
    fn from(s: String) -> Self {
        ResponseValue::Text(s)
    }
}

/// A response to one question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    pub question_id: String,
    pub value: ResponseValue,
}

impl Response {
    pub fn new(question_id: impl Into<String>, value: impl Into<ResponseValue>) -> Self {
        Self {
            question_id: question_id.into(),
            value: value.into(),
        }
    }
}

/// Question id -> response. Last write wins.
///
/// The store does not know about the catalog; id validation happens in
/// the session before anything is written here.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResponseStore {
    responses: HashMap<String, Response>,
}

impl ResponseStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite a response, returning the value it replaced.
    pub fn record(&mut self, response: Response) -> Option<ResponseValue> {
        self.responses
            .insert(response.question_id.clone(), response)
            .map(|prev| prev.value)
    }

    pub fn get(&self, question_id: &str) -> Option<&ResponseValue> {
        self.responses.get(question_id).map(|r| &r.value)
    }

    /// True if the question has a non-blank answer.
    pub fn is_answered(&self, question_id: &str) -> bool {
        self.get(question_id).is_some_and(|v| !v.is_blank())
    }

    pub fn clear(&mut self) {
        self.responses.clear();
    }

    pub fn len(&self) -> usize {
        self.responses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.responses.is_empty()
    }

    /// Iterate responses in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &Response> {
        self.responses.values()
    }
}

impl FromIterator<Response> for ResponseStore {
    fn from_iter<I: IntoIterator<Item = Response>>(iter: I) -> Self {
        let mut store = ResponseStore::new();
        for response in iter {
            store.record(response);
        }
        store
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_then_read() {
        let mut store = ResponseStore::new();
        store.record(Response::new("psych-1", 4));
        assert_eq!(store.get("psych-1"), Some(&ResponseValue::Number(4.0)));
        assert_eq!(store.get("psych-2"), None);
    }

    #[test]
    fn test_overwrite_replaces() {
        let mut store = ResponseStore::new();
        assert_eq!(store.record(Response::new("tech-1", "none")), None);
        let prev = store.record(Response::new("tech-1", "multiple"));
        assert_eq!(prev, Some(ResponseValue::from("none")));
        assert_eq!(store.len(), 1);
        assert_eq!(store.get("tech-1"), Some(&ResponseValue::from("multiple")));
    }

    #[test]
    fn test_blank_is_not_answered() {
        let mut store = ResponseStore::new();
        store.record(Response::new("intro-2", ""));
        assert!(!store.is_answered("intro-2"));
        store.record(Response::new("intro-2", "variety"));
        assert!(store.is_answered("intro-2"));
    }

    #[test]
    fn test_parse_value() {
        assert_eq!("4".parse::<ResponseValue>().unwrap(), ResponseValue::Number(4.0));
        assert_eq!(
            " helping-others ".parse::<ResponseValue>().unwrap(),
            ResponseValue::from("helping-others")
        );
        assert_eq!("NaN".parse::<ResponseValue>().unwrap(), ResponseValue::from("NaN"));
    }

    #[test]
    fn test_display() {
        assert_eq!(ResponseValue::Number(3.0).to_string(), "3");
        assert_eq!(ResponseValue::Number(2.5).to_string(), "2.5");
        assert_eq!(ResponseValue::from("data").to_string(), "data");
    }

    #[test]
    fn test_response_json_shape() {
        let json = r#"[{"questionId":"will-1","value":5},{"questionId":"ability-1","value":"reflect"}]"#;
        let responses: Vec<Response> = serde_json::from_str(json).unwrap();
        assert_eq!(responses[0], Response::new("will-1", 5));
        assert_eq!(responses[1], Response::new("ability-1", "reflect"));
    }
}
