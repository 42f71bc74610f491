//! Records returned by the collection endpoints.
//!
//! # Design
//! The backend owns the record shape, so both types wrap the raw JSON
//! object and expose the known fields through accessors. A record is only
//! required to be an object; missing fields read as `None` and unknown ones
//! are kept as-is.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One analysed review from `/api/opiniones`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Review(Map<String, Value>);

/// One trending topic from `/api/trending`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TrendingTopic(Map<String, Value>);

impl Review {
    pub fn id(&self) -> Option<&Value> {
        self.0.get("id")
    }

    pub fn opinion_original(&self) -> Option<&str> {
        str_field(&self.0, "opinion_original")
    }

    pub fn opinion_limpia(&self) -> Option<&str> {
        str_field(&self.0, "opinion_limpia")
    }

    pub fn sentimiento(&self) -> Option<&str> {
        str_field(&self.0, "sentimiento")
    }

    pub fn temas(&self) -> Option<&str> {
        str_field(&self.0, "temas")
    }

    pub fn categoria(&self) -> Option<&str> {
        str_field(&self.0, "categoria")
    }

    /// Text to show for the review: the original wording, else the cleaned one.
    pub fn text(&self) -> Option<&str> {
        self.opinion_original().or_else(|| self.opinion_limpia())
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }
}

impl TrendingTopic {
    pub fn topic(&self) -> Option<&str> {
        str_field(&self.0, "topic")
    }

    pub fn url(&self) -> Option<&str> {
        str_field(&self.0, "url")
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }
}

impl From<Map<String, Value>> for Review {
    fn from(fields: Map<String, Value>) -> Self {
        Self(fields)
    }
}

impl From<Map<String, Value>> for TrendingTopic {
    fn from(fields: Map<String, Value>) -> Self {
        Self(fields)
    }
}

fn str_field<'a>(fields: &'a Map<String, Value>, key: &str) -> Option<&'a str> {
    fields.get(key).and_then(Value::as_str)
}
