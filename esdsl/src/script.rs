//! Script definitions for script-backed aggregations
//!
//! Aggregations that normally read a document field can instead compute
//! their input with a script. A [`Script`] is either inline source or a
//! reference to a stored script by id, optionally with a language and a
//! parameter object.

use serde::Serialize;
use serde_json::Value;

/// An Elasticsearch script: inline `source` or stored-script `id`,
/// plus optional `lang` and `params`.
#[derive(Debug, Clone, Serialize)]
pub struct Script {
    #[serde(skip_serializing_if = "Option::is_none")]
    source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    lang: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    params: Option<Value>,
}

impl Script {
    /// Inline script from source text.
    pub fn source(source: impl Into<String>) -> Self {
        Script {
            source: Some(source.into()),
            id: None,
            lang: None,
            params: None,
        }
    }

    /// Reference to a stored script by id.
    pub fn id(id: impl Into<String>) -> Self {
        Script {
            source: None,
            id: Some(id.into()),
            lang: None,
            params: None,
        }
    }

    /// Script language (default on the server is `painless`).
    pub fn lang(mut self, lang: impl Into<String>) -> Self {
        self.lang = Some(lang.into());
        self
    }

    /// Named parameters made available to the script.
    pub fn params(mut self, params: Value) -> Self {
        self.params = Some(params);
        self
    }
}
