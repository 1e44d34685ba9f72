use std::fmt;

use serde::{Deserialize, Serialize};

/// Service credentials, captured once at adapter construction.
#[derive(Clone)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

// Keeps the password out of logs and error output.
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// One outbound classification call: the text plus the identifier of the
/// trained model that should score it.
#[derive(Debug, Clone)]
pub struct ClassifyRequest {
    pub text: String,
    pub classifier_id: String,
}

/// Raw response shape of the Watson NLC v1 classify endpoint. Everything
/// but `classes` is pass-through metadata the adapter ignores.
#[derive(Debug, Clone, Deserialize)]
pub struct ClassifyResponse {
    pub classifier_id: Option<String>,
    pub url: Option<String>,
    pub text: Option<String>,
    pub top_class: Option<String>,
    #[serde(default)]
    pub classes: Vec<ClassifiedClass>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ClassifiedClass {
    pub class_name: String,
    pub confidence: f64,
}

/// Normalized output unit: one per raw class entry, in response order,
/// with the confidence carried through at full precision.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Classification {
    pub label: String,
    pub value: f64,
}
