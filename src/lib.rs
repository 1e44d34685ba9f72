//! Normalization adapter for the IBM Watson Natural Language Classifier
//! service.
//!
//! [`WatsonClassifier`] validates identity parameters up front, forwards
//! classification calls to the remote service, and maps the service's
//! proprietary response into a stable list of label/confidence pairs. It
//! implements no classification logic of its own. The remote dependency
//! sits behind the [`NaturalLanguageClassifier`] trait so it can be
//! swapped for a test double; [`NlcClient`] is the production
//! implementation.
//!
//! ```no_run
//! use watson_nlc::{Credentials, WatsonClassifier};
//!
//! # async fn run() -> Result<(), watson_nlc::Error> {
//! let classifier = WatsonClassifier::new(
//!     "8aff06x106-nlc-11437",
//!     Some(Credentials::new("myusername", "mypassword")),
//! )?;
//!
//! for classification in classifier.classify("i need help").await? {
//!     println!("{}: {}", classification.label, classification.value);
//! }
//! # Ok(())
//! # }
//! ```

mod adapter;
mod client;
mod error;
mod http;
mod types;

pub use adapter::WatsonClassifier;
pub use client::NaturalLanguageClassifier;
pub use error::{Error, Result};
pub use http::{DEFAULT_BASE_URL, NlcClient};
pub use types::{Classification, ClassifiedClass, ClassifyRequest, ClassifyResponse, Credentials};
