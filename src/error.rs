use thiserror::Error;

/// Errors produced by this crate.
///
/// Construction problems and the unsupported-capability gate are
/// distinguished variants so callers can branch on "bad setup" vs. "bad
/// call"; remote failures pass through transparently, exactly as the
/// service reported them.
#[derive(Debug, Error)]
pub enum Error {
    /// A required construction argument was missing or empty.
    #[error("{0}")]
    InvalidArgument(&'static str),

    /// The operation is part of the advertised capability set but not
    /// implemented by this crate.
    #[error("Training Watson Classifier from this library is not yet supported.")]
    Unsupported,

    /// Failure reported by the remote service or its transport,
    /// propagated unchanged.
    #[error(transparent)]
    Remote(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
