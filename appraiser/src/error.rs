use std::{error::Error, fmt, io, path::PathBuf};

/// The result type used across the appraiser crate.
pub type Result<T> = std::result::Result<T, AppraisalError>;

/// Failures while reading the model bundle. All of them end the session.
#[derive(Debug)]
pub enum BundleError {
    /// The bundle exists but could not be read.
    Io { path: PathBuf, source: io::Error },
    /// The bundle is not valid JSON or does not match the expected layout.
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    /// The bundle parsed but its content is inconsistent.
    Invalid(String),
}

impl fmt::Display for BundleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "cannot read '{}': {source}", path.display())
            }
            Self::Parse { path, source } => {
                write!(f, "invalid bundle '{}': {source}", path.display())
            }
            Self::Invalid(msg) => write!(f, "invalid bundle: {msg}"),
        }
    }
}

impl Error for BundleError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse { source, .. } => Some(source),
            Self::Invalid(_) => None,
        }
    }
}

/// Failures while turning one form submission into an estimate. The session survives them.
#[derive(Debug, Clone, PartialEq)]
pub enum AppraisalError {
    /// A form value is out of its allowed range.
    InvalidInput { field: &'static str, msg: String },
    /// A numeric feature has no column in the training schema.
    MissingColumn(&'static str),
    /// The feature vector does not have the length the estimator was fitted with.
    FeatureMismatch { got: usize, expected: usize },
    /// The estimator produced NaN or infinity.
    NonFinite(f64),
}

impl fmt::Display for AppraisalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInput { field, msg } => write!(f, "invalid {field}: {msg}"),
            Self::MissingColumn(column) => {
                write!(f, "the model was not trained with column '{column}'")
            }
            Self::FeatureMismatch { got, expected } => write!(
                f,
                "the model expects {expected} features but received {got}"
            ),
            Self::NonFinite(value) => write!(f, "the model returned a non-finite value ({value})"),
        }
    }
}

impl Error for AppraisalError {}
