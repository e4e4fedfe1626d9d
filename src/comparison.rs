/// Outcome of comparing actual output against a golden file
///
/// A mismatch is a [`Comparison::Failure`] and carries the rendered report; a
/// fault reading or writing the golden file is a [`Comparison::Error`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Comparison {
    Success,
    Failure(String),
    Error(crate::Error),
}

impl Comparison {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    /// The mismatch report, if any
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Failure(message) => Some(message.as_str()),
            Self::Success | Self::Error(_) => None,
        }
    }

    pub fn error(&self) -> Option<&crate::Error> {
        match self {
            Self::Error(err) => Some(err),
            Self::Success | Self::Failure(_) => None,
        }
    }
}

impl From<crate::Error> for Comparison {
    fn from(err: crate::Error) -> Self {
        Self::Error(err)
    }
}

impl std::fmt::Display for Comparison {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Success => write!(f, "success"),
            Self::Failure(message) => write!(f, "{message}"),
            Self::Error(err) => write!(f, "error: {err}"),
        }
    }
}

/// What the shared compare step found, before a pipeline renders a failure
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Verdict {
    Matched,
    Mismatched { expected: Vec<u8> },
}
