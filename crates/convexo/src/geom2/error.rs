use std::fmt;

/// Rejected input at the boundary of the geometry code.
///
/// The predicates themselves are total; this only covers building polygons from
/// raw coordinates and sampler parameters.
#[derive(Clone, Debug, PartialEq)]
pub enum InputError {
    NonFinite { index: usize },
    InvalidParams { reason: String },
    DegenerateSample { reason: String },
}

impl InputError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidParams {
            reason: reason.into(),
        }
    }

    pub(crate) fn degenerate(reason: impl Into<String>) -> Self {
        Self::DegenerateSample {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFinite { index } => write!(f, "vertex {index} has a non-finite coordinate"),
            Self::InvalidParams { reason } => write!(f, "invalid params: {reason}"),
            Self::DegenerateSample { reason } => write!(f, "degenerate sample: {reason}"),
        }
    }
}

impl std::error::Error for InputError {}
