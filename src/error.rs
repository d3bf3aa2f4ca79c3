/// Rejection of an icon scale that is neither a known tier name nor one of
/// the divisor constants 1, 2, 3.
#[derive(Debug, Clone)]
pub struct ScaleError {
    pub given: String,
}

impl ScaleError {
    pub(crate) fn new(given: impl Into<String>) -> Self {
        Self {
            given: given.into(),
        }
    }
}

impl std::fmt::Display for ScaleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unsupported icon scale {:?}: expected small, normal, big or a divisor in 1..=3",
            self.given
        )
    }
}

impl std::error::Error for ScaleError {}

/// Failure to parse a declarative attribute set.
#[derive(Debug)]
pub struct AttrError {
    pub message: String,
}

impl AttrError {
    pub(crate) fn from_parse(err: serde_json::Error) -> Self {
        Self {
            message: err.to_string(),
        }
    }
}

impl std::fmt::Display for AttrError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid field attributes: {}", self.message)
    }
}

impl std::error::Error for AttrError {}
