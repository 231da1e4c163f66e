pub type VisionResult<T> = Result<T, VisionError>;

#[derive(thiserror::Error, Debug)]
pub enum VisionError {
    #[error("validation error: {0}")]
    Validation(String),

    #[error("unknown condition: '{0}'")]
    UnknownCondition(String),

    #[error("serialization error: {0}")]
    Serde(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl VisionError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn unknown_condition(id: impl Into<String>) -> Self {
        Self::UnknownCondition(id.into())
    }

    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for VisionError {
    fn from(e: serde_json::Error) -> Self {
        Self::serde(e.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
