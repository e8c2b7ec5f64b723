use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum BlueprintError {
    #[error("invalid answer for {step}: {message}")] Validation { step: String, message: String },
    #[error("plan generation failed: {0}")] Generation(String),
    #[error("config error: {0}")] Config(String),
    #[error("export failed: {0}")] Export(String),
}

impl BlueprintError {
    pub fn validation(step: impl Into<String>, message: impl Into<String>) -> Self {
        BlueprintError::Validation { step: step.into(), message: message.into() }
    }
}
