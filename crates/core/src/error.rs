#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Validation failed: {0}")]
    Validation(String),
}

impl CoreError {
    /// Shorthand for a required form field that was not submitted.
    pub fn missing_field(field: &str) -> Self {
        CoreError::Validation(format!("Missing required field '{field}'"))
    }
}
