use derive_more::{Display, Error};

#[derive(Debug, Display, Error)]
pub enum GeneratorError {
    #[display("invalid generator config: {reason}")]
    InvalidConfig { reason: String },
    #[display("could not serialize trading pairs: {source}")]
    Serialization { source: serde_json::Error },
    #[display("could not write trading pairs: {source}")]
    Output { source: std::io::Error },
}

impl GeneratorError {
    pub fn invalid_config(reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            reason: reason.into(),
        }
    }
}

impl From<std::io::Error> for GeneratorError {
    fn from(source: std::io::Error) -> Self {
        Self::Output { source }
    }
}

impl From<serde_json::Error> for GeneratorError {
    fn from(source: serde_json::Error) -> Self {
        Self::Serialization { source }
    }
}

pub type Result<T> = std::result::Result<T, GeneratorError>;
