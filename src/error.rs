#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Unsupported resource kind '{kind}'")]
    UnsupportedKind { kind: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("YAML serialization error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

impl Error {
    pub fn reason(&self) -> &str {
        match self {
            Error::UnsupportedKind { .. } => "UnsupportedKind",
            Error::Serialization(_) => "SerializationError",
            Error::Yaml(_) => "SerializationError",
            Error::InvalidConfig(_) => "InvalidConfiguration",
        }
    }
}
