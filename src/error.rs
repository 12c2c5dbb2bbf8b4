#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
    /// A catalog lookup failed; `operation` names the [`crate::Resources`] call.
    #[error("Catalog error in {operation}: {message}")]
    Catalog {
        operation: &'static str,
        message: String,
    },

    #[error("Unknown language: {0}")]
    UnknownLanguage(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    pub fn catalog(operation: &'static str, message: impl Into<String>) -> Self {
        Error::Catalog {
            operation,
            message: message.into(),
        }
    }
}

pub type Result<T = ()> = std::result::Result<T, Error>;

impl From<confique::Error> for Error {
    fn from(value: confique::Error) -> Self {
        Error::Config(value.to_string())
    }
}
