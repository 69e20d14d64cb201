use crate::services::portal::{backend::ApiError, session::SessionError};

#[derive(Debug, Clone)]
pub enum Error {
    Api(ApiError),
    Session(SessionError),
    Unexpected(String),
}

impl Error {
    pub fn is_unauthenticated(&self) -> bool {
        matches!(self, Error::Api(e) if e.is_unauthenticated())
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Api(ApiError {
                http_status: None, ..
            }) => write!(f, "Cannot connect to the server"),
            Self::Api(ApiError { error, .. }) => write!(f, "{}", error),
            Self::Session(e) => write!(f, "Session file error: {}", e),
            Self::Unexpected(e) => write!(f, "Unexpected error: {}", e),
        }
    }
}

impl From<ApiError> for Error {
    fn from(error: ApiError) -> Self {
        Error::Api(error)
    }
}

impl From<SessionError> for Error {
    fn from(error: SessionError) -> Self {
        Error::Session(error)
    }
}
