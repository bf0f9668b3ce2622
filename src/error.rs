use reqwest::StatusCode;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("{source_name} request failed: {error}")]
    Request {
        source_name: &'static str,
        #[source]
        error: reqwest::Error,
    },

    #[error("{source_name} returned {status}")]
    Status {
        source_name: &'static str,
        status: StatusCode,
    },

    #[error("Failed to parse {source_name} response: {error}")]
    Decode {
        source_name: &'static str,
        #[source]
        error: reqwest::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_names_source_and_code() {
        let err = AppError::Status {
            source_name: "superjob",
            status: StatusCode::FORBIDDEN,
        };
        assert_eq!(err.to_string(), "superjob returned 403 Forbidden");
    }
}
