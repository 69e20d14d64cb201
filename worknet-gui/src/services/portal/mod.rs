pub mod api;
pub mod auth;
pub mod backend;
pub mod session;

const DEFAULT_API_URL: &str = "http://localhost:8000/api";

/// Base URL of the backend REST API, without trailing slash.
pub fn api_base_url() -> String {
    std::env::var("WORKNET_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_default() {
        if std::env::var("WORKNET_API_URL").is_err() {
            assert_eq!(api_base_url(), "http://localhost:8000/api");
        }
    }
}
